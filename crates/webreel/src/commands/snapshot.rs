use std::path::Path;

use anyhow::Context;
use webreel_model::ElementSnapshot;
use webreel_session::storage::append_jsonl;
use webreel_session::Paths;

pub fn run(paths: &Paths, file: &Path) -> anyhow::Result<()> {
    let data = std::fs::read_to_string(file)
        .with_context(|| format!("reading {}", file.display()))?;
    let snapshot: ElementSnapshot =
        serde_json::from_str(&data).with_context(|| format!("parsing {}", file.display()))?;

    append_jsonl(&paths.snapshots_file(), &snapshot)?;

    let output = serde_json::json!({
        "url": snapshot.url,
        "elements": snapshot.elements.len(),
    });
    println!("{output}");
    Ok(())
}
