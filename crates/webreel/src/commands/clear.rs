use tracing::info;
use webreel_session::Paths;

pub fn run(paths: &Paths) -> anyhow::Result<()> {
    for file in [
        paths.protocol_file(),
        paths.interactions_file(),
        paths.snapshots_file(),
        paths.state_file(),
    ] {
        if file.exists() {
            std::fs::remove_file(&file)?;
        }
    }

    let blobs = paths.blobs_dir();
    if blobs.exists() {
        std::fs::remove_dir_all(&blobs)?;
    }

    info!(root = %paths.root().display(), "session data cleared");
    println!("{}", serde_json::json!({ "cleared": true }));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use webreel_session::storage::append_jsonl;

    #[test]
    fn test_clear_removes_all_session_files() {
        let temp = tempfile::TempDir::new().unwrap();
        let paths = Paths::with_root(temp.path().to_path_buf());

        append_jsonl(&paths.interactions_file(), &serde_json::json!({"x": 1})).unwrap();
        std::fs::create_dir_all(paths.blobs_dir()).unwrap();
        std::fs::write(paths.blobs_dir().join("session-video.bin"), b"abc").unwrap();

        run(&paths).unwrap();

        assert!(!paths.interactions_file().exists());
        assert!(!paths.blobs_dir().exists());
    }

    #[test]
    fn test_clear_on_empty_root_is_ok() {
        let temp = tempfile::TempDir::new().unwrap();
        let paths = Paths::with_root(temp.path().to_path_buf());
        assert!(run(&paths).is_ok());
    }
}
