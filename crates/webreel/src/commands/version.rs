pub fn run() -> anyhow::Result<()> {
    println!("webreel {}", env!("CARGO_PKG_VERSION"));
    println!("Browser session recorder and timeline exporter");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_output() {
        let result = run();
        assert!(result.is_ok());
    }
}
