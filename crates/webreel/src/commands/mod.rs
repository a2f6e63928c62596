pub mod clear;
pub mod export;
pub mod ingest;
pub mod snapshot;
pub mod status;
pub mod version;
