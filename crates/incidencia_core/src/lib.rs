pub mod domain;
pub mod error;
pub mod ingest;
pub mod lookup;
pub mod render;
pub mod repo;
