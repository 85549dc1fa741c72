pub mod dto;
pub mod json_snapshot_repository;
pub mod paths;

pub use json_snapshot_repository::JsonSnapshotRepository;
pub use paths::KawarabanPaths;
