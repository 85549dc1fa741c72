//! Persistence DTOs.
//!
//! The on-disk shapes are kept separate from the domain models so the
//! stored format can stay stable while the domain evolves.

pub mod session_snapshot;

pub use session_snapshot::SessionSnapshotDto;
