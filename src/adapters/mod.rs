//! Adapter implementations for port traits.
//!
//! - `live/`: real API implementations
//! - `recording/`: record interactions to cassettes
//! - `replaying/`: replay interactions from cassettes
//! - `unconfigured`: fails with a hint when a key is missing

pub mod live;
pub mod recording;
pub mod replaying;
pub mod unconfigured;
