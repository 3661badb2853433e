//! Library half of the `podds` crate: the worker pool and coordinator that
//! back the `podds` CLI binary. Split out from `main.rs` so integration
//! tests can drive the coordinator directly instead of shelling out to the
//! built binary, the way the teacher crate's workspace separates library
//! logic from any thin binary entry point.

pub mod coordinator;
pub mod simulate;
