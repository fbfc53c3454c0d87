//! Output sinks
//!
//! - `SinkTarget`: the byte destination (append-mode file or any stream)
//! - `Sink`: a target plus its severity band and decoration flag
//! - `MemoryWriter`: shared in-memory capture, mostly for tests

mod band;
mod target;

pub use band::Sink;
pub use target::{MemoryWriter, SinkTarget};
