//! Logger handles over the dispatcher

mod noop;
mod tagged;
mod traits;

pub use noop::NoOpLogger;
pub use tagged::TaggedLogger;
pub use traits::{Logger, SharedLogger};
