//! Console output policy
//!
//! - `ConsolePolicy`: whether a severity is printed at all
//! - `Environment`: OS and `IDE` signal, read per call
//! - `console_decorated`: colored vs plain console output

mod environment;
mod policy;

pub use environment::{
    console_decorated, is_windows, Environment, FixedEnvironment, SystemEnvironment, IDE_VAR,
};
pub use policy::ConsolePolicy;
