//! Ambient helpers shared by the binaries: tracing setup and startup environment checks.

pub mod env;
pub mod utils;
