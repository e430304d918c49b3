#![warn(missing_debug_implementations)]
#![deny(non_ascii_idents)]
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
#![deny(unit_bindings)]
#![warn(unused_crate_dependencies)]
#![warn(unused_qualifications)]

pub mod config;
pub mod error;
pub mod geo;
pub mod logging;
pub mod search;
pub mod tour;

pub use config::PlannerConfig;
pub use error::{Error, Result};

#[cfg(test)]
mod test_utils;
