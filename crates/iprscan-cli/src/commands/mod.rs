//! CLI command implementations
//!
//! One module per mode of the command line.

pub mod fetch;
pub mod params;
pub mod result_types;
pub mod status;
pub mod submit;
