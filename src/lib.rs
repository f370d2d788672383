//! gifdock
//!
//! Bootstrap (configuration, tracing, dependency wiring) and the command
//! line front end over the `gd-app` picker.

pub mod bootstrap;
pub mod cli;
