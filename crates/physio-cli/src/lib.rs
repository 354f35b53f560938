//! physio-notes library root.
//!
//! The binary is a thin shell over these modules; they are public so the
//! integration tests can drive configuration and argument parsing directly.

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
