//! CLI command implementations.
//!
//! # Command Modules
//!
//! - [`config`] - Configuration management (path, init, show)
//! - [`destinations`] - List the destination table
//! - [`estimate`] - One-off distance and ETA calculations
//! - [`navigate`] - Status readout for a named destination

pub mod config;
pub mod destinations;
pub mod estimate;
pub mod navigate;
