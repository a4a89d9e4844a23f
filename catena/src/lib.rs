//! Catena Library
//!
//! This library exposes the binary's modules for integration testing.

pub mod args;
pub mod constants;
pub mod engine;
pub mod input;
pub mod logging;
pub mod output;
