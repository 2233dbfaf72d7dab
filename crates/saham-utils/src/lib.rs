//! Shared utilities for saham-rs
//!
//! This crate provides common functionality used across the saham-rs
//! workspace, currently logging setup.

pub mod logging;

pub use logging::init_tracing;
