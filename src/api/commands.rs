//! Command modules for the converter frontend
//!
//! This module organizes commands into feature-specific submodules following
//! Modern Rust idioms (no mod.rs pattern). Commands that touch history take
//! the caller's `ConverterSession` explicitly.
//!
//! ## Architecture
//!
//! - `converter`: Category/unit listing and conversion
//! - `history`: History display, clearing and CSV export
//! - `settings`: Settings persistence

pub mod converter;
pub mod history;
pub mod settings;
