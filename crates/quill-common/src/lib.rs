//! Common utilities for the Quill crates.
//!
//! This crate provides shared infrastructure used by every Quill component:
//! - **Warning System** - deduplicated, colored terminal output for input
//!   that is accepted but probably not what the caller meant

pub mod warning;
