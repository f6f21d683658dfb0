//! Small exercises that accompany the selector builder.
//!
//! # Scope
//!
//! This crate provides:
//! - **Rectangle** - a width/height record with an area method
//! - **JSON bridge** - serde-backed serialization, and deserialization where
//!   the resulting value's behaviour comes from a chosen type or prototype
//!   object while its data comes from the parsed JSON

/// Serialization helpers and prototype-backed deserialization.
pub mod json;
/// Rectangle factory.
pub mod rectangle;

pub use json::{Prototyped, from_json, from_json_with, to_json};
pub use rectangle::{Rectangle, rectangle};
