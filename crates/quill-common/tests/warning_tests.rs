//! Integration tests for the warning registry.
//!
//! Kept in one test so clearing the global registry cannot race another test.

use quill_common::warning::{clear_warnings, has_warned, warn_once};

#[test]
fn test_clear_warnings_allows_repeat() {
    assert!(warn_once("Selector", "empty class name \"\""));
    assert!(!warn_once("Selector", "empty class name \"\""));

    clear_warnings();
    assert!(!has_warned("Selector", "empty class name \"\""));
    assert!(warn_once("Selector", "empty class name \"\""));
}
