//! Fluent CSS selector builder for the Quill toolkit.
//!
//! # Scope
//!
//! This crate implements:
//! - **Fragments** ([Selectors Level 4 § 5-6](https://www.w3.org/TR/selectors-4/#elemental-selectors))
//!   - Type (element), ID, class, attribute, pseudo-class and pseudo-element
//!   - Parsing of each fragment from its textual form (`#main`, `.box`, `::before`)
//!
//! - **Selector builder**
//!   - Grammar-order validation: element, id, class, attribute,
//!     pseudo-class, pseudo-element
//!   - Singleton enforcement for element, id and pseudo-element
//!   - Canonical rendering and specificity
//!
//! - **Combinators** ([§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators))
//!   - Descendant, child, next-sibling and subsequent-sibling composition of
//!     any two renderable selectors
//!
//! # Example
//!
//! ```
//! use quill_selector::{Combine, selector};
//!
//! # fn main() -> Result<(), quill_selector::SelectorError> {
//! let link = selector().element("a")?.attribute(r#"href$=".png""#)?.pseudo_class("focus")?;
//! assert_eq!(link.render(), r#"a[href$=".png"]:focus"#);
//!
//! let nav = selector().element("nav")?.child(link);
//! assert_eq!(nav.to_string(), r#"nav > a[href$=".png"]:focus"#);
//! # Ok(())
//! # }
//! ```

/// Selector builder and the accumulated fragment set.
pub mod builder;
/// Combinators and compound selectors per [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators).
pub mod combinator;
/// Errors raised while building selectors.
pub mod error;
/// Selector fragments and their grammar order.
pub mod fragment;

pub use builder::{FragmentSet, SelectorBuilder, Specificity, selector};
pub use combinator::{Combinator, Combine, CompoundSelector, Render, combine};
pub use error::SelectorError;
pub use fragment::{Fragment, FragmentKind};
