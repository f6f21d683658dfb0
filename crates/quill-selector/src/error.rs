use thiserror::Error;

use crate::fragment::FragmentKind;

/// Error type for selector building.
///
/// Builder errors are fatal to the chain that raised them: the builder is
/// consumed, and the caller starts a new one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// An element, id or pseudo-element was supplied a second time.
    #[error("{0} may occur at most once in a selector")]
    DuplicateFragment(FragmentKind),

    /// A fragment was supplied after a fragment of a later grammar category.
    #[error(
        "{fragment} cannot follow {after}: selector parts must be ordered element, id, class, attribute, pseudo-class, pseudo-element"
    )]
    OutOfOrder {
        /// The category that was being added.
        fragment: FragmentKind,
        /// The latest category already present in the selector.
        after: FragmentKind,
    },

    /// A combinator outside `' '`, `'>'`, `'+'` and `'~'`.
    #[error("unknown combinator {0:?}, expected one of ' ', '>', '+', '~'")]
    InvalidCombinator(String),

    /// Text that does not parse as a single selector fragment.
    #[error("cannot parse selector fragment {0:?}")]
    InvalidFragment(String),
}
