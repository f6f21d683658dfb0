use std::fmt;

use quill_common::warning::warn_once;
use serde::Serialize;

use crate::error::SelectorError;
use crate::fragment::{Fragment, FragmentKind};

/// [§ 17 Calculating Specificity](https://www.w3.org/TR/selectors-4/#specificity-rules)
/// "A selector's specificity is calculated for a given element as follows:
///  - count the number of ID selectors in the selector (= A)
///  - count the number of class selectors, attributes selectors, and pseudo-classes in the selector (= B)
///  - count the number of type selectors and pseudo-elements in the selector (= C)"
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct Specificity(pub u32, pub u32, pub u32);

impl Specificity {
    /// Create a new specificity with (A, B, C) components.
    #[must_use]
    pub const fn new(a: u32, b: u32, c: u32) -> Self {
        Self(a, b, c)
    }
}

impl fmt::Display for Specificity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.0, self.1, self.2)
    }
}

/// The fragments accumulated for one simple selector.
///
/// Singletons are `Option`s and repeatable fragments are kept in insertion
/// order, so the struct cannot represent a duplicated element, id or
/// pseudo-element. Grammar order is enforced by [`SelectorBuilder`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FragmentSet {
    /// Element (type) name.
    pub element: Option<String>,
    /// Identifier, rendered as `#id`.
    pub id: Option<String>,
    /// Class names in insertion order, rendered as `.class` each.
    pub classes: Vec<String>,
    /// Raw attribute conditions in insertion order, rendered as `[attr]` each.
    pub attributes: Vec<String>,
    /// Pseudo-classes in insertion order, rendered as `:name` each.
    pub pseudo_classes: Vec<String>,
    /// Pseudo-element, rendered as `::name`.
    pub pseudo_element: Option<String>,
}

impl FragmentSet {
    /// Whether no fragment has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.highest_kind().is_none()
    }

    /// Whether at least one fragment of `kind` is present.
    #[must_use]
    pub fn contains(&self, kind: FragmentKind) -> bool {
        match kind {
            FragmentKind::Element => self.element.is_some(),
            FragmentKind::Id => self.id.is_some(),
            FragmentKind::Class => !self.classes.is_empty(),
            FragmentKind::Attribute => !self.attributes.is_empty(),
            FragmentKind::PseudoClass => !self.pseudo_classes.is_empty(),
            FragmentKind::PseudoElement => self.pseudo_element.is_some(),
        }
    }

    /// The latest grammar category present, if any.
    ///
    /// This is the whole state of the ordering state machine: a fragment may
    /// be added only if its kind is not before this one.
    #[must_use]
    pub fn highest_kind(&self) -> Option<FragmentKind> {
        [
            FragmentKind::PseudoElement,
            FragmentKind::PseudoClass,
            FragmentKind::Attribute,
            FragmentKind::Class,
            FragmentKind::Id,
            FragmentKind::Element,
        ]
        .into_iter()
        .find(|&kind| self.contains(kind))
    }

    /// Iterate the fragments in render order.
    pub fn ordered(&self) -> impl Iterator<Item = Fragment> + '_ {
        let element = self.element.iter().cloned().map(Fragment::Element);
        let id = self.id.iter().cloned().map(Fragment::Id);
        let classes = self.classes.iter().cloned().map(Fragment::Class);
        let attributes = self.attributes.iter().cloned().map(Fragment::Attribute);
        let pseudo_classes = self.pseudo_classes.iter().cloned().map(Fragment::PseudoClass);
        let pseudo_element = self.pseudo_element.iter().cloned().map(Fragment::PseudoElement);
        element
            .chain(id)
            .chain(classes)
            .chain(attributes)
            .chain(pseudo_classes)
            .chain(pseudo_element)
    }

    /// Render the canonical selector string.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Specificity of the simple selector.
    #[must_use]
    pub fn specificity(&self) -> Specificity {
        let count = |n: usize| u32::try_from(n).unwrap_or(u32::MAX);
        let a = count(usize::from(self.id.is_some()));
        let b = count(self.classes.len() + self.attributes.len() + self.pseudo_classes.len());
        let c = count(
            usize::from(self.element.is_some()) + usize::from(self.pseudo_element.is_some()),
        );
        Specificity(a, b, c)
    }

    /// Drop every recorded fragment.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Store a fragment without validating order or uniqueness.
    fn insert(&mut self, fragment: Fragment) {
        match fragment {
            Fragment::Element(v) => self.element = Some(v),
            Fragment::Id(v) => self.id = Some(v),
            Fragment::Class(v) => self.classes.push(v),
            Fragment::Attribute(v) => self.attributes.push(v),
            Fragment::PseudoClass(v) => self.pseudo_classes.push(v),
            Fragment::PseudoElement(v) => self.pseudo_element = Some(v),
        }
    }
}

impl fmt::Display for FragmentSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for fragment in self.ordered() {
            write!(f, "{fragment}")?;
        }
        Ok(())
    }
}

/// Fluent builder for one simple selector.
///
/// Every fragment method consumes the builder and hands it back on success,
/// so chains read left to right and compose with `?`:
///
/// ```
/// use quill_selector::selector;
///
/// # fn main() -> Result<(), quill_selector::SelectorError> {
/// let rendered = selector().id("main")?.class("container")?.class("editable")?.render();
/// assert_eq!(rendered, "#main.container.editable");
/// # Ok(())
/// # }
/// ```
///
/// Fragments must arrive in grammar order (element, id, class, attribute,
/// pseudo-class, pseudo-element) and element, id and pseudo-element may
/// appear once. Violations return [`SelectorError`] and end the chain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectorBuilder {
    fragments: FragmentSet,
}

/// Start a new, empty selector chain.
#[must_use]
pub fn selector() -> SelectorBuilder {
    SelectorBuilder::new()
}

impl SelectorBuilder {
    /// Create an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add any fragment, enforcing uniqueness then grammar order.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::DuplicateFragment`] if the fragment is an
    /// element, id or pseudo-element and one is already set, and
    /// [`SelectorError::OutOfOrder`] if a fragment of a later category is
    /// already present.
    pub fn push(mut self, fragment: Fragment) -> Result<Self, SelectorError> {
        let kind = fragment.kind();

        // Duplicates are reported ahead of ordering problems
        if kind.is_singleton() && self.fragments.contains(kind) {
            return Err(SelectorError::DuplicateFragment(kind));
        }
        if let Some(after) = self.fragments.highest_kind().filter(|&after| after > kind) {
            return Err(SelectorError::OutOfOrder {
                fragment: kind,
                after,
            });
        }

        check_value(&fragment);

        if cfg!(feature = "selector-trace") {
            eprintln!("{}", trace_line(&self.fragments, &fragment));
        }

        self.fragments.insert(fragment);
        Ok(self)
    }

    /// Set the element (type) name.
    ///
    /// # Errors
    ///
    /// Fails if an element is already set or any other fragment is present.
    pub fn element(self, name: impl Into<String>) -> Result<Self, SelectorError> {
        self.push(Fragment::Element(name.into()))
    }

    /// Set the identifier, rendered as `#name`.
    ///
    /// # Errors
    ///
    /// Fails if an id is already set, or a class, attribute, pseudo-class or
    /// pseudo-element is present.
    pub fn id(self, name: impl Into<String>) -> Result<Self, SelectorError> {
        self.push(Fragment::Id(name.into()))
    }

    /// Append a class, rendered as `.name`.
    ///
    /// # Errors
    ///
    /// Fails if an attribute, pseudo-class or pseudo-element is present.
    pub fn class(self, name: impl Into<String>) -> Result<Self, SelectorError> {
        self.push(Fragment::Class(name.into()))
    }

    /// Append a raw attribute condition, rendered as `[raw]`.
    ///
    /// # Errors
    ///
    /// Fails if a pseudo-class or pseudo-element is present.
    pub fn attribute(self, raw: impl Into<String>) -> Result<Self, SelectorError> {
        self.push(Fragment::Attribute(raw.into()))
    }

    /// Append a pseudo-class, rendered as `:name`.
    ///
    /// # Errors
    ///
    /// Fails if a pseudo-element is present.
    pub fn pseudo_class(self, name: impl Into<String>) -> Result<Self, SelectorError> {
        self.push(Fragment::PseudoClass(name.into()))
    }

    /// Set the pseudo-element, rendered as `::name`.
    ///
    /// # Errors
    ///
    /// Fails if a pseudo-element is already set.
    pub fn pseudo_element(self, name: impl Into<String>) -> Result<Self, SelectorError> {
        self.push(Fragment::PseudoElement(name.into()))
    }

    /// Render the selector. Rendering does not modify the builder.
    #[must_use]
    pub fn render(&self) -> String {
        self.fragments.render()
    }

    /// Render the selector, then clear every fragment.
    ///
    /// A second call without new fragments returns an empty string.
    pub fn render_and_reset(&mut self) -> String {
        std::mem::take(&mut self.fragments).render()
    }

    /// Specificity of the selector built so far.
    #[must_use]
    pub fn specificity(&self) -> Specificity {
        self.fragments.specificity()
    }

    /// The fragments recorded so far.
    #[must_use]
    pub const fn fragments(&self) -> &FragmentSet {
        &self.fragments
    }

    /// Consume the builder, returning its fragments.
    #[must_use]
    pub fn into_fragments(self) -> FragmentSet {
        self.fragments
    }
}

impl fmt::Display for SelectorBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.fragments, f)
    }
}

/// Report values that are accepted but would not survive a CSS parser.
fn check_value(fragment: &Fragment) {
    let kind = fragment.kind();
    let value = fragment.value();

    if value.trim().is_empty() {
        let _ = warn_once("Selector", &format!("empty {kind} name {value:?}"));
        return;
    }

    // Attribute and pseudo-class arguments may legitimately contain spaces,
    // e.g. `[title="a b"]` or `:nth-child(2n + 1)`
    let bare_name = matches!(
        kind,
        FragmentKind::Element | FragmentKind::Id | FragmentKind::Class | FragmentKind::PseudoElement
    );
    if bare_name && value.chars().any(char::is_whitespace) {
        let _ = warn_once("Selector", &format!("{kind} name {value:?} contains whitespace"));
    }
}

/// One `selector-trace` line: the latest category before the push, then the
/// accepted fragment.
fn trace_line(before: &FragmentSet, fragment: &Fragment) -> String {
    let from = before
        .highest_kind()
        .map_or_else(|| "start".to_string(), |kind| kind.to_string());
    format!("[selector-trace] {from} -> {} {fragment}", fragment.kind())
}
