use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use strum_macros::{Display, EnumIter};

use crate::error::SelectorError;

/// The six fragment categories of a simple selector.
///
/// The derived ordering is the grammar order: a selector lists its element
/// first and its pseudo-element last.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter, Serialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum FragmentKind {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    ///
    /// Examples: `div`, `a`, `table`
    Element,

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    ///
    /// Examples: `#main`, `#data`
    Id,

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    ///
    /// Examples: `.container`, `.draggable`
    Class,

    /// [§ 6.4 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    ///
    /// Examples: `[href]`, `[href$=".png"]`
    Attribute,

    /// [§ 4 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    ///
    /// Examples: `:focus`, `:nth-of-type(even)`
    PseudoClass,

    /// [§ 11 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    ///
    /// Examples: `::before`, `::first-line`
    PseudoElement,
}

impl FragmentKind {
    /// Whether a simple selector may hold at most one fragment of this kind.
    #[must_use]
    pub const fn is_singleton(self) -> bool {
        matches!(self, Self::Element | Self::Id | Self::PseudoElement)
    }

    /// The text written before the fragment's value.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Element => "",
            Self::Id => "#",
            Self::Class => ".",
            Self::Attribute => "[",
            Self::PseudoClass => ":",
            Self::PseudoElement => "::",
        }
    }

    /// The text written after the fragment's value.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Attribute => "]",
            _ => "",
        }
    }
}

/// One piece of a simple selector, tagged with its category.
///
/// Attribute fragments hold the raw text between the brackets, so
/// `[href$=".png"]` is `Fragment::Attribute("href$=\".png\"")`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Fragment {
    /// Element (type) name, e.g. `div`.
    Element(String),
    /// Identifier without the leading `#`.
    Id(String),
    /// Class name without the leading `.`.
    Class(String),
    /// Raw attribute condition without the surrounding brackets.
    Attribute(String),
    /// Pseudo-class without the leading `:`, arguments included.
    PseudoClass(String),
    /// Pseudo-element without the leading `::`.
    PseudoElement(String),
}

impl Fragment {
    /// The category of this fragment.
    #[must_use]
    pub const fn kind(&self) -> FragmentKind {
        match self {
            Self::Element(_) => FragmentKind::Element,
            Self::Id(_) => FragmentKind::Id,
            Self::Class(_) => FragmentKind::Class,
            Self::Attribute(_) => FragmentKind::Attribute,
            Self::PseudoClass(_) => FragmentKind::PseudoClass,
            Self::PseudoElement(_) => FragmentKind::PseudoElement,
        }
    }

    /// The fragment's value without prefix or brackets.
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::Element(v)
            | Self::Id(v)
            | Self::Class(v)
            | Self::Attribute(v)
            | Self::PseudoClass(v)
            | Self::PseudoElement(v) => v,
        }
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = self.kind();
        write!(f, "{}{}{}", kind.prefix(), self.value(), kind.suffix())
    }
}

impl FromStr for Fragment {
    type Err = SelectorError;

    /// Parse the textual form of one fragment.
    ///
    /// The prefix decides the category: `::` pseudo-element, `:`
    /// pseudo-class, `#` id, `.` class, `[...]` attribute, anything else an
    /// element name. The value itself is taken verbatim, but it must not
    /// start a second fragment: `div#main` is two fragments and fails.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let invalid = || SelectorError::InvalidFragment(raw.to_string());
        let text = raw.trim();

        // `::` has to be tried before `:`
        let (ctor, value): (fn(String) -> Self, &str) =
            if let Some(rest) = text.strip_prefix("::") {
                (Self::PseudoElement, rest)
            } else if let Some(rest) = text.strip_prefix(':') {
                (Self::PseudoClass, rest)
            } else if let Some(rest) = text.strip_prefix('#') {
                (Self::Id, rest)
            } else if let Some(rest) = text.strip_prefix('.') {
                (Self::Class, rest)
            } else if let Some(rest) = text.strip_prefix('[') {
                (Self::Attribute, rest.strip_suffix(']').ok_or_else(invalid)?)
            } else {
                (Self::Element, text)
            };

        if value.trim().is_empty() {
            return Err(invalid());
        }
        let fragment = ctor(value.to_string());
        if has_stray_delimiter(fragment.kind(), value) {
            return Err(invalid());
        }
        Ok(fragment)
    }
}

/// Whether `value` starts another fragment outside quotes and parentheses.
///
/// `div#main` or `p:hover` hold two fragments and must be split by the
/// caller. Attribute values only stop at brackets, since their quoted or bare
/// values may contain `.`, `#` and `:`.
fn has_stray_delimiter(kind: FragmentKind, value: &str) -> bool {
    let delimiters: &[char] = match kind {
        FragmentKind::Attribute => &['[', ']'],
        _ => &['#', '.', '[', ':'],
    };

    let mut quote = None;
    let mut depth = 0usize;
    for c in value.chars() {
        match (quote, c) {
            (Some(q), _) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(c),
            (None, '(') => depth += 1,
            (None, ')') => depth = depth.saturating_sub(1),
            (None, _) if depth == 0 && delimiters.contains(&c) => return true,
            _ => {}
        }
    }
    false
}
