//! Combinators and compound selectors.
//!
//! A [`CompoundSelector`] joins any two [`Render`] values with a
//! [`Combinator`]. Sides can be builders, other compound selectors, or
//! strings that were rendered earlier, so arbitrarily deep chains nest to the
//! left or to the right.

use std::fmt;
use std::str::FromStr;

use strum_macros::EnumIter;

use crate::builder::{FragmentSet, SelectorBuilder};
use crate::error::SelectorError;

/// A value that can produce its selector text.
pub trait Render {
    /// The selector text for this value.
    fn render(&self) -> String;
}

impl Render for FragmentSet {
    fn render(&self) -> String {
        self.to_string()
    }
}

impl Render for SelectorBuilder {
    fn render(&self) -> String {
        self.to_string()
    }
}

impl Render for CompoundSelector {
    fn render(&self) -> String {
        self.to_string()
    }
}

/// An already-rendered selector.
impl Render for String {
    fn render(&self) -> String {
        self.clone()
    }
}

/// An already-rendered selector.
impl Render for &str {
    fn render(&self) -> String {
        (*self).to_string()
    }
}

impl<T: Render + ?Sized> Render for Box<T> {
    fn render(&self) -> String {
        (**self).render()
    }
}

/// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
///
/// "A combinator is punctuation that represents a particular kind of
/// relationship between the selectors on either side."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Combinator {
    /// [§ 16.1 Descendant combinator](https://www.w3.org/TR/selectors-4/#descendant-combinators)
    /// "A descendant combinator is whitespace that separates two compound selectors."
    Descendant,

    /// [§ 16.2 Child combinator](https://www.w3.org/TR/selectors-4/#child-combinators)
    /// "A child combinator is a greater-than sign (>) that separates two compound
    /// selectors."
    Child,

    /// [§ 16.3 Next-sibling combinator](https://www.w3.org/TR/selectors-4/#adjacent-sibling-combinators)
    /// "A next-sibling combinator is a plus sign (+) that separates two compound
    /// selectors."
    NextSibling,

    /// [§ 16.4 Subsequent-sibling combinator](https://www.w3.org/TR/selectors-4/#general-sibling-combinators)
    /// "A subsequent-sibling combinator is a tilde (~) that separates two compound
    /// selectors."
    SubsequentSibling,
}

impl Combinator {
    /// The punctuation written between the two sides.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Descendant => " ",
            Self::Child => ">",
            Self::NextSibling => "+",
            Self::SubsequentSibling => "~",
        }
    }

    /// The combinator's name, as accepted by [`FromStr`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Descendant => "descendant",
            Self::Child => "child",
            Self::NextSibling => "next-sibling",
            Self::SubsequentSibling => "subsequent-sibling",
        }
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Combinator {
    type Err = SelectorError;

    /// Accepts the punctuation (`">"`, `"+"`, `"~"`, or whitespace for
    /// descendant) or the combinator's name.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        if !raw.is_empty() && raw.chars().all(char::is_whitespace) {
            return Ok(Self::Descendant);
        }
        match raw.trim() {
            ">" | "child" => Ok(Self::Child),
            "+" | "next-sibling" => Ok(Self::NextSibling),
            "~" | "subsequent-sibling" => Ok(Self::SubsequentSibling),
            "descendant" => Ok(Self::Descendant),
            _ => Err(SelectorError::InvalidCombinator(raw.to_string())),
        }
    }
}

impl TryFrom<char> for Combinator {
    type Error = SelectorError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        let mut buf = [0; 4];
        c.encode_utf8(&mut buf).parse()
    }
}

/// Two selectors joined by a combinator.
///
/// Renders as `left + " " + symbol + " " + right`. For the descendant
/// combinator this yields three spaces between the sides, matching the
/// output of the string-joined form.
pub struct CompoundSelector {
    left: Box<dyn Render>,
    combinator: Combinator,
    right: Box<dyn Render>,
}

/// Join two selectors with a combinator.
#[must_use]
pub fn combine(
    left: impl Render + 'static,
    combinator: Combinator,
    right: impl Render + 'static,
) -> CompoundSelector {
    CompoundSelector {
        left: Box::new(left),
        combinator,
        right: Box::new(right),
    }
}

impl CompoundSelector {
    /// The combinator between the two sides.
    #[must_use]
    pub const fn combinator(&self) -> Combinator {
        self.combinator
    }

    /// The left-hand selector.
    #[must_use]
    pub fn left(&self) -> &dyn Render {
        self.left.as_ref()
    }

    /// The right-hand selector.
    #[must_use]
    pub fn right(&self) -> &dyn Render {
        self.right.as_ref()
    }
}

impl fmt::Display for CompoundSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.left.render(),
            self.combinator,
            self.right.render()
        )
    }
}

impl fmt::Debug for CompoundSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompoundSelector")
            .field("left", &self.left.render())
            .field("combinator", &self.combinator)
            .field("right", &self.right.render())
            .finish()
    }
}

/// Fluent composition for every renderable selector.
///
/// ```
/// use quill_selector::{Combine, selector};
///
/// # fn main() -> Result<(), quill_selector::SelectorError> {
/// let list = selector().element("ul")?.child(selector().element("li")?);
/// assert_eq!(list.to_string(), "ul > li");
/// # Ok(())
/// # }
/// ```
pub trait Combine: Render + Sized + 'static {
    /// Join `self` and `right` with `combinator`.
    fn combine_with(self, combinator: Combinator, right: impl Render + 'static) -> CompoundSelector {
        combine(self, combinator, right)
    }

    /// `self right`
    fn descendant(self, right: impl Render + 'static) -> CompoundSelector {
        self.combine_with(Combinator::Descendant, right)
    }

    /// `self > right`
    fn child(self, right: impl Render + 'static) -> CompoundSelector {
        self.combine_with(Combinator::Child, right)
    }

    /// `self + right`
    fn next_sibling(self, right: impl Render + 'static) -> CompoundSelector {
        self.combine_with(Combinator::NextSibling, right)
    }

    /// `self ~ right`
    fn subsequent_sibling(self, right: impl Render + 'static) -> CompoundSelector {
        self.combine_with(Combinator::SubsequentSibling, right)
    }
}

impl<T: Render + 'static> Combine for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_symbol_and_name_parse_back() {
        for combinator in Combinator::iter() {
            assert_eq!(combinator.symbol().parse::<Combinator>(), Ok(combinator));
            assert_eq!(combinator.name().parse::<Combinator>(), Ok(combinator));
        }
    }

    #[test]
    fn test_try_from_char() {
        assert_eq!(Combinator::try_from('>'), Ok(Combinator::Child));
        assert_eq!(Combinator::try_from(' '), Ok(Combinator::Descendant));
        assert_eq!(
            Combinator::try_from('|'),
            Err(SelectorError::InvalidCombinator("|".to_string()))
        );
    }

    #[test]
    fn test_unknown_combinators_are_rejected() {
        for raw in ["", "||", ">>", "sibling", "-"] {
            assert!(
                matches!(raw.parse::<Combinator>(), Err(SelectorError::InvalidCombinator(s)) if s == raw),
                "{raw:?} should be rejected"
            );
        }
    }
}
