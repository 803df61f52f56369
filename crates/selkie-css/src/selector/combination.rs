//! [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
//!
//! "A combinator is punctuation that represents a particular kind of
//! relationship between the selectors on either side."

use std::fmt;

use serde::Serialize;

use super::Stringify;

/// Two rendered selectors joined by a combinator.
///
/// Both operands are captured as text when the combination is created;
/// changing an operand afterwards does not affect the combination.
///
/// A combination is terminal: it has no fragment methods, so a compound
/// fragment can never be appended to combined text.
///
/// ```compile_fail
/// use selkie_css::{combine, element};
///
/// let list = combine(&element("ul"), ">", &element("li"));
/// let _ = list.class("active");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectorCombination {
    left: String,
    combinator: String,
    right: String,
}

impl SelectorCombination {
    /// Join `left` and `right` with `combinator`.
    ///
    /// The combinator is stored as given; see [`combinator::is_conventional`]
    /// for the four symbols CSS defines.
    #[must_use]
    pub fn new<L, R>(left: &L, combinator: &str, right: &R) -> Self
    where
        L: Stringify + ?Sized,
        R: Stringify + ?Sized,
    {
        Self {
            left: left.stringify(),
            combinator: combinator.to_string(),
            right: right.stringify(),
        }
    }

    /// Rendered text of the left operand.
    #[must_use]
    pub fn left(&self) -> &str {
        &self.left
    }

    /// The combinator symbol, exactly as supplied.
    #[must_use]
    pub fn combinator(&self) -> &str {
        &self.combinator
    }

    /// Rendered text of the right operand.
    #[must_use]
    pub fn right(&self) -> &str {
        &self.right
    }
}

impl Stringify for SelectorCombination {
    fn stringify(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SelectorCombination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.left, self.combinator, self.right)
    }
}

/// The combinator symbols defined by Selectors Level 4.
pub mod combinator {
    /// [§ 16.1 Descendant combinator](https://www.w3.org/TR/selectors-4/#descendant-combinators)
    /// "A descendant combinator is whitespace that separates two compound selectors."
    pub const DESCENDANT: &str = " ";

    /// [§ 16.2 Child combinator](https://www.w3.org/TR/selectors-4/#child-combinators)
    /// "A child combinator is a greater-than sign (>) that separates two compound selectors."
    pub const CHILD: &str = ">";

    /// [§ 16.3 Next-sibling combinator](https://www.w3.org/TR/selectors-4/#adjacent-sibling-combinators)
    /// "A next-sibling combinator is a plus sign (+) that separates two compound selectors."
    pub const NEXT_SIBLING: &str = "+";

    /// [§ 16.4 Subsequent-sibling combinator](https://www.w3.org/TR/selectors-4/#general-sibling-combinators)
    /// "A subsequent-sibling combinator is a tilde (~) that separates two compound selectors."
    pub const SUBSEQUENT_SIBLING: &str = "~";

    /// All four symbols.
    pub const ALL: [&str; 4] = [DESCENDANT, CHILD, NEXT_SIBLING, SUBSEQUENT_SIBLING];

    /// Whether `symbol` is one of the four combinators above.
    ///
    /// Combinations accept any symbol; this is for callers that want to warn.
    #[must_use]
    pub fn is_conventional(symbol: &str) -> bool {
        ALL.contains(&symbol)
    }
}
