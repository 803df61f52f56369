//! Selector fragments, compound nodes and combinations.
//!
//! [Selectors Level 4](https://www.w3.org/TR/selectors-4/)
//!
//! Selectors here are built from typed structure and rendered to text. There
//! is no parsing and no matching.

use std::fmt;

use serde::Serialize;

mod combination;
mod error;
mod kind;
mod node;

pub use combination::{SelectorCombination, combinator};
pub use error::{SelectorError, SelectorResult};
pub use kind::FragmentKind;
pub use node::SelectorNode;

/// Anything that renders to selector text.
pub trait Stringify {
    /// The rendered selector. Pure; repeated calls return the same text.
    fn stringify(&self) -> String;
}

/// Either kind of built selector, for callers that assemble selectors at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Selector {
    /// A single compound selector.
    Compound(SelectorNode),
    /// Two selectors joined by a combinator.
    Combined(SelectorCombination),
}

impl Selector {
    /// Join this selector and `right` with `combinator`.
    #[must_use]
    pub fn combine<R: Stringify + ?Sized>(&self, combinator: &str, right: &R) -> Self {
        Self::Combined(SelectorCombination::new(self, combinator, right))
    }
}

impl Default for Selector {
    fn default() -> Self {
        Self::Compound(SelectorNode::new())
    }
}

impl From<SelectorNode> for Selector {
    fn from(node: SelectorNode) -> Self {
        Self::Compound(node)
    }
}

impl From<SelectorCombination> for Selector {
    fn from(combination: SelectorCombination) -> Self {
        Self::Combined(combination)
    }
}

impl Stringify for Selector {
    fn stringify(&self) -> String {
        match self {
            Self::Compound(node) => node.stringify(),
            Self::Combined(combination) => combination.stringify(),
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Compound(node) => fmt::Display::fmt(node, f),
            Self::Combined(combination) => fmt::Display::fmt(combination, f),
        }
    }
}
