//! Stateless entry points.
//!
//! Each fragment function starts a new [`SelectorNode`] seeded with that
//! fragment. Further fragments chain on the returned node:
//!
//! ```
//! # fn main() -> Result<(), selkie_css::SelectorError> {
//! let mut link = selkie_css::element("a");
//! let _ = link.attr(r#"href$=".png""#)?.pseudo_class("focus")?;
//! assert_eq!(link.as_str(), r#"a[href$=".png"]:focus"#);
//! # Ok(())
//! # }
//! ```

use crate::selector::{FragmentKind, SelectorCombination, SelectorNode, Stringify};

/// Start a selector with a type selector, e.g. `div`.
#[must_use]
pub fn element(value: &str) -> SelectorNode {
    SelectorNode::seeded(FragmentKind::Element, value)
}

/// Start a selector with an ID, e.g. `#main`.
#[must_use]
pub fn id(value: &str) -> SelectorNode {
    SelectorNode::seeded(FragmentKind::Id, value)
}

/// Start a selector with a class, e.g. `.container`.
#[must_use]
pub fn class(value: &str) -> SelectorNode {
    SelectorNode::seeded(FragmentKind::Class, value)
}

/// Start a selector with an attribute selector, e.g. `[lang|="en"]`.
#[must_use]
pub fn attr(value: &str) -> SelectorNode {
    SelectorNode::seeded(FragmentKind::Attribute, value)
}

/// Start a selector with a pseudo-class, e.g. `:hover`.
#[must_use]
pub fn pseudo_class(value: &str) -> SelectorNode {
    SelectorNode::seeded(FragmentKind::PseudoClass, value)
}

/// Start a selector with a pseudo-element, e.g. `::after`.
#[must_use]
pub fn pseudo_element(value: &str) -> SelectorNode {
    SelectorNode::seeded(FragmentKind::PseudoElement, value)
}

/// Join two built selectors, rendering as `left combinator right` with
/// single spaces around the combinator.
#[must_use]
pub fn combine<L, R>(left: &L, combinator: &str, right: &R) -> SelectorCombination
where
    L: Stringify + ?Sized,
    R: Stringify + ?Sized,
{
    SelectorCombination::new(left, combinator, right)
}
