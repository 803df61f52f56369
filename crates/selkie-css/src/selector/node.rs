//! [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
//!
//! A compound selector assembled one fragment at a time.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use super::{FragmentKind, SelectorError, SelectorResult, Stringify};

/// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
///
/// "A compound selector is a sequence of simple selectors that are not
/// separated by a combinator."
///
/// Every append is checked before anything is written:
/// - `element`, `id` and `pseudo-element` fragments appear at most once.
/// - Fragments appear in non-decreasing [`FragmentKind::rank`] order.
///
/// A rejected append leaves the node exactly as it was.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SelectorNode {
    /// Rendered text of every accepted fragment, in append order.
    text: String,
    /// Kinds present in this node.
    seen: BTreeSet<FragmentKind>,
    /// Kind of each accepted fragment, in append order. Non-decreasing by rank.
    appended: Vec<FragmentKind>,
}

impl SelectorNode {
    /// Create an empty compound selector. It renders as the empty string.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A node holding a single fragment. The first fragment of a node is
    /// always accepted, so this cannot fail.
    pub(crate) fn seeded(kind: FragmentKind, value: &str) -> Self {
        let mut node = Self::new();
        node.record(kind, value);
        node
    }

    /// Decide whether a fragment of `kind` may be appended next.
    ///
    /// # Errors
    ///
    /// - [`SelectorError::DuplicateFragment`] if `kind` is a singleton kind
    ///   already present in this node.
    /// - [`SelectorError::OrderViolation`] if a higher-ranked kind has already
    ///   been appended.
    pub fn check(&self, kind: FragmentKind) -> SelectorResult<()> {
        if kind.is_singleton() && self.seen.contains(&kind) {
            return Err(SelectorError::DuplicateFragment { kind });
        }

        // `appended` is non-decreasing, so its last entry has the highest rank.
        match self.appended.last() {
            Some(&after) if kind.rank() < after.rank() => {
                Err(SelectorError::OrderViolation { kind, after })
            }
            _ => Ok(()),
        }
    }

    /// Append a fragment of `kind` whose content is `value`.
    ///
    /// `value` is embedded verbatim in the kind's template.
    ///
    /// # Errors
    ///
    /// See [`SelectorNode::check`]. On error the node is unchanged.
    pub fn append(&mut self, kind: FragmentKind, value: &str) -> SelectorResult<&mut Self> {
        self.check(kind)?;
        self.record(kind, value);
        Ok(self)
    }

    fn record(&mut self, kind: FragmentKind, value: &str) {
        kind.render(value, &mut self.text);
        let _ = self.seen.insert(kind);
        self.appended.push(kind);
    }

    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    ///
    /// Append `value` as a type selector.
    ///
    /// # Errors
    ///
    /// Fails if this node already has a type selector or any other fragment.
    pub fn element(&mut self, value: &str) -> SelectorResult<&mut Self> {
        self.append(FragmentKind::Element, value)
    }

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    ///
    /// Append `#value`.
    ///
    /// # Errors
    ///
    /// Fails if this node already has an ID, or any fragment ranked after IDs.
    pub fn id(&mut self, value: &str) -> SelectorResult<&mut Self> {
        self.append(FragmentKind::Id, value)
    }

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    ///
    /// Append `.value`. Repeatable.
    ///
    /// # Errors
    ///
    /// Fails if an attribute, pseudo-class or pseudo-element is already present.
    pub fn class(&mut self, value: &str) -> SelectorResult<&mut Self> {
        self.append(FragmentKind::Class, value)
    }

    /// [§ 6 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    ///
    /// Append `[value]`. Repeatable. `value` is the bracket-free expression,
    /// e.g. `href$=".png"`.
    ///
    /// # Errors
    ///
    /// Fails if a pseudo-class or pseudo-element is already present.
    pub fn attr(&mut self, value: &str) -> SelectorResult<&mut Self> {
        self.append(FragmentKind::Attribute, value)
    }

    /// [§ 3.5 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    ///
    /// Append `:value`. Repeatable.
    ///
    /// # Errors
    ///
    /// Fails if a pseudo-element is already present.
    pub fn pseudo_class(&mut self, value: &str) -> SelectorResult<&mut Self> {
        self.append(FragmentKind::PseudoClass, value)
    }

    /// [§ 3.6 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    ///
    /// Append `::value`.
    ///
    /// # Errors
    ///
    /// Fails if this node already has a pseudo-element.
    pub fn pseudo_element(&mut self, value: &str) -> SelectorResult<&mut Self> {
        self.append(FragmentKind::PseudoElement, value)
    }

    /// The rendered compound selector.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Whether no fragment has been appended.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.appended.is_empty()
    }

    /// Kinds of the accepted fragments, in append order.
    #[must_use]
    pub fn kinds(&self) -> &[FragmentKind] {
        &self.appended
    }
}

impl Stringify for SelectorNode {
    fn stringify(&self) -> String {
        self.text.clone()
    }
}

impl fmt::Display for SelectorNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
