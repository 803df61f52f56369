//! Fragment kinds and their canonical rank table.

use serde::Serialize;
use strum_macros::{AsRefStr, Display, EnumString};

/// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
///
/// One typed piece of a compound selector.
///
/// The discriminant is the kind's rank. Fragments of a compound selector
/// must be appended in non-decreasing rank order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Display, EnumString, AsRefStr,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
#[repr(u8)]
pub enum FragmentKind {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    ///
    /// Example: `div`
    Element = 0,

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    ///
    /// Example: `#main`
    Id = 1,

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    ///
    /// Example: `.container`
    Class = 2,

    /// [§ 6 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    ///
    /// Example: `[href$=".png"]`
    #[strum(to_string = "attribute", serialize = "attr")]
    Attribute = 3,

    /// [§ 3.5 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    ///
    /// Example: `:focus`
    PseudoClass = 4,

    /// [§ 3.6 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    ///
    /// Example: `::before`
    PseudoElement = 5,
}

/// Text placed before and after a fragment's value, indexed by rank.
const TEMPLATES: [(&str, &str); 6] = [
    ("", ""),
    ("#", ""),
    (".", ""),
    ("[", "]"),
    (":", ""),
    ("::", ""),
];

impl FragmentKind {
    /// Every kind, in canonical (rank) order.
    pub const ALL: [Self; 6] = [
        Self::Element,
        Self::Id,
        Self::Class,
        Self::Attribute,
        Self::PseudoClass,
        Self::PseudoElement,
    ];

    /// Position of this kind in the canonical order.
    #[must_use]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Whether a compound selector may contain at most one fragment of this kind.
    ///
    /// [§ 4.2](https://www.w3.org/TR/selectors-4/#compound)
    /// "Only one type selector or universal selector is allowed in the sequence."
    /// IDs and pseudo-elements are held to the same limit.
    #[must_use]
    pub const fn is_singleton(self) -> bool {
        matches!(self, Self::Element | Self::Id | Self::PseudoElement)
    }

    /// The `(prefix, suffix)` wrapped around a value of this kind.
    #[must_use]
    pub fn template(self) -> (&'static str, &'static str) {
        TEMPLATES[usize::from(self.rank())]
    }

    /// Append `value` wrapped in this kind's template to `out`.
    ///
    /// The value is embedded verbatim, without escaping.
    pub fn render(self, value: &str, out: &mut String) {
        let (prefix, suffix) = self.template();
        out.reserve(prefix.len() + value.len() + suffix.len());
        out.push_str(prefix);
        out.push_str(value);
        out.push_str(suffix);
    }
}

#[cfg(test)]
mod tests {
    use super::FragmentKind;

    #[test]
    fn test_all_is_sorted_by_rank() {
        for (index, kind) in FragmentKind::ALL.iter().enumerate() {
            assert_eq!(usize::from(kind.rank()), index);
        }
    }

    #[test]
    fn test_names() {
        assert_eq!(FragmentKind::PseudoClass.to_string(), "pseudo-class");
        assert_eq!(FragmentKind::Attribute.as_ref(), "attribute");
        assert_eq!("attr".parse::<FragmentKind>(), Ok(FragmentKind::Attribute));
        assert_eq!("attribute".parse::<FragmentKind>(), Ok(FragmentKind::Attribute));
        assert_eq!(
            "pseudo-element".parse::<FragmentKind>(),
            Ok(FragmentKind::PseudoElement)
        );
        assert!("universal".parse::<FragmentKind>().is_err());
    }
}
