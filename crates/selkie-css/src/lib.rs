//! CSS selector construction for Selkie.
//!
//! # Scope
//!
//! This crate implements:
//! - **Compound selectors** ([§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound))
//!   - Type, ID, class, attribute, pseudo-class and pseudo-element fragments
//!   - At most one type selector, ID and pseudo-element per compound
//!   - Fragments in canonical order: type, ID, class, attribute,
//!     pseudo-class, pseudo-element
//!
//! - **Combined selectors** ([§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators))
//!   - Two rendered selectors joined by a combinator symbol
//!   - Arbitrary nesting
//!
//! # Not Implemented
//!
//! - Parsing selector text into structures
//! - Attribute syntax validation and identifier escaping
//! - Specificity
//! - Matching against a document
//!
//! # Example
//!
//! ```
//! use selkie_css::{Stringify, combine, element, id};
//!
//! # fn main() -> Result<(), selkie_css::SelectorError> {
//! let mut editor = id("main");
//! let _ = editor.class("container")?.class("editable")?;
//! assert_eq!(editor.stringify(), "#main.container.editable");
//!
//! let mut div = element("div");
//! let _ = div.id("main")?;
//! let sibling = combine(&div, "+", &element("span"));
//! assert_eq!(sibling.stringify(), "div#main + span");
//! # Ok(())
//! # }
//! ```

/// Stateless entry points that seed a new selector with one fragment.
pub mod facade;
/// Selector fragments, compound nodes and combinations.
pub mod selector;

// Re-exports for convenience
pub use facade::{attr, class, combine, element, id, pseudo_class, pseudo_element};
pub use selector::{
    FragmentKind, Selector, SelectorCombination, SelectorError, SelectorNode, SelectorResult,
    Stringify, combinator,
};
