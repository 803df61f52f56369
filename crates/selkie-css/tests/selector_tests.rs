//! Integration tests for compound selector construction.

use selkie_css::{
    FragmentKind, SelectorError, SelectorNode, Stringify, attr, class, element, id, pseudo_class,
    pseudo_element,
};

#[test]
fn test_id_with_classes() {
    let mut node = id("main");
    let _ = node.class("container").unwrap().class("editable").unwrap();
    assert_eq!(node.stringify(), "#main.container.editable");
}

#[test]
fn test_element_attribute_pseudo_class() {
    let mut node = element("a");
    let _ = node
        .attr(r#"href$=".png""#)
        .unwrap()
        .pseudo_class("focus")
        .unwrap();
    assert_eq!(node.stringify(), r#"a[href$=".png"]:focus"#);
}

#[test]
fn test_every_kind_in_order() {
    let mut node = element("input");
    let _ = node
        .id("email")
        .unwrap()
        .class("field")
        .unwrap()
        .attr("required")
        .unwrap()
        .pseudo_class("invalid")
        .unwrap()
        .pseudo_element("placeholder")
        .unwrap();
    assert_eq!(
        node.stringify(),
        "input#email.field[required]:invalid::placeholder"
    );
    assert_eq!(node.kinds(), FragmentKind::ALL.as_slice());
}

#[test]
fn test_facade_seeds_each_kind() {
    assert_eq!(element("div").stringify(), "div");
    assert_eq!(id("main").stringify(), "#main");
    assert_eq!(class("btn").stringify(), ".btn");
    assert_eq!(attr("disabled").stringify(), "[disabled]");
    assert_eq!(pseudo_class("hover").stringify(), ":hover");
    assert_eq!(pseudo_element("before").stringify(), "::before");
}

#[test]
fn test_values_are_embedded_verbatim() {
    // No escaping or validation of fragment content.
    assert_eq!(class("a b").stringify(), ".a b");
    assert_eq!(pseudo_class("not(.x)").stringify(), ":not(.x)");
    assert_eq!(element("").stringify(), "");
}

#[test]
fn test_empty_node() {
    let node = SelectorNode::new();
    assert!(node.is_empty());
    assert_eq!(node.stringify(), "");
    assert_eq!(node.as_str(), "");
}

#[test]
fn test_stringify_is_idempotent() {
    let mut node = element("p");
    let _ = node.class("lead").unwrap();
    assert_eq!(node.stringify(), node.stringify());
    assert_eq!(node.to_string(), "p.lead");
}

#[test]
fn test_empty_node_accepts_any_first_fragment() {
    for kind in FragmentKind::ALL {
        let mut node = SelectorNode::new();
        assert!(node.append(kind, "x").is_ok(), "{kind} should be accepted");
    }
}

// ========== Duplicate fragments ==========

#[test]
fn test_duplicate_id() {
    let mut node = id("a");
    assert_eq!(
        node.id("b").unwrap_err(),
        SelectorError::DuplicateFragment {
            kind: FragmentKind::Id
        }
    );
}

#[test]
fn test_duplicate_element() {
    let mut node = element("div");
    assert_eq!(
        node.element("span").unwrap_err(),
        SelectorError::DuplicateFragment {
            kind: FragmentKind::Element
        }
    );
}

#[test]
fn test_duplicate_pseudo_element() {
    let mut node = pseudo_element("before");
    assert_eq!(
        node.pseudo_element("after").unwrap_err(),
        SelectorError::DuplicateFragment {
            kind: FragmentKind::PseudoElement
        }
    );
}

#[test]
fn test_duplicate_reported_over_order_violation() {
    // A second element after a class breaks both rules; the duplicate wins.
    let mut node = element("div");
    let _ = node.class("a").unwrap();
    assert_eq!(
        node.element("span").unwrap_err(),
        SelectorError::DuplicateFragment {
            kind: FragmentKind::Element
        }
    );
}

#[test]
fn test_repeatable_kinds() {
    let mut node = SelectorNode::new();
    let _ = node
        .class("a")
        .unwrap()
        .class("b")
        .unwrap()
        .attr("x")
        .unwrap()
        .attr("y")
        .unwrap()
        .pseudo_class("hover")
        .unwrap()
        .pseudo_class("focus")
        .unwrap();
    assert_eq!(node.stringify(), ".a.b[x][y]:hover:focus");
}

// ========== Order violations ==========

#[test]
fn test_element_after_id() {
    let mut node = id("x");
    assert_eq!(
        node.element("a").unwrap_err(),
        SelectorError::OrderViolation {
            kind: FragmentKind::Element,
            after: FragmentKind::Id,
        }
    );
}

#[test]
fn test_class_after_pseudo_class() {
    let mut node = pseudo_class("hover");
    assert_eq!(
        node.class("btn").unwrap_err(),
        SelectorError::OrderViolation {
            kind: FragmentKind::Class,
            after: FragmentKind::PseudoClass,
        }
    );
}

#[test]
fn test_nothing_follows_pseudo_element() {
    for kind in &FragmentKind::ALL[..5] {
        let mut node = pseudo_element("after");
        assert!(matches!(
            node.append(*kind, "x"),
            Err(SelectorError::OrderViolation {
                after: FragmentKind::PseudoElement,
                ..
            })
        ));
    }
}

#[test]
fn test_check_does_not_mutate() {
    let node = class("a");
    assert!(node.check(FragmentKind::Id).is_err());
    assert!(node.check(FragmentKind::Class).is_ok());
    assert_eq!(node.stringify(), ".a");
}

// ========== Atomic appends ==========

#[test]
fn test_rejected_append_leaves_node_unchanged() {
    let mut node = element("div");
    let _ = node.id("main").unwrap().class("wide").unwrap();
    let before = node.clone();

    assert!(node.element("span").is_err());
    assert!(node.id("other").is_err());
    assert_eq!(node, before);
    assert_eq!(node.stringify(), "div#main.wide");

    // Valid appends still work afterwards.
    let _ = node.class("tall").unwrap();
    assert_eq!(node.stringify(), "div#main.wide.tall");
}

#[test]
fn test_error_messages() {
    assert_eq!(
        SelectorError::DuplicateFragment {
            kind: FragmentKind::PseudoElement
        }
        .to_string(),
        "duplicate pseudo-element fragment in compound selector"
    );
    assert_eq!(
        SelectorError::OrderViolation {
            kind: FragmentKind::Element,
            after: FragmentKind::Attribute,
        }
        .to_string(),
        "element fragment cannot follow attribute fragment"
    );
}
