use crate::{error::ShapeError, node::{Continuation, Document, LayoutHints, Node, NodeKind, Placement}};

#[test]
fn test_two_child_arity() {
    assert_eq!(
        Node::fraction(vec![dec!(3)], None),
        Err(ShapeError::ChildCount { kind: "fraction", got: 1 }),
    );
    assert_eq!(
        Node::exponent(vec![dec!(2), dec!(3), dec!(4)], None),
        Err(ShapeError::ChildCount { kind: "exponent", got: 3 }),
    );
    assert_eq!(
        Node::fraction(vec![], Some("\\frac{1}{2}".into())),
        Err(ShapeError::ChildCount { kind: "fraction", got: 0 }),
    );

    let node = Node::fraction(vec![dec!(3), dec!(4)], None).unwrap();
    assert_eq!(
        node.kind,
        NodeKind::Fraction {
            numerator: Box::new(dec!(3)),
            denominator: Box::new(dec!(4)),
            markup: None,
        },
    );
    assert_eq!(node.children(), vec![&dec!(3), &dec!(4)]);
}

#[test]
fn test_error_names_rule() {
    let error = Node::exponent(vec![dec!(2)], None).unwrap_err();
    assert_eq!(error.to_string(), "exponent requires exactly two children, but got 1");
}

#[test]
fn test_input_id() {
    assert_eq!(Node::input("  ", "4"), Err(ShapeError::BlankInputId));
    assert_eq!(
        input!("a" => "4").kind,
        NodeKind::Input(crate::node::InputSlot { id: "a".into(), expected: "4".into() }),
    );
}

#[test]
fn test_layout_hints() {
    assert_eq!(text!("x").layout, LayoutHints::default());
    assert_eq!(LayoutHints::default().placement, Placement::Inline);
    assert_eq!(LayoutHints::default().continuation, Continuation::Continue);

    let node = text!("x").on_new_line().break_after();
    assert_eq!(node.layout.placement, Placement::NewLine);
    assert_eq!(node.layout.continuation, Continuation::BreakAfter);
}

#[test]
fn test_markup_accessor() {
    assert_eq!(frac!(dec!(1), dec!(2), markup "\\tfrac12").markup(), Some("\\tfrac12"));
    assert_eq!(frac!(dec!(1), dec!(2)).markup(), None);
    assert_eq!(text!("x").markup(), None);
}

#[test]
fn test_document_snapshots() {
    let a = doc!(text!("x"));
    let b = a.clone();
    let c = doc!(text!("x"));

    assert!(a.same_snapshot(&b));
    assert!(!a.same_snapshot(&c));
    assert_eq!(a, c);
    assert_eq!(Document::default().len(), 0);
    assert!(Document::default().is_empty());
}

#[test]
fn test_duplicate_input_ids() {
    let document = doc!(
        input!("a" => "1"),
        alg!(input!("b" => "2"), input!("a" => "3")),
        input!("a" => "4"),
    );
    assert_eq!(document.duplicate_input_ids(), vec!["a"]);
    assert_eq!(document.input("a").map(|s| s.expected.as_str()), Some("1"));
    assert!(crate::tests::util::what_is_two_plus_two().duplicate_input_ids().is_empty());
}
