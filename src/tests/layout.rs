use crate::{layout::{group, group_spans, Group, GroupKind, GroupSpan}, node::Document};

fn kinds_and_lengths(groups: &[Group]) -> Vec<(GroupKind, usize)> {
    groups.iter().map(|g| (g.kind, g.nodes.len())).collect()
}

#[test]
fn test_empty_document() {
    assert!(group(&Document::default()).is_empty());
}

#[test]
fn test_single_row() {
    let document = doc!(text!("a"), text!("b"), text!("c"));
    let groups = group(&document);
    assert_eq!(kinds_and_lengths(&groups), vec![(GroupKind::Row, 3)]);
    assert_eq!(groups[0].nodes, document.nodes());
}

#[test]
fn test_new_line_starts_column() {
    let document = doc!(
        text!("a"),
        text!("b").on_new_line(),
        text!("c"),
        text!("d"),
    );
    assert_eq!(
        kinds_and_lengths(&group(&document)),
        vec![(GroupKind::Row, 2), (GroupKind::Column, 2)],
    );
}

#[test]
fn test_break_after_keeps_row() {
    let document = doc!(
        text!("a").break_after(),
        text!("b"),
        text!("c").on_new_line(),
    );
    assert_eq!(
        kinds_and_lengths(&group(&document)),
        vec![(GroupKind::Row, 1), (GroupKind::Row, 2)],
    );
}

#[test]
fn test_mixed_hints() {
    let document = doc!(
        text!("a"),
        text!("b").on_new_line(),
        text!("c").break_after(),
        text!("d").on_new_line().break_after(),
        text!("e").on_new_line(),
        text!("f"),
    );
    assert_eq!(
        group_spans(document.nodes()),
        vec![
            GroupSpan { kind: GroupKind::Row, range: 0..2 },
            GroupSpan { kind: GroupKind::Column, range: 2..3 },
            GroupSpan { kind: GroupKind::Row, range: 3..4 },
            GroupSpan { kind: GroupKind::Column, range: 4..5 },
            GroupSpan { kind: GroupKind::Column, range: 5..6 },
        ],
    );
}

#[test]
fn test_single_new_line_node() {
    let document = doc!(text!("a").on_new_line());
    assert_eq!(kinds_and_lengths(&group(&document)), vec![(GroupKind::Row, 1)]);
}

#[test]
fn test_concatenation_reproduces_document() {
    let document = doc!(
        text!("What is "),
        frac!(dec!(1), dec!(2)).on_new_line(),
        text!("plus"),
        input!("a" => "1").break_after(),
        text!("?"),
    );
    let rejoined = group(&document)
        .iter()
        .flat_map(|g| g.nodes.iter().cloned())
        .collect::<Document>();
    assert_eq!(rejoined, document);
}
