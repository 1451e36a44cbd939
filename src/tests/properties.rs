use proptest::{collection::vec, option, prelude::*};

use crate::{
    builder::{append, Draft, DraftKind},
    flatten::collect_inputs,
    layout::group,
    node::{Continuation, Document, Node, NodeKind, Placement},
    projectors::{to_latex, to_speech_text},
    score::{score, AnswerSet, Score},
};

fn leaf(with_inputs: bool) -> BoxedStrategy<Node> {
    let plain = prop_oneof![
        "[a-z +=*]{0,6}".prop_map(|s| Node::text(s)),
        "[0-9]{1,3}".prop_map(|s| Node::decimal(s)),
        "[a-z <>/]{0,10}".prop_map(|s| Node::rich(s)),
    ];

    if with_inputs {
        // Ids are made unique afterwards by `renumber_inputs`
        prop_oneof![
            3 => plain,
            1 => "[0-9]{1,2}".prop_map(|expected| Node::input("_", expected).unwrap()),
        ].boxed()
    } else {
        plain.boxed()
    }
}

fn tree(with_inputs: bool) -> impl Strategy<Value = Node> {
    leaf(with_inputs).prop_recursive(3, 24, 4, |inner| prop_oneof![
        (inner.clone(), inner.clone(), option::of("[a-z]{1,4}"))
            .prop_map(|(n, d, markup)| Node::fraction(vec![n, d], markup).unwrap()),
        (inner.clone(), inner.clone(), option::of("[a-z]{1,4}"))
            .prop_map(|(b, e, markup)| Node::exponent(vec![b, e], markup).unwrap()),
        (vec(inner.clone(), 0..4), option::of("[a-z]{1,4}"))
            .prop_map(|(children, markup)| Node::algebraic(children, markup)),
        (vec(inner, 0..4), option::of("[a-z]{1,4}"))
            .prop_map(|(children, markup)| Node::equation(children, markup)),
    ])
}

fn renumber_inputs(node: &mut Node, next: &mut usize) {
    match &mut node.kind {
        NodeKind::Input(slot) => {
            slot.id = format!("i{}", next);
            *next += 1;
        }
        NodeKind::Fraction { numerator: first, denominator: second, .. }
        | NodeKind::Exponent { base: first, exponent: second, .. } => {
            renumber_inputs(first, next);
            renumber_inputs(second, next);
        }
        NodeKind::Algebraic { children, .. } | NodeKind::Equation { children, .. } => {
            for child in children {
                renumber_inputs(child, next);
            }
        }
        _ => (),
    }
}

fn document(with_inputs: bool) -> impl Strategy<Value = Document> {
    vec((tree(with_inputs), any::<bool>(), any::<bool>()), 0..8).prop_map(|nodes| {
        let mut next = 0;
        nodes
            .into_iter()
            .map(|(mut node, new_line, break_after)| {
                renumber_inputs(&mut node, &mut next);
                node
                    .with_placement(if new_line { Placement::NewLine } else { Placement::Inline })
                    .with_continuation(if break_after { Continuation::BreakAfter } else { Continuation::Continue })
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn prop_correct_answers_score_full_marks(document in document(true)) {
        let slots = collect_inputs(&document);
        let answers = slots
            .iter()
            .map(|slot| (slot.id.as_str(), slot.expected.as_str()))
            .collect::<AnswerSet>();

        let s = score(&document, &answers);
        prop_assert_eq!(s.total, slots.len());
        prop_assert_eq!(s.correct, slots.len());
        if slots.is_empty() {
            prop_assert_eq!(s, Score::default());
        } else {
            prop_assert_eq!(s.percentage, 100);
        }
    }

    #[test]
    fn prop_no_inputs_scores_zero(
        document in document(false),
        answers in vec(("[a-z0-9]{1,3}", "[a-z0-9]{0,3}"), 0..4),
    ) {
        let answers = answers.into_iter().collect::<AnswerSet>();
        prop_assert_eq!(score(&document, &answers), Score { correct: 0, total: 0, percentage: 0 });
    }

    #[test]
    fn prop_flattening_is_stable(document in document(true)) {
        prop_assert_eq!(collect_inputs(&document), collect_inputs(&document));
        prop_assert!(document.duplicate_input_ids().is_empty());
    }

    #[test]
    fn prop_projections_are_pure(node in tree(true)) {
        prop_assert_eq!(to_latex(&node), to_latex(&node));
        prop_assert_eq!(to_speech_text(&node), to_speech_text(&node));
    }

    #[test]
    fn prop_groups_reproduce_document(document in document(true)) {
        let rejoined = group(&document)
            .iter()
            .flat_map(|g| g.nodes.iter().cloned())
            .collect::<Document>();
        prop_assert_eq!(rejoined, document);
    }

    #[test]
    fn prop_appended_inputs_flatten_in_order(
        steps in vec(prop_oneof![Just(None), "[0-9]{1,2}".prop_map(Some)], 0..10),
    ) {
        let mut document = Document::default();
        let mut expected_ids = vec![];
        for (index, step) in steps.into_iter().enumerate() {
            let draft = match step {
                Some(expected) => {
                    let id = format!("q{}", index);
                    expected_ids.push(id.clone());
                    Draft::new(DraftKind::Input, [id, expected])
                }
                None => Draft::new(DraftKind::Algebraic, ["x+1".to_string()]),
            };
            document = append(&document, &draft).unwrap();
        }

        let ids = collect_inputs(&document).into_iter().map(|s| s.id.clone()).collect::<Vec<_>>();
        prop_assert_eq!(ids, expected_ids);
    }
}
