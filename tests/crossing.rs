//! Crossing evaluator tests

use pyramid_evalb::transition::{balanced, left_branching, parse_actions, right_branching};
use pyramid_evalb::{
    crossing_actions, crossings, reconstruct_sequence, ActionFormat, CrossingPair, EvalError,
    Span, SpanSet,
};

fn spans(pairs: &[(usize, usize)]) -> SpanSet {
    pairs.iter().copied().map(Span::from).collect()
}

#[test]
fn test_scan_stops_at_first_reference_match() {
    let reference = spans(&[(0, 2), (0, 4)]);
    let hypothesis = spans(&[(1, 3)]);
    assert_eq!(
        crossings(&reference, &hypothesis),
        vec![CrossingPair {
            reference: Span::new(0, 2),
            hypothesis: Span::new(1, 3),
        }]
    );
}

#[test]
fn test_tree_never_crosses_itself() {
    for n in 1..12 {
        for seq in [left_branching(n), right_branching(n), balanced(n)] {
            let tree = reconstruct_sequence(&seq, n).unwrap();
            assert!(crossings(&tree, &tree).is_empty(), "n = {n}");
        }
    }
}

#[test]
fn test_nested_and_disjoint_spans_do_not_cross() {
    let reference = spans(&[(0, 6), (1, 4)]);
    let hypothesis = spans(&[(1, 4), (2, 3), (4, 6), (0, 6)]);
    assert!(crossings(&reference, &hypothesis).is_empty());
}

#[test]
fn test_symmetric_overlap_case() {
    // g starts inside h and extends past its end
    let reference = spans(&[(2, 5)]);
    let hypothesis = spans(&[(0, 3)]);
    let pairs = crossings(&reference, &hypothesis);
    assert_eq!(pairs.len(), 1);
    assert_eq!(pairs[0].reference, Span::new(2, 5));
}

#[test]
fn test_pairs_follow_hypothesis_order() {
    let reference = spans(&[(0, 2), (2, 4), (4, 6)]);
    let hypothesis = spans(&[(5, 7), (1, 3), (3, 5)]);
    let order: Vec<_> = crossings(&reference, &hypothesis)
        .into_iter()
        .map(|p| (p.hypothesis, p.reference))
        .collect();
    assert_eq!(
        order,
        vec![
            (Span::new(1, 3), Span::new(0, 2)),
            (Span::new(3, 5), Span::new(2, 4)),
            (Span::new(5, 7), Span::new(4, 6)),
        ]
    );
}

#[test]
fn test_action_level_entry_point() {
    let gold = parse_actions("0 0 1 0 0 1 1", ActionFormat::Numeric).unwrap();
    let pred = parse_actions("0 0 0 1 1 0 1", ActionFormat::Numeric).unwrap();
    let pairs = crossing_actions(&gold, &pred).unwrap();

    assert_eq!(
        pairs,
        vec![
            CrossingPair {
                reference: Span::new(2, 4),
                hypothesis: Span::new(0, 3),
            },
            CrossingPair {
                reference: Span::new(0, 2),
                hypothesis: Span::new(1, 3),
            },
        ]
    );
}

#[test]
fn test_action_level_propagates_malformed() {
    let gold = parse_actions("0 1 0", ActionFormat::Numeric).unwrap();
    let pred = left_branching(2);
    assert!(matches!(
        crossing_actions(&gold, &pred),
        Err(EvalError::MalformedActionSequence { .. })
    ));
}
