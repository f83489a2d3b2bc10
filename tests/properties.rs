//! Property tests over random well-formed trees

use proptest::prelude::*;
use pyramid_evalb::{
    compose, compose_table, crossings, reconstruct_inferred, reconstruct_sequence, CountingMerge,
    EvalError, Span,
};

mod common;
use common::random_tree;

fn tree_strategy() -> impl Strategy<Value = (usize, Vec<bool>)> {
    (1usize..40).prop_flat_map(|n| (Just(n), proptest::collection::vec(any::<bool>(), 2 * n)))
}

proptest! {
    #[test]
    fn reconstructed_tree_is_binary((n, choices) in tree_strategy()) {
        let seq = random_tree(n, &choices);
        prop_assert_eq!(seq.len(), 2 * n - 1);

        let spans = reconstruct_sequence(&seq, n).expect("well-formed sequence");
        prop_assert!(spans.contains(&Span::new(0, n)), "root must be present");

        if n >= 2 {
            prop_assert_eq!(spans.len(), n - 1, "one span per internal node");
            prop_assert!(spans.iter().all(|s| !s.is_unit() && s.end <= n));
            // Spans of one tree are laminar: nested or disjoint
            for a in &spans {
                for b in &spans {
                    prop_assert!(!a.crosses(b), "{} crosses {}", a, b);
                }
            }
        }
    }

    #[test]
    fn crossings_are_genuine_and_bounded(
        (n, gold_choices) in tree_strategy(),
        pred_choices in proptest::collection::vec(any::<bool>(), 80),
    ) {
        let gold = reconstruct_sequence(&random_tree(n, &gold_choices), n).unwrap();
        let pred = reconstruct_sequence(&random_tree(n, &pred_choices), n).unwrap();
        let pairs = crossings(&gold, &pred);

        prop_assert!(pairs.len() <= pred.len());
        for pair in &pairs {
            prop_assert!(gold.contains(&pair.reference));
            prop_assert!(pred.contains(&pair.hypothesis));
            prop_assert!(pair.reference.crosses(&pair.hypothesis));
        }

        // Unreported hypothesis spans cross nothing
        for h in &pred {
            if pairs.iter().all(|p| p.hypothesis != *h) {
                prop_assert!(gold.iter().all(|g| !g.crosses(h)));
            }
        }
    }

    #[test]
    fn truncated_sequence_is_rejected((n, choices) in tree_strategy(), cut in any::<prop::sample::Index>()) {
        prop_assume!(n >= 2);
        let seq = random_tree(n, &choices);
        let keep = cut.index(seq.len() - 1);
        let prefix: Vec<_> = seq.iter().take(keep).collect();

        let result = pyramid_evalb::reconstruct(&prefix, n);
        let is_malformed = matches!(result, Err(EvalError::MalformedActionSequence { .. }));
        prop_assert!(is_malformed);
    }

    #[test]
    fn inference_agrees_with_explicit_count((n, choices) in tree_strategy()) {
        let seq = random_tree(n, &choices);
        prop_assert_eq!(
            reconstruct_inferred(&seq).unwrap(),
            reconstruct_sequence(&seq, n).unwrap()
        );
    }

    #[test]
    fn pyramid_root_matches_table(seq in proptest::collection::vec(any::<u32>(), 1..25)) {
        let merge = CountingMerge::new(|l: &u32, r: &u32| l.rotate_left(3) ^ r.wrapping_mul(31));
        let root = compose(&seq, &merge).unwrap();
        let table = compose_table(&seq, &merge).unwrap();
        let n = seq.len();

        prop_assert_eq!(table.root(), Some(&root));
        prop_assert_eq!(merge.calls(), n * (n - 1));
        prop_assert_eq!(table.merges(), n * (n - 1) / 2);
    }
}
