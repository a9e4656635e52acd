//! Algebraic laws of the reduction protocol, checked over random inputs.

use std::cell::Cell;

use proptest::collection;
use proptest::prelude::*;
use reducer::{compose, into, reduce, Transducer};
use stages::{cat, dedupe, filter, map, partition_all, take};
use tests::{counting, Recorder};

proptest! {
    /// Regrouping a three-stage composition must not change its output.
    #[test]
    fn composition_is_associative(
        input in collection::vec(-50i32..50, 0..64),
        modulus in 1i32..5,
        n in 0usize..40,
    ) {
        let f = filter(move |x: &i32| x % modulus == 0);
        let g = map(|x: i32| x * 3 - 1);
        let h = take(n);

        let nested_left = compose(compose(f.clone(), g.clone()), h.clone());
        let nested_right = compose(f, compose(g, h));

        let a: Vec<i32> = into(Vec::new(), &nested_left, input.clone());
        let b: Vec<i32> = into(Vec::new(), &nested_right, input);
        prop_assert_eq!(a, b);
    }

    /// Associativity also holds across buffering and flattening stages.
    #[test]
    fn composition_is_associative_with_state(
        input in collection::vec(0u8..4, 0..64),
        k in 1usize..6,
    ) {
        let chunks = partition_all::<u8>(k).expect("k > 0");

        let nested_left = compose(compose(chunks.clone(), cat()), dedupe());
        let nested_right = compose(chunks, compose(cat(), dedupe()));

        let a: Vec<u8> = into(Vec::new(), &nested_left, input.clone());
        let b: Vec<u8> = into(Vec::new(), &nested_right, input);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn identity_map_reproduces_input(input in collection::vec(any::<i64>(), 0..128)) {
        let out: Vec<i64> = into(Vec::new(), &map(|x: i64| x), input.clone());
        prop_assert_eq!(out, input);
    }

    /// `take(n)` yields `min(n, len)` results and never pulls past the nth input.
    #[test]
    fn take_bounds_output_and_pulls(len in 0usize..100, n in 0usize..100) {
        let pulls = Cell::new(0usize);
        let xf = compose(map(|x: usize| x * 2), take(n));
        let (sink, tally) = Recorder::new();
        let out = reduce(xf.apply(sink), Vec::new(), counting(0..len, &pulls));

        prop_assert_eq!(out.len(), n.min(len));
        prop_assert_eq!(tally.steps(), n.min(len));
        prop_assert_eq!(tally.completions(), 1);
        let expected_pulls = if n == 0 { len.min(1) } else { n.min(len) };
        prop_assert_eq!(pulls.get(), expected_pulls);
    }

    /// `partition_all(k)` emits `ceil(L / k)` groups that concatenate back to
    /// the input, all full except possibly the last.
    #[test]
    fn partition_all_flushes_everything(
        input in collection::vec(any::<u16>(), 0..200),
        k in 1usize..17,
    ) {
        let xf = partition_all::<u16>(k).expect("k > 0");
        let groups: Vec<Vec<u16>> = into(Vec::new(), &xf, input.clone());

        prop_assert_eq!(groups.len(), input.len().div_ceil(k));
        if let Some((last, full)) = groups.split_last() {
            prop_assert!(full.iter().all(|g| g.len() == k));
            let tail = input.len() % k;
            prop_assert_eq!(last.len(), if tail == 0 { k } else { tail });
        }
        prop_assert_eq!(groups.concat(), input);
    }

    #[test]
    fn dedupe_matches_vec_dedup(input in collection::vec(0u8..3, 0..128)) {
        let out: Vec<u8> = into(Vec::new(), &dedupe(), input.clone());
        let mut expected = input;
        expected.dedup();
        prop_assert_eq!(out, expected);
    }
}
