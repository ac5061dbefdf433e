#![cfg(test)]

// Property tests for both stores, run against a HashMap model that applies
// insert-if-absent writes.

use crate::{BTreeDictionary, Dictionary, HashDictionary};
use proptest::prelude::*;
use std::collections::HashMap;

#[derive(Clone, Debug)]
enum Op {
    Set(usize, i32),
    Get(usize),
    IsSet(String),
}

fn arb_scenario() -> impl Strategy<Value = (Vec<String>, Vec<Op>)> {
    proptest::collection::vec("[a-z]{0,4}", 1..=8).prop_flat_map(|pool| {
        let idxs: Vec<usize> = (0..pool.len()).collect();
        let idx = proptest::sample::select(idxs);
        let probe_pool = proptest::sample::select(pool.clone());
        let op = prop_oneof![
            (idx.clone(), any::<i32>()).prop_map(|(i, v)| Op::Set(i, v)),
            idx.clone().prop_map(Op::Get),
            prop_oneof![probe_pool.prop_map(|s: String| s), "[a-z]{0,4}".prop_map(|s| s)]
                .prop_map(Op::IsSet),
        ];
        proptest::collection::vec(op, 1..80).prop_map(move |ops| (pool.clone(), ops))
    })
}

fn run_against_model(
    sut: &mut dyn Dictionary<String, i32>,
    pool: &[String],
    ops: Vec<Op>,
) -> Result<(), TestCaseError> {
    let mut model: HashMap<String, i32> = HashMap::new();
    for op in ops {
        match op {
            Op::Set(i, v) => {
                let k = pool[i].clone();
                sut.set(k.clone(), v);
                model.entry(k).or_insert(v);
            }
            Op::Get(i) => {
                let k = &pool[i];
                match (sut.get(k), model.get(k)) {
                    (Ok(got), Some(want)) => {
                        prop_assert_eq!(got, want);
                    }
                    (Err(e), None) => {
                        prop_assert_eq!(e.key(), k);
                    }
                    (got, want) => {
                        prop_assert!(false, "get({:?}) = {:?}, model {:?}", k, got, want);
                    }
                }
            }
            Op::IsSet(k) => {
                prop_assert_eq!(sut.is_set(&k), model.contains_key(&k));
            }
        }
    }
    for k in pool {
        prop_assert_eq!(sut.is_set(k), model.contains_key(k));
        prop_assert_eq!(sut.get(k).ok(), model.get(k));
    }
    Ok(())
}

// Property: Both stores agree with the model across random operation sequences.
// - `set` never overwrites: the first value written for a key wins.
// - `get` on an absent key fails with exactly that key.
// - `is_set` matches model membership and does not disturb later results.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_btree_matches_model((pool, ops) in arb_scenario()) {
        let mut sut: BTreeDictionary<String, i32> = BTreeDictionary::new();
        run_against_model(&mut sut, &pool, ops)?;
    }

    #[test]
    fn prop_hash_matches_model((pool, ops) in arb_scenario()) {
        let mut sut: HashDictionary<String, i32> = HashDictionary::new();
        run_against_model(&mut sut, &pool, ops)?;
    }

    // Property: For v1 != v2, set(k, v1); set(k, v2) leaves get(k) == v1.
    #[test]
    fn prop_first_set_wins(k in any::<u16>(), v1 in any::<i64>(), v2 in any::<i64>()) {
        prop_assume!(v1 != v2);
        let mut b: BTreeDictionary<u16, i64> = BTreeDictionary::new();
        let mut h: HashDictionary<u16, i64> = HashDictionary::new();
        let stores: [&mut dyn Dictionary<u16, i64>; 2] = [&mut b, &mut h];
        for d in stores {
            d.set(k, v1);
            d.set(k, v2);
            prop_assert_eq!(d.get(&k), Ok(&v1));
        }
    }
}
