use std::collections::BTreeSet;

use proptest::collection::vec;
use proptest::prelude::{any, ProptestConfig, Strategy};
use proptest::prop_oneof;
use proptest::proptest;
use strata_skip_list::builder::SkipListBuilder;
use strata_skip_list::skip_list::SkipList;
use strata_skip_list::StrataSkipListError;
use strata_traits::default::{WithMaxLevel, WithSeed};

#[derive(Debug, Clone)]
enum Op {
    Insert(u16),
    Delete(u16),
    Search(u16),
}
fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..512u16).prop_map(Op::Insert),
        (0..512u16).prop_map(Op::Delete),
        (0..512u16).prop_map(Op::Search),
    ]
}
fn builder(max_level: usize, seed: u64) -> SkipListBuilder {
    let mut builder = SkipListBuilder::default();
    builder.set_max_level(max_level).set_seed(seed);
    builder
}
/// Level 0 matches `model`; every higher level is an ordered subset of the
/// one below it.
fn assert_shape(list: &SkipList<u16>, model: &BTreeSet<u16>) {
    let level0 = list.iter().copied().collect::<Vec<_>>();
    assert_eq!(level0, model.iter().copied().collect::<Vec<_>>());
    assert_eq!(list.len(), model.len());
    assert!(list.height() <= list.max_level());

    let mut below = level0;
    for level in 1..list.max_level() {
        let keys = list.level_keys(level).copied().collect::<Vec<_>>();
        assert!(keys.windows(2).all(|w| w[0] < w[1]));
        let mut rest = below.iter();
        assert!(keys.iter().all(|k| rest.any(|b| b == k)));
        assert_eq!(level < list.height(), !keys.is_empty());
        below = keys;
    }
    let rev = list.iter().rev().copied().collect::<Vec<_>>();
    assert_eq!(rev, model.iter().rev().copied().collect::<Vec<_>>());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]
    #[test]
    fn test_matches_model(
        ops in vec(op(), 0..400),
        max_level in 1..12usize,
        seed in any::<u64>(),
    ) {
        let mut list = builder(max_level, seed).build::<u16>().unwrap();
        let mut model = BTreeSet::new();
        for op in ops {
            match op {
                Op::Insert(k) => assert_eq!(list.insert(k), model.insert(k)),
                Op::Delete(k) => assert_eq!(list.delete(&k), model.remove(&k)),
                Op::Search(k) => match list.search(&k) {
                    Ok(node) => {
                        assert!(model.contains(&k));
                        assert_eq!(*node.key(), k);
                        assert!(node.height() >= 1 && node.height() <= max_level);
                    }
                    Err(e) => {
                        assert!(!model.contains(&k));
                        assert_eq!(e, StrataSkipListError::KeyNotFound);
                    }
                },
            }
        }
        assert_shape(&list, &model);
    }

    #[test]
    fn test_bulk_build_then_ops(
        keys in vec(any::<u16>(), 0..300),
        ops in vec(op(), 0..200),
        seed in any::<u64>(),
    ) {
        let model = keys.into_iter().collect::<BTreeSet<_>>();
        let mut list = builder(6, seed)
            .build_from_sorted(model.iter().copied())
            .unwrap();
        assert_shape(&list, &model);

        let mut model = model;
        for op in ops {
            match op {
                Op::Insert(k) => assert_eq!(list.try_insert(k).is_ok(), model.insert(k)),
                Op::Delete(k) => assert_eq!(list.try_delete(&k).ok(), model.take(&k)),
                Op::Search(k) => assert_eq!(list.get(&k), model.get(&k)),
            }
        }
        assert_shape(&list, &model);
    }

    #[test]
    fn test_absent_delete_is_noop(
        keys in vec(0..1000u16, 0..100),
        absent in 1000..2000u16,
        seed in any::<u64>(),
    ) {
        let mut list = builder(8, seed).build::<u16>().unwrap();
        for k in keys {
            list.insert(k);
        }
        let before = list.dump();
        assert!(!list.delete(&absent));
        assert_eq!(list.dump(), before);
    }
}

#[test]
fn test_insert_descending() {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut list = builder(10, 11).build::<u16>().unwrap();
    let mut model = BTreeSet::new();
    for k in (0..2000u16).rev() {
        assert!(list.insert(k));
        model.insert(k);
    }
    assert_shape(&list, &model);
    for k in (0..2000u16).step_by(3) {
        assert!(list.delete(&k));
        model.remove(&k);
    }
    assert_shape(&list, &model);
    assert_eq!(list.first(), model.first());
    assert_eq!(list.last(), model.last());
}
#[test]
fn test_string_keys() {
    let mut builder = SkipListBuilder::default();
    builder.set_seed(5);
    let mut list = builder
        .build_from_sorted(["apple", "banana", "cherry"].map(String::from))
        .unwrap();
    assert!(list.insert("blueberry".to_string()));
    assert!(!list.insert("apple".to_string()));
    assert!(list.delete(&"banana".to_string()));
    assert_eq!(
        list.iter().map(String::as_str).collect::<Vec<_>>(),
        ["apple", "blueberry", "cherry"]
    );
}
