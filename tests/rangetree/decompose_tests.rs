#![cfg(feature = "dev")]
use std::collections::HashSet;
use std::ptr;

use rangetree::api::{build_from_sorted, canonical_subtrees, range_points, Node};
use rangetree::prelude::*;

const SIZES: [usize; 5] = [2, 4, 10, 17, 127];

fn even_tree(n: usize) -> (Vec<i64>, Node<i64>) {
    let values: Vec<i64> = (0..2 * n as i64).step_by(2).collect();
    let keys = values
        .iter()
        .map(|&v| AxisKey::new(Point::new(&[v]), 0))
        .collect();
    let root = build_from_sorted(keys).unwrap();
    (values, root)
}

fn covered_values(subtrees: &[&Node<i64>]) -> Vec<i64> {
    subtrees
        .iter()
        .flat_map(|node| node.leaves().map(AxisKey::value))
        .collect()
}

#[test]
fn test_leaf_count_conservation_over_all_ranges() {
    // Every (start, end) pair over a probe grid straddling the key range:
    // the canonical subtrees must cover exactly the in-range keys, in
    // order, and their cached sizes must add up to the same count.
    for n in SIZES {
        let (values, root) = even_tree(n);
        let hi = 2 * n as i64 + 1;
        for start in -1..=hi {
            for end in start..=hi {
                let expected: Vec<i64> = values
                    .iter()
                    .copied()
                    .filter(|&v| start <= v && v <= end)
                    .collect();
                let subtrees: Vec<&Node<i64>> = canonical_subtrees(&root, start, end).collect();
                let total: usize = subtrees.iter().map(|node| node.size()).sum();
                assert_eq!(total, expected.len(), "size sum for [{}, {}]", start, end);
                assert_eq!(
                    covered_values(&subtrees),
                    expected,
                    "coverage for [{}, {}]",
                    start,
                    end
                );
            }
        }
    }
}

#[test]
fn test_covering_range_yields_the_root_alone() {
    for n in SIZES {
        let (values, root) = even_tree(n);
        // Both a loose cover and the exact min/max bounds.
        for (start, end) in [(-5, 2 * n as i64 + 5), (values[0], values[n - 1])] {
            let subtrees: Vec<&Node<i64>> = canonical_subtrees(&root, start, end).collect();
            assert_eq!(subtrees.len(), 1);
            assert!(ptr::eq(subtrees[0], &root));
        }
    }
}

#[test]
fn test_single_leaf_tree_ranges() {
    let keys = vec![AxisKey::new(Point::new(&[7i64]), 0)];
    let root = build_from_sorted(keys).unwrap();

    let exact: Vec<&Node<i64>> = canonical_subtrees(&root, 7, 7).collect();
    assert_eq!(covered_values(&exact), vec![7]);
    let loose: Vec<&Node<i64>> = canonical_subtrees(&root, 3, 8).collect();
    assert_eq!(covered_values(&loose), vec![7]);
    assert!(canonical_subtrees(&root, 3, 4).next().is_none());
    assert!(canonical_subtrees(&root, 8, 9).next().is_none());
}

#[test]
fn test_ranges_outside_the_keys_are_empty() {
    let (_, root) = even_tree(10);
    assert!(canonical_subtrees(&root, -10, -1).next().is_none());
    assert!(canonical_subtrees(&root, 20, 99).next().is_none());
    // Between two adjacent keys.
    assert!(canonical_subtrees(&root, 3, 3).next().is_none());
}

#[test]
fn test_inverted_range_is_empty() {
    let (_, root) = even_tree(5);
    assert!(canonical_subtrees(&root, 9, 1).next().is_none());
    assert!(canonical_subtrees(&root, 1, 0).next().is_none());
    assert!(range_points(&root, 6, 2).next().is_none());
}

#[test]
fn test_canonical_roots_are_leaf_disjoint_with_duplicates() {
    let keys = [0, 2, 2, 2, 4]
        .iter()
        .map(|&v| AxisKey::new(Point::new(&[v]), 0))
        .collect();
    let root: Node<i64> = build_from_sorted(keys).unwrap();

    let subtrees: Vec<&Node<i64>> = canonical_subtrees(&root, 2, 6).collect();
    assert_eq!(covered_values(&subtrees), vec![2, 2, 2, 4]);
    let sizes: Vec<usize> = subtrees.iter().map(|node| node.size()).collect();
    assert_eq!(sizes, vec![1, 2, 1]);

    // Equal keys live in distinct leaves; no leaf may be covered twice.
    let mut seen: HashSet<*const AxisKey<i64>> = HashSet::new();
    for node in &subtrees {
        for key in node.leaves() {
            assert!(seen.insert(key), "leaf covered twice");
        }
    }
    assert_eq!(seen.len(), 4);
}

#[test]
fn test_boundary_leaf_is_yielded_when_start_precedes_min() {
    let (_, root) = even_tree(4);
    // Keys 0, 2, 4, 6: only the minimum leaf is in [0, 0].
    let subtrees: Vec<&Node<i64>> = canonical_subtrees(&root, 0, 0).collect();
    assert_eq!(subtrees.len(), 1);
    assert!(subtrees[0].is_leaf());
    assert_eq!(subtrees[0].min_value(), 0);
}

#[test]
fn test_range_points_flattens_in_key_order() {
    let (_, root) = even_tree(10);
    let hits: Vec<i64> = range_points(&root, 3, 11).map(|p| p.coord(0)).collect();
    assert_eq!(hits, vec![4, 6, 8, 10]);
}
