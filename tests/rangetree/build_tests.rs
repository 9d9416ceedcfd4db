#![cfg(feature = "dev")]
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rangetree::api::{build_from_sorted, Node};
use rangetree::prelude::*;

fn keys(values: &[i64]) -> Vec<AxisKey<i64>> {
    values
        .iter()
        .map(|&v| AxisKey::new(Point::new(&[v]), 0))
        .collect()
}

/// Longest root-to-leaf edge count.
fn height(node: &Node<i64>) -> usize {
    match (node.left(), node.right()) {
        (Some(left), Some(right)) => 1 + height(left).max(height(right)),
        _ => 0,
    }
}

/// Walk a whole multi-axis tree checking that every node of every
/// non-terminal axis carries a secondary tree over the same leaf count,
/// keyed and sorted on the next axis.
fn assert_secondaries(node: &Node<i64>, axis: usize, arity: usize) {
    if axis + 1 < arity {
        let secondary = node
            .secondary()
            .expect("node above the terminal axis is missing its secondary tree");
        assert_eq!(secondary.size(), node.size());
        let values: Vec<i64> = secondary
            .leaves()
            .inspect(|key| assert_eq!(key.axis(), axis + 1))
            .map(AxisKey::value)
            .collect();
        assert!(values.windows(2).all(|pair| pair[0] <= pair[1]));
        assert_secondaries(secondary, axis + 1, arity);
    } else {
        assert!(node.secondary().is_none());
    }
    if let (Some(left), Some(right)) = (node.left(), node.right()) {
        assert_secondaries(left, axis, arity);
        assert_secondaries(right, axis, arity);
    }
}

fn assert_same_shape(a: &Node<i64>, b: &Node<i64>) {
    assert_eq!(a.size(), b.size());
    assert_eq!(a.min_value(), b.min_value());
    assert_eq!(a.max_value(), b.max_value());
    assert_eq!(a.split_value(), b.split_value());
    match (a.left(), a.right(), b.left(), b.right()) {
        (Some(al), Some(ar), Some(bl), Some(br)) => {
            assert_same_shape(al, bl);
            assert_same_shape(ar, br);
        }
        (None, None, None, None) => {}
        _ => panic!("trees disagree on leaf placement"),
    }
}

#[test]
fn test_pairwise_merge_carries_trailing_node() {
    // Five leaves: rounds pair (0,2) (4,6), then ((0,2),(4,6)), then the
    // carried leaf 8 joins at the top.
    let root = build_from_sorted(keys(&[0, 2, 4, 6, 8])).unwrap();

    assert_eq!(root.size(), 5);
    let left = root.left().unwrap();
    let right = root.right().unwrap();
    assert_eq!(left.size(), 4);
    assert!(right.is_leaf());
    assert_eq!(right.max_value(), 8);
}

#[test]
fn test_height_is_logarithmic() {
    for n in [1usize, 2, 3, 5, 16, 17, 127] {
        let values: Vec<i64> = (0..n as i64).collect();
        let root = build_from_sorted(keys(&values)).unwrap();
        // Pairing rounds: ceil(log2 n).
        let expected = n.next_power_of_two().trailing_zeros() as usize;
        assert_eq!(height(&root), expected, "height off for n={}", n);
    }
}

#[test]
fn test_leaves_read_sorted_left_to_right() {
    let tree = RangeTree::from_points(&[[9], [3], [7], [3], [1], [8]]).unwrap();
    let order: Vec<i64> = tree.points().map(|p| p.coord(0)).collect();
    assert_eq!(order, vec![1, 3, 3, 7, 8, 9]);
}

#[test]
fn test_stable_sort_preserves_duplicate_order() {
    // Ties on axis 0 keep their input order, visible through axis 1.
    let tree = RangeTree::from_points(&[[5, 1], [5, 2], [5, 3], [2, 9]]).unwrap();
    let order: Vec<Vec<i64>> = tree.points().map(|p| p.to_vec()).collect();
    assert_eq!(order, vec![vec![2, 9], vec![5, 1], vec![5, 2], vec![5, 3]]);
}

#[test]
fn test_every_node_carries_a_secondary_tree() {
    let points: Vec<Vec<i64>> = (0..13).map(|i| vec![i, (i * 7) % 13, 12 - i]).collect();
    let tree = RangeTree::from_points(&points).unwrap();
    assert_secondaries(tree.root(), 0, tree.arity());
}

#[test]
fn test_single_point_tree() {
    let tree = RangeTree::from_points(&[[4, 2]]).unwrap();
    assert_eq!(tree.len(), 1);
    assert_eq!(tree.arity(), 2);
    assert!(tree.root().is_leaf());
    assert_secondaries(tree.root(), 0, 2);
}

#[test]
fn test_empty_input_is_rejected() {
    let points: Vec<Vec<i64>> = Vec::new();
    match RangeTree::from_points(&points) {
        Err(RangeTreeError::InvalidInput(_)) => (),
        other => panic!("expected InvalidInput, got {:?}", other.map(|t| t.len())),
    }
}

#[test]
fn test_empty_keys_are_rejected() {
    let empty: Vec<AxisKey<i64>> = Vec::new();
    match build_from_sorted(empty) {
        Err(RangeTreeError::InvalidInput(_)) => (),
        other => panic!("expected InvalidInput, got {:?}", other.map(|n| n.size())),
    }
}

#[test]
fn test_ragged_input_is_rejected() {
    let points = vec![vec![1, 2], vec![3, 4], vec![5]];
    match RangeTree::from_points(&points) {
        Err(RangeTreeError::MismatchedArity {
            expected: 2,
            found: 1,
            index: 2,
        }) => (),
        other => panic!("expected MismatchedArity, got {:?}", other.map(|t| t.len())),
    }
}

#[test]
fn test_zero_arity_points_are_rejected() {
    let points: Vec<Vec<i64>> = vec![vec![], vec![]];
    match RangeTree::from_points(&points) {
        Err(RangeTreeError::InvalidInput(_)) => (),
        other => panic!("expected InvalidInput, got {:?}", other.map(|t| t.len())),
    }
}

#[test]
fn test_parallel_and_sequential_builds_agree() {
    let mut rng = StdRng::seed_from_u64(42);
    // Enough points to clear the parallel cutoff.
    let points: Vec<Vec<i64>> = (0..1500)
        .map(|_| vec![rng.gen_range(0..100), rng.gen_range(0..100)])
        .collect();

    let sequential = RangeTreeBuilder::new().parallel(false).build(&points).unwrap();
    let parallel = RangeTreeBuilder::new().parallel(true).build(&points).unwrap();

    assert_same_shape(sequential.root(), parallel.root());
    let seq_points: Vec<Vec<i64>> = sequential.points().map(|p| p.to_vec()).collect();
    let par_points: Vec<Vec<i64>> = parallel.points().map(|p| p.to_vec()).collect();
    assert_eq!(seq_points, par_points);
}
