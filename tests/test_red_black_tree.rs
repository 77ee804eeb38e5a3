use rand::Rng;
use rbtree_collections::red_black_tree::{Color, Error, RedBlackTree, TraversalOrder};
use std::collections::BTreeSet;

const NUM_OF_OPERATIONS: usize = 10_000;

fn tree_of(keys: &[i32]) -> RedBlackTree<i32> {
    let mut tree = RedBlackTree::new();
    for key in keys {
        tree.insert(*key).unwrap();
    }
    tree
}

fn sorted_keys(tree: &RedBlackTree<i32>, order: TraversalOrder) -> Vec<i32> {
    let mut keys: Vec<i32> = tree.traverse(order).into_iter().map(|(key, _)| *key).collect();
    keys.sort();
    keys
}

#[test]
fn test_scenario_three_nodes() {
    assert_eq!(tree_of(&[30, 15, 45]).to_prefix_string(), " B30  R15  R45 ");
}

#[test]
fn test_scenario_left_left_rotation() {
    assert_eq!(
        tree_of(&[40, 30, 20, 10]).to_prefix_string(),
        " B30  B20  R10  B40 ",
    );
}

#[test]
fn test_scenario_duplicate() {
    let mut tree = RedBlackTree::new();
    assert_eq!(tree.insert(10), Ok(()));
    assert_eq!(tree.insert(10), Err(Error::DuplicateKey));
    assert_eq!(tree.len(), 1);
    assert_eq!(tree.to_prefix_string(), " B10 ");
}

#[test]
fn test_scenario_empty_min_max() {
    let tree: RedBlackTree<i32> = RedBlackTree::new();
    assert_eq!(tree.min(), Err(Error::EmptyTree));
    assert_eq!(tree.max(), Err(Error::EmptyTree));
}

#[test]
fn test_scenario_infix() {
    assert_eq!(
        tree_of(&[12, 11, 15, 5, 13, 7]).to_infix_string(),
        " R5  B7  R11  B12  R13  B15 ",
    );
}

#[test]
fn test_error_display() {
    assert_eq!(Error::EmptyTree.to_string(), "Red Black Tree is empty");
    assert_eq!(
        Error::DuplicateKey.to_string(),
        "key already exists in the red black tree",
    );
}

#[test]
fn test_copy_independence() {
    let mut original = tree_of(&[11, 23, 9, 52, 31, 4]);
    assert_eq!(original.to_prefix_string(), " B11  B9  R4  B31  R23  R52 ");

    let mut copy = original.clone();
    assert_eq!(copy.to_prefix_string(), original.to_prefix_string());
    assert_eq!(copy.to_infix_string(), original.to_infix_string());
    assert_eq!(copy.to_postfix_string(), original.to_postfix_string());

    let snapshot = copy.to_prefix_string();
    original.insert(200).unwrap();
    assert_ne!(copy.to_prefix_string(), original.to_prefix_string());
    assert_eq!(copy.to_prefix_string(), snapshot);
    assert!(!copy.contains(&200));
    assert_eq!(copy.len(), 6);

    let snapshot = original.to_prefix_string();
    copy.insert(1).unwrap();
    copy.insert(2).unwrap();
    assert_eq!(original.to_prefix_string(), snapshot);
    assert!(!original.contains(&1));
    assert_eq!(copy.len(), 8);
    assert_eq!(original.len(), 7);
}

#[test]
fn test_contains() {
    let tree: RedBlackTree<i32> = RedBlackTree::new();
    assert!(!tree.contains(&6));

    let tree = tree_of(&[40, 22, 29, 34]);
    assert!(tree.contains(&34));
    assert!(tree.contains(&40));
    assert!(!tree.contains(&35));
    assert_eq!(tree.get(&29), Some(&29));
    assert_eq!(tree.get(&30), None);
}

#[test]
fn test_min_max() {
    let tree = tree_of(&[42]);
    assert_eq!(tree.min(), Ok(&42));
    assert_eq!(tree.max(), Ok(&42));

    for keys in &[
        vec![20, 10, 30],
        vec![50, 40, 30, 20, 10],
        vec![10, 20, 30, 40, 50],
        vec![30, 10, 50, 5, 40, 60],
    ] {
        let tree = tree_of(keys);
        assert_eq!(tree.min(), Ok(keys.iter().min().unwrap()));
        assert_eq!(tree.max(), Ok(keys.iter().max().unwrap()));
    }
}

#[test]
fn test_extreme_values() {
    let tree = tree_of(&[i32::min_value(), i32::max_value(), 0]);
    assert_eq!(tree.len(), 3);
    assert_eq!(tree.min(), Ok(&i32::min_value()));
    assert_eq!(tree.max(), Ok(&i32::max_value()));
}

#[test]
fn test_size_growth() {
    let mut tree = RedBlackTree::new();
    assert_eq!(tree.len(), 0);
    tree.insert(10).unwrap();
    assert_eq!(tree.len(), 1);
    tree.insert(20).unwrap();
    assert_eq!(tree.len(), 2);
    assert!(tree.insert(20).is_err());
    assert_eq!(tree.len(), 2);
    tree.insert(5).unwrap();
    assert_eq!(tree.len(), 3);
}

#[test]
fn test_root_is_black_after_every_insert() {
    let mut tree = RedBlackTree::new();
    for key in 1..=64 {
        tree.insert(key).unwrap();
        let prefix = tree.traverse(TraversalOrder::Prefix);
        assert_eq!(prefix[0].1, Color::Black);
    }
}

#[test]
fn int_test_red_black_tree() {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut tree = RedBlackTree::new();
    let mut expected = BTreeSet::new();

    for _ in 0..NUM_OF_OPERATIONS {
        let key = rng.gen_range(-5_000, 5_000);

        if expected.contains(&key) {
            assert_eq!(tree.insert(key), Err(Error::DuplicateKey));
        } else {
            assert_eq!(tree.insert(key), Ok(()));
            expected.insert(key);
        }
        assert_eq!(tree.len(), expected.len());
    }

    assert_eq!(tree.min().ok(), expected.iter().next());
    assert_eq!(tree.max().ok(), expected.iter().next_back());
    assert_eq!(
        tree.iter().collect::<Vec<&i32>>(),
        expected.iter().collect::<Vec<&i32>>(),
    );

    for _ in 0..NUM_OF_OPERATIONS {
        let key = rng.gen_range(-6_000, 6_000);
        assert_eq!(tree.contains(&key), expected.contains(&key));
    }

    let infix = sorted_keys(&tree, TraversalOrder::Infix);
    assert_eq!(infix, sorted_keys(&tree, TraversalOrder::Prefix));
    assert_eq!(infix, sorted_keys(&tree, TraversalOrder::Postfix));
    assert_eq!(infix, expected.iter().cloned().collect::<Vec<i32>>());
}

#[test]
fn int_test_red_black_tree_clone() {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut tree = RedBlackTree::new();
    for _ in 0..NUM_OF_OPERATIONS {
        let _ = tree.insert(rng.next_u32());
    }

    let copy = tree.clone();
    assert_eq!(copy.len(), tree.len());
    assert_eq!(copy.to_prefix_string(), tree.to_prefix_string());
    assert_eq!(copy.to_postfix_string(), tree.to_postfix_string());

    tree.clear();
    assert!(tree.is_empty());
    assert_eq!(copy.iter().count(), copy.len());
}
