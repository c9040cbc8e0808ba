use ordered_bst::Tree;

use std::collections::{BTreeSet, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a `BTreeSet`, checking the BST
/// invariant after every operation.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same set of values in both.
fn do_ops<T>(ops: &[Op<T>], bst: &mut Tree<T>, set: &mut BTreeSet<T>) -> bool
where
    T: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(x) => {
                if bst.insert(x.clone()) != set.insert(x.clone()) {
                    return false;
                }
            }
            Op::Remove(x) => {
                if bst.remove(x) != set.take(x) {
                    return false;
                }
            }
        }
        if !bst.is_bst() {
            return false;
        }
    }

    true
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set) && tree.to_vec() == set.into_iter().collect::<Vec<_>>()
}

#[quickcheck]
fn count_matches_to_vec(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();
    do_ops(&ops, &mut tree, &mut set);

    let len = tree.to_vec().len();
    tree.len() == len && tree.root().map_or(0, |root| root.count()) == len
}

#[quickcheck]
fn to_vec_is_strictly_increasing(xs: Vec<i16>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();

    tree.to_vec().windows(2).all(|pair| pair[0] < pair[1])
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.search(x).is_none())
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    for delete in &deletes {
        tree.remove(delete);
    }

    let mut still_present = xs;
    for delete in &deletes {
        // We may have inserted the same value multiple times - delete each one.
        while let Some(pos) = still_present.iter().position(|x| x == delete) {
            still_present.swap_remove(pos);
        }
    }

    deletes.iter().all(|x| !tree.contains(x)) && still_present.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn insert_then_delete_restores_contents(xs: Vec<i8>, x: i8) -> bool {
    let mut tree: Tree<_> = xs.into_iter().collect();
    if tree.contains(&x) {
        return true;
    }
    let before = tree.to_vec();

    tree.insert(x);
    let Some(id) = tree.search(&x).map(|node| node.id()) else {
        return false;
    };
    tree.delete(id);

    tree.to_vec() == before && tree.is_bst()
}

#[quickcheck]
fn neighbours_are_predecessor_and_successor(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();
    let values = tree.to_vec();

    values.windows(2).all(|pair| {
        let (a, b) = match (tree.search(&pair[0]), tree.search(&pair[1])) {
            (Some(a), Some(b)) => (a, b),
            _ => return false,
        };
        b.predecessor() == Some(a) && a.successor() == Some(b)
    })
}

#[quickcheck]
fn deleted_ids_go_stale(xs: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    let ids: Vec<_> = xs
        .iter()
        .filter_map(|x| tree.search(x).map(|node| node.id()))
        .collect::<HashSet<_>>()
        .into_iter()
        .collect();

    for &id in &ids {
        if tree.delete(id).is_none() {
            return false;
        }
    }

    tree.is_empty() && ids.iter().all(|&id| tree.node(id).is_none())
}

#[test]
fn delete_root_of_sample_tree() {
    let mut tree: Tree<_> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
    assert_eq!(tree.to_vec(), vec![1, 3, 4, 5, 7, 8, 9]);
    assert_eq!(tree.search(&8).unwrap().height(), 2);
    assert!(tree.search(&5).unwrap().is_root());

    let five = tree.search(&5).unwrap().id();
    let removed = tree.delete(five).unwrap();

    let seven = tree.search(&7).unwrap();
    assert!(seven.is_root());
    assert_eq!(removed.replacement, Some(seven.id()));
    assert_eq!(tree.to_vec(), vec![1, 3, 4, 7, 8, 9]);
}
