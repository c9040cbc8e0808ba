use ordered_bst::Tree;

/// Pre-order and in-order together pin down a binary tree's shape.
fn shape(tree: &Tree<i8>) -> (Vec<i8>, Vec<i8>) {
    let mut preorder = Vec::new();
    tree.traverse_preorder(|x| preorder.push(*x));
    (preorder, tree.to_vec())
}

fn postorder(tree: &Tree<i8>) -> Vec<i8> {
    let mut postorder = Vec::new();
    tree.traverse_postorder(|x| postorder.push(*x));
    postorder
}

#[quickcheck]
fn sorted_round_trip(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();
    let rebuilt = Tree::from_sorted(&tree.to_vec());

    rebuilt.to_vec() == tree.to_vec() && rebuilt.is_bst()
}

#[quickcheck]
fn sorted_build_is_balanced(n: u8) -> bool {
    let values: Vec<u32> = (0..u32::from(n)).collect();
    let tree = Tree::from_sorted(&values);

    // The smallest height that can hold `n` nodes.
    let optimal = (usize::BITS - values.len().leading_zeros()) as usize;
    tree.height() == optimal && tree.len() == values.len()
}

#[quickcheck]
fn preorder_round_trip(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();
    let (preorder, _) = shape(&tree);

    match Tree::try_from_preorder(&preorder) {
        Ok(rebuilt) => shape(&rebuilt) == shape(&tree),
        Err(_) => false,
    }
}

#[quickcheck]
fn postorder_round_trip(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();

    match Tree::try_from_postorder(&postorder(&tree)) {
        Ok(rebuilt) => shape(&rebuilt) == shape(&tree),
        Err(_) => false,
    }
}

#[quickcheck]
fn best_effort_builds_are_always_bsts(xs: Vec<i8>) -> bool {
    let mut distinct = xs.clone();
    distinct.sort_unstable();
    distinct.dedup();

    let from_preorder = Tree::from_preorder(&xs);
    let from_postorder = Tree::from_postorder(&xs);

    from_preorder.is_bst()
        && from_postorder.is_bst()
        && from_preorder.to_vec() == distinct
        && from_postorder.to_vec() == distinct
}
