use bst_set::Tree;

use std::collections::{BTreeSet, HashSet};

use quickcheck_macros::quickcheck;

use crate::Op;

/// Applies a set of operations to a tree and a `BTreeSet`, checking after each one that they
/// agree. This way we can ensure that after a random smattering of inserts and clears the tree
/// behaves like the standard library's set.
fn do_ops<K>(ops: &[Op<K>], bst: &mut Tree<K>, set: &mut BTreeSet<K>) -> bool
where
    K: Ord + Clone + std::fmt::Debug,
{
    for op in ops {
        let agrees = match op {
            Op::Insert(k) => {
                let (cursor, inserted) = bst.insert(k.clone());
                cursor.get() == Ok(k) && inserted == set.insert(k.clone())
            }
            Op::Find(k) => bst.find(k).get().ok() == set.get(k),
            Op::Clear => {
                bst.clear();
                set.clear();
                bst.begin() == bst.end()
            }
            Op::Iter => bst.iter().eq(set.iter()) && bst.iter().rev().eq(set.iter().rev()),
        };
        if !agrees || bst.len() != set.len() {
            return false;
        }
    }

    true
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set) && tree.iter().eq(set.iter())
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }

    xs.iter().all(|x| tree.find(x).get() == Ok(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find(x) == tree.end())
}

#[quickcheck]
fn size_counts_distinct_keys(xs: Vec<u8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let distinct: HashSet<_> = xs.into_iter().collect();

    tree.len() == distinct.len() && tree.is_empty() == distinct.is_empty()
}

#[quickcheck]
fn second_insert_is_rejected(xs: Vec<i16>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    let len = tree.len();
    let height = tree.height();

    xs.iter().all(|x| !tree.insert(*x).1) && tree.len() == len && tree.height() == height
}

#[quickcheck]
fn strictly_increasing(xs: Vec<i32>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();
    let walked: Vec<_> = tree.iter().collect();

    walked.windows(2).all(|w| w[0] < w[1])
}

#[quickcheck]
fn retreat_visits_in_reverse(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();
    let mut cursor = tree.end();
    let mut walked = Vec::new();
    while cursor.retreat().is_ok() {
        walked.push(*cursor.get().unwrap());
    }

    walked.into_iter().eq(tree.iter().rev().copied())
}
