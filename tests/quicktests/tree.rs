use ordtree::{Duplicates, Error, Tree};
use quickcheck_macros::quickcheck;

use std::collections::{BTreeMap, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a map.
/// This way we can ensure that after a random smattering of inserts,
/// updates and deletes we have the same keys and values in both.
fn do_ops<K, V>(ops: &[Op<K, V>], bst: &mut Tree<K, V>, map: &mut BTreeMap<K, V>) -> bool
where
    K: Clone + Ord,
    V: Clone + PartialEq,
{
    for op in ops {
        let agrees = match op {
            Op::Insert(k, v) => {
                bst.insert(k.clone(), v.clone());
                map.insert(k.clone(), v.clone());
                true
            }
            Op::Remove(k) => bst.remove(k) == map.remove(k).ok_or(Error::KeyNotFound),
            Op::Update(k, v) => {
                let expected = match map.get_mut(k) {
                    Some(slot) => Ok(std::mem::replace(slot, v.clone())),
                    None => Err(Error::KeyNotFound),
                };
                bst.update(k, v.clone()) == expected
            }
            Op::Lookup(k) => {
                bst.lookup(k) == map.get(k) && bst.contains(k) == map.contains_key(k)
            }
            Op::Iter => bst.in_order().into_iter().eq(map.iter()),
        };
        if !agrees || bst.len() != map.len() {
            return false;
        }
    }

    true
}

fn keys<K: Clone, V>(pairs: Vec<(&K, &V)>) -> Vec<K> {
    pairs.into_iter().map(|(k, _)| k.clone()).collect()
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8, i8>>) -> bool {
    let mut tree = Tree::new();
    let mut map = BTreeMap::new();

    do_ops(&ops, &mut tree, &mut map)
        && map.keys().all(|key| tree.lookup(key) == map.get(key))
        && tree.in_order().into_iter().eq(map.iter())
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x, *x);
    }

    xs.iter().all(|x| tree.contains(x) && tree.lookup(x) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x, *x);
    }
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(x) && tree.lookup(x).is_none())
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x, *x);
    }
    for delete in &deletes {
        let _ = tree.remove(delete);
    }

    let mut still_present = xs;
    for delete in &deletes {
        // We may have inserted the same value multiple times - delete each one.
        while let Some(pos) = still_present.iter().position(|x| x == delete) {
            still_present.swap_remove(pos);
        }
    }

    deletes.iter().all(|x| tree.lookup(x).is_none())
        && still_present.iter().all(|x| tree.lookup(x) == Some(x))
}

#[quickcheck]
fn in_order_is_sorted(xs: Vec<i8>, duplicates: bool) -> bool {
    let policy = if duplicates {
        Duplicates::Allow
    } else {
        Duplicates::Overwrite
    };
    let mut tree = Tree::with_duplicates(policy);
    for x in &xs {
        tree.insert(*x, ());
    }

    keys(tree.in_order()).windows(2).all(|w| w[0] <= w[1])
}

#[quickcheck]
fn traversals_visit_the_same_keys(xs: Vec<i8>) -> bool {
    let mut tree = Tree::with_duplicates(Duplicates::Allow);
    for x in &xs {
        tree.insert(*x, ());
    }

    let mut expected = xs;
    expected.sort_unstable();
    [tree.pre_order(), tree.post_order(), tree.level_order()]
        .into_iter()
        .map(keys)
        .all(|mut got| {
            got.sort_unstable();
            got == expected
        })
        && keys(tree.in_order()) == expected
}

#[quickcheck]
fn removing_distinct_keys_shrinks_tree(xs: HashSet<i8>, removes: HashSet<i8>) -> bool {
    let mut tree: Tree<i8, i8> = xs.iter().map(|x| (*x, *x)).collect();
    let mut removed = 0;
    for r in &removes {
        match tree.remove(r) {
            Ok(v) if v == *r && xs.contains(r) => removed += 1,
            Err(Error::KeyNotFound) if !xs.contains(r) => {}
            _ => return false,
        }
    }

    tree.len() == xs.len() - removed && tree.in_order().len() == xs.len() - removed
}

#[quickcheck]
fn allowed_duplicates_are_all_removable(xs: Vec<i8>) -> bool {
    let mut tree = Tree::with_duplicates(Duplicates::Allow);
    for (i, x) in xs.iter().enumerate() {
        tree.insert(*x, i);
    }

    // Equal keys come back out in insertion order.
    for (i, x) in xs.iter().enumerate() {
        if tree.lookup(x) != Some(&i) || tree.remove(x) != Ok(i) {
            return false;
        }
    }

    tree.is_empty()
}
