use std::collections::{BTreeSet, HashSet};
use std::hash::Hash;

/// 「E の集合」の操作一式
///
/// insert_all の既定実装は insert の繰り返し（insert_each）であることに注意。
/// 既定実装に乗っている実装では、一括挿入が上書きされた単一挿入を要素ごとに
/// 呼び直す。
pub trait SetLike<E> {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool;

    fn contains(&self, value: &E) -> bool;

    fn iter<'a>(&'a self) -> impl Iterator<Item = &'a E>
    where
        E: 'a;

    /// 単一挿入。新規に入った場合に true を返す。
    fn insert(&mut self, value: E) -> bool;

    /// 一括挿入。集合が変化した場合に true を返す。
    fn insert_all<I>(&mut self, values: I) -> bool
    where
        I: IntoIterator<Item = E>,
    {
        insert_each(self, values)
    }

    fn remove(&mut self, value: &E) -> bool;

    fn clear(&mut self);
}

/// 一括挿入の基底アルゴリズム。要素ごとに insert を呼び直す。
pub fn insert_each<E, S, I>(set: &mut S, values: I) -> bool
where
    S: SetLike<E> + ?Sized,
    I: IntoIterator<Item = E>,
{
    let mut modified = false;
    for value in values {
        modified |= set.insert(value);
    }
    modified
}

impl<E> SetLike<E> for HashSet<E>
where
    E: Eq + Hash,
{
    fn len(&self) -> usize {
        HashSet::len(self)
    }

    fn is_empty(&self) -> bool {
        HashSet::is_empty(self)
    }

    fn contains(&self, value: &E) -> bool {
        HashSet::contains(self, value)
    }

    fn iter<'a>(&'a self) -> impl Iterator<Item = &'a E>
    where
        E: 'a,
    {
        HashSet::iter(self)
    }

    fn insert(&mut self, value: E) -> bool {
        HashSet::insert(self, value)
    }

    // insert_all は既定実装のまま（insert の繰り返し）

    fn remove(&mut self, value: &E) -> bool {
        HashSet::remove(self, value)
    }

    fn clear(&mut self) {
        HashSet::clear(self)
    }
}

impl<E> SetLike<E> for BTreeSet<E>
where
    E: Ord,
{
    fn len(&self) -> usize {
        BTreeSet::len(self)
    }

    fn is_empty(&self) -> bool {
        BTreeSet::is_empty(self)
    }

    fn contains(&self, value: &E) -> bool {
        BTreeSet::contains(self, value)
    }

    fn iter<'a>(&'a self) -> impl Iterator<Item = &'a E>
    where
        E: 'a,
    {
        BTreeSet::iter(self)
    }

    fn insert(&mut self, value: E) -> bool {
        BTreeSet::insert(self, value)
    }

    // こちらは insert を経由しない一括挿入
    fn insert_all<I>(&mut self, values: I) -> bool
    where
        I: IntoIterator<Item = E>,
    {
        let len_before = self.len();
        self.extend(values);
        self.len() != len_before
    }

    fn remove(&mut self, value: &E) -> bool {
        BTreeSet::remove(self, value)
    }

    fn clear(&mut self) {
        BTreeSet::clear(self)
    }
}
