use std::collections::HashSet;
use std::hash::Hash;

use super::set_like::{insert_each, SetLike};

/// 継承流の計数集合（悪い例）
///
/// 一括挿入で自分のカウンタを進めたあと、基底の一括挿入アルゴリズム
/// （insert_each）へ送り返す。基底側は要素ごとに上書きされた単一挿入を
/// 呼び直すため、一括挿入された要素は二重に数えられる。
pub struct NaiveCountingSet<E> {
    set: HashSet<E>,
    add_count: usize,
}

impl<E> NaiveCountingSet<E> {
    pub fn new() -> Self {
        NaiveCountingSet::default()
    }

    pub fn add_count(&self) -> usize {
        self.add_count
    }
}

impl<E> Default for NaiveCountingSet<E> {
    fn default() -> Self {
        NaiveCountingSet { set: HashSet::default(), add_count: 0 }
    }
}

impl<E> SetLike<E> for NaiveCountingSet<E>
where
    E: Eq + Hash,
{
    fn len(&self) -> usize {
        self.set.len()
    }

    fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    fn contains(&self, value: &E) -> bool {
        self.set.contains(value)
    }

    fn iter<'a>(&'a self) -> impl Iterator<Item = &'a E>
    where
        E: 'a,
    {
        self.set.iter()
    }

    fn insert(&mut self, value: E) -> bool {
        self.add_count += 1;
        self.set.insert(value)
    }

    fn insert_all<I>(&mut self, values: I) -> bool
    where
        I: IntoIterator<Item = E>,
    {
        let values: Vec<E> = values.into_iter().collect();
        self.add_count += values.len();
        // 基底の一括挿入が上書きされた insert を再入し、二重に数えられる
        insert_each(self, values)
    }

    fn remove(&mut self, value: &E) -> bool {
        self.set.remove(value)
    }

    fn clear(&mut self) {
        self.set.clear()
    }
}
