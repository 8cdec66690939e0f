use std::fmt;

use super::count::Count;
use super::forwarding::ForwardingSet;
use super::set_like::SetLike;

/// 計数デコレータ
///
/// 転送ラッパに「挿入操作へ渡された要素数」の累計を足したもの。変更系の二操作
/// だけを上書きし、残りは転送ラッパへ委譲する。一括挿入は渡された入力の大きさ
/// で数えるため、内部の集合が一括挿入をどう実現していても数え方は変わらない。
/// カウンタは削除では減らず、幅の最大値で飽和する。
#[derive(Clone)]
pub struct InstrumentedSet<S, C = usize>
where
    C: Count,
{
    inner: ForwardingSet<S>,
    add_count: C,
}

impl<S, C> InstrumentedSet<S, C>
where
    C: Count,
{
    pub fn new(backing: S) -> Self {
        InstrumentedSet { inner: ForwardingSet::new(backing), add_count: C::ZERO }
    }

    pub fn add_count(&self) -> C {
        self.add_count
    }

    pub fn get_ref(&self) -> &S {
        self.inner.get_ref()
    }
}

impl<S, C> Default for InstrumentedSet<S, C>
where
    S: Default,
    C: Count,
{
    fn default() -> Self {
        InstrumentedSet::new(S::default())
    }
}

impl<S, C> fmt::Debug for InstrumentedSet<S, C>
where
    S: fmt::Debug,
    C: Count + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InstrumentedSet")
            .field("add_count", &self.add_count)
            .field("set", &self.inner)
            .finish()
    }
}

impl<E, S, C> SetLike<E> for InstrumentedSet<S, C>
where
    S: SetLike<E>,
    C: Count,
{
    fn len(&self) -> usize {
        self.inner.len()
    }

    fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    fn contains(&self, value: &E) -> bool {
        self.inner.contains(value)
    }

    fn iter<'a>(&'a self) -> impl Iterator<Item = &'a E>
    where
        E: 'a,
    {
        self.inner.iter()
    }

    fn insert(&mut self, value: E) -> bool {
        self.add_count = self.add_count.saturating_add(C::one());
        self.inner.insert(value)
    }

    fn insert_all<I>(&mut self, values: I) -> bool
    where
        I: IntoIterator<Item = E>,
    {
        let values: Vec<E> = values.into_iter().collect();
        // 実際に新規だった数ではなく、渡された数で数える
        self.add_count = self.add_count.saturating_add(C::saturating_from_usize(values.len()));
        self.inner.insert_all(values)
    }

    fn remove(&mut self, value: &E) -> bool {
        self.inner.remove(value)
    }

    fn clear(&mut self) {
        self.inner.clear()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeSet, HashSet};

    use proptest::prelude::*;

    use super::InstrumentedSet;
    use crate::collections::SetLike;

    #[test]
    fn bulk_insert_counts_presented_elements() {
        let mut set: InstrumentedSet<HashSet<&str>> = InstrumentedSet::default();
        set.insert_all(["Snap", "Crakle", "Pop"]);
        assert_eq!(set.add_count(), 3);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn duplicates_still_count_as_presented() {
        let mut set: InstrumentedSet<HashSet<u32>> = InstrumentedSet::default();
        set.insert(1);
        set.insert(1);
        set.insert_all([1, 2, 2]);
        assert_eq!(set.add_count(), 5);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn removal_never_decreases_the_count() {
        let mut set: InstrumentedSet<HashSet<u32>> = InstrumentedSet::default();
        set.insert_all([1, 2, 3]);
        set.remove(&1);
        set.remove(&2);
        set.clear();
        assert_eq!(set.add_count(), 3);
        assert!(set.is_empty());
    }

    #[test]
    fn queries_never_move_the_counter() {
        let mut set: InstrumentedSet<HashSet<u32>> = InstrumentedSet::default();
        set.insert_all([1, 2, 3]);
        for _ in 0..3 {
            assert_eq!(set.len(), 3);
            assert!(set.contains(&2));
            assert_eq!(set.iter().count(), 3);
        }
        assert_eq!(set.add_count(), 3);
    }

    #[test]
    fn narrow_counter_saturates() {
        let mut set: InstrumentedSet<HashSet<u32>, u8> = InstrumentedSet::default();
        set.insert_all(0..300u32);
        assert_eq!(set.add_count(), u8::MAX);
        assert_eq!(set.len(), 300);
    }

    #[derive(Clone, Debug)]
    enum Op {
        One(u16),
        Bulk(Vec<u16>),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            any::<u16>().prop_map(Op::One),
            proptest::collection::vec(any::<u16>(), 0..8).prop_map(Op::Bulk),
        ]
    }

    proptest! {
        // どの内部実装でも add_count は「単一挿入の回数 + 各一括挿入の入力の大きさ」
        #[test]
        fn add_count_is_independent_of_the_backing_set(ops in proptest::collection::vec(op(), 0..32)) {
            let mut hashed: InstrumentedSet<HashSet<u16>> = InstrumentedSet::default();
            let mut ordered: InstrumentedSet<BTreeSet<u16>> = InstrumentedSet::default();
            let mut expected = 0usize;
            for op in &ops {
                match op {
                    Op::One(value) => {
                        hashed.insert(*value);
                        ordered.insert(*value);
                        expected += 1;
                    }
                    Op::Bulk(values) => {
                        hashed.insert_all(values.clone());
                        ordered.insert_all(values.clone());
                        expected += values.len();
                    }
                }
            }
            prop_assert_eq!(hashed.add_count(), expected);
            prop_assert_eq!(ordered.add_count(), expected);
            prop_assert_eq!(hashed.len(), ordered.len());
        }
    }
}
