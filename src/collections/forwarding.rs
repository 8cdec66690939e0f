use std::fmt;

use super::set_like::SetLike;

/// 転送ラッパ
///
/// 全操作を構築時に受け取った集合へそのまま委譲する。ここには独自のロジックを
/// 一切持たせない。内部実装の呼び出し関係に依存しないため、計数などの拡張は
/// このラッパの上に重ねる。
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct ForwardingSet<S> {
    inner: S,
}

impl<S> ForwardingSet<S> {
    pub fn new(inner: S) -> Self {
        ForwardingSet { inner }
    }

    pub fn get_ref(&self) -> &S {
        &self.inner
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S> fmt::Debug for ForwardingSet<S>
where
    S: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.inner.fmt(f)
    }
}

impl<E, S> SetLike<E> for ForwardingSet<S>
where
    S: SetLike<E>,
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
        self.inner.insert(value)
    }

    // 既定実装には乗せず、一括挿入も内部の実装へそのまま転送する
    fn insert_all<I>(&mut self, values: I) -> bool
    where
        I: IntoIterator<Item = E>,
    {
        self.inner.insert_all(values)
    }

    fn remove(&mut self, value: &E) -> bool {
        self.inner.remove(value)
    }

    fn clear(&mut self) {
        self.inner.clear()
    }
}
