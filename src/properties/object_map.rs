use std::any::{Any, TypeId};
use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};

/// 型消去されたキー。Eq と Hash を動的ディスパッチで提供する。
/// 型が異なるキーは値が等しくても別物として扱う。
pub trait DynKey: Any {
    fn dyn_eq(&self, other: &dyn DynKey) -> bool;
    fn dyn_hash(&self, state: &mut dyn Hasher);
    fn as_any(&self) -> &dyn Any;
}

impl<T> DynKey for T
where
    T: Any + Eq + Hash,
{
    fn dyn_eq(&self, other: &dyn DynKey) -> bool {
        other.as_any().downcast_ref::<T>().map_or(false, |other| self == other)
    }

    fn dyn_hash(&self, mut state: &mut dyn Hasher) {
        TypeId::of::<T>().hash(&mut state);
        self.hash(&mut state);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl PartialEq for dyn DynKey {
    fn eq(&self, other: &Self) -> bool {
        self.dyn_eq(other)
    }
}

impl Eq for dyn DynKey {}

impl Hash for dyn DynKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.dyn_hash(state)
    }
}

struct ObjectKey(Box<dyn DynKey>);

impl PartialEq for ObjectKey {
    fn eq(&self, other: &Self) -> bool {
        // Box 自身ではなく中身のキーで比較する
        self.0.as_ref().dyn_eq(other.0.as_ref())
    }
}

impl Eq for ObjectKey {}

impl Hash for ObjectKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Borrow 側の &dyn DynKey と同じハッシュになるよう、中身に委譲する
        self.0.as_ref().dyn_hash(state)
    }
}

impl Borrow<dyn DynKey> for ObjectKey {
    fn borrow(&self) -> &dyn DynKey {
        self.0.as_ref()
    }
}

/// キーにも値にも型の制約を課さない生のテーブル
#[derive(Default)]
pub struct ObjectMap {
    entries: HashMap<ObjectKey, Box<dyn Any>>,
}

impl ObjectMap {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, key: &dyn DynKey) -> bool {
        self.entries.contains_key(key)
    }

    /// 生の取得。このテーブル自身のエントリしか見ない。
    pub fn get(&self, key: &dyn DynKey) -> Option<&dyn Any> {
        self.entries.get(key).map(Box::as_ref)
    }

    /// 生の挿入。どんな型のキー・値でも受け付ける。
    pub fn put<K, V>(&mut self, key: K, value: V) -> Option<Box<dyn Any>>
    where
        K: Any + Eq + Hash,
        V: Any,
    {
        self.entries.insert(ObjectKey(Box::new(key)), Box::new(value))
    }

    pub fn remove(&mut self, key: &dyn DynKey) -> Option<Box<dyn Any>> {
        self.entries.remove(key)
    }

    pub fn clear(&mut self) {
        self.entries.clear()
    }
}
