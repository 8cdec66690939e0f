mod object_map;

pub use object_map::DynKey;
pub use object_map::ObjectMap;

use std::ops::{Deref, DerefMut};

use thiserror::Error;

/// 文字列専用アクセサの型契約違反
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PropertyTypeError {
    #[error("property key is not a String")]
    KeyNotString,
    #[error("value stored under {key:?} is not a String")]
    ValueNotString { key: String },
}

/// 既定値表つきの文字列プロパティ表（悪い例）
///
/// 公開契約上はキーも値も String だが、Deref 経由で基底の ObjectMap の生の
/// 操作がそのまま見えるため、契約をすり抜けて任意の型のエントリを入れられて
/// しまう。また基底の get は既定値表を知らないので、property と結果が
/// 食い違うことがある。どちらの欠陥もわざと残している。
#[derive(Default)]
pub struct Properties {
    table: ObjectMap,
    defaults: Option<Box<Properties>>,
}

impl Properties {
    pub fn new() -> Self {
        Properties::default()
    }

    /// 既定値表を連結して構築する
    pub fn with_defaults(defaults: Properties) -> Self {
        Properties { table: ObjectMap::default(), defaults: Some(Box::new(defaults)) }
    }

    pub fn set_property(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.table.put(key.into(), value.into());
    }

    /// 文字列専用アクセサ。自表に無ければ既定値表を順に辿る。
    ///
    /// キーが String でない場合、または生の挿入で入った String 以外の値に
    /// 当たった場合は PropertyTypeError を返す。
    pub fn property(&self, key: &dyn DynKey) -> Result<Option<&str>, PropertyTypeError> {
        let text_key = key
            .as_any()
            .downcast_ref::<String>()
            .ok_or(PropertyTypeError::KeyNotString)?;
        if let Some(value) = self.table.get(key) {
            let value = value
                .downcast_ref::<String>()
                .ok_or_else(|| PropertyTypeError::ValueNotString { key: text_key.clone() })?;
            return Ok(Some(value.as_str()));
        }
        match &self.defaults {
            Some(defaults) => defaults.property(key),
            None => Ok(None),
        }
    }
}

// 継承の代用。基底の生の操作面がそのまま公開される（これが危険の源）。
impl Deref for Properties {
    type Target = ObjectMap;

    fn deref(&self) -> &Self::Target {
        &self.table
    }
}

impl DerefMut for Properties {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.table
    }
}
