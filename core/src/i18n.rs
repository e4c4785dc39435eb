//! 多語言文字
//!
//! 資料檔中每個需要顯示的文字欄位都是「語言代碼 → 字串」的映射，
//! 在格式化時依呼叫端指定的語言取值。

use crate::error::{GenerateError, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// 預設語言
pub const DEFAULT_LANGUAGE: &str = "zh";

/// 內建資料一定提供的語言
pub const BUNDLED_LANGUAGES: &[&str] = &["zh", "en"];

/// 多語言文字欄位
///
/// 有效的語言只有資料中實際出現的鍵，程式碼本身不限定語言列表。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Localized(IndexMap<String, String>);

impl Localized {
    /// 取得指定語言的文字
    pub fn get(&self, language: &str) -> Option<&str> {
        self.0.get(language).map(String::as_str)
    }

    /// 取得指定語言的文字，找不到時回傳 `MissingTranslation`
    ///
    /// `field` 只用於錯誤訊息，例如 `"longsword.name"`。
    pub fn resolve(&self, field: &str, language: &str) -> Result<String> {
        self.get(language).map(str::to_string).ok_or_else(|| {
            GenerateError::MissingTranslation {
                field: field.to_string(),
                language: language.to_string(),
            }
            .into()
        })
    }

    /// 此欄位提供的所有語言
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Localized {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
