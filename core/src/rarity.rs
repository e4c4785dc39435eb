//! 稀有度
//!
//! 固定的五級稀有度與其顯示名稱，不從資料檔載入。

use crate::error::{GenerateError, Result};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// 物品稀有度
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    VeryRare,
    Legendary,
}

/// 稀有度顯示名稱表：(稀有度, 語言, 名稱)
const RARITY_LABELS: &[(Rarity, &str, &str)] = &[
    (Rarity::Common, "zh", "常见"),
    (Rarity::Common, "en", "Common"),
    (Rarity::Uncommon, "zh", "少见"),
    (Rarity::Uncommon, "en", "Uncommon"),
    (Rarity::Rare, "zh", "稀有"),
    (Rarity::Rare, "en", "Rare"),
    (Rarity::VeryRare, "zh", "非常稀有"),
    (Rarity::VeryRare, "en", "Very Rare"),
    (Rarity::Legendary, "zh", "传奇"),
    (Rarity::Legendary, "en", "Legendary"),
];

impl Rarity {
    /// 由資料檔中的 ID 取得稀有度，未知 ID 回傳 `None`
    pub fn from_id(id: &str) -> Option<Self> {
        id.parse().ok()
    }

    /// 指定語言的顯示名稱
    pub fn label(&self, language: &str) -> Result<&'static str> {
        RARITY_LABELS
            .iter()
            .find(|(rarity, lang, _)| rarity == self && *lang == language)
            .map(|(_, _, label)| *label)
            .ok_or_else(|| {
                GenerateError::MissingTranslation {
                    field: format!("rarity.{self}"),
                    language: language.to_string(),
                }
                .into()
            })
    }
}
