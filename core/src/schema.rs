//! 資料檔的結構定義
//!
//! 對應四份 YAML 文件：
//! - `base-weapons.yaml`：`weapons` 列表
//! - `weapon-properties.yaml`：`properties` 映射（屬性 ID → 屬性）
//! - `damage-types.yaml`：`damage_types` 映射（傷害類型 ID → 傷害類型）
//! - `legendary-weapons.yaml`：`weapons` 列表（可省略）

use crate::i18n::Localized;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

pub type WeaponId = String;
pub type PropertyId = String;
pub type DamageTypeId = String;

// ============================================================================
// 武器分類
// ============================================================================

/// 武器類別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum WeaponCategory {
    SimpleMelee,
    MartialMelee,
    SimpleRanged,
    MartialRanged,
}

/// 熟練度（由武器類別前綴推導）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Proficiency {
    /// 簡易武器
    Simple,
    /// 軍用武器
    Martial,
}

impl WeaponCategory {
    /// 此類別所屬的熟練度
    pub fn proficiency(&self) -> Proficiency {
        match self {
            Self::SimpleMelee | Self::SimpleRanged => Proficiency::Simple,
            Self::MartialMelee | Self::MartialRanged => Proficiency::Martial,
        }
    }
}

// ============================================================================
// 武器
// ============================================================================

/// 射程（正常 / 最遠）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Range {
    pub normal: u32,
    pub long: u32,
}

/// 傷害
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Damage {
    /// 骰子表示式，例如 `1d8`
    pub dice: String,
    #[serde(rename = "type")]
    pub damage_type: DamageTypeId,
    /// 雙手使用時的傷害骰
    #[serde(default)]
    pub versatile: Option<String>,
}

/// 基礎武器
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeaponRecord {
    pub id: WeaponId,
    pub name: Localized,
    pub category: WeaponCategory,
    pub damage: Damage,
    pub cost: String,
    pub weight: f64,
    #[serde(default)]
    pub range: Option<Range>,
    #[serde(default)]
    pub thrown_range: Option<Range>,
    #[serde(default)]
    pub properties: Vec<PropertyId>,
    pub description: Localized,
}

// ============================================================================
// 傳奇武器
// ============================================================================

/// 特殊能力
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecialAbility {
    pub id: String,
    pub name: Localized,
    pub description: Localized,
}

/// 傳奇（魔法）武器：基礎武器欄位加上稀有度、魔法加值、充能與特殊能力
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "LegendaryEntry")]
pub struct LegendaryWeaponRecord {
    #[serde(flatten)]
    pub base: WeaponRecord,
    /// 稀有度 ID，保留原始字串，未知值在格式化時視為 `legendary`
    pub rarity: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub magical_bonus: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charges: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_abilities: Option<Vec<SpecialAbility>>,
}

/// 傳奇武器在資料檔中的原始形式
///
/// 欄位逐一列出而不用 `flatten`，讓解析規則與 `base-weapons.yaml` 一致。
#[derive(Deserialize)]
struct LegendaryEntry {
    id: WeaponId,
    name: Localized,
    category: WeaponCategory,
    damage: Damage,
    cost: String,
    weight: f64,
    #[serde(default)]
    range: Option<Range>,
    #[serde(default)]
    thrown_range: Option<Range>,
    #[serde(default)]
    properties: Vec<PropertyId>,
    description: Localized,
    #[serde(default = "default_rarity")]
    rarity: String,
    #[serde(default)]
    magical_bonus: Option<i32>,
    #[serde(default)]
    charges: Option<u32>,
    #[serde(default)]
    special_abilities: Option<Vec<SpecialAbility>>,
}

impl From<LegendaryEntry> for LegendaryWeaponRecord {
    fn from(entry: LegendaryEntry) -> Self {
        Self {
            base: WeaponRecord {
                id: entry.id,
                name: entry.name,
                category: entry.category,
                damage: entry.damage,
                cost: entry.cost,
                weight: entry.weight,
                range: entry.range,
                thrown_range: entry.thrown_range,
                properties: entry.properties,
                description: entry.description,
            },
            rarity: entry.rarity,
            magical_bonus: entry.magical_bonus,
            charges: entry.charges,
            special_abilities: entry.special_abilities,
        }
    }
}

fn default_rarity() -> String {
    "legendary".to_string()
}

// ============================================================================
// 參照表
// ============================================================================

/// 武器屬性
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyRecord {
    pub name: Localized,
    pub description: Localized,
}

/// 傷害類型
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DamageTypeRecord {
    pub name: Localized,
}

// ============================================================================
// 文件外層結構
// ============================================================================

/// `base-weapons.yaml`
#[derive(Debug, Deserialize)]
pub struct WeaponsYaml {
    pub weapons: Vec<WeaponRecord>,
}

/// `weapon-properties.yaml`
#[derive(Debug, Deserialize)]
pub struct PropertiesYaml {
    pub properties: IndexMap<PropertyId, PropertyRecord>,
}

/// `damage-types.yaml`
#[derive(Debug, Deserialize)]
pub struct DamageTypesYaml {
    pub damage_types: IndexMap<DamageTypeId, DamageTypeRecord>,
}

/// `legendary-weapons.yaml`
#[derive(Debug, Deserialize)]
pub struct LegendaryWeaponsYaml {
    pub weapons: Vec<LegendaryWeaponRecord>,
}
