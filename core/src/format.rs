//! 輸出格式化
//!
//! 將內部資料記錄投影成指定語言的扁平輸出結構，並解析對屬性表、傷害類型表的參照。
//! 序列化後的欄位名稱與資料檔一致，選填欄位僅在有值時輸出。
//!
//! 參照解析一律不視為錯誤：
//! - 未知的屬性 ID 直接略過
//! - 未知的傷害類型 ID，或傷害類型缺少該語言名稱時，以原始 ID 作為顯示名稱
//! - 未知的稀有度 ID 視為 `legendary`

use crate::error::Result;
use crate::rarity::Rarity;
use crate::schema::{
    DamageTypeId, DamageTypeRecord, LegendaryWeaponRecord, PropertyId, PropertyRecord, Range,
    WeaponCategory, WeaponRecord,
};
use indexmap::IndexMap;
use serde::{Serialize, Serializer};

/// 格式化時需要的參照表
#[derive(Debug, Clone, Copy)]
pub struct Lookups<'a> {
    pub properties: &'a IndexMap<PropertyId, PropertyRecord>,
    pub damage_types: &'a IndexMap<DamageTypeId, DamageTypeRecord>,
}

/// 傷害
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DamageOutput {
    pub dice: String,
    #[serde(rename = "type")]
    pub damage_type: String,
    pub type_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub versatile: Option<String>,
}

/// 武器屬性
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyOutput {
    pub id: String,
    pub name: String,
    pub description: String,
}

/// 特殊能力
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AbilityOutput {
    pub id: String,
    pub name: String,
    pub description: String,
}

pub type RangeOutput = Range;

/// 基礎武器輸出
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeaponOutput {
    pub id: String,
    pub name: String,
    pub category: WeaponCategory,
    pub damage: DamageOutput,
    pub cost: String,
    #[serde(serialize_with = "serialize_weight")]
    pub weight: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<RangeOutput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thrown_range: Option<RangeOutput>,
    pub properties: Vec<PropertyOutput>,
    pub description: String,
}

/// 傳奇武器輸出
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendaryWeaponOutput {
    pub id: String,
    pub name: String,
    pub category: WeaponCategory,
    pub rarity: String,
    pub rarity_name: String,
    pub damage: DamageOutput,
    pub cost: String,
    #[serde(serialize_with = "serialize_weight")]
    pub weight: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<RangeOutput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thrown_range: Option<RangeOutput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub magical_bonus: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charges: Option<u32>,
    pub properties: Vec<PropertyOutput>,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_abilities: Option<Vec<AbilityOutput>>,
}

/// 格式化基礎武器
pub fn format_weapon(
    weapon: &WeaponRecord,
    lookups: Lookups<'_>,
    language: &str,
) -> Result<WeaponOutput> {
    Ok(WeaponOutput {
        id: weapon.id.clone(),
        name: weapon.name.resolve(&format!("{}.name", weapon.id), language)?,
        category: weapon.category,
        damage: format_damage(weapon, lookups, language),
        cost: weapon.cost.clone(),
        weight: weapon.weight,
        range: weapon.range,
        thrown_range: weapon.thrown_range,
        properties: format_properties(weapon, lookups, language)?,
        description: weapon
            .description
            .resolve(&format!("{}.description", weapon.id), language)?,
    })
}

/// 格式化傳奇武器
pub fn format_legendary(
    legendary: &LegendaryWeaponRecord,
    lookups: Lookups<'_>,
    language: &str,
) -> Result<LegendaryWeaponOutput> {
    let WeaponOutput {
        id,
        name,
        category,
        damage,
        cost,
        weight,
        range,
        thrown_range,
        properties,
        description,
    } = format_weapon(&legendary.base, lookups, language)?;

    let rarity = Rarity::from_id(&legendary.rarity).unwrap_or_else(|| {
        log::warn!(
            "{}: 未知的稀有度 `{}`，以 legendary 顯示",
            legendary.base.id,
            legendary.rarity
        );
        Rarity::Legendary
    });

    let special_abilities = legendary
        .special_abilities
        .as_ref()
        .map(|abilities| {
            abilities
                .iter()
                .map(|ability| -> Result<AbilityOutput> {
                    let field = format!("{}.{}", id, ability.id);
                    Ok(AbilityOutput {
                        id: ability.id.clone(),
                        name: ability.name.resolve(&format!("{field}.name"), language)?,
                        description: ability
                            .description
                            .resolve(&format!("{field}.description"), language)?,
                    })
                })
                .collect::<Result<Vec<_>>>()
        })
        .transpose()?;

    Ok(LegendaryWeaponOutput {
        rarity: legendary.rarity.clone(),
        rarity_name: rarity.label(language)?.to_string(),
        id,
        name,
        category,
        damage,
        cost,
        weight,
        range,
        thrown_range,
        magical_bonus: legendary.magical_bonus,
        charges: legendary.charges,
        properties,
        description,
        special_abilities,
    })
}

fn format_damage(weapon: &WeaponRecord, lookups: Lookups<'_>, language: &str) -> DamageOutput {
    let type_id = &weapon.damage.damage_type;
    let type_name = match lookups.damage_types.get(type_id) {
        Some(record) => match record.name.get(language) {
            Some(name) => name.to_string(),
            None => {
                log::warn!(
                    "{}: 傷害類型 `{type_id}` 缺少 `{language}` 名稱",
                    weapon.id
                );
                type_id.clone()
            }
        },
        None => {
            log::warn!("{}: 未知的傷害類型 `{type_id}`", weapon.id);
            type_id.clone()
        }
    };

    DamageOutput {
        dice: weapon.damage.dice.clone(),
        damage_type: type_id.clone(),
        type_name,
        versatile: weapon.damage.versatile.clone(),
    }
}

/// 整數重量輸出為整數，其餘保留小數
fn serialize_weight<S: Serializer>(
    weight: &f64,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    if weight.fract() == 0.0 && weight.abs() < i64::MAX as f64 {
        serializer.serialize_i64(*weight as i64)
    } else {
        serializer.serialize_f64(*weight)
    }
}

fn format_properties(
    weapon: &WeaponRecord,
    lookups: Lookups<'_>,
    language: &str,
) -> Result<Vec<PropertyOutput>> {
    weapon
        .properties
        .iter()
        .filter_map(|id| lookups.properties.get(id).map(|record| (id, record)))
        .map(|(id, record)| -> Result<PropertyOutput> {
            Ok(PropertyOutput {
                id: id.clone(),
                name: record.name.resolve(&format!("properties.{id}.name"), language)?,
                description: record
                    .description
                    .resolve(&format!("properties.{id}.description"), language)?,
            })
        })
        .collect()
}
