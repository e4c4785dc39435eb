//! 武器篩選
//!
//! 每個條件都是獨立的相等判斷，彼此以 AND 組合，套用順序不影響結果。
//! 篩選結果為空不是錯誤，由上層在挑選時回報。

use crate::schema::{Proficiency, WeaponCategory, WeaponRecord};
use std::fmt;
use std::str::FromStr;

/// 類別條件
///
/// 無法辨識的類別字串保留為 `Unknown`，不符合任何武器。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    Known(WeaponCategory),
    Unknown(String),
}

/// 篩選條件
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeaponFilter {
    pub category: Option<CategoryFilter>,
    pub proficiency: Option<Proficiency>,
    pub damage_type: Option<String>,
}

impl WeaponFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: WeaponCategory) -> Self {
        self.category = Some(CategoryFilter::Known(category));
        self
    }

    pub fn proficiency(mut self, proficiency: Proficiency) -> Self {
        self.proficiency = Some(proficiency);
        self
    }

    pub fn damage_type(mut self, damage_type: impl Into<String>) -> Self {
        self.damage_type = Some(damage_type.into());
        self
    }

    /// 從原始字串建立條件（例如命令列參數）
    ///
    /// - 空字串視為未指定
    /// - 未知的熟練度忽略此條件
    /// - 未知的類別仍然保留，篩選結果必為空
    pub fn from_args(
        category: Option<&str>,
        proficiency: Option<&str>,
        damage_type: Option<&str>,
    ) -> Self {
        let category = non_empty(category).map(|raw| match WeaponCategory::from_str(raw) {
            Ok(category) => CategoryFilter::Known(category),
            Err(_) => CategoryFilter::Unknown(raw.to_string()),
        });

        let proficiency =
            non_empty(proficiency).and_then(|raw| match Proficiency::from_str(raw) {
                Ok(proficiency) => Some(proficiency),
                Err(_) => {
                    log::warn!("未知的熟練度 `{raw}`，忽略此條件");
                    None
                }
            });

        Self {
            category,
            proficiency,
            damage_type: non_empty(damage_type).map(str::to_string),
        }
    }

    /// 單一武器是否符合所有條件
    pub fn matches(&self, weapon: &WeaponRecord) -> bool {
        let category_ok = match &self.category {
            None => true,
            Some(CategoryFilter::Known(category)) => weapon.category == *category,
            Some(CategoryFilter::Unknown(_)) => false,
        };
        let proficiency_ok = self
            .proficiency
            .is_none_or(|proficiency| weapon.category.proficiency() == proficiency);
        let damage_ok = self
            .damage_type
            .as_deref()
            .is_none_or(|damage_type| weapon.damage.damage_type == damage_type);

        category_ok && proficiency_ok && damage_ok
    }

    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.proficiency.is_none() && self.damage_type.is_none()
    }
}

impl fmt::Display for WeaponFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "無條件");
        }

        let mut parts = Vec::new();
        match &self.category {
            Some(CategoryFilter::Known(category)) => parts.push(format!("category={category}")),
            Some(CategoryFilter::Unknown(raw)) => parts.push(format!("category={raw}")),
            None => {}
        }
        if let Some(proficiency) = self.proficiency {
            parts.push(format!("proficiency={proficiency}"));
        }
        if let Some(damage_type) = &self.damage_type {
            parts.push(format!("damage_type={damage_type}"));
        }
        write!(f, "{}", parts.join(", "))
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}

/// 依條件篩選武器，保留原本順序
pub fn filter_weapons<'a>(
    weapons: &'a [WeaponRecord],
    filter: &WeaponFilter,
) -> Vec<&'a WeaponRecord> {
    weapons.iter().filter(|w| filter.matches(w)).collect()
}
