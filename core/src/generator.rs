//! 武器生成器
//!
//! 對外的主要入口：篩選 → 隨機挑選 → 格式化。
//!
//! ```
//! use weapon_core::{WeaponFilter, WeaponGenerator, WeaponCategory};
//!
//! let generator = WeaponGenerator::new();
//! let filter = WeaponFilter::new().category(WeaponCategory::MartialMelee);
//! let weapon = generator.generate(&filter, "en").unwrap();
//! assert_eq!(weapon.category, WeaponCategory::MartialMelee);
//! ```

use crate::config::{DataFiles, GeneratorConfig};
use crate::error::{GenerateError, Result};
use crate::filter::{filter_weapons, WeaponFilter};
use crate::format::{format_legendary, format_weapon, LegendaryWeaponOutput, Lookups, WeaponOutput};
use crate::schema::{LegendaryWeaponRecord, WeaponRecord};
use crate::select::choose_one;
use crate::source::{DataSource, DirectorySource, MemorySource};
use crate::store::ReferenceData;
use std::collections::BTreeSet;
use std::path::Path;

/// D&D 5E 武器生成器
#[derive(Debug)]
pub struct WeaponGenerator {
    data: ReferenceData,
    config: GeneratorConfig,
}

impl Default for WeaponGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl WeaponGenerator {
    /// 使用內建資料
    pub fn new() -> Self {
        Self::with_source(MemorySource::bundled())
    }

    /// 從目錄讀取資料檔
    pub fn from_dir(dir: impl AsRef<Path>) -> Self {
        let config = GeneratorConfig {
            data_dir: Some(dir.as_ref().to_path_buf()),
            ..GeneratorConfig::default()
        };
        Self::from_config(&config)
    }

    /// 使用自訂資料來源與預設文件名稱
    pub fn with_source(source: impl DataSource + 'static) -> Self {
        Self {
            data: ReferenceData::new(Box::new(source), DataFiles::default()),
            config: GeneratorConfig::default(),
        }
    }

    /// 依設定建立
    pub fn from_config(config: &GeneratorConfig) -> Self {
        let source: Box<dyn DataSource> = match &config.data_dir {
            Some(dir) => Box::new(DirectorySource::new(dir)),
            None => Box::new(MemorySource::bundled()),
        };
        Self {
            data: ReferenceData::new(source, config.files.clone()),
            config: config.clone(),
        }
    }

    /// 參考資料表
    pub fn data(&self) -> &ReferenceData {
        &self.data
    }

    pub fn data_source(&self) -> &dyn DataSource {
        self.data.source()
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// 設定中的預設語言
    pub fn language(&self) -> &str {
        &self.config.language
    }

    // ------------------------------------------------------------------------
    // 基礎武器
    // ------------------------------------------------------------------------

    /// 隨機生成一把符合條件的武器
    pub fn generate(&self, filter: &WeaponFilter, language: &str) -> Result<WeaponOutput> {
        self.generate_with(filter, language, &mut rand::rng())
    }

    /// 同 [`generate`](Self::generate)，使用呼叫端提供的亂數來源
    pub fn generate_with<R: rand::Rng + ?Sized>(
        &self,
        filter: &WeaponFilter,
        language: &str,
        rng: &mut R,
    ) -> Result<WeaponOutput> {
        let candidates = filter_weapons(self.data.weapons()?, filter);
        log::debug!("條件 [{filter}] 共 {} 把候選武器", candidates.len());

        let weapon = choose_one(&candidates, &filter.to_string(), rng)?;
        self.format(weapon, language)
    }

    /// 依 ID 取得武器，找不到時回傳 `None`
    pub fn get_weapon_by_id(&self, id: &str, language: &str) -> Result<Option<WeaponOutput>> {
        self.data
            .weapons()?
            .iter()
            .find(|w| w.id == id)
            .map(|w| self.format(w, language))
            .transpose()
    }

    /// 武器表中出現的所有類別（排序、去重）
    pub fn list_categories(&self) -> Result<Vec<String>> {
        Ok(self
            .data
            .weapons()?
            .iter()
            .map(|w| w.category.to_string())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect())
    }

    /// 武器表中實際使用到的傷害類型（排序、去重）
    ///
    /// 不是完整的傷害類型表，只列出有武器使用的類型。
    pub fn list_damage_types(&self) -> Result<Vec<String>> {
        Ok(self
            .data
            .weapons()?
            .iter()
            .map(|w| w.damage.damage_type.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect())
    }

    // ------------------------------------------------------------------------
    // 傳奇武器
    // ------------------------------------------------------------------------

    /// 隨機生成一把傳奇武器
    pub fn generate_legendary(&self, language: &str) -> Result<LegendaryWeaponOutput> {
        self.generate_legendary_with(language, &mut rand::rng())
    }

    /// 同 [`generate_legendary`](Self::generate_legendary)，使用呼叫端提供的亂數來源
    pub fn generate_legendary_with<R: rand::Rng + ?Sized>(
        &self,
        language: &str,
        rng: &mut R,
    ) -> Result<LegendaryWeaponOutput> {
        let legendary = self.data.legendary_weapons()?;
        if legendary.is_empty() {
            return Err(GenerateError::NoLegendaryData.into());
        }

        let weapon = choose_one(legendary, "legendary", rng)?;
        self.format_legendary(weapon, language)
    }

    /// 依 ID 取得傳奇武器，找不到時回傳 `None`
    pub fn get_legendary_by_id(
        &self,
        id: &str,
        language: &str,
    ) -> Result<Option<LegendaryWeaponOutput>> {
        self.data
            .legendary_weapons()?
            .iter()
            .find(|w| w.base.id == id)
            .map(|w| self.format_legendary(w, language))
            .transpose()
    }

    /// 所有傳奇武器 ID，保持資料檔順序
    pub fn list_legendary_ids(&self) -> Result<Vec<String>> {
        Ok(self
            .data
            .legendary_weapons()?
            .iter()
            .map(|w| w.base.id.clone())
            .collect())
    }

    // ------------------------------------------------------------------------
    // 內部
    // ------------------------------------------------------------------------

    fn lookups(&self) -> Result<Lookups<'_>> {
        Ok(Lookups {
            properties: self.data.properties()?,
            damage_types: self.data.damage_types()?,
        })
    }

    fn format(&self, weapon: &WeaponRecord, language: &str) -> Result<WeaponOutput> {
        format_weapon(weapon, self.lookups()?, language)
    }

    fn format_legendary(
        &self,
        weapon: &LegendaryWeaponRecord,
        language: &str,
    ) -> Result<LegendaryWeaponOutput> {
        format_legendary(weapon, self.lookups()?, language)
    }
}
