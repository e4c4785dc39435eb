//! 參考資料表
//!
//! 四張表各自在第一次存取時載入並快取，之後不再變動。
//! 以 `OnceCell` 保護首次載入，多執行緒同時存取也只會解析一次；
//! 載入失敗不會被快取，下次存取會重試。

use crate::config::DataFiles;
use crate::error::{Context, LoadError, Result};
use crate::schema::{
    DamageTypeId, DamageTypeRecord, DamageTypesYaml, LegendaryWeaponRecord, LegendaryWeaponsYaml,
    PropertiesYaml, PropertyId, PropertyRecord, WeaponRecord, WeaponsYaml,
};
use crate::source::DataSource;
use indexmap::IndexMap;
use once_cell::sync::OnceCell;
use serde::de::DeserializeOwned;

/// 參考資料表
pub struct ReferenceData {
    source: Box<dyn DataSource>,
    files: DataFiles,
    weapons: OnceCell<Vec<WeaponRecord>>,
    properties: OnceCell<IndexMap<PropertyId, PropertyRecord>>,
    damage_types: OnceCell<IndexMap<DamageTypeId, DamageTypeRecord>>,
    legendary_weapons: OnceCell<Vec<LegendaryWeaponRecord>>,
}

impl ReferenceData {
    pub fn new(source: Box<dyn DataSource>, files: DataFiles) -> Self {
        Self {
            source,
            files,
            weapons: OnceCell::new(),
            properties: OnceCell::new(),
            damage_types: OnceCell::new(),
            legendary_weapons: OnceCell::new(),
        }
    }

    pub fn source(&self) -> &dyn DataSource {
        self.source.as_ref()
    }

    /// 所有基礎武器
    pub fn weapons(&self) -> Result<&[WeaponRecord]> {
        self.weapons
            .get_or_try_init(|| -> Result<_> {
                let doc: WeaponsYaml = self.load(&self.files.weapons)?;
                Ok(doc.weapons)
            })
            .map(Vec::as_slice)
    }

    /// 所有武器屬性
    pub fn properties(&self) -> Result<&IndexMap<PropertyId, PropertyRecord>> {
        self.properties.get_or_try_init(|| -> Result<_> {
            let doc: PropertiesYaml = self.load(&self.files.properties)?;
            Ok(doc.properties)
        })
    }

    /// 所有傷害類型
    pub fn damage_types(&self) -> Result<&IndexMap<DamageTypeId, DamageTypeRecord>> {
        self.damage_types.get_or_try_init(|| -> Result<_> {
            let doc: DamageTypesYaml = self.load(&self.files.damage_types)?;
            Ok(doc.damage_types)
        })
    }

    /// 所有傳奇武器，資料檔不存在時為空
    pub fn legendary_weapons(&self) -> Result<&[LegendaryWeaponRecord]> {
        self.legendary_weapons
            .get_or_try_init(|| -> Result<_> {
                match self.load::<LegendaryWeaponsYaml>(&self.files.legendary_weapons) {
                    Ok(doc) => Ok(doc.weapons),
                    Err(e) if e.is_not_found() => {
                        log::debug!(
                            "{} 不存在，傳奇武器表為空",
                            self.files.legendary_weapons
                        );
                        Ok(Vec::new())
                    }
                    Err(e) => Err(e),
                }
            })
            .map(Vec::as_slice)
    }

    /// 讀取並解析一份 YAML 文件
    ///
    /// 缺少頂層鍵也算格式錯誤（由 serde 的 missing field 回報）。
    fn load<T: DeserializeOwned>(&self, name: &str) -> Result<T> {
        let content = self
            .source
            .read(name)
            .context(format!("從{}載入", self.source.describe()))?;

        let parsed = serde_yaml_ng::from_str(&content).map_err(|e| LoadError::ResourceMalformed {
            resource: name.to_string(),
            reason: e.to_string(),
        })?;

        log::debug!("已載入 {name}（來源：{}）", self.source.describe());
        Ok(parsed)
    }
}

impl std::fmt::Debug for ReferenceData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReferenceData")
            .field("source", &self.source.describe())
            .field("files", &self.files)
            .field("weapons_loaded", &self.weapons.get().is_some())
            .field("properties_loaded", &self.properties.get().is_some())
            .field("damage_types_loaded", &self.damage_types.get().is_some())
            .field(
                "legendary_weapons_loaded",
                &self.legendary_weapons.get().is_some(),
            )
            .finish()
    }
}
