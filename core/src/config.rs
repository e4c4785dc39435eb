//! 生成器設定
//!
//! TOML 格式，所有欄位皆可省略：
//!
//! ```toml
//! data_dir = "data"
//! language = "en"
//!
//! [files]
//! weapons = "base-weapons.yaml"
//! properties = "weapon-properties.yaml"
//! damage_types = "damage-types.yaml"
//! legendary_weapons = "legendary-weapons.yaml"
//! ```

use crate::error::{LoadError, Result};
use crate::i18n::DEFAULT_LANGUAGE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// 生成器設定
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// 資料目錄，`None` 表示使用內建資料
    pub data_dir: Option<PathBuf>,
    /// 預設輸出語言
    pub language: String,
    pub files: DataFiles,
}

/// 四份資料文件的名稱
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataFiles {
    pub weapons: String,
    pub properties: String,
    pub damage_types: String,
    pub legendary_weapons: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            language: DEFAULT_LANGUAGE.to_string(),
            files: DataFiles::default(),
        }
    }
}

impl Default for DataFiles {
    fn default() -> Self {
        Self {
            weapons: "base-weapons.yaml".to_string(),
            properties: "weapon-properties.yaml".to_string(),
            damage_types: "damage-types.yaml".to_string(),
            legendary_weapons: "legendary-weapons.yaml".to_string(),
        }
    }
}

impl GeneratorConfig {
    /// 從 TOML 字串解析
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| {
            LoadError::ResourceMalformed {
                resource: "config.toml".to_string(),
                reason: e.to_string(),
            }
            .into()
        })
    }

    /// 從 TOML 檔案載入
    ///
    /// `data_dir` 若為相對路徑，會以設定檔所在目錄為基準。
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            let resource = path.display().to_string();
            if e.kind() == std::io::ErrorKind::NotFound {
                LoadError::ResourceNotFound { resource }
            } else {
                LoadError::ReadFailed {
                    resource,
                    reason: e.to_string(),
                }
            }
        })?;

        let mut config = Self::from_toml_str(&content)?;
        if let (Some(dir), Some(base)) = (config.data_dir.as_ref(), path.parent()) {
            if dir.is_relative() {
                config.data_dir = Some(base.join(dir));
            }
        }
        log::debug!("載入設定檔 {}", path.display());
        Ok(config)
    }
}
