//! 資料來源
//!
//! 生成器只透過 [`DataSource`] 讀取原始文件，不關心文件放在哪裡。

use crate::error::{LoadError, Result};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// 內建參考資料（編譯進函式庫）
pub const BUNDLED_WEAPONS: &str = include_str!("../data/base-weapons.yaml");
pub const BUNDLED_PROPERTIES: &str = include_str!("../data/weapon-properties.yaml");
pub const BUNDLED_DAMAGE_TYPES: &str = include_str!("../data/damage-types.yaml");
pub const BUNDLED_LEGENDARY: &str = include_str!("../data/legendary-weapons.yaml");

/// 原始文件的提供者
pub trait DataSource: Send + Sync {
    /// 讀取名為 `name` 的文件內容，文件不存在時回傳 `ResourceNotFound`
    fn read(&self, name: &str) -> Result<String>;

    /// 用於日誌的描述
    fn describe(&self) -> String;
}

/// 從目錄讀取文件
#[derive(Debug, Clone)]
pub struct DirectorySource {
    dir: PathBuf,
}

impl DirectorySource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl DataSource for DirectorySource {
    fn read(&self, name: &str) -> Result<String> {
        let path = self.dir.join(name);
        fs::read_to_string(&path).map_err(|e| {
            let resource = path.display().to_string();
            if e.kind() == std::io::ErrorKind::NotFound {
                LoadError::ResourceNotFound { resource }.into()
            } else {
                LoadError::ReadFailed {
                    resource,
                    reason: e.to_string(),
                }
                .into()
            }
        })
    }

    fn describe(&self) -> String {
        format!("目錄 {}", self.dir.display())
    }
}

/// 記憶體中的文件（名稱 → 內容）
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    documents: HashMap<String, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// 內建的參考資料，使用預設文件名稱
    pub fn bundled() -> Self {
        Self::new()
            .with("base-weapons.yaml", BUNDLED_WEAPONS)
            .with("weapon-properties.yaml", BUNDLED_PROPERTIES)
            .with("damage-types.yaml", BUNDLED_DAMAGE_TYPES)
            .with("legendary-weapons.yaml", BUNDLED_LEGENDARY)
    }

    /// 加入或取代一份文件
    pub fn with(mut self, name: impl Into<String>, content: impl Into<String>) -> Self {
        self.documents.insert(name.into(), content.into());
        self
    }

    /// 移除一份文件
    pub fn without(mut self, name: &str) -> Self {
        self.documents.remove(name);
        self
    }
}

impl DataSource for MemorySource {
    fn read(&self, name: &str) -> Result<String> {
        self.documents.get(name).cloned().ok_or_else(|| {
            LoadError::ResourceNotFound {
                resource: name.to_string(),
            }
            .into()
        })
    }

    fn describe(&self) -> String {
        format!("記憶體（{} 份文件）", self.documents.len())
    }
}
