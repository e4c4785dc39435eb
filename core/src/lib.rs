//! D&D 5E 隨機武器生成函式庫
//!
//! 此函式庫從靜態資料表隨機生成武器，包括：
//! - 基礎武器：依類別、熟練度、傷害類型篩選後隨機挑選
//! - 傳奇武器：附帶稀有度、魔法加值、充能與特殊能力
//! - 多語言輸出：所有顯示文字依指定語言（`zh` / `en`）解析
//!
//! 資料表在第一次使用時載入並快取於生成器實例中。

pub mod config;
pub mod error;
pub mod filter;
pub mod format;
pub mod generator;
pub mod i18n;
pub mod rarity;
pub mod schema;
pub mod select;
pub mod source;
pub mod store;

// 重新導出常用類型
pub use config::{DataFiles, GeneratorConfig};
pub use error::{Error, ErrorKind, GenerateError, LoadError, Result};
pub use filter::{CategoryFilter, WeaponFilter};
pub use format::{
    AbilityOutput, DamageOutput, LegendaryWeaponOutput, PropertyOutput, RangeOutput, WeaponOutput,
};
pub use generator::WeaponGenerator;
pub use i18n::{Localized, DEFAULT_LANGUAGE};
pub use rarity::Rarity;
pub use schema::{Proficiency, WeaponCategory};
pub use source::{DataSource, DirectorySource, MemorySource};
