//! 錯誤處理系統
//!
//! 錯誤分兩大類：
//! - 載入錯誤：資料檔不存在、格式錯誤，屬於致命錯誤
//! - 生成錯誤：篩選後沒有候選武器、缺少翻譯，呼叫端可換條件重試
//!
//! 以 ID 查詢不到武器不算錯誤，以 `Option::None` 回傳。

use thiserror::Error as ThisError;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// 頂層錯誤，包含原始錯誤和 context 鏈
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    contexts: Vec<String>,
}

/// 錯誤種類
#[derive(Debug, ThisError)]
pub enum ErrorKind {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Generate(#[from] GenerateError),
}

/// 資料載入錯誤
#[derive(Debug, ThisError)]
pub enum LoadError {
    #[error("找不到資料檔: {resource}")]
    ResourceNotFound { resource: String },
    #[error("讀取 {resource} 失敗: {reason}")]
    ReadFailed { resource: String, reason: String },
    #[error("{resource} 格式錯誤: {reason}")]
    ResourceMalformed { resource: String, reason: String },
}

/// 生成錯誤
#[derive(Debug, ThisError)]
pub enum GenerateError {
    #[error("沒有找到符合條件的武器 ({criteria})")]
    NoMatch { criteria: String },
    #[error("沒有找到傳奇武器資料")]
    NoLegendaryData,
    #[error("{field} 缺少語言 `{language}` 的翻譯")]
    MissingTranslation { field: String, language: String },
}

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// 是否為「必要資料檔不存在」
    pub fn is_not_found(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::Load(LoadError::ResourceNotFound { .. })
        )
    }

    /// 是否為「沒有候選武器」（包含傳奇武器表為空）
    pub fn is_no_match(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::Generate(GenerateError::NoMatch { .. } | GenerateError::NoLegendaryData)
        )
    }

    /// 添加錯誤上下文，自動記錄呼叫位置
    #[track_caller]
    pub fn context<C: Into<String>>(mut self, context: C) -> Self {
        let loc = std::panic::Location::caller();
        let msg = format!("{} [{}:{}]", context.into(), loc.file(), loc.line());
        self.contexts.push(msg);
        self
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind)?;
        for ctx in &self.contexts {
            write!(f, "\n  {}", ctx)?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {
    // Display 已經輸出 kind，來源直接跳到 kind 的下一層
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(&self.kind)
    }
}

impl<E: Into<ErrorKind>> From<E> for Error {
    fn from(error: E) -> Self {
        Self {
            kind: error.into(),
            contexts: Vec::new(),
        }
    }
}

/// Result 擴展 trait，用於添加錯誤上下文
pub trait Context<T> {
    fn context<C: Into<String>>(self, context: C) -> Result<T>;
}

impl<T> Context<T> for Result<T> {
    #[track_caller]
    fn context<C: Into<String>>(self, context: C) -> Result<T> {
        match self {
            Ok(value) => Ok(value),
            Err(e) => Err(e.context(context)),
        }
    }
}
