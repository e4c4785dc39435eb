//! 隨機挑選

use crate::error::{GenerateError, Result};
use rand::seq::IndexedRandom;

/// 從序列中均勻隨機挑選一個元素
///
/// 序列為空時回傳 `NoMatch`，`criteria` 只用於錯誤訊息。
pub fn choose_one<'a, T, R>(items: &'a [T], criteria: &str, rng: &mut R) -> Result<&'a T>
where
    R: rand::Rng + ?Sized,
{
    items.choose(rng).ok_or_else(|| {
        GenerateError::NoMatch {
            criteria: criteria.to_string(),
        }
        .into()
    })
}
