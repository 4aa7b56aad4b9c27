//! LocalStorage 持久化模块
//!
//! 浏览器 LocalStorage 的薄封装：固定键名下整表读、整表写。
//! 序列化格式见 `model::CredentialRecord` 的字段重命名。

use gloo_storage::errors::StorageError;
use gloo_storage::{LocalStorage, Storage};
use leptos::logging;

use crate::model::CredentialRecord;

/// 持久化使用的固定存储键
pub const STORAGE_KEY: &str = "passwords";

/// 读取持久化的记录列表
///
/// 键不存在时返回空列表；数据无法解码时同样回退为空列表并在
/// 控制台告警，不向上传播错误。
pub fn load_records() -> Vec<CredentialRecord> {
    match LocalStorage::get(STORAGE_KEY) {
        Ok(records) => records,
        Err(StorageError::KeyNotFound(_)) => Vec::new(),
        Err(err) => {
            logging::warn!("读取存储的凭据失败，回退为空列表: {err}");
            Vec::new()
        }
    }
}

/// 将完整记录列表写入 LocalStorage
///
/// 每次列表变更整表覆盖，包括列表被删空的情况（覆盖为空数组，
/// 不在存储里留下过期数据）。写入失败由调用方决定如何提示。
pub fn save_records(records: &[CredentialRecord]) -> Result<(), StorageError> {
    LocalStorage::set(STORAGE_KEY, records)
}
