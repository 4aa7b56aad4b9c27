//! 领域模型模块
//!
//! 定义凭据记录与固定调色板，负责：
//! - 与既有 LocalStorage 数据兼容的序列化字段名
//! - 记录创建时一次性求值的派生字段（首字母、颜色标签）

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 固定的五色调色板，新记录创建时从中均匀随机取一色
pub const PALETTE: [ColorTag; 5] = [
    ColorTag::Yellow,
    ColorTag::Green,
    ColorTag::Orange,
    ColorTag::Brown,
    ColorTag::Blue,
];

/// 记录的颜色标签
///
/// 序列化为原有数据格式中的小写颜色名（`classAdd` 字段）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTag {
    Yellow,
    Green,
    Orange,
    Brown,
    Blue,
}

impl ColorTag {
    /// 从调色板中均匀随机取色
    ///
    /// 复用 UUID v4 的随机源，避免在 WASM 目标上额外引入 RNG crate。
    pub fn random() -> Self {
        let roll = (Uuid::new_v4().as_u128() % PALETTE.len() as u128) as usize;
        PALETTE[roll]
    }

    /// 首字母头像对应的背景样式类
    pub fn avatar_class(&self) -> &'static str {
        match self {
            ColorTag::Yellow => "bg-yellow-400 text-yellow-950",
            ColorTag::Green => "bg-green-500 text-green-950",
            ColorTag::Orange => "bg-orange-400 text-orange-950",
            ColorTag::Brown => "bg-amber-700 text-amber-50",
            ColorTag::Blue => "bg-blue-500 text-blue-50",
        }
    }
}

/// 一条凭据记录
///
/// 字段按原有 LocalStorage 数据格式序列化，旧数据可以直接读入。
/// `initial` 与 `color_tag` 在创建时缓存，之后不再重算。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CredentialRecord {
    /// 唯一标识，仅用于列表身份（删除、渲染 key）
    pub id: String,
    /// 域名首字母（大写），域名为空时为空字符串
    #[serde(rename = "initialValue")]
    pub initial: String,
    /// 网站域名，按用户输入原样保存，不做 URL 校验
    #[serde(rename = "webdomainName")]
    pub domain: String,
    /// 用户名，允许为空
    #[serde(rename = "userName")]
    pub username: String,
    /// 密码，明文保存
    pub password: String,
    /// 创建时随机分配的颜色标签
    #[serde(rename = "classAdd")]
    pub color_tag: ColorTag,
}

impl CredentialRecord {
    /// 由输入缓冲创建新记录
    pub fn new(domain: String, username: String, password: String) -> Self {
        let initial = domain
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_default();

        Self {
            id: Uuid::new_v4().to_string(),
            initial,
            domain,
            username,
            password,
            color_tag: ColorTag::random(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_is_uppercased_first_char() {
        let record = CredentialRecord::new("github.com".into(), String::new(), String::new());
        assert_eq!(record.initial, "G");
    }

    #[test]
    fn empty_domain_yields_empty_initial() {
        let record = CredentialRecord::new(String::new(), "bob".into(), "p2".into());
        assert_eq!(record.initial, "");
    }

    #[test]
    fn random_color_always_in_palette() {
        for _ in 0..200 {
            assert!(PALETTE.contains(&ColorTag::random()));
        }
    }

    #[test]
    fn serializes_with_legacy_field_names() {
        let mut record =
            CredentialRecord::new("example.com".into(), "alice".into(), "p1".into());
        record.color_tag = ColorTag::Blue;

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["webdomainName"], "example.com");
        assert_eq!(json["userName"], "alice");
        assert_eq!(json["password"], "p1");
        assert_eq!(json["initialValue"], "E");
        assert_eq!(json["classAdd"], "blue");
        assert!(json["id"].is_string());
    }

    #[test]
    fn list_survives_serde_round_trip() {
        // 模拟浏览器重启：整表序列化后再读回，应逐字段相等
        let list = vec![
            CredentialRecord::new("example.com".into(), "alice".into(), "p1".into()),
            CredentialRecord::new(String::new(), "bob".into(), "p2".into()),
        ];

        let json = serde_json::to_string(&list).unwrap();
        let reloaded: Vec<CredentialRecord> = serde_json::from_str(&json).unwrap();
        assert_eq!(reloaded, list);
    }
}
