//! CredBoard 前端应用
//!
//! 单页凭据看板，采用单一状态容器 + 纯转移函数的架构：
//! - `model`: 领域模型（凭据记录与调色板）
//! - `state`: 看板状态与转移函数（核心逻辑，原生可测）
//! - `storage`: LocalStorage 持久化协作方
//! - `components`: UI 组件层

pub mod model;
pub mod state;
pub mod storage;

mod components {
    pub mod board;
    mod icons;
}

use crate::components::board::CredentialBoard;

use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! { <CredentialBoard /> }
}
