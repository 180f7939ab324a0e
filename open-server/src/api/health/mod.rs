//! 健康检查路由
//!
//! # 响应示例
//!
//! ```json
//! {
//!   "status": "ok",
//!   "version": "0.1.0",
//!   "restaurants": 51,
//!   "schedule_entries": 312,
//!   "uptime_seconds": 42
//! }
//! ```

use axum::{Json, Router, extract::State, routing::get};
use serde::{Deserialize, Serialize};

use crate::core::ServerState;

/// 健康检查路由 - 公共路由
pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

/// 健康检查响应
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// 状态 (ok)
    pub status: String,
    /// 版本号
    pub version: String,
    /// 已加载餐厅数
    pub restaurants: usize,
    /// 解析出的营业时间条目总数
    pub schedule_entries: usize,
    /// 运行时间 (秒)
    pub uptime_seconds: u64,
}

pub async fn health(State(state): State<ServerState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        restaurants: state.directory.len(),
        schedule_entries: state.directory.entry_count(),
        uptime_seconds: state.uptime_seconds(),
    })
}
