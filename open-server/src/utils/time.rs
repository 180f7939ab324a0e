//! 时间工具函数 - 查询参数解析

use chrono::NaiveDateTime;

use super::{AppError, AppResult};

/// 查询参数 `datetime` 的格式 (不带时区, 按本地时间理解)
pub const QUERY_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// 解析 `YYYY-MM-DDTHH:MM:SS`
pub fn parse_query_datetime(raw: &str) -> AppResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, QUERY_DATETIME_FORMAT).map_err(|_| {
        AppError::invalid_format("Invalid format, please use: YYYY-MM-DDTHH:MM:SS")
            .with_detail("datetime", raw)
    })
}
