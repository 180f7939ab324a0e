//! 餐厅数据加载
//!
//! 读取 `[{"Restaurant Name": ..., "Hours": ...}]` 格式的 JSON 文件，
//! 逐条解析营业时间。任一条记录无法解析都视为启动失败。

use std::path::Path;

use shared::models::{Restaurant, RestaurantRecord};

use crate::utils::{AppError, AppResult};

/// Load and parse every restaurant in `path`, keeping file order
pub async fn load_restaurants(path: &Path) -> AppResult<Vec<Restaurant>> {
    let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
        AppError::data_load(format!("Cannot read {}: {}", path.display(), e))
            .with_detail("path", path.display().to_string())
    })?;

    parse_restaurants(&raw).map_err(|e| e.with_detail("path", path.display().to_string()))
}

/// Parse restaurant records from a JSON document
pub fn parse_restaurants(raw: &str) -> AppResult<Vec<Restaurant>> {
    let records: Vec<RestaurantRecord> = serde_json::from_str(raw)
        .map_err(|e| AppError::invalid_record(format!("Invalid restaurant data: {}", e)))?;

    records
        .into_iter()
        .map(|record| {
            let name = record.name.clone();
            let restaurant = Restaurant::try_from(record)
                .map_err(|e| AppError::from(e).with_detail("restaurant", name))?;
            tracing::debug!(
                restaurant = %restaurant.name,
                entries = restaurant.schedule.len(),
                "Parsed opening hours"
            );
            Ok(restaurant)
        })
        .collect()
}
