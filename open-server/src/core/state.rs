use std::sync::Arc;
use std::time::Instant;

use crate::core::{Config, Result};
use crate::services::{RestaurantDirectory, load_restaurants};

/// 服务器状态 - 所有请求共享的只读快照
///
/// 启动时构建一次，之后不再修改。使用 Arc 实现浅拷贝，
/// 每个请求 clone 的成本极低，读取无需加锁。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Arc<Config> | 配置项 (不可变) |
/// | directory | Arc<RestaurantDirectory> | 餐厅及其营业时间 |
/// | started_at | Instant | 启动时间 (用于 uptime) |
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Arc<Config>,
    pub directory: Arc<RestaurantDirectory>,
    pub started_at: Instant,
}

impl ServerState {
    pub fn new(config: Config, directory: RestaurantDirectory) -> Self {
        Self {
            config: Arc::new(config),
            directory: Arc::new(directory),
            started_at: Instant::now(),
        }
    }

    /// 从配置的数据文件加载餐厅并构建状态
    pub async fn initialize(config: &Config) -> Result<Self> {
        let restaurants = load_restaurants(&config.restaurants_file).await?;
        let directory = RestaurantDirectory::new(restaurants);

        tracing::info!(
            file = %config.restaurants_file.display(),
            restaurants = directory.len(),
            entries = directory.entry_count(),
            "Restaurant directory loaded"
        );

        Ok(Self::new(config.clone(), directory))
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
