//! 服务模块 - 餐厅数据加载与查询

pub mod directory;
pub mod loader;

pub use directory::RestaurantDirectory;
pub use loader::{load_restaurants, parse_restaurants};
