//! Restaurant directory - 启动时构建的只读餐厅集合

use chrono::NaiveDateTime;
use shared::models::Restaurant;

/// Restaurants in source-file order
#[derive(Debug, Default)]
pub struct RestaurantDirectory {
    restaurants: Vec<Restaurant>,
}

impl RestaurantDirectory {
    pub fn new(restaurants: Vec<Restaurant>) -> Self {
        Self { restaurants }
    }

    pub fn restaurants(&self) -> &[Restaurant] {
        &self.restaurants
    }

    pub fn len(&self) -> usize {
        self.restaurants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.restaurants.is_empty()
    }

    /// Total schedule entries across all restaurants
    pub fn entry_count(&self) -> usize {
        self.restaurants.iter().map(|r| r.schedule.len()).sum()
    }

    /// First restaurant with exactly this name
    pub fn find(&self, name: &str) -> Option<&Restaurant> {
        self.restaurants.iter().find(|r| r.name == name)
    }

    /// Names of the restaurants open at `at`, in source order
    pub fn open_at(&self, at: NaiveDateTime) -> Vec<&str> {
        self.restaurants
            .iter()
            .filter(|r| r.is_open_at(at))
            .map(|r| r.name.as_str())
            .collect()
    }
}
