//! Menu Item Types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default image when a menu item is created without one
pub const DEFAULT_MENU_IMAGE: &str =
    "https://images.unsplash.com/photo-1546069901-ba9599a7e63c?w=400";

/// Menu category (closed set)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum MenuCategory {
    Appetizer,
    #[serde(rename = "Main Course")]
    MainCourse,
    Dessert,
    Beverage,
    Special,
}

impl MenuCategory {
    pub const ALL: [MenuCategory; 5] = [
        MenuCategory::Appetizer,
        MenuCategory::MainCourse,
        MenuCategory::Dessert,
        MenuCategory::Beverage,
        MenuCategory::Special,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MenuCategory::Appetizer => "Appetizer",
            MenuCategory::MainCourse => "Main Course",
            MenuCategory::Dessert => "Dessert",
            MenuCategory::Beverage => "Beverage",
            MenuCategory::Special => "Special",
        }
    }
}

impl fmt::Display for MenuCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MenuCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| format!("unknown category: {}", s))
    }
}

/// Create menu item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemCreate {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: MenuCategory,
    pub image: Option<String>,
    pub is_veg: Option<bool>,
    pub is_available: Option<bool>,
    /// Preparation time in minutes
    pub prep_time: Option<i32>,
}

/// Update menu item payload (partial patch)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub category: Option<MenuCategory>,
    pub image: Option<String>,
    pub is_veg: Option<bool>,
    pub is_available: Option<bool>,
    pub prep_time: Option<i32>,
}
