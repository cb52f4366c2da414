//! Menu Item Model

use serde::{Deserialize, Serialize};
use shared::models::menu_item::{DEFAULT_MENU_IMAGE, MenuItemCreate, MenuItemUpdate};
use shared::MenuCategory;
use surrealdb::RecordId;

use super::serde_helpers;

/// Menu item entity
///
/// Wire JSON is camelCase to match the consumer pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    #[serde(
        default,
        with = "serde_helpers::option_record_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<RecordId>,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: MenuCategory,
    pub image: String,
    pub is_veg: bool,
    pub is_available: bool,
    /// Preparation time in minutes
    pub prep_time: i32,
    pub created_at: i64,
    pub updated_at: i64,
}

impl MenuItem {
    /// Build a new entity from a create payload
    pub fn from_create(data: MenuItemCreate, now: i64) -> Self {
        Self {
            id: None,
            name: data.name,
            description: data.description,
            price: data.price,
            category: data.category,
            image: data.image.unwrap_or_else(|| DEFAULT_MENU_IMAGE.to_string()),
            is_veg: data.is_veg.unwrap_or(true),
            is_available: data.is_available.unwrap_or(true),
            prep_time: data.prep_time.unwrap_or(15),
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a partial update in place and bump `updated_at`
    pub fn apply_update(&mut self, data: MenuItemUpdate, now: i64) {
        if let Some(name) = data.name {
            self.name = name;
        }
        if let Some(description) = data.description {
            self.description = description;
        }
        if let Some(price) = data.price {
            self.price = price;
        }
        if let Some(category) = data.category {
            self.category = category;
        }
        if let Some(image) = data.image {
            self.image = image;
        }
        if let Some(is_veg) = data.is_veg {
            self.is_veg = is_veg;
        }
        if let Some(is_available) = data.is_available {
            self.is_available = is_available;
        }
        if let Some(prep_time) = data.prep_time {
            self.prep_time = prep_time;
        }
        self.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_payload() -> MenuItemCreate {
        MenuItemCreate {
            name: "Paneer Tikka".into(),
            description: "Char-grilled cottage cheese".into(),
            price: 12.5,
            category: MenuCategory::Appetizer,
            image: None,
            is_veg: None,
            is_available: None,
            prep_time: None,
        }
    }

    #[test]
    fn from_create_fills_defaults() {
        let item = MenuItem::from_create(create_payload(), 1_000);
        assert_eq!(item.image, DEFAULT_MENU_IMAGE);
        assert!(item.is_veg);
        assert!(item.is_available);
        assert_eq!(item.prep_time, 15);
        assert_eq!(item.created_at, 1_000);
        assert_eq!(item.updated_at, 1_000);
    }

    #[test]
    fn apply_update_is_partial() {
        let mut item = MenuItem::from_create(create_payload(), 1_000);
        item.apply_update(
            MenuItemUpdate {
                price: Some(14.0),
                is_available: Some(false),
                ..Default::default()
            },
            2_000,
        );
        assert_eq!(item.price, 14.0);
        assert!(!item.is_available);
        // Untouched fields survive
        assert_eq!(item.name, "Paneer Tikka");
        assert_eq!(item.created_at, 1_000);
        assert_eq!(item.updated_at, 2_000);
    }
}
