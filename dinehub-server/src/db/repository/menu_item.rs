//! Menu Item Repository

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult, parse_record_id};
use crate::db::models::MenuItem;
use shared::models::menu_item::{MenuItemCreate, MenuItemUpdate};
use shared::MenuCategory;
use shared::util::now_millis;

const MENU_ITEM_TABLE: &str = "menu_item";

#[derive(Clone)]
pub struct MenuItemRepository {
    base: BaseRepository,
}

impl MenuItemRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// List menu items, newest first, with optional category filter and
    /// case-insensitive name search
    pub async fn find_filtered(
        &self,
        category: Option<MenuCategory>,
        search: Option<&str>,
    ) -> RepoResult<Vec<MenuItem>> {
        let mut sql = String::from("SELECT * FROM menu_item");
        let mut clauses: Vec<&str> = Vec::new();
        if category.is_some() {
            clauses.push("category = $category");
        }
        if search.is_some() {
            clauses.push("string::contains(string::lowercase(name), string::lowercase($search))");
        }
        if !clauses.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
        }
        sql.push_str(" ORDER BY createdAt DESC");

        let mut query = self.base.db().query(sql);
        if let Some(cat) = category {
            query = query.bind(("category", cat));
        }
        if let Some(s) = search {
            query = query.bind(("search", s.to_string()));
        }

        let items: Vec<MenuItem> = query.await?.take(0)?;
        Ok(items)
    }

    /// Find menu item by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<MenuItem>> {
        let record_id = parse_record_id(MENU_ITEM_TABLE, id)?;
        let item: Option<MenuItem> = self.base.db().select(record_id).await?;
        Ok(item)
    }

    /// Create a new menu item
    pub async fn create(&self, data: MenuItemCreate) -> RepoResult<MenuItem> {
        validate_fields(&data.name, data.price)?;

        let item = MenuItem::from_create(data, now_millis());
        let created: Option<MenuItem> = self
            .base
            .db()
            .create(MENU_ITEM_TABLE)
            .content(item)
            .await?;

        created.ok_or_else(|| RepoError::Database("Failed to create menu item".to_string()))
    }

    /// Apply a partial update to a menu item
    pub async fn update(&self, id: &str, data: MenuItemUpdate) -> RepoResult<MenuItem> {
        if let Some(name) = &data.name {
            validate_fields(name, data.price.unwrap_or(0.0))?;
        } else if let Some(price) = data.price {
            if price < 0.0 {
                return Err(RepoError::Validation("price must be >= 0".to_string()));
            }
        }

        let record_id = parse_record_id(MENU_ITEM_TABLE, id)?;
        let mut item: MenuItem = self
            .base
            .db()
            .select(record_id.clone())
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Menu item {}", id)))?;

        item.apply_update(data, now_millis());
        // Record id travels in the key, not the content
        item.id = None;

        let updated: Option<MenuItem> = self.base.db().update(record_id).content(item).await?;
        updated.ok_or_else(|| RepoError::NotFound(format!("Menu item {}", id)))
    }

    /// Delete a menu item; existing orders keep their snapshots
    pub async fn delete(&self, id: &str) -> RepoResult<MenuItem> {
        let record_id = parse_record_id(MENU_ITEM_TABLE, id)?;
        let deleted: Option<MenuItem> = self.base.db().delete(record_id).await?;
        deleted.ok_or_else(|| RepoError::NotFound(format!("Menu item {}", id)))
    }
}

fn validate_fields(name: &str, price: f64) -> RepoResult<()> {
    if name.trim().is_empty() {
        return Err(RepoError::Validation("name must not be empty".to_string()));
    }
    if price < 0.0 {
        return Err(RepoError::Validation("price must be >= 0".to_string()));
    }
    Ok(())
}
