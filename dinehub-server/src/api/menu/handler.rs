//! Menu API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::db::models::MenuItem;
use crate::db::repository::MenuItemRepository;
use crate::utils::{AppError, AppResult};
use shared::models::menu_item::{MenuItemCreate, MenuItemUpdate};
use shared::{ApiResponse, MenuCategory};

/// Query params for GET /api/menu
#[derive(Debug, Deserialize)]
pub struct MenuQuery {
    /// Category filter; absent or "All" means every category
    pub category: Option<String>,
    /// Case-insensitive name search
    pub search: Option<String>,
}

fn parse_category(raw: Option<&str>) -> AppResult<Option<MenuCategory>> {
    match raw {
        None => Ok(None),
        Some(s) if s.trim().is_empty() || s.trim().eq_ignore_ascii_case("all") => Ok(None),
        Some(s) => s
            .parse::<MenuCategory>()
            .map(Some)
            .map_err(AppError::validation),
    }
}

/// GET /api/menu - 获取菜单列表
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<MenuQuery>,
) -> AppResult<Json<ApiResponse<Vec<MenuItem>>>> {
    let category = parse_category(query.category.as_deref())?;
    let repo = MenuItemRepository::new(state.db.clone());
    let items = repo
        .find_filtered(category, query.search.as_deref())
        .await?;
    Ok(Json(ApiResponse::ok(items)))
}

/// GET /api/menu/:id - 获取单个菜品
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<MenuItem>>> {
    let repo = MenuItemRepository::new(state.db.clone());
    let item = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Menu item {}", id)))?;
    Ok(Json(ApiResponse::ok(item)))
}

/// POST /api/menu - 新建菜品
pub async fn create(
    State(state): State<ServerState>,
    Json(data): Json<MenuItemCreate>,
) -> AppResult<(StatusCode, Json<ApiResponse<MenuItem>>)> {
    let repo = MenuItemRepository::new(state.db.clone());
    let item = repo.create(data).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok_with_message(
            item,
            "Menu item created successfully",
        )),
    ))
}

/// PUT /api/menu/:id - 更新菜品
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(data): Json<MenuItemUpdate>,
) -> AppResult<Json<ApiResponse<MenuItem>>> {
    let repo = MenuItemRepository::new(state.db.clone());
    let item = repo.update(&id, data).await?;
    Ok(Json(ApiResponse::ok_with_message(
        item,
        "Menu item updated successfully",
    )))
}

/// DELETE /api/menu/:id - 删除菜品
///
/// 已有订单保存的是价格快照，不受删除影响。
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<()>>> {
    let repo = MenuItemRepository::new(state.db.clone());
    repo.delete(&id).await?;
    Ok(Json(ApiResponse::ok_with_message(
        (),
        "Menu item deleted successfully",
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_param_parses_all_and_names() {
        assert_eq!(parse_category(None).unwrap(), None);
        assert_eq!(parse_category(Some("All")).unwrap(), None);
        assert_eq!(parse_category(Some("all")).unwrap(), None);
        assert_eq!(
            parse_category(Some("Dessert")).unwrap(),
            Some(MenuCategory::Dessert)
        );
        assert!(parse_category(Some("Sides")).is_err());
    }
}
