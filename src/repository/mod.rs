use std::collections::HashMap;

use chrono::NaiveDate;

use crate::db::{DbConnection, DbPool};
use crate::domain::availability::ServiceWindow;
use crate::domain::category::{Category, NewCategory};
use crate::domain::item::{Item, NewItem};
use crate::domain::order::{NewOrder, Order};
use crate::domain::types::{
    CategoryId, CategoryName, ImagePath, ItemId, OrderId, OrderKind, OrderStatus,
};

pub mod category;
mod errors;
pub mod item;
pub mod order;

pub use errors::{RepositoryError, RepositoryResult};

/// Page selection for list queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between callers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Query parameters for listing categories.
#[derive(Debug, Clone, Default)]
pub struct CategoryListQuery {
    /// Pagination parameters.
    pub pagination: Option<Pagination>,
}

impl CategoryListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

/// Query parameters used when listing or searching items.
#[derive(Debug, Clone, Default)]
pub struct ItemListQuery {
    /// Restrict to items of one category.
    pub category_id: Option<CategoryId>,
    /// Substring match on the item name.
    pub search: Option<String>,
    /// Pagination parameters.
    pub pagination: Option<Pagination>,
}

impl ItemListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

/// Query parameters for listing orders, newest first.
#[derive(Debug, Clone, Default)]
pub struct OrderListQuery {
    /// Keep only orders in one of these statuses; empty means all.
    pub statuses: Vec<OrderStatus>,
    /// Restrict to one order kind.
    pub kind: Option<OrderKind>,
    /// Keep orders placed on or after this date.
    pub from: Option<NaiveDate>,
    /// Keep orders placed on or before this date.
    pub to: Option<NaiveDate>,
    /// Pagination parameters.
    pub pagination: Option<Pagination>,
}

impl OrderListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(mut self, status: OrderStatus) -> Self {
        self.statuses.push(status);
        self
    }

    pub fn statuses(mut self, statuses: impl IntoIterator<Item = OrderStatus>) -> Self {
        self.statuses.extend(statuses);
        self
    }

    pub fn kind(mut self, kind: OrderKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn placed_between(mut self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        self.from = from;
        self.to = to;
        self
    }

    pub fn on_day(self, day: NaiveDate) -> Self {
        self.placed_between(Some(day), Some(day))
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

/// Revenue and order count over a date range.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SalesTotals {
    pub revenue: f64,
    pub orders: usize,
}

/// Read-only operations for category entities.
pub trait CategoryReader {
    /// List categories using the supplied query options.
    fn list_categories(&self, query: CategoryListQuery)
    -> RepositoryResult<(usize, Vec<Category>)>;
    /// Retrieve a category by its identifier.
    fn get_category_by_id(&self, id: CategoryId) -> RepositoryResult<Option<Category>>;
    /// Number of items attached to each category.
    fn category_item_counts(&self) -> RepositoryResult<HashMap<CategoryId, i64>>;
}

/// Write operations for category entities.
pub trait CategoryWriter {
    /// Persist a new category.
    fn create_category(&self, category: &NewCategory) -> RepositoryResult<usize>;
    /// Update category name, service window and image.
    fn update_category(
        &self,
        id: CategoryId,
        name: &CategoryName,
        window: ServiceWindow,
        image: Option<&ImagePath>,
    ) -> RepositoryResult<usize>;
    /// Delete a category, detaching its items.
    fn delete_category(&self, id: CategoryId) -> RepositoryResult<usize>;
}

/// Read-only operations for item entities.
pub trait ItemReader {
    /// List items matching the supplied query parameters.
    fn list_items(&self, query: ItemListQuery) -> RepositoryResult<(usize, Vec<Item>)>;
    /// Retrieve an item by its identifier.
    fn get_item_by_id(&self, id: ItemId) -> RepositoryResult<Option<Item>>;
}

/// Write operations for item entities.
pub trait ItemWriter {
    /// Persist a new item.
    fn create_item(&self, item: &NewItem) -> RepositoryResult<usize>;
    /// Replace the editable fields of an item.
    fn update_item(&self, id: ItemId, item: &NewItem) -> RepositoryResult<usize>;
    /// Flip the explicit stock flag.
    fn set_item_availability(&self, id: ItemId, available: bool) -> RepositoryResult<usize>;
    /// Delete an item by id.
    fn delete_item(&self, id: ItemId) -> RepositoryResult<usize>;
}

/// Read-only operations for order entities.
pub trait OrderReader {
    /// List orders matching the supplied query parameters, newest first.
    fn list_orders(&self, query: OrderListQuery) -> RepositoryResult<(usize, Vec<Order>)>;
    /// Retrieve an order with its lines by identifier.
    fn get_order_by_id(&self, id: OrderId) -> RepositoryResult<Option<Order>>;
    /// Revenue and count of completed orders placed in `[from, to]`.
    fn sales_totals(&self, from: NaiveDate, to: NaiveDate) -> RepositoryResult<SalesTotals>;
    /// Names and sold quantities of items on completed orders placed on or
    /// after `since`, best sellers first.
    fn top_selling_items(
        &self,
        since: NaiveDate,
        limit: usize,
    ) -> RepositoryResult<Vec<(String, i64)>>;
}

/// Write operations for order entities.
pub trait OrderWriter {
    /// Persist a new order with its lines, returning the new identifier.
    fn create_order(&self, order: &NewOrder) -> RepositoryResult<OrderId>;
    /// Move an order to a new lifecycle status.
    fn set_order_status(&self, id: OrderId, status: OrderStatus) -> RepositoryResult<usize>;
}
