use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{CategoryId, ImagePath, ItemDescription, ItemId, ItemName, Price};

/// A menu item as managed from the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    /// Items keep existing when their category is deleted; the link just
    /// becomes absent.
    pub category_id: Option<CategoryId>,
    pub name: ItemName,
    pub description: Option<ItemDescription>,
    pub tags: Vec<String>,
    pub price: Price,
    /// Explicit stock flag (`ava` on the wire). Absent means the operator
    /// never toggled it, which counts as sellable.
    pub available: Option<bool>,
    pub image: Option<ImagePath>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Item {
    /// Whether the item is explicitly flagged out of stock.
    pub fn is_out_of_stock(&self) -> bool {
        self.available == Some(false)
    }
}

/// Information required to create a new [`Item`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewItem {
    pub category_id: Option<CategoryId>,
    pub name: ItemName,
    pub description: Option<ItemDescription>,
    pub tags: Vec<String>,
    pub price: Price,
    pub available: Option<bool>,
    pub image: Option<ImagePath>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
