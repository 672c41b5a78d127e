use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{
    CustomerName, ItemId, ItemName, OrderId, OrderKind, OrderRef, OrderStatus, Price, Quantity,
};

/// A customer order with its line items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub reference: OrderRef,
    pub customer: CustomerName,
    pub status: OrderStatus,
    pub kind: OrderKind,
    pub placed_at: NaiveDateTime,
    pub total: Price,
    pub lines: Vec<OrderLine>,
}

/// One purchased item on an order.
///
/// Name and price are denormalized at purchase time so history survives
/// later menu edits; the item link may be gone.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderLine {
    pub item_id: Option<ItemId>,
    pub name: ItemName,
    pub price: Price,
    pub quantity: Quantity,
}

/// Data required to record a new [`Order`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewOrder {
    pub reference: OrderRef,
    pub customer: CustomerName,
    pub status: OrderStatus,
    pub kind: OrderKind,
    pub placed_at: NaiveDateTime,
    pub total: Price,
    pub lines: Vec<OrderLine>,
}
