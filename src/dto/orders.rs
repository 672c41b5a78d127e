use chrono::NaiveDateTime;

use crate::domain::order::{Order, OrderLine};

/// Row of the order history table.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRowDto {
    pub id: i32,
    pub reference: String,
    pub customer: String,
    pub status: String,
    pub kind: String,
    pub placed_at: NaiveDateTime,
    pub total: f64,
}

impl From<Order> for OrderRowDto {
    fn from(value: Order) -> Self {
        Self {
            id: value.id.get(),
            reference: value.reference.into_inner(),
            customer: value.customer.into_inner(),
            status: value.status.as_str().to_string(),
            kind: value.kind.as_str().to_string(),
            placed_at: value.placed_at,
            total: value.total.get(),
        }
    }
}

/// One purchased line inside a live order card.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderLineDto {
    pub item_id: Option<i32>,
    pub name: String,
    pub price: f64,
    pub quantity: i32,
}

impl From<OrderLine> for OrderLineDto {
    fn from(value: OrderLine) -> Self {
        Self {
            item_id: value.item_id.map(Into::into),
            name: value.name.into_inner(),
            price: value.price.get(),
            quantity: value.quantity.get(),
        }
    }
}

/// Live feed order with its lines expanded.
#[derive(Debug, Clone, PartialEq)]
pub struct LiveOrderDto {
    pub id: i32,
    pub reference: String,
    pub customer: String,
    pub status: String,
    pub kind: String,
    pub placed_at: NaiveDateTime,
    pub total: f64,
    pub lines: Vec<OrderLineDto>,
}

impl From<Order> for LiveOrderDto {
    fn from(value: Order) -> Self {
        Self {
            id: value.id.get(),
            reference: value.reference.into_inner(),
            customer: value.customer.into_inner(),
            status: value.status.as_str().to_string(),
            kind: value.kind.as_str().to_string(),
            placed_at: value.placed_at,
            total: value.total.get(),
            lines: value.lines.into_iter().map(Into::into).collect(),
        }
    }
}
