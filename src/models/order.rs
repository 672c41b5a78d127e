use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::order::{NewOrder as DomainNewOrder, Order as DomainOrder, OrderLine};
use crate::domain::types::{
    CustomerName, ItemName, OrderRef, Price, Quantity, TypeConstraintError,
};

/// Diesel model representing the `orders` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::orders)]
pub struct Order {
    pub id: i32,
    pub reference: String,
    pub customer: String,
    pub status: String,
    pub kind: String,
    pub placed_at: NaiveDateTime,
    pub total: f64,
    pub updated_at: NaiveDateTime,
}

/// Insertable form of [`Order`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::orders)]
pub struct NewOrder {
    pub reference: String,
    pub customer: String,
    pub status: String,
    pub kind: String,
    pub placed_at: NaiveDateTime,
    pub total: f64,
    pub updated_at: NaiveDateTime,
}

/// Diesel model representing the `order_lines` table.
#[derive(Debug, Clone, Identifiable, Queryable, Associations)]
#[diesel(table_name = crate::schema::order_lines, belongs_to(Order))]
pub struct DbOrderLine {
    pub id: i32,
    pub order_id: i32,
    pub item_id: Option<i32>,
    pub name: String,
    pub price: f64,
    pub quantity: i32,
}

/// Insertable form of [`DbOrderLine`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::order_lines)]
pub struct NewOrderLine {
    pub order_id: i32,
    pub item_id: Option<i32>,
    pub name: String,
    pub price: f64,
    pub quantity: i32,
}

impl Order {
    /// Assemble a domain order from the row and its loaded lines.
    pub fn into_domain(self, lines: Vec<DbOrderLine>) -> Result<DomainOrder, TypeConstraintError> {
        Ok(DomainOrder {
            id: self.id.try_into()?,
            reference: OrderRef::new(self.reference)?,
            customer: CustomerName::new(self.customer)?,
            status: self.status.as_str().try_into()?,
            kind: self.kind.as_str().try_into()?,
            placed_at: self.placed_at,
            total: Price::new(self.total)?,
            lines: lines
                .into_iter()
                .map(TryInto::try_into)
                .collect::<Result<Vec<OrderLine>, _>>()?,
        })
    }
}

impl TryFrom<DbOrderLine> for OrderLine {
    type Error = TypeConstraintError;

    fn try_from(line: DbOrderLine) -> Result<Self, Self::Error> {
        Ok(Self {
            item_id: line.item_id.map(TryInto::try_into).transpose()?,
            name: ItemName::new(line.name)?,
            price: Price::new(line.price)?,
            quantity: Quantity::new(line.quantity)?,
        })
    }
}

impl From<DomainNewOrder> for NewOrder {
    fn from(order: DomainNewOrder) -> Self {
        Self {
            reference: order.reference.into_inner(),
            customer: order.customer.into_inner(),
            status: order.status.as_str().to_string(),
            kind: order.kind.as_str().to_string(),
            placed_at: order.placed_at,
            total: order.total.get(),
            updated_at: order.placed_at,
        }
    }
}

impl NewOrderLine {
    pub fn from_domain(order_id: i32, line: &OrderLine) -> Self {
        Self {
            order_id,
            item_id: line.item_id.map(Into::into),
            name: line.name.as_str().to_string(),
            price: line.price.get(),
            quantity: line.quantity.get(),
        }
    }
}
