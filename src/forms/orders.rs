use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::types::{OrderId, OrderKind, OrderStatus, TypeConstraintError};
use crate::repository::OrderListQuery;

const DATE_FORMAT: &str = "%Y-%m-%d";

fn parse_date(
    value: Option<&str>,
    field: &'static str,
) -> Result<Option<NaiveDate>, OrderHistoryFormError> {
    match value {
        Some(raw) if !raw.trim().is_empty() => NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
            .map(Some)
            .map_err(|_| OrderHistoryFormError::InvalidDate(format!("{field}: {raw}"))),
        _ => Ok(None),
    }
}

/// Filter panel of the order history page.
#[derive(Deserialize, Validate)]
pub struct OrderHistoryForm {
    /// Selected status pills; empty or containing `all` means no filter.
    #[serde(default)]
    pub statuses: Vec<String>,
    /// Order kind select; `all` or absent means no filter.
    pub kind: Option<String>,
    /// Inclusive date range as `YYYY-MM-DD`.
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderHistoryPayload {
    pub statuses: Vec<OrderStatus>,
    pub kind: Option<OrderKind>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl OrderHistoryPayload {
    pub fn into_query(self) -> OrderListQuery {
        let mut query = OrderListQuery::new()
            .statuses(self.statuses)
            .placed_between(self.from, self.to);
        if let Some(kind) = self.kind {
            query = query.kind(kind);
        }
        query
    }
}

#[derive(Debug, Error)]
pub enum OrderHistoryFormError {
    #[error("Order history form validation failed: {0}")]
    Validation(String),
    #[error("Order history form contains invalid data: {0}")]
    TypeConstraint(String),
    #[error("Order history form contains an invalid date: {0}")]
    InvalidDate(String),
}

impl From<ValidationErrors> for OrderHistoryFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for OrderHistoryFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<OrderHistoryForm> for OrderHistoryPayload {
    type Error = OrderHistoryFormError;

    fn try_from(value: OrderHistoryForm) -> Result<Self, Self::Error> {
        value.validate()?;

        let all_selected = value
            .statuses
            .iter()
            .any(|status| status.eq_ignore_ascii_case("all"));
        let statuses = if all_selected {
            Vec::new()
        } else {
            value
                .statuses
                .iter()
                .map(|status| OrderStatus::try_from(status.as_str()))
                .collect::<Result<Vec<_>, _>>()?
        };

        let kind = match value.kind.as_deref() {
            None => None,
            Some(raw) if raw.trim().is_empty() || raw.trim().eq_ignore_ascii_case("all") => None,
            Some(raw) => Some(OrderKind::try_from(raw)?),
        };

        Ok(Self {
            statuses,
            kind,
            from: parse_date(value.start_date.as_deref(), "start_date")?,
            to: parse_date(value.end_date.as_deref(), "end_date")?,
        })
    }
}

#[derive(Deserialize, Validate)]
pub struct UpdateOrderStatusForm {
    #[validate(range(min = 1))]
    pub order_id: i32,
    #[validate(length(min = 1))]
    pub status: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateOrderStatusFormPayload {
    pub order_id: OrderId,
    pub status: OrderStatus,
}

#[derive(Debug, Error)]
pub enum UpdateOrderStatusFormError {
    #[error("Update order status form validation failed: {0}")]
    Validation(String),
    #[error("Update order status form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for UpdateOrderStatusFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for UpdateOrderStatusFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<UpdateOrderStatusForm> for UpdateOrderStatusFormPayload {
    type Error = UpdateOrderStatusFormError;

    fn try_from(value: UpdateOrderStatusForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            order_id: OrderId::new(value.order_id)?,
            status: OrderStatus::try_from(value.status.as_str())?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_pill_clears_status_filter() {
        let form = OrderHistoryForm {
            statuses: vec!["All".to_string(), "completed".to_string()],
            kind: None,
            start_date: None,
            end_date: None,
        };

        let payload: OrderHistoryPayload = form.try_into().unwrap();
        assert!(payload.statuses.is_empty());
    }

    #[test]
    fn parses_statuses_kind_and_dates() {
        let form = OrderHistoryForm {
            statuses: vec!["completed".to_string(), "cancelled".to_string()],
            kind: Some("pickup".to_string()),
            start_date: Some("2026-08-22".to_string()),
            end_date: Some("2026-08-29".to_string()),
        };

        let payload: OrderHistoryPayload = form.try_into().unwrap();
        assert_eq!(
            payload.statuses,
            vec![OrderStatus::Completed, OrderStatus::Cancelled]
        );
        assert_eq!(payload.kind, Some(OrderKind::Pickup));
        assert_eq!(
            payload.from,
            Some(NaiveDate::from_ymd_opt(2026, 8, 22).unwrap())
        );
        assert_eq!(
            payload.to,
            Some(NaiveDate::from_ymd_opt(2026, 8, 29).unwrap())
        );
    }

    #[test]
    fn rejects_unknown_status_and_bad_date() {
        let unknown = OrderHistoryForm {
            statuses: vec!["refunded".to_string()],
            kind: None,
            start_date: None,
            end_date: None,
        };
        assert!(OrderHistoryPayload::try_from(unknown).is_err());

        let bad_date = OrderHistoryForm {
            statuses: vec![],
            kind: None,
            start_date: Some("22/08/2026".to_string()),
            end_date: None,
        };
        assert!(OrderHistoryPayload::try_from(bad_date).is_err());
    }

    #[test]
    fn update_status_parses_known_values() {
        let form = UpdateOrderStatusForm {
            order_id: 12,
            status: "completed".to_string(),
        };
        let payload: UpdateOrderStatusFormPayload = form.try_into().unwrap();
        assert_eq!(payload.order_id.get(), 12);
        assert_eq!(payload.status, OrderStatus::Completed);
    }
}
