//! Live order feed, order history and status transitions.

use chrono::NaiveDate;

use crate::dto::orders::{LiveOrderDto, OrderRowDto};
use crate::forms::orders::{OrderHistoryPayload, UpdateOrderStatusFormPayload};
use crate::repository::{OrderListQuery, OrderReader, OrderWriter};

use super::{ServiceError, ServiceResult};

/// Orders placed today, newest first, for the dashboard's live feed.
pub fn live_feed<R>(today: NaiveDate, repo: &R) -> ServiceResult<Vec<LiveOrderDto>>
where
    R: OrderReader,
{
    match repo.list_orders(OrderListQuery::new().on_day(today)) {
        Ok((_total, orders)) => Ok(orders.into_iter().map(Into::into).collect()),
        Err(e) => {
            log::error!("Failed to list live orders: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Filtered order history rows plus the unpaginated match count.
pub fn order_history<R>(
    payload: OrderHistoryPayload,
    page: Option<(usize, usize)>,
    repo: &R,
) -> ServiceResult<(usize, Vec<OrderRowDto>)>
where
    R: OrderReader,
{
    let mut query = payload.into_query();
    if let Some((page, per_page)) = page {
        query = query.paginate(page, per_page);
    }

    match repo.list_orders(query) {
        Ok((total, orders)) => Ok((total, orders.into_iter().map(Into::into).collect())),
        Err(e) => {
            log::error!("Failed to list orders: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Move an order to a new status (complete or cancel from the detail modal).
pub fn update_order_status<R>(
    payload: UpdateOrderStatusFormPayload,
    repo: &R,
) -> ServiceResult<bool>
where
    R: OrderReader + OrderWriter,
{
    match repo.get_order_by_id(payload.order_id) {
        Ok(Some(_)) => {}
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get order: {e}");
            return Err(ServiceError::Internal);
        }
    }

    match repo.set_order_status(payload.order_id, payload.status) {
        Ok(_) => Ok(true),
        Err(e) => {
            log::error!("Failed to set order status: {e}");
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::{Order, OrderLine};
    use crate::domain::types::{
        CustomerName, ItemName, OrderId, OrderKind, OrderRef, OrderStatus, Price, Quantity,
    };
    use crate::forms::orders::OrderHistoryForm;
    use crate::repository::OrderReader;
    use crate::repository::test::TestRepository;

    fn sample_order(
        id: i32,
        reference: &str,
        status: OrderStatus,
        kind: OrderKind,
        placed_on: NaiveDate,
        total: f64,
    ) -> Order {
        Order {
            id: OrderId::new(id).unwrap(),
            reference: OrderRef::new(reference).unwrap(),
            customer: CustomerName::new("Ankit S.").unwrap(),
            status,
            kind,
            placed_at: placed_on.and_hms_opt(12, 30, 0).unwrap(),
            total: Price::new(total).unwrap(),
            lines: vec![OrderLine {
                item_id: None,
                name: ItemName::new("Samosa").unwrap(),
                price: Price::new(15.0).unwrap(),
                quantity: Quantity::new(2).unwrap(),
            }],
        }
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn live_feed_keeps_only_todays_orders() {
        let today = day(2026, 8, 29);
        let repo = TestRepository::new(
            vec![],
            vec![],
            vec![
                sample_order(1, "ORD-125", OrderStatus::Preparing, OrderKind::DineIn, today, 140.0),
                sample_order(
                    2,
                    "ORD-118",
                    OrderStatus::Completed,
                    OrderKind::Pickup,
                    day(2026, 8, 28),
                    250.0,
                ),
            ],
        );

        let feed = live_feed(today, &repo).unwrap();
        assert_eq!(feed.len(), 1);
        assert_eq!(feed[0].reference, "ORD-125");
        assert_eq!(feed[0].lines.len(), 1);
    }

    #[test]
    fn order_history_applies_status_and_date_filters() {
        let repo = TestRepository::new(
            vec![],
            vec![],
            vec![
                sample_order(
                    1,
                    "ORD-125",
                    OrderStatus::Completed,
                    OrderKind::DineIn,
                    day(2026, 8, 29),
                    140.0,
                ),
                sample_order(
                    2,
                    "ORD-122",
                    OrderStatus::Cancelled,
                    OrderKind::DineIn,
                    day(2026, 8, 29),
                    240.0,
                ),
                sample_order(
                    3,
                    "ORD-105",
                    OrderStatus::Completed,
                    OrderKind::DineIn,
                    day(2026, 8, 22),
                    500.0,
                ),
            ],
        );

        let form = OrderHistoryForm {
            statuses: vec!["completed".to_string()],
            kind: None,
            start_date: Some("2026-08-25".to_string()),
            end_date: Some("2026-08-29".to_string()),
        };
        let payload: OrderHistoryPayload = form.try_into().unwrap();

        let (total, rows) = order_history(payload, None, &repo).unwrap();
        assert_eq!(total, 1);
        assert_eq!(rows[0].reference, "ORD-125");
    }

    #[test]
    fn order_history_pages_keep_the_full_count() {
        let repo = TestRepository::new(
            vec![],
            vec![],
            vec![
                sample_order(1, "ORD-105", OrderStatus::Completed, OrderKind::DineIn, day(2026, 8, 22), 100.0),
                sample_order(2, "ORD-122", OrderStatus::Completed, OrderKind::DineIn, day(2026, 8, 28), 200.0),
                sample_order(3, "ORD-125", OrderStatus::Completed, OrderKind::DineIn, day(2026, 8, 29), 300.0),
            ],
        );

        let form = OrderHistoryForm {
            statuses: vec![],
            kind: None,
            start_date: None,
            end_date: None,
        };
        let payload: OrderHistoryPayload = form.try_into().unwrap();

        let (total, rows) = order_history(payload.clone(), Some((1, 2)), &repo).unwrap();
        assert_eq!(total, 3);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].reference, "ORD-125");

        let (total, rows) = order_history(payload, Some((2, 2)), &repo).unwrap();
        assert_eq!(total, 3);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].reference, "ORD-105");
    }

    #[test]
    fn update_order_status_completes_an_order() {
        let today = day(2026, 8, 29);
        let repo = TestRepository::new(
            vec![],
            vec![],
            vec![sample_order(
                1,
                "ORD-125",
                OrderStatus::Preparing,
                OrderKind::DineIn,
                today,
                140.0,
            )],
        );

        let payload = UpdateOrderStatusFormPayload {
            order_id: OrderId::new(1).unwrap(),
            status: OrderStatus::Completed,
        };
        assert!(update_order_status(payload, &repo).unwrap());

        let order = repo.get_order_by_id(OrderId::new(1).unwrap()).unwrap().unwrap();
        assert_eq!(order.status, OrderStatus::Completed);
    }

    #[test]
    fn update_order_status_missing_order_is_not_found() {
        let repo = TestRepository::default();
        let payload = UpdateOrderStatusFormPayload {
            order_id: OrderId::new(7).unwrap(),
            status: OrderStatus::Cancelled,
        };
        assert_eq!(
            update_order_status(payload, &repo).unwrap_err(),
            ServiceError::NotFound
        );
    }
}
