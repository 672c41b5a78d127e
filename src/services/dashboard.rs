//! Dashboard metrics: sales headline numbers and the top-selling ranking.

use chrono::{Datelike, Months, NaiveDate};

use crate::dto::dashboard::{DashboardMetricsDto, TopSellingItemDto};
use crate::repository::OrderReader;

use super::{ServiceError, ServiceResult};

/// Today's sales and order count plus this month's running total.
///
/// Only completed orders count towards revenue.
pub fn metrics<R>(today: NaiveDate, repo: &R) -> ServiceResult<DashboardMetricsDto>
where
    R: OrderReader,
{
    let today_totals = match repo.sales_totals(today, today) {
        Ok(totals) => totals,
        Err(e) => {
            log::error!("Failed to compute daily sales totals: {e}");
            return Err(ServiceError::Internal);
        }
    };

    let month_start = today.with_day(1).unwrap_or(today);
    let month_end = (month_start + Months::new(1)).pred_opt().unwrap_or(today);
    let month_totals = match repo.sales_totals(month_start, month_end) {
        Ok(totals) => totals,
        Err(e) => {
            log::error!("Failed to compute monthly sales totals: {e}");
            return Err(ServiceError::Internal);
        }
    };

    Ok(DashboardMetricsDto {
        today_sales: today_totals.revenue,
        today_orders: today_totals.orders,
        monthly_sales: month_totals.revenue,
    })
}

/// Best-selling items since `since`, at most `limit` entries.
pub fn top_selling<R>(
    since: NaiveDate,
    limit: usize,
    repo: &R,
) -> ServiceResult<Vec<TopSellingItemDto>>
where
    R: OrderReader,
{
    match repo.top_selling_items(since, limit) {
        Ok(ranking) => Ok(ranking
            .into_iter()
            .map(|(name, count)| TopSellingItemDto { name, count })
            .collect()),
        Err(e) => {
            log::error!("Failed to rank top selling items: {e}");
            Err(ServiceError::Internal)
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
    use crate::repository::test::TestRepository;

    fn line(name: &str, price: f64, quantity: i32) -> OrderLine {
        OrderLine {
            item_id: None,
            name: ItemName::new(name).unwrap(),
            price: Price::new(price).unwrap(),
            quantity: Quantity::new(quantity).unwrap(),
        }
    }

    fn order(id: i32, status: OrderStatus, placed_on: NaiveDate, total: f64, lines: Vec<OrderLine>) -> Order {
        Order {
            id: OrderId::new(id).unwrap(),
            reference: OrderRef::new(format!("ORD-{id}")).unwrap(),
            customer: CustomerName::new("Priya M.").unwrap(),
            status,
            kind: OrderKind::Pickup,
            placed_at: placed_on.and_hms_opt(9, 0, 0).unwrap(),
            total: Price::new(total).unwrap(),
            lines,
        }
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, d).unwrap()
    }

    #[test]
    fn metrics_split_today_and_month() {
        let repo = TestRepository::new(
            vec![],
            vec![],
            vec![
                order(1, OrderStatus::Completed, day(29), 100.0, vec![]),
                order(2, OrderStatus::Completed, day(29), 40.0, vec![]),
                order(3, OrderStatus::Completed, day(3), 500.0, vec![]),
                // Cancelled orders never count.
                order(4, OrderStatus::Cancelled, day(29), 999.0, vec![]),
            ],
        );

        let metrics = metrics(day(29), &repo).unwrap();
        assert_eq!(metrics.today_sales, 140.0);
        assert_eq!(metrics.today_orders, 2);
        assert_eq!(metrics.monthly_sales, 640.0);
    }

    #[test]
    fn top_selling_ranks_by_quantity() {
        let repo = TestRepository::new(
            vec![],
            vec![],
            vec![
                order(
                    1,
                    OrderStatus::Completed,
                    day(28),
                    120.0,
                    vec![line("Samosa", 15.0, 4), line("Masala Dosa", 60.0, 1)],
                ),
                order(
                    2,
                    OrderStatus::Completed,
                    day(29),
                    75.0,
                    vec![line("Samosa", 15.0, 5)],
                ),
                order(
                    3,
                    OrderStatus::Cancelled,
                    day(29),
                    600.0,
                    vec![line("Veg Biryani", 120.0, 5)],
                ),
            ],
        );

        let ranking = top_selling(day(22), 5, &repo).unwrap();
        assert_eq!(ranking.len(), 2);
        assert_eq!(ranking[0].name, "Samosa");
        assert_eq!(ranking[0].count, 9);
        assert_eq!(ranking[1].name, "Masala Dosa");
    }

    #[test]
    fn top_selling_respects_limit() {
        let repo = TestRepository::new(
            vec![],
            vec![],
            vec![order(
                1,
                OrderStatus::Completed,
                day(29),
                100.0,
                vec![line("Samosa", 15.0, 3), line("Idli", 40.0, 2)],
            )],
        );

        let ranking = top_selling(day(29), 1, &repo).unwrap();
        assert_eq!(ranking.len(), 1);
        assert_eq!(ranking[0].name, "Samosa");
    }
}
