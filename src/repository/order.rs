use chrono::{NaiveDate, NaiveTime};
use diesel::prelude::*;

use crate::domain::order::{NewOrder, Order};
use crate::domain::types::{OrderId, OrderStatus};
use crate::models::order::{
    DbOrderLine, NewOrder as DbNewOrder, NewOrderLine, Order as DbOrder,
};
use crate::repository::{
    DieselRepository, OrderListQuery, OrderReader, OrderWriter, RepositoryResult, SalesTotals,
};

fn day_start(day: NaiveDate) -> chrono::NaiveDateTime {
    day.and_time(NaiveTime::MIN)
}

impl OrderReader for DieselRepository {
    fn list_orders(&self, query: OrderListQuery) -> RepositoryResult<(usize, Vec<Order>)> {
        use crate::schema::orders;

        let mut conn = self.conn()?;

        let query_builder = || {
            let mut q = orders::table.into_boxed::<diesel::sqlite::Sqlite>();
            if !query.statuses.is_empty() {
                let statuses: Vec<&str> =
                    query.statuses.iter().map(|s| s.as_str()).collect();
                q = q.filter(orders::status.eq_any(statuses));
            }
            if let Some(kind) = query.kind {
                q = q.filter(orders::kind.eq(kind.as_str()));
            }
            if let Some(from) = query.from {
                q = q.filter(orders::placed_at.ge(day_start(from)));
            }
            if let Some(to) = query.to {
                if let Some(next_day) = to.succ_opt() {
                    q = q.filter(orders::placed_at.lt(day_start(next_day)));
                }
            }
            q
        };

        let total = query_builder().count().get_result::<i64>(&mut conn)? as usize;

        let mut rows = query_builder();
        if let Some(pagination) = &query.pagination {
            let offset = ((pagination.page.max(1) - 1) * pagination.per_page) as i64;
            let limit = pagination.per_page as i64;
            rows = rows.offset(offset).limit(limit);
        }

        let rows = rows
            .order(orders::placed_at.desc())
            .load::<DbOrder>(&mut conn)?;

        let lines = DbOrderLine::belonging_to(&rows)
            .load::<DbOrderLine>(&mut conn)?
            .grouped_by(&rows);

        let orders = rows
            .into_iter()
            .zip(lines)
            .map(|(order, lines)| order.into_domain(lines))
            .collect::<Result<Vec<Order>, _>>()?;

        Ok((total, orders))
    }

    fn get_order_by_id(&self, id: OrderId) -> RepositoryResult<Option<Order>> {
        use crate::schema::{order_lines, orders};

        let mut conn = self.conn()?;

        let order = orders::table
            .filter(orders::id.eq(id.get()))
            .first::<DbOrder>(&mut conn)
            .optional()?;

        let Some(order) = order else {
            return Ok(None);
        };

        let lines = order_lines::table
            .filter(order_lines::order_id.eq(order.id))
            .load::<DbOrderLine>(&mut conn)?;

        Ok(Some(order.into_domain(lines)?))
    }

    fn sales_totals(&self, from: NaiveDate, to: NaiveDate) -> RepositoryResult<SalesTotals> {
        use crate::schema::orders;

        let mut conn = self.conn()?;

        let mut q = orders::table
            .filter(orders::status.eq(OrderStatus::Completed.as_str()))
            .filter(orders::placed_at.ge(day_start(from)))
            .into_boxed::<diesel::sqlite::Sqlite>();
        if let Some(next_day) = to.succ_opt() {
            q = q.filter(orders::placed_at.lt(day_start(next_day)));
        }

        let (revenue, orders) = q
            .select((diesel::dsl::sum(orders::total), diesel::dsl::count_star()))
            .first::<(Option<f64>, i64)>(&mut conn)?;

        Ok(SalesTotals {
            revenue: revenue.unwrap_or(0.0),
            orders: orders as usize,
        })
    }

    fn top_selling_items(
        &self,
        since: NaiveDate,
        limit: usize,
    ) -> RepositoryResult<Vec<(String, i64)>> {
        use crate::schema::{order_lines, orders};

        let mut conn = self.conn()?;

        let rows = order_lines::table
            .inner_join(orders::table)
            .filter(orders::status.eq(OrderStatus::Completed.as_str()))
            .filter(orders::placed_at.ge(day_start(since)))
            .group_by(order_lines::name)
            .select((order_lines::name, diesel::dsl::sum(order_lines::quantity)))
            .order(diesel::dsl::sum(order_lines::quantity).desc())
            .limit(limit as i64)
            .load::<(String, Option<i64>)>(&mut conn)?;

        Ok(rows
            .into_iter()
            .map(|(name, sold)| (name, sold.unwrap_or(0)))
            .collect())
    }
}

impl OrderWriter for DieselRepository {
    fn create_order(&self, order: &NewOrder) -> RepositoryResult<OrderId> {
        use crate::schema::{order_lines, orders};

        let mut conn = self.conn()?;

        let order_id = conn.transaction(|conn| {
            let db_order: DbNewOrder = order.clone().into();

            let order_id = diesel::insert_into(orders::table)
                .values(db_order)
                .returning(orders::id)
                .get_result::<i32>(conn)?;

            let lines: Vec<NewOrderLine> = order
                .lines
                .iter()
                .map(|line| NewOrderLine::from_domain(order_id, line))
                .collect();

            diesel::insert_into(order_lines::table)
                .values(lines)
                .execute(conn)?;

            Ok::<i32, diesel::result::Error>(order_id)
        })?;

        Ok(OrderId::new(order_id)?)
    }

    fn set_order_status(&self, id: OrderId, status: OrderStatus) -> RepositoryResult<usize> {
        use crate::schema::orders;

        let mut conn = self.conn()?;

        let affected = diesel::update(orders::table.filter(orders::id.eq(id.get())))
            .set((
                orders::status.eq(status.as_str()),
                orders::updated_at.eq(diesel::dsl::now),
            ))
            .execute(&mut conn)?;

        Ok(affected)
    }
}
