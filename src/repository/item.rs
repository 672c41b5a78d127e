use diesel::prelude::*;

use crate::domain::item::{Item, NewItem};
use crate::domain::types::ItemId;
use crate::models::item::{Item as DbItem, NewItem as DbNewItem, join_tags};
use crate::repository::{
    DieselRepository, ItemListQuery, ItemReader, ItemWriter, RepositoryResult,
};

impl ItemReader for DieselRepository {
    fn list_items(&self, query: ItemListQuery) -> RepositoryResult<(usize, Vec<Item>)> {
        use crate::schema::items;

        let mut conn = self.conn()?;

        let query_builder = || {
            let mut q = items::table.into_boxed::<diesel::sqlite::Sqlite>();
            if let Some(category_id) = query.category_id {
                q = q.filter(items::category_id.eq(category_id.get()));
            }
            if let Some(search) = &query.search {
                q = q.filter(items::name.like(format!("%{search}%")));
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
            .order(items::name.asc())
            .load::<DbItem>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Item>, _>>()?;

        Ok((total, rows))
    }

    fn get_item_by_id(&self, id: ItemId) -> RepositoryResult<Option<Item>> {
        use crate::schema::items;

        let mut conn = self.conn()?;

        let item = items::table
            .filter(items::id.eq(id.get()))
            .first::<DbItem>(&mut conn)
            .optional()?;

        let item = item.map(TryInto::try_into).transpose()?;
        Ok(item)
    }
}

impl ItemWriter for DieselRepository {
    fn create_item(&self, item: &NewItem) -> RepositoryResult<usize> {
        use crate::schema::items;

        let mut conn = self.conn()?;
        let db_item: DbNewItem = item.clone().into();

        let affected = diesel::insert_into(items::table)
            .values(db_item)
            .execute(&mut conn)?;

        Ok(affected)
    }

    fn update_item(&self, id: ItemId, item: &NewItem) -> RepositoryResult<usize> {
        use crate::schema::items;

        let mut conn = self.conn()?;

        let affected = diesel::update(items::table.filter(items::id.eq(id.get())))
            .set((
                items::category_id.eq(item.category_id.map(i32::from)),
                items::name.eq(item.name.as_str()),
                items::description.eq(item.description.as_deref()),
                items::tags.eq(join_tags(&item.tags)),
                items::price.eq(item.price.get()),
                items::available.eq(item.available),
                items::image.eq(item.image.as_deref()),
                items::updated_at.eq(diesel::dsl::now),
            ))
            .execute(&mut conn)?;

        Ok(affected)
    }

    fn set_item_availability(&self, id: ItemId, available: bool) -> RepositoryResult<usize> {
        use crate::schema::items;

        let mut conn = self.conn()?;

        let affected = diesel::update(items::table.filter(items::id.eq(id.get())))
            .set((
                items::available.eq(Some(available)),
                items::updated_at.eq(diesel::dsl::now),
            ))
            .execute(&mut conn)?;

        Ok(affected)
    }

    fn delete_item(&self, id: ItemId) -> RepositoryResult<usize> {
        use crate::schema::items;

        let mut conn = self.conn()?;

        let affected =
            diesel::delete(items::table.filter(items::id.eq(id.get()))).execute(&mut conn)?;

        Ok(affected)
    }
}
