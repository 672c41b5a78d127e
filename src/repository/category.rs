use std::collections::HashMap;

use diesel::prelude::*;

use crate::domain::availability::ServiceWindow;
use crate::domain::category::{Category, NewCategory};
use crate::domain::types::{CategoryId, CategoryName, ImagePath};
use crate::models::category::{Category as DbCategory, NewCategory as DbNewCategory};
use crate::repository::{
    CategoryListQuery, CategoryReader, CategoryWriter, DieselRepository, RepositoryResult,
};

impl CategoryReader for DieselRepository {
    fn list_categories(
        &self,
        query: CategoryListQuery,
    ) -> RepositoryResult<(usize, Vec<Category>)> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let total = categories::table.count().get_result::<i64>(&mut conn)? as usize;

        let mut items = categories::table.into_boxed::<diesel::sqlite::Sqlite>();
        if let Some(pagination) = &query.pagination {
            let offset = ((pagination.page.max(1) - 1) * pagination.per_page) as i64;
            let limit = pagination.per_page as i64;
            items = items.offset(offset).limit(limit);
        }

        let items = items
            .order(categories::name.asc())
            .load::<DbCategory>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Category>, _>>()?;

        Ok((total, items))
    }

    fn get_category_by_id(&self, id: CategoryId) -> RepositoryResult<Option<Category>> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let category = categories::table
            .filter(categories::id.eq(id.get()))
            .first::<DbCategory>(&mut conn)
            .optional()?;

        let category = category.map(TryInto::try_into).transpose()?;
        Ok(category)
    }

    fn category_item_counts(&self) -> RepositoryResult<HashMap<CategoryId, i64>> {
        use crate::schema::items;

        let mut conn = self.conn()?;

        let rows = items::table
            .filter(items::category_id.is_not_null())
            .group_by(items::category_id)
            .select((items::category_id, diesel::dsl::count_star()))
            .load::<(Option<i32>, i64)>(&mut conn)?;

        let mut counts = HashMap::with_capacity(rows.len());
        for (category_id, count) in rows {
            if let Some(category_id) = category_id {
                counts.insert(CategoryId::new(category_id)?, count);
            }
        }
        Ok(counts)
    }
}

impl CategoryWriter for DieselRepository {
    fn create_category(&self, category: &NewCategory) -> RepositoryResult<usize> {
        use crate::schema::categories;

        let mut conn = self.conn()?;
        let db_category: DbNewCategory = category.clone().into();

        let affected = diesel::insert_into(categories::table)
            .values(db_category)
            .execute(&mut conn)?;

        Ok(affected)
    }

    fn update_category(
        &self,
        id: CategoryId,
        name: &CategoryName,
        window: ServiceWindow,
        image: Option<&ImagePath>,
    ) -> RepositoryResult<usize> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let affected = diesel::update(categories::table.filter(categories::id.eq(id.get())))
            .set((
                categories::name.eq(name.as_str()),
                categories::start_time.eq(window.start.map(|t| t.to_string())),
                categories::end_time.eq(window.end.map(|t| t.to_string())),
                categories::image.eq(image.map(ImagePath::as_str)),
                categories::updated_at.eq(diesel::dsl::now),
            ))
            .execute(&mut conn)?;

        Ok(affected)
    }

    fn delete_category(&self, id: CategoryId) -> RepositoryResult<usize> {
        use crate::schema::{categories, items};

        let mut conn = self.conn()?;

        // Items survive their category; only the link is cleared.
        let affected = conn.transaction(|conn| {
            diesel::update(items::table.filter(items::category_id.eq(Some(id.get()))))
                .set(items::category_id.eq(None::<i32>))
                .execute(conn)?;

            diesel::delete(categories::table.filter(categories::id.eq(id.get()))).execute(conn)
        })?;

        Ok(affected)
    }
}
