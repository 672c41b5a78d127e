use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::availability::ServiceWindow;
use crate::domain::category::{Category as DomainCategory, NewCategory as DomainNewCategory};
use crate::domain::types::{CategoryName, ImagePath, TypeConstraintError};

/// Diesel model representing the `categories` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::categories)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub image: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Insertable/patchable form of [`Category`].
#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::categories)]
pub struct NewCategory {
    pub name: String,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub image: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<Category> for DomainCategory {
    type Error = TypeConstraintError;

    fn try_from(category: Category) -> Result<Self, Self::Error> {
        Ok(Self {
            id: category.id.try_into()?,
            name: CategoryName::new(category.name)?,
            // Malformed stored times fall back to open bounds rather than
            // failing the row.
            window: ServiceWindow::parse(
                category.start_time.as_deref(),
                category.end_time.as_deref(),
            ),
            image: category.image.map(ImagePath::new).transpose()?,
            created_at: category.created_at,
            updated_at: category.updated_at,
        })
    }
}

impl From<DomainNewCategory> for NewCategory {
    fn from(category: DomainNewCategory) -> Self {
        Self {
            name: category.name.into_inner(),
            start_time: category.window.start.map(|t| t.to_string()),
            end_time: category.window.end.map(|t| t.to_string()),
            image: category.image.map(ImagePath::into_inner),
            created_at: category.created_at,
            updated_at: category.updated_at,
        }
    }
}
