use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::item::{Item as DomainItem, NewItem as DomainNewItem};
use crate::domain::types::{ImagePath, ItemDescription, ItemName, Price, TypeConstraintError};

/// Diesel model representing the `items` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::items)]
pub struct Item {
    pub id: i32,
    pub category_id: Option<i32>,
    pub name: String,
    pub description: Option<String>,
    pub tags: String,
    pub price: f64,
    pub available: Option<bool>,
    pub image: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Insertable/patchable form of [`Item`].
#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::items)]
pub struct NewItem {
    pub category_id: Option<i32>,
    pub name: String,
    pub description: Option<String>,
    pub tags: String,
    pub price: f64,
    pub available: Option<bool>,
    pub image: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Tags are stored as a comma-separated text column.
pub(crate) fn split_tags(stored: &str) -> Vec<String> {
    stored
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

pub(crate) fn join_tags(tags: &[String]) -> String {
    tags.join(",")
}

impl TryFrom<Item> for DomainItem {
    type Error = TypeConstraintError;

    fn try_from(item: Item) -> Result<Self, Self::Error> {
        Ok(Self {
            id: item.id.try_into()?,
            category_id: item.category_id.map(TryInto::try_into).transpose()?,
            name: ItemName::new(item.name)?,
            description: item.description.map(ItemDescription::new).transpose()?,
            tags: split_tags(&item.tags),
            price: Price::new(item.price)?,
            available: item.available,
            image: item.image.map(ImagePath::new).transpose()?,
            created_at: item.created_at,
            updated_at: item.updated_at,
        })
    }
}

impl From<DomainNewItem> for NewItem {
    fn from(item: DomainNewItem) -> Self {
        Self {
            category_id: item.category_id.map(Into::into),
            name: item.name.into_inner(),
            description: item.description.map(ItemDescription::into_inner),
            tags: join_tags(&item.tags),
            price: item.price.get(),
            available: item.available,
            image: item.image.map(ImagePath::into_inner),
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_and_rejoins_tags() {
        let stored = "Tiffins, South Indian ,Veg";
        let tags = split_tags(stored);
        assert_eq!(tags, vec!["Tiffins", "South Indian", "Veg"]);
        assert_eq!(join_tags(&tags), "Tiffins,South Indian,Veg");
    }

    #[test]
    fn empty_tag_column_yields_no_tags() {
        assert!(split_tags("").is_empty());
        assert!(split_tags(" , ").is_empty());
    }
}
