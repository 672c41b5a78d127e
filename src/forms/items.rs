use chrono::Utc;
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::item::NewItem;
use crate::domain::types::{
    CategoryId, ImagePath, ItemDescription, ItemId, ItemName, Price, TypeConstraintError,
};

fn clean_tags(tags: Vec<String>) -> Vec<String> {
    tags.into_iter()
        .map(|tag| tag.trim().to_string())
        .filter(|tag| !tag.is_empty())
        .collect()
}

fn optional_description(
    value: Option<String>,
) -> Result<Option<ItemDescription>, TypeConstraintError> {
    match value {
        Some(description) if !description.trim().is_empty() => {
            Ok(Some(ItemDescription::new(description)?))
        }
        _ => Ok(None),
    }
}

fn optional_image(value: Option<String>) -> Result<Option<ImagePath>, TypeConstraintError> {
    match value {
        Some(image) if !image.trim().is_empty() => Ok(Some(ImagePath::new(image)?)),
        _ => Ok(None),
    }
}

#[derive(Deserialize, Validate)]
pub struct AddItemForm {
    #[validate(length(min = 1))]
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[validate(range(min = 0.0))]
    pub price: f64,
    pub category_id: Option<i32>,
    /// The explicit stock flag (`ava`); omitted means never toggled.
    pub available: Option<bool>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AddItemFormPayload {
    pub name: ItemName,
    pub description: Option<ItemDescription>,
    pub tags: Vec<String>,
    pub price: Price,
    pub category_id: Option<CategoryId>,
    pub available: Option<bool>,
    pub image: Option<ImagePath>,
}

impl AddItemFormPayload {
    pub fn into_new_item(self) -> NewItem {
        let now = Utc::now().naive_utc();
        NewItem {
            category_id: self.category_id,
            name: self.name,
            description: self.description,
            tags: self.tags,
            price: self.price,
            available: self.available,
            image: self.image,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Error)]
pub enum AddItemFormError {
    #[error("Add item form validation failed: {0}")]
    Validation(String),
    #[error("Add item form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for AddItemFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for AddItemFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<AddItemForm> for AddItemFormPayload {
    type Error = AddItemFormError;

    fn try_from(value: AddItemForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            name: ItemName::new(value.name)?,
            description: optional_description(value.description)?,
            tags: clean_tags(value.tags),
            price: Price::new(value.price)?,
            category_id: value.category_id.map(CategoryId::new).transpose()?,
            available: value.available,
            image: optional_image(value.image)?,
        })
    }
}

#[derive(Deserialize, Validate)]
pub struct UpdateItemForm {
    #[validate(range(min = 1))]
    pub item_id: i32,
    #[validate(length(min = 1))]
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[validate(range(min = 0.0))]
    pub price: f64,
    pub category_id: Option<i32>,
    pub available: Option<bool>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateItemFormPayload {
    pub item_id: ItemId,
    pub name: ItemName,
    pub description: Option<ItemDescription>,
    pub tags: Vec<String>,
    pub price: Price,
    pub category_id: Option<CategoryId>,
    pub available: Option<bool>,
    pub image: Option<ImagePath>,
}

impl UpdateItemFormPayload {
    pub fn into_new_item(self) -> NewItem {
        let now = Utc::now().naive_utc();
        NewItem {
            category_id: self.category_id,
            name: self.name,
            description: self.description,
            tags: self.tags,
            price: self.price,
            available: self.available,
            image: self.image,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Error)]
pub enum UpdateItemFormError {
    #[error("Update item form validation failed: {0}")]
    Validation(String),
    #[error("Update item form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for UpdateItemFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for UpdateItemFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<UpdateItemForm> for UpdateItemFormPayload {
    type Error = UpdateItemFormError;

    fn try_from(value: UpdateItemForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            item_id: ItemId::new(value.item_id)?,
            name: ItemName::new(value.name)?,
            description: optional_description(value.description)?,
            tags: clean_tags(value.tags),
            price: Price::new(value.price)?,
            category_id: value.category_id.map(CategoryId::new).transpose()?,
            available: value.available,
            image: optional_image(value.image)?,
        })
    }
}

#[derive(Deserialize, Validate)]
pub struct DeleteItemForm {
    #[validate(range(min = 1))]
    pub item_id: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeleteItemFormPayload {
    pub item_id: ItemId,
}

#[derive(Debug, Error)]
pub enum DeleteItemFormError {
    #[error("Delete item form validation failed: {0}")]
    Validation(String),
    #[error("Delete item form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for DeleteItemFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for DeleteItemFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<DeleteItemForm> for DeleteItemFormPayload {
    type Error = DeleteItemFormError;

    fn try_from(value: DeleteItemForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            item_id: ItemId::new(value.item_id)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_item_cleans_tags_and_price() {
        let form = AddItemForm {
            name: "Samosa".to_string(),
            description: Some("Classic Indian snack".to_string()),
            tags: vec![" Snacks ".to_string(), "".to_string(), "Veg".to_string()],
            price: 15.0,
            category_id: Some(2),
            available: Some(true),
            image: None,
        };

        let payload: AddItemFormPayload = form.try_into().unwrap();
        assert_eq!(payload.tags, vec!["Snacks", "Veg"]);
        assert_eq!(payload.price, 15.0);
        assert_eq!(payload.category_id.unwrap().get(), 2);
    }

    #[test]
    fn add_item_rejects_negative_price() {
        let form = AddItemForm {
            name: "Samosa".to_string(),
            description: None,
            tags: vec![],
            price: -1.0,
            category_id: None,
            available: None,
            image: None,
        };

        let payload: Result<AddItemFormPayload, _> = form.try_into();
        assert!(payload.is_err());
    }

    #[test]
    fn forms_deserialize_from_json() {
        let form: AddItemForm = serde_json::from_str(
            r#"{"name":"Idli","price":40.0,"tags":["Tiffins"],"available":true}"#,
        )
        .unwrap();
        let payload: AddItemFormPayload = form.try_into().unwrap();
        assert_eq!(payload.name.as_str(), "Idli");
        assert_eq!(payload.available, Some(true));
    }
}
