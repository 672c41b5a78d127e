use chrono::Utc;
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::availability::ServiceWindow;
use crate::domain::category::NewCategory;
use crate::domain::types::{CategoryId, CategoryName, ImagePath, TypeConstraintError};

fn optional_image(value: Option<String>) -> Result<Option<ImagePath>, TypeConstraintError> {
    match value {
        Some(image) if !image.trim().is_empty() => Ok(Some(ImagePath::new(image)?)),
        _ => Ok(None),
    }
}

#[derive(Deserialize, Validate)]
pub struct AddCategoryForm {
    #[validate(length(min = 1))]
    pub name: String,
    /// Daily service window bounds as `HH:MM`; unparsable or missing values
    /// leave the corresponding bound open.
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AddCategoryFormPayload {
    pub name: CategoryName,
    pub window: ServiceWindow,
    pub image: Option<ImagePath>,
}

impl AddCategoryFormPayload {
    pub fn into_new_category(self) -> NewCategory {
        let now = Utc::now().naive_utc();
        NewCategory {
            name: self.name,
            window: self.window,
            image: self.image,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Error)]
pub enum AddCategoryFormError {
    #[error("Add category form validation failed: {0}")]
    Validation(String),
    #[error("Add category form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for AddCategoryFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for AddCategoryFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<AddCategoryForm> for AddCategoryFormPayload {
    type Error = AddCategoryFormError;

    fn try_from(value: AddCategoryForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            name: CategoryName::new(value.name)?,
            window: ServiceWindow::parse(value.start_time.as_deref(), value.end_time.as_deref()),
            image: optional_image(value.image)?,
        })
    }
}

#[derive(Deserialize, Validate)]
pub struct UpdateCategoryForm {
    #[validate(range(min = 1))]
    pub category_id: i32,
    #[validate(length(min = 1))]
    pub name: String,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateCategoryFormPayload {
    pub category_id: CategoryId,
    pub name: CategoryName,
    pub window: ServiceWindow,
    pub image: Option<ImagePath>,
}

#[derive(Debug, Error)]
pub enum UpdateCategoryFormError {
    #[error("Update category form validation failed: {0}")]
    Validation(String),
    #[error("Update category form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for UpdateCategoryFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for UpdateCategoryFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<UpdateCategoryForm> for UpdateCategoryFormPayload {
    type Error = UpdateCategoryFormError;

    fn try_from(value: UpdateCategoryForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            category_id: CategoryId::new(value.category_id)?,
            name: CategoryName::new(value.name)?,
            window: ServiceWindow::parse(value.start_time.as_deref(), value.end_time.as_deref()),
            image: optional_image(value.image)?,
        })
    }
}

#[derive(Deserialize, Validate)]
pub struct DeleteCategoryForm {
    #[validate(range(min = 1))]
    pub category_id: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeleteCategoryFormPayload {
    pub category_id: CategoryId,
}

#[derive(Debug, Error)]
pub enum DeleteCategoryFormError {
    #[error("Delete category form validation failed: {0}")]
    Validation(String),
    #[error("Delete category form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for DeleteCategoryFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for DeleteCategoryFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<DeleteCategoryForm> for DeleteCategoryFormPayload {
    type Error = DeleteCategoryFormError;

    fn try_from(value: DeleteCategoryForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            category_id: CategoryId::new(value.category_id)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::availability::TimeOfDay;

    #[test]
    fn add_category_parses_window_bounds() {
        let form = AddCategoryForm {
            name: " Tiffins ".to_string(),
            start_time: Some("08:00".to_string()),
            end_time: Some("11:30".to_string()),
            image: None,
        };

        let payload: AddCategoryFormPayload = form.try_into().unwrap();
        assert_eq!(payload.name.as_str(), "Tiffins");
        assert_eq!(payload.window.start, Some(TimeOfDay::new(8, 0)));
        assert_eq!(payload.window.end, Some(TimeOfDay::new(11, 30)));
    }

    #[test]
    fn add_category_keeps_malformed_window_open() {
        let form = AddCategoryForm {
            name: "Beverages".to_string(),
            start_time: Some("whenever".to_string()),
            end_time: Some("17:00".to_string()),
            image: None,
        };

        let payload: AddCategoryFormPayload = form.try_into().unwrap();
        assert_eq!(payload.window.start, None);
        assert!(payload.window.contains(TimeOfDay::new(3, 0)));
    }

    #[test]
    fn add_category_rejects_blank_names() {
        let form = AddCategoryForm {
            name: "   ".to_string(),
            start_time: None,
            end_time: None,
            image: None,
        };

        let payload: Result<AddCategoryFormPayload, _> = form.try_into();
        assert!(payload.is_err());
    }

    #[test]
    fn update_category_validates_id() {
        let form = UpdateCategoryForm {
            category_id: 0,
            name: "Snacks".to_string(),
            start_time: None,
            end_time: None,
            image: None,
        };

        let payload: Result<UpdateCategoryFormPayload, _> = form.try_into();
        assert!(payload.is_err());
    }
}
