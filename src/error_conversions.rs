//! Error conversion glue between layers.
//!
//! The domain layer must not depend on service/repository error types, so the
//! conversions live here instead of on the types themselves.

use crate::domain::types::TypeConstraintError;
use crate::forms::categories::{
    AddCategoryFormError, DeleteCategoryFormError, UpdateCategoryFormError,
};
use crate::forms::items::{AddItemFormError, DeleteItemFormError, UpdateItemFormError};
use crate::forms::orders::{OrderHistoryFormError, UpdateOrderStatusFormError};
use crate::repository::RepositoryError;
use crate::services::ServiceError;

impl From<TypeConstraintError> for ServiceError {
    fn from(val: TypeConstraintError) -> Self {
        ServiceError::TypeConstraint(val.to_string())
    }
}

impl From<TypeConstraintError> for RepositoryError {
    fn from(val: TypeConstraintError) -> Self {
        RepositoryError::Validation(val.to_string())
    }
}

impl From<AddCategoryFormError> for ServiceError {
    fn from(val: AddCategoryFormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}

impl From<UpdateCategoryFormError> for ServiceError {
    fn from(val: UpdateCategoryFormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}

impl From<DeleteCategoryFormError> for ServiceError {
    fn from(val: DeleteCategoryFormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}

impl From<AddItemFormError> for ServiceError {
    fn from(val: AddItemFormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}

impl From<UpdateItemFormError> for ServiceError {
    fn from(val: UpdateItemFormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}

impl From<DeleteItemFormError> for ServiceError {
    fn from(val: DeleteItemFormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}

impl From<OrderHistoryFormError> for ServiceError {
    fn from(val: OrderHistoryFormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}

impl From<UpdateOrderStatusFormError> for ServiceError {
    fn from(val: UpdateOrderStatusFormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}
