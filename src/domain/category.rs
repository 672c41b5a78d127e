use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::availability::ServiceWindow;
use crate::domain::types::{CategoryId, CategoryName, ImagePath};

/// Canonical menu category record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: CategoryName,
    /// Daily service window; incomplete configuration means always open.
    pub window: ServiceWindow,
    pub image: Option<ImagePath>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Data required to insert a new [`Category`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewCategory {
    pub name: CategoryName,
    pub window: ServiceWindow,
    pub image: Option<ImagePath>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
