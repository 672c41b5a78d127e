use crate::domain::availability::Availability;
use crate::domain::category::Category;
use crate::domain::item::Item;

/// Category card on the menu overview screen.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryCardDto {
    pub id: i32,
    pub name: String,
    pub item_count: i64,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub image: Option<String>,
}

impl CategoryCardDto {
    pub fn from_category(category: Category, item_count: i64) -> Self {
        Self {
            id: category.id.get(),
            name: category.name.into_inner(),
            item_count,
            start_time: category.window.start.map(|t| t.to_string()),
            end_time: category.window.end.map(|t| t.to_string()),
            image: category.image.map(Into::into),
        }
    }
}

/// Availability verdict in the shape the item card renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvailabilityDto {
    pub available: bool,
    /// Stable reason code when unavailable (`out_of_stock`, `out_of_hours`).
    pub reason: Option<&'static str>,
}

impl From<Availability> for AvailabilityDto {
    fn from(value: Availability) -> Self {
        Self {
            available: value.is_available(),
            reason: value.reason().map(|r| r.as_str()),
        }
    }
}

/// Menu item card with its computed availability.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItemDto {
    pub id: i32,
    pub category_id: Option<i32>,
    pub name: String,
    pub description: Option<String>,
    pub tags: Vec<String>,
    pub price: f64,
    /// The explicit stock flag driving the "In Stock" toggle.
    pub in_stock: bool,
    pub availability: AvailabilityDto,
    pub image: Option<String>,
}

impl MenuItemDto {
    pub fn new(item: Item, verdict: Availability) -> Self {
        Self {
            in_stock: !item.is_out_of_stock(),
            id: item.id.get(),
            category_id: item.category_id.map(Into::into),
            name: item.name.into_inner(),
            description: item.description.map(Into::into),
            tags: item.tags,
            price: item.price.get(),
            availability: verdict.into(),
            image: item.image.map(Into::into),
        }
    }
}
