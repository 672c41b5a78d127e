//! Menu management: category cards, item listings with availability, CRUD.

use crate::domain::availability::{TimeOfDay, evaluate};
use crate::domain::types::{CategoryId, ItemId};
use crate::dto::menu::{CategoryCardDto, MenuItemDto};
use crate::forms::categories::{
    AddCategoryFormPayload, DeleteCategoryFormPayload, UpdateCategoryFormPayload,
};
use crate::forms::items::{AddItemFormPayload, DeleteItemFormPayload, UpdateItemFormPayload};
use crate::repository::{
    CategoryListQuery, CategoryReader, CategoryWriter, ItemListQuery, ItemReader, ItemWriter,
};

use super::{ServiceError, ServiceResult};

/// Category overview with item counts, as rendered on the menu landing page.
pub fn list_category_cards<R>(repo: &R) -> ServiceResult<Vec<CategoryCardDto>>
where
    R: CategoryReader,
{
    let counts = match repo.category_item_counts() {
        Ok(counts) => counts,
        Err(e) => {
            log::error!("Failed to count items per category: {e}");
            return Err(ServiceError::Internal);
        }
    };

    match repo.list_categories(CategoryListQuery::new()) {
        Ok((_total, categories)) => Ok(categories
            .into_iter()
            .map(|category| {
                let item_count = counts.get(&category.id).copied().unwrap_or(0);
                CategoryCardDto::from_category(category, item_count)
            })
            .collect()),
        Err(e) => {
            log::error!("Failed to list categories: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Items of one category, each carrying its availability verdict for the
/// caller-supplied clock reading.
pub fn show_menu<R>(
    category_id: CategoryId,
    now: TimeOfDay,
    repo: &R,
) -> ServiceResult<Vec<MenuItemDto>>
where
    R: CategoryReader + ItemReader,
{
    let category = match repo.get_category_by_id(category_id) {
        Ok(Some(category)) => category,
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get category: {e}");
            return Err(ServiceError::Internal);
        }
    };

    match repo.list_items(ItemListQuery::new().category(category_id)) {
        Ok((_total, items)) => Ok(items
            .into_iter()
            .map(|item| {
                let verdict = evaluate(Some(&item), Some(&category), now);
                MenuItemDto::new(item, verdict)
            })
            .collect()),
        Err(e) => {
            log::error!("Failed to list items: {e}");
            Err(ServiceError::Internal)
        }
    }
}

pub fn add_category<R>(payload: AddCategoryFormPayload, repo: &R) -> ServiceResult<bool>
where
    R: CategoryWriter,
{
    match repo.create_category(&payload.into_new_category()) {
        Ok(_) => Ok(true),
        Err(e) => {
            log::error!("Failed to create category: {e}");
            Ok(false)
        }
    }
}

pub fn update_category<R>(payload: UpdateCategoryFormPayload, repo: &R) -> ServiceResult<bool>
where
    R: CategoryReader + CategoryWriter,
{
    match repo.get_category_by_id(payload.category_id) {
        Ok(Some(_)) => {}
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get category: {e}");
            return Err(ServiceError::Internal);
        }
    }

    match repo.update_category(
        payload.category_id,
        &payload.name,
        payload.window,
        payload.image.as_ref(),
    ) {
        Ok(_) => Ok(true),
        Err(e) => {
            log::error!("Failed to update category: {e}");
            Ok(false)
        }
    }
}

pub fn delete_category<R>(payload: DeleteCategoryFormPayload, repo: &R) -> ServiceResult<bool>
where
    R: CategoryReader + CategoryWriter,
{
    match repo.get_category_by_id(payload.category_id) {
        Ok(Some(_)) => {}
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get category: {e}");
            return Err(ServiceError::Internal);
        }
    }

    match repo.delete_category(payload.category_id) {
        Ok(_) => Ok(true),
        Err(e) => {
            log::error!("Failed to delete category: {e}");
            Ok(false)
        }
    }
}

pub fn add_item<R>(payload: AddItemFormPayload, repo: &R) -> ServiceResult<bool>
where
    R: CategoryReader + ItemWriter,
{
    if let Some(category_id) = payload.category_id {
        match repo.get_category_by_id(category_id) {
            Ok(Some(_)) => {}
            Ok(None) => return Err(ServiceError::NotFound),
            Err(e) => {
                log::error!("Failed to get category: {e}");
                return Err(ServiceError::Internal);
            }
        }
    }

    match repo.create_item(&payload.into_new_item()) {
        Ok(_) => Ok(true),
        Err(e) => {
            log::error!("Failed to create item: {e}");
            Ok(false)
        }
    }
}

pub fn update_item<R>(payload: UpdateItemFormPayload, repo: &R) -> ServiceResult<bool>
where
    R: ItemReader + ItemWriter,
{
    match repo.get_item_by_id(payload.item_id) {
        Ok(Some(_)) => {}
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get item: {e}");
            return Err(ServiceError::Internal);
        }
    }

    let item_id = payload.item_id;
    match repo.update_item(item_id, &payload.into_new_item()) {
        Ok(_) => Ok(true),
        Err(e) => {
            log::error!("Failed to update item: {e}");
            Ok(false)
        }
    }
}

/// Flip the explicit stock flag (`ava`) of an item.
pub fn toggle_item_stock<R>(item_id: ItemId, available: bool, repo: &R) -> ServiceResult<bool>
where
    R: ItemReader + ItemWriter,
{
    match repo.get_item_by_id(item_id) {
        Ok(Some(_)) => {}
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get item: {e}");
            return Err(ServiceError::Internal);
        }
    }

    match repo.set_item_availability(item_id, available) {
        Ok(_) => Ok(true),
        Err(e) => {
            log::error!("Failed to set item availability: {e}");
            Ok(false)
        }
    }
}

pub fn delete_item<R>(payload: DeleteItemFormPayload, repo: &R) -> ServiceResult<bool>
where
    R: ItemReader + ItemWriter,
{
    match repo.get_item_by_id(payload.item_id) {
        Ok(Some(_)) => {}
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get item: {e}");
            return Err(ServiceError::Internal);
        }
    }

    match repo.delete_item(payload.item_id) {
        Ok(_) => Ok(true),
        Err(e) => {
            log::error!("Failed to delete item: {e}");
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::availability::ServiceWindow;
    use crate::domain::category::Category;
    use crate::domain::item::Item;
    use crate::domain::types::{CategoryName, ItemName, Price};
    use crate::repository::test::TestRepository;
    use chrono::DateTime;

    fn sample_category(id: i32, name: &str, window: ServiceWindow) -> Category {
        let now = DateTime::from_timestamp(0, 0).unwrap().naive_utc();
        Category {
            id: CategoryId::new(id).unwrap(),
            name: CategoryName::new(name).unwrap(),
            window,
            image: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn sample_item(id: i32, category_id: i32, name: &str, available: Option<bool>) -> Item {
        let now = DateTime::from_timestamp(0, 0).unwrap().naive_utc();
        Item {
            id: ItemId::new(id).unwrap(),
            category_id: Some(CategoryId::new(category_id).unwrap()),
            name: ItemName::new(name).unwrap(),
            description: None,
            tags: vec![],
            price: Price::new(60.0).unwrap(),
            available,
            image: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn category_cards_carry_item_counts() {
        let repo = TestRepository::new(
            vec![
                sample_category(1, "Tiffins", ServiceWindow::always_open()),
                sample_category(2, "Snacks", ServiceWindow::always_open()),
            ],
            vec![
                sample_item(1, 1, "Masala Dosa", Some(true)),
                sample_item(2, 1, "Idli", Some(true)),
            ],
            vec![],
        );

        let cards = list_category_cards(&repo).unwrap();
        assert_eq!(cards.len(), 2);
        // Sorted by name.
        assert_eq!(cards[0].name, "Snacks");
        assert_eq!(cards[0].item_count, 0);
        assert_eq!(cards[1].name, "Tiffins");
        assert_eq!(cards[1].item_count, 2);
    }

    #[test]
    fn show_menu_evaluates_each_item() {
        let window = ServiceWindow::parse(Some("08:00"), Some("20:00"));
        let repo = TestRepository::new(
            vec![sample_category(1, "Tiffins", window)],
            vec![
                sample_item(1, 1, "Masala Dosa", Some(true)),
                sample_item(2, 1, "Paneer Tikka", Some(false)),
            ],
            vec![],
        );

        let items = show_menu(
            CategoryId::new(1).unwrap(),
            TimeOfDay::new(12, 0),
            &repo,
        )
        .unwrap();
        assert_eq!(items.len(), 2);

        let dosa = items.iter().find(|i| i.name == "Masala Dosa").unwrap();
        assert!(dosa.availability.available);
        assert!(dosa.in_stock);

        let tikka = items.iter().find(|i| i.name == "Paneer Tikka").unwrap();
        assert!(!tikka.availability.available);
        assert_eq!(tikka.availability.reason, Some("out_of_stock"));
        assert!(!tikka.in_stock);
    }

    #[test]
    fn show_menu_flags_out_of_hours_items() {
        let window = ServiceWindow::parse(Some("08:00"), Some("11:00"));
        let repo = TestRepository::new(
            vec![sample_category(1, "Tiffins", window)],
            vec![sample_item(1, 1, "Masala Dosa", Some(true))],
            vec![],
        );

        let items = show_menu(
            CategoryId::new(1).unwrap(),
            TimeOfDay::new(15, 0),
            &repo,
        )
        .unwrap();
        assert_eq!(items[0].availability.reason, Some("out_of_hours"));
        // The stock toggle still reflects the explicit flag.
        assert!(items[0].in_stock);
    }

    #[test]
    fn show_menu_unknown_category_is_not_found() {
        let repo = TestRepository::default();
        let result = show_menu(CategoryId::new(9).unwrap(), TimeOfDay::new(12, 0), &repo);
        assert_eq!(result.unwrap_err(), ServiceError::NotFound);
    }

    #[test]
    fn toggle_item_stock_updates_the_flag() {
        let repo = TestRepository::new(
            vec![sample_category(1, "Tiffins", ServiceWindow::always_open())],
            vec![sample_item(1, 1, "Masala Dosa", Some(true))],
            vec![],
        );

        let item_id = ItemId::new(1).unwrap();
        assert!(toggle_item_stock(item_id, false, &repo).unwrap());
        let item = repo.get_item_by_id(item_id).unwrap().unwrap();
        assert_eq!(item.available, Some(false));
    }

    #[test]
    fn toggle_item_stock_missing_item_is_not_found() {
        let repo = TestRepository::default();
        let result = toggle_item_stock(ItemId::new(5).unwrap(), true, &repo);
        assert_eq!(result.unwrap_err(), ServiceError::NotFound);
    }
}
