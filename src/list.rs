use crate::model::ShoppingItem;
use crate::storage::{persist, read_collection, SharedStore, LIST_KEY};
use log::debug;
use uuid::Uuid;

/// The shopping list, mirrored into the store after every change
pub struct ShoppingList {
    items: Vec<ShoppingItem>,
    store: SharedStore,
}

impl ShoppingList {
    pub fn new(store: SharedStore) -> Self {
        Self {
            items: Vec::new(),
            store,
        }
    }

    pub fn items(&self) -> &[ShoppingItem] {
        &self.items
    }

    /// Append a new item under a fresh id and return it
    pub fn add_item(&mut self, count: f64, unit: &str, ingredient: &str) -> ShoppingItem {
        let item = ShoppingItem {
            id: Uuid::new_v4().to_string(),
            count,
            unit: unit.to_string(),
            ingredient: ingredient.to_string(),
        };
        self.items.push(item.clone());
        self.persist_data();
        item
    }

    /// Remove the item with `id`; returns whether anything was removed
    pub fn delete_item(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        let removed = self.items.len() != before;
        if removed {
            self.persist_data();
        }
        removed
    }

    /// Set the count of the item with `id`; returns whether it was found
    pub fn update_count(&mut self, id: &str, count: f64) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.count = count;
                self.persist_data();
                true
            }
            None => false,
        }
    }

    fn persist_data(&self) {
        persist(self.store.as_ref(), LIST_KEY, &self.items);
    }

    /// Replace the in-memory items with the stored ones, if any are stored
    pub fn read_storage(&mut self) {
        if let Some(items) = read_collection::<Vec<ShoppingItem>>(self.store.as_ref(), LIST_KEY) {
            debug!("Restored {} shopping list items", items.len());
            self.items = items;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use std::sync::Arc;

    fn new_list() -> (ShoppingList, SharedStore) {
        let store: SharedStore = Arc::new(MemoryStore::new());
        (ShoppingList::new(store.clone()), store)
    }

    #[test]
    fn test_add_item_appends_in_order() {
        let (mut list, _) = new_list();
        list.add_item(2.0, "cup", "flour");
        list.add_item(1.0, "", "egg");

        let names: Vec<&str> = list.items().iter().map(|i| i.ingredient.as_str()).collect();
        assert_eq!(names, ["flour", "egg"]);
    }

    #[test]
    fn test_ids_are_never_reused() {
        let (mut list, _) = new_list();
        let first = list.add_item(2.0, "cup", "flour");
        assert!(list.delete_item(&first.id));

        let second = list.add_item(2.0, "cup", "flour");
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_update_count() {
        let (mut list, _) = new_list();
        let item = list.add_item(2.0, "cup", "flour");

        assert!(list.update_count(&item.id, 3.5));
        assert_eq!(list.items()[0].count, 3.5);
        assert!(!list.update_count("missing", 1.0));
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let (mut list, _) = new_list();
        list.add_item(1.0, "", "egg");
        assert!(!list.delete_item("missing"));
        assert_eq!(list.items().len(), 1);
    }

    #[test]
    fn test_survives_reload() {
        let (mut list, store) = new_list();
        let first = list.add_item(2.0, "cup", "flour");
        list.add_item(1.0, "", "egg");
        list.add_item(3.0, "tbsp", "butter");
        list.update_count(&first.id, 2.5);

        let mut reloaded = ShoppingList::new(store);
        reloaded.read_storage();
        assert_eq!(reloaded.items(), list.items());
    }

    #[test]
    fn test_overflowed_count_does_not_lose_list_on_reload() {
        let (mut list, store) = new_list();
        list.add_item(2.0, "cup", "flour");
        list.add_item(1.0, "", "egg");
        // A finite count scaled past f64::MAX
        list.add_item(f64::MAX * 2.0, "cup", "sugar");

        let mut reloaded = ShoppingList::new(store);
        reloaded.read_storage();

        let names: Vec<&str> = reloaded.items().iter().map(|i| i.ingredient.as_str()).collect();
        assert_eq!(names, ["flour", "egg", "sugar"]);
        assert_eq!(reloaded.items()[0].count, 2.0);
        assert!(reloaded.items()[2].count.is_nan());
    }

    #[test]
    fn test_added_command_counts_survive_reload() {
        use crate::command::Command;

        let (mut list, store) = new_list();
        list.add_item(2.0, "cup", "flour");
        list.add_item(1.0, "", "egg");
        assert!("add 1e400/1 cup flour".parse::<Command>().is_err());

        let Ok(Command::AddItem { count, unit, ingredient }) = "add 3/4 cup milk".parse::<Command>()
        else {
            panic!("expected an add command");
        };
        list.add_item(count, &unit, &ingredient);

        let mut reloaded = ShoppingList::new(store);
        reloaded.read_storage();
        assert_eq!(reloaded.items(), list.items());
        assert_eq!(reloaded.items().len(), 3);
    }
}
