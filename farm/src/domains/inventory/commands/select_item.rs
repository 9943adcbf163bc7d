use crate::inventory::{Inventory, InventoryDomain, ItemKey};

impl InventoryDomain {
    pub fn select_item(&mut self, item: ItemKey) -> impl FnOnce() -> Vec<Inventory> + '_ {
        move || {
            if self.selected == Some(item) {
                return vec![];
            }
            self.selected = Some(item);
            vec![Inventory::ItemSelected { item }]
        }
    }
}
