use crate::inventory::{InventoryDomain, ItemKey};

impl InventoryDomain {
    pub fn load_items(&mut self, money: u32, items: Vec<(ItemKey, u32)>) {
        self.money = money;
        self.items.clear();
        self.selected = None;
        for (item, quantity) in items {
            if quantity > 0 {
                self.items.insert(item, quantity);
            }
        }
    }
}
