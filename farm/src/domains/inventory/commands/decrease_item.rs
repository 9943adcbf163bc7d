use crate::inventory::{Inventory, InventoryDomain, InventoryError, ItemKey};

impl InventoryDomain {
    pub fn decrease_item(
        &mut self,
        item: ItemKey,
        quantity: u32,
    ) -> Result<impl FnOnce() -> Vec<Inventory> + '_, InventoryError> {
        let available = self.ensure_quantity(item, quantity)?;
        let command = move || {
            let quantity = available - quantity;
            if quantity == 0 {
                self.items.remove(&item);
            } else {
                self.items.insert(item, quantity);
            }
            vec![Inventory::ItemQuantityChanged { item, quantity }]
        };
        Ok(command)
    }
}
