use crate::inventory::{Inventory, InventoryDomain, InventoryError, ItemKey};

impl InventoryDomain {
    pub fn increase_item(
        &mut self,
        item: ItemKey,
        quantity: u32,
    ) -> Result<impl FnOnce() -> Vec<Inventory> + '_, InventoryError> {
        let quantity = self
            .get_quantity(item)
            .checked_add(quantity)
            .ok_or(InventoryError::ItemQuantityOverflow { item })?;
        let command = move || {
            self.items.insert(item, quantity);
            vec![Inventory::ItemQuantityChanged { item, quantity }]
        };
        Ok(command)
    }
}
