use crate::inventory::{InventoryDomain, InventoryError, ItemKey};

impl InventoryDomain {
    pub fn get_quantity(&self, item: ItemKey) -> u32 {
        self.items.get(&item).copied().unwrap_or(0)
    }

    pub fn ensure_quantity(&self, item: ItemKey, required: u32) -> Result<u32, InventoryError> {
        let available = self.get_quantity(item);
        if available < required {
            Err(InventoryError::NotEnoughItems {
                item,
                available,
                required,
            })
        } else {
            Ok(available)
        }
    }
}
