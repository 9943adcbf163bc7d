use crate::inventory::{Inventory, InventoryDomain, InventoryError, ItemKey};

impl InventoryDomain {
    /// Exchanges money for one unit of the item.
    pub fn buy_item(
        &mut self,
        item: ItemKey,
        price: u32,
    ) -> Result<impl FnOnce() -> Vec<Inventory> + '_, InventoryError> {
        let money = self
            .money
            .checked_sub(price)
            .ok_or(InventoryError::NotEnoughMoney {
                available: self.money,
                required: price,
            })?;
        let quantity = self
            .get_quantity(item)
            .checked_add(1)
            .ok_or(InventoryError::ItemQuantityOverflow { item })?;
        let command = move || {
            self.money = money;
            self.items.insert(item, quantity);
            vec![
                Inventory::MoneyChanged { money },
                Inventory::ItemQuantityChanged { item, quantity },
            ]
        };
        Ok(command)
    }

    /// Exchanges one unit of the item for money.
    pub fn sell_item(
        &mut self,
        item: ItemKey,
        price: u32,
    ) -> Result<impl FnOnce() -> Vec<Inventory> + '_, InventoryError> {
        let available = self.ensure_quantity(item, 1)?;
        let money = self
            .money
            .checked_add(price)
            .ok_or(InventoryError::MoneyOverflow)?;
        let command = move || {
            let quantity = available - 1;
            if quantity == 0 {
                self.items.remove(&item);
            } else {
                self.items.insert(item, quantity);
            }
            self.money = money;
            vec![
                Inventory::ItemQuantityChanged { item, quantity },
                Inventory::MoneyChanged { money },
            ]
        };
        Ok(command)
    }
}
