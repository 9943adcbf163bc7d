use crate::api::{ActionError, Event};
use crate::inventory::InventoryError;
use crate::{occur, Game};

impl Game {
    pub(crate) fn buy_item(&mut self, item: &str) -> Result<Vec<Event>, ActionError> {
        let kind = self.known.items.find(item)?;
        let price = kind
            .buy_price
            .ok_or(InventoryError::ItemNotPurchasable { item: kind.id })?;
        let buy_item = self.inventory.buy_item(kind.id, price)?;
        Ok(occur![buy_item()])
    }
}
