use crate::api::{ActionError, Event};
use crate::{occur, Game};

impl Game {
    pub(crate) fn sell_item(&mut self, item: &str) -> Result<Vec<Event>, ActionError> {
        let kind = self.known.items.find(item)?;
        let sell_item = self.inventory.sell_item(kind.id, kind.sell_price)?;
        Ok(occur![sell_item()])
    }
}
