use crate::api::{ActionError, Event};
use crate::{occur, Game};

impl Game {
    pub(crate) fn select_item(&mut self, item: &str) -> Result<Vec<Event>, ActionError> {
        let kind = self.known.items.find(item)?;
        let select_item = self.inventory.select_item(kind.id);
        Ok(occur![select_item()])
    }
}
