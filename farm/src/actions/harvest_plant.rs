use crate::api::{ActionError, Event};
use crate::landscaping::Place;
use crate::{occur, Game};

impl Game {
    pub(crate) fn harvest_plant(&mut self, place: Place) -> Result<Vec<Event>, ActionError> {
        self.landscaping.get_surface(place)?;
        let (harvest, harvest_plant) = self.planting.harvest_plant(place)?;
        let increase_item = self
            .inventory
            .increase_item(harvest.item, harvest.quantity)?;
        Ok(occur![harvest_plant(), increase_item()])
    }
}
