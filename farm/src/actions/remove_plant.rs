use crate::api::{ActionError, Event};
use crate::landscaping::Place;
use crate::{occur, Game};

impl Game {
    pub(crate) fn remove_plant(&mut self, place: Place) -> Result<Vec<Event>, ActionError> {
        self.landscaping.get_surface(place)?;
        let destroy_plant = self.planting.destroy_plant(place)?;
        Ok(occur![destroy_plant()])
    }
}
