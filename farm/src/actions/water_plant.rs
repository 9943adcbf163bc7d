use crate::api::{ActionError, Event};
use crate::landscaping::Place;
use crate::{occur, Game};

impl Game {
    pub(crate) fn water_plant(&mut self, place: Place) -> Result<Vec<Event>, ActionError> {
        self.landscaping.get_surface(place)?;
        let water_plant = self.planting.water_plant(place)?;
        Ok(occur![water_plant()])
    }
}
