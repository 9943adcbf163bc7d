use crate::api::{ActionError, Event};
use crate::landscaping::Place;
use crate::{occur, Game};

impl Game {
    pub(crate) fn untill_soil(&mut self, place: Place) -> Result<Vec<Event>, ActionError> {
        self.landscaping.get_surface(place)?;
        self.planting.ensure_place_free(place)?;
        let untill_place = self.landscaping.untill_place(place)?;
        Ok(occur![untill_place()])
    }
}
