use crate::api::{ActionError, Event};
use crate::landscaping::{Place, Surface};
use crate::{occur, Game};

impl Game {
    /// Plants a crop from one seed of the player's inventory.
    /// The seed is spent only if the plant takes root.
    pub(crate) fn plant_crop(&mut self, place: Place, plant: &str) -> Result<Vec<Event>, ActionError> {
        let kind = self.known.plants.find(plant)?;
        self.landscaping.land.ensure_surface(place, Surface::Soil)?;
        let decrease_item = self.inventory.decrease_item(kind.seed, 1)?;
        let create_plant = self.planting.create_plant(place, &kind)?;
        Ok(occur![decrease_item(), create_plant()])
    }
}
