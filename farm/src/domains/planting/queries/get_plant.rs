use crate::landscaping::Place;
use crate::planting::{Plant, PlantingDomain, PlantingError};

impl PlantingDomain {
    pub fn get_plant(&self, place: Place) -> Result<&Plant, PlantingError> {
        self.plants
            .get(&place)
            .ok_or(PlantingError::PlantNotFound { place })
    }

    pub fn get_plant_mut(&mut self, place: Place) -> Result<&mut Plant, PlantingError> {
        self.plants
            .get_mut(&place)
            .ok_or(PlantingError::PlantNotFound { place })
    }

    pub fn ensure_place_free(&self, place: Place) -> Result<(), PlantingError> {
        if self.plants.contains_key(&place) {
            Err(PlantingError::PlaceOccupied { place })
        } else {
            Ok(())
        }
    }
}
