use crate::landscaping::Place;
use crate::planting::{Planting, PlantingDomain, PlantingError};

impl PlantingDomain {
    pub fn destroy_plant(
        &mut self,
        place: Place,
    ) -> Result<impl FnOnce() -> Vec<Planting> + '_, PlantingError> {
        self.get_plant(place)?;
        let command = move || {
            self.plants.remove(&place);
            vec![Planting::PlantDestroyed { place }]
        };
        Ok(command)
    }
}
