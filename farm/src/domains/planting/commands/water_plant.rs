use crate::landscaping::Place;
use crate::planting::{Planting, PlantingDomain, PlantingError};

impl PlantingDomain {
    pub fn water_plant<'operation>(
        &'operation mut self,
        place: Place,
    ) -> Result<impl FnOnce() -> Vec<Planting> + 'operation, PlantingError> {
        let plant = self.get_plant_mut(place)?;
        let operation = move || {
            if plant.watered || !plant.kind.needs_water {
                return vec![];
            }
            plant.watered = true;
            vec![Planting::PlantWatered { place }]
        };
        Ok(operation)
    }
}
