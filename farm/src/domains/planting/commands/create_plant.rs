use crate::collections::Shared;
use crate::landscaping::Place;
use crate::planting::{Plant, PlantKind, Planting, PlantingDomain, PlantingError};

impl PlantingDomain {
    pub fn create_plant<'operation>(
        &'operation mut self,
        place: Place,
        kind: &Shared<PlantKind>,
    ) -> Result<impl FnOnce() -> Vec<Planting> + 'operation, PlantingError> {
        self.ensure_place_free(place)?;
        let plant = Plant::new(kind.clone(), place);
        let operation = move || {
            let kind = plant.kind.id;
            self.plants.insert(place, plant);
            vec![Planting::PlantCreated { place, kind }]
        };
        Ok(operation)
    }
}
