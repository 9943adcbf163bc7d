use crate::landscaping::Place;
use crate::planting::Planting::{PlantDestroyed, PlantGrown, PlantHarvested};
use crate::planting::PlantingError::NotReadyToHarvest;
use crate::planting::{Harvest, Planting, PlantingDomain, PlantingError};

impl PlantingDomain {
    pub fn harvest_plant<'operation>(
        &'operation mut self,
        place: Place,
    ) -> Result<(Harvest, impl FnOnce() -> Vec<Planting> + 'operation), PlantingError> {
        let plant = self.get_plant(place)?;
        if !plant.is_mature() {
            return Err(NotReadyToHarvest {
                place,
                growth: plant.growth,
                maturity: plant.kind.days_to_mature,
            });
        }
        let kind = plant.kind.clone();
        let harvest = Harvest {
            item: kind.product,
            quantity: kind.quantity,
        };
        let operation = move || {
            let mut events = vec![PlantHarvested {
                place,
                item: harvest.item,
                quantity: harvest.quantity,
            }];
            if kind.perennial {
                if let Some(plant) = self.plants.get_mut(&place) {
                    plant.growth = 0;
                }
                events.push(PlantGrown { place, growth: 0 });
            } else {
                self.plants.remove(&place);
                events.push(PlantDestroyed { place });
            }
            events
        };
        Ok((harvest, operation))
    }
}
