use crate::planting::{Planting, PlantingDomain};

impl PlantingDomain {
    pub fn grow_plants(&mut self) -> Vec<Planting> {
        let mut events = vec![];
        for plant in self.plants.values_mut() {
            if plant.grow() {
                events.push(Planting::PlantGrown {
                    place: plant.place,
                    growth: plant.growth,
                });
            }
        }
        events
    }
}
