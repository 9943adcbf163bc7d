use crate::collections::{Dictionary, Shared};
use crate::inventory::{ItemKey, ItemKind};
use crate::landscaping::Place;
use crate::planting::{PlantKey, PlantKind};

/// Static game configuration: item catalogue, plant species and farmer setup.
#[derive(Default)]
pub struct Knowledge {
    pub items: Dictionary<ItemKey, ItemKind>,
    pub plants: Dictionary<PlantKey, PlantKind>,
    pub farmer: FarmerKind,
}

#[derive(Debug, Clone, Default)]
pub struct FarmerKind {
    pub max_energy: u32,
    pub move_cost: u32,
    pub money: u32,
    pub items: Vec<(ItemKey, u32)>,
    pub place: Place,
}

impl Knowledge {
    pub fn find_plant_by_seed(&self, seed: ItemKey) -> Option<Shared<PlantKind>> {
        self.plants.iter().find(|kind| kind.seed == seed).cloned()
    }
}
