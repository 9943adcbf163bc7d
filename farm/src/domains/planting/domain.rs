use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::collections::Shared;
use crate::inventory::ItemKey;
use crate::landscaping::Place;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlantKey(pub usize);

#[derive(Debug)]
pub struct PlantKind {
    pub id: PlantKey,
    pub name: String,
    pub seed: ItemKey,
    pub days_to_mature: u8,
    pub product: ItemKey,
    pub quantity: u32,
    /// Regrows from the first stage after harvest instead of being destroyed.
    pub perennial: bool,
    pub needs_water: bool,
}

#[derive(Debug, Clone)]
pub struct Plant {
    pub kind: Shared<PlantKind>,
    pub place: Place,
    pub growth: u8,
    pub watered: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Growing(u8),
    Mature,
}

impl Plant {
    pub fn new(kind: Shared<PlantKind>, place: Place) -> Self {
        Self {
            kind,
            place,
            growth: 0,
            watered: false,
        }
    }

    pub fn is_mature(&self) -> bool {
        self.growth >= self.kind.days_to_mature
    }

    pub fn stage(&self) -> Stage {
        if self.is_mature() {
            Stage::Mature
        } else {
            Stage::Growing(self.growth)
        }
    }

    /// Advances one day. Returns whether the plant grew.
    pub fn grow(&mut self) -> bool {
        let thirsty = self.kind.needs_water && !self.watered;
        self.watered = false;
        if thirsty || self.is_mature() {
            return false;
        }
        self.growth += 1;
        true
    }
}

#[derive(Default)]
pub struct PlantingDomain {
    pub plants: HashMap<Place, Plant>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Harvest {
    pub item: ItemKey,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Planting {
    PlantCreated {
        place: Place,
        kind: PlantKey,
    },
    PlantWatered {
        place: Place,
    },
    PlantGrown {
        place: Place,
        growth: u8,
    },
    PlantHarvested {
        place: Place,
        item: ItemKey,
        quantity: u32,
    },
    PlantDestroyed {
        place: Place,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlantingError {
    PlaceOccupied {
        place: Place,
    },
    PlantNotFound {
        place: Place,
    },
    NotReadyToHarvest {
        place: Place,
        growth: u8,
        maturity: u8,
    },
}
