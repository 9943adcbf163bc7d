use serde::{Deserialize, Serialize};

use crate::collections::DictionaryError;
use crate::inventory::{Inventory, InventoryError};
use crate::landscaping::{Landscaping, LandscapingError, Place};
use crate::physics::{Direction, Physics};
use crate::planting::{Planting, PlantingError};
use crate::timing::Timing;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    MoveFarmer { direction: Direction },
    TillSoil { place: Place },
    UntillSoil { place: Place },
    PlantCrop { place: Place, plant: String },
    WaterPlant { place: Place },
    HarvestPlant { place: Place },
    RemovePlant { place: Place },
    SelectItem { item: String },
    BuyItem { item: String },
    SellItem { item: String },
    NewDay,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    Landscaping(Vec<Landscaping>),
    Planting(Vec<Planting>),
    Physics(Vec<Physics>),
    Inventory(Vec<Inventory>),
    Timing(Vec<Timing>),
}

impl Event {
    pub fn is_empty(&self) -> bool {
        match self {
            Event::Landscaping(events) => events.is_empty(),
            Event::Planting(events) => events.is_empty(),
            Event::Physics(events) => events.is_empty(),
            Event::Inventory(events) => events.is_empty(),
            Event::Timing(events) => events.is_empty(),
        }
    }
}

impl From<Vec<Landscaping>> for Event {
    fn from(events: Vec<Landscaping>) -> Self {
        Event::Landscaping(events)
    }
}

impl From<Vec<Planting>> for Event {
    fn from(events: Vec<Planting>) -> Self {
        Event::Planting(events)
    }
}

impl From<Vec<Physics>> for Event {
    fn from(events: Vec<Physics>) -> Self {
        Event::Physics(events)
    }
}

impl From<Vec<Inventory>> for Event {
    fn from(events: Vec<Inventory>) -> Self {
        Event::Inventory(events)
    }
}

impl From<Vec<Timing>> for Event {
    fn from(events: Vec<Timing>) -> Self {
        Event::Timing(events)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionError {
    Landscaping(LandscapingError),
    Planting(PlantingError),
    Inventory(InventoryError),
    Dictionary(DictionaryError),
}

impl ActionError {
    /// Rejections are unmet preconditions of a well-formed action.
    /// They leave the game untouched and never interrupt the player.
    pub fn is_rejection(&self) -> bool {
        match self {
            ActionError::Landscaping(LandscapingError::InvalidSurface { .. }) => true,
            ActionError::Landscaping(_) => false,
            ActionError::Planting(_) => true,
            ActionError::Inventory(InventoryError::ItemNotPurchasable { .. }) => false,
            ActionError::Inventory(_) => true,
            ActionError::Dictionary(_) => false,
        }
    }
}

impl From<LandscapingError> for ActionError {
    fn from(error: LandscapingError) -> Self {
        Self::Landscaping(error)
    }
}

impl From<PlantingError> for ActionError {
    fn from(error: PlantingError) -> Self {
        Self::Planting(error)
    }
}

impl From<InventoryError> for ActionError {
    fn from(error: InventoryError) -> Self {
        Self::Inventory(error)
    }
}

impl From<DictionaryError> for ActionError {
    fn from(error: DictionaryError) -> Self {
        Self::Dictionary(error)
    }
}
