use std::collections::HashMap;

use crate::collections::{DictionaryError, Shared};
use crate::inventory::{ItemKey, ItemKind};
use crate::landscaping::{Land, LandscapingError, Place, Surface};
use crate::model::Knowledge;
use crate::physics::Direction;
use crate::planting::Plant;
use crate::Game;

impl Game {
    pub fn known(&self) -> &Knowledge {
        &self.known
    }

    /// Land size as `[rows, columns]`.
    pub fn get_dimensions(&self) -> [usize; 2] {
        let land = &self.landscaping.land;
        [land.rows(), land.columns()]
    }

    pub fn get_land(&self) -> &Land {
        &self.landscaping.land
    }

    pub fn get_surface(&self, place: Place) -> Result<Surface, LandscapingError> {
        self.landscaping.get_surface(place)
    }

    pub fn get_plants(&self) -> &HashMap<Place, Plant> {
        &self.planting.plants
    }

    pub fn get_plant(&self, place: Place) -> Option<&Plant> {
        self.planting.plants.get(&place)
    }

    pub fn get_farmer_place(&self) -> Place {
        self.physics.body.place
    }

    pub fn get_farmer_direction(&self) -> Direction {
        self.physics.body.direction
    }

    pub fn get_farmer_energy(&self) -> u32 {
        self.physics.body.energy
    }

    pub fn get_money(&self) -> u32 {
        self.inventory.money
    }

    pub fn get_selected_item(&self) -> Option<Shared<ItemKind>> {
        self.inventory
            .selected
            .and_then(|item| self.known.items.get(item).ok())
    }

    pub fn get_items(&self) -> &HashMap<ItemKey, u32> {
        &self.inventory.items
    }

    pub fn get_item_quantity(&self, item: &str) -> Result<u32, DictionaryError> {
        let kind = self.known.items.find(item)?;
        Ok(self.inventory.get_quantity(kind.id))
    }

    pub fn get_days_elapsed(&self) -> u32 {
        self.timing.days_elapsed
    }
}
