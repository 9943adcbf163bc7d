use log::debug;

pub use domains::*;

use crate::api::{Action, ActionError, Event};
use crate::data::DataError;
use crate::inventory::InventoryDomain;
use crate::landscaping::{Land, LandscapingDomain, Surface};
use crate::model::Knowledge;
use crate::physics::{Body, Direction, PhysicsDomain};
use crate::planting::PlantingDomain;
use crate::timing::TimingDomain;

mod actions;
pub mod api;
pub mod collections;
pub mod data;
mod domains;
pub mod math;
pub mod model;
mod rules;
mod update;
mod view;

/// Collects domain events into a flat stream, skipping domains which did nothing.
#[macro_export]
macro_rules! occur {
    ($($events:expr),* $(,)?) => {{
        let events: Vec<$crate::api::Event> = vec![$($events.into()),*];
        events
            .into_iter()
            .filter(|event| !event.is_empty())
            .collect::<Vec<$crate::api::Event>>()
    }};
}

pub struct Game {
    known: Knowledge,
    landscaping: LandscapingDomain,
    planting: PlantingDomain,
    physics: PhysicsDomain,
    inventory: InventoryDomain,
    timing: TimingDomain,
}

impl Game {
    pub fn new(known: Knowledge, land: Land) -> Result<Self, DataError> {
        let farmer = known.farmer.clone();
        match land.get_surface(farmer.place) {
            Ok(Surface::Obstacle) => {
                return Err(DataError::Invalid {
                    reason: format!("farmer starts on obstacle at {:?}", farmer.place),
                });
            }
            Ok(_) => {}
            Err(_) => {
                return Err(DataError::Invalid {
                    reason: format!("farmer starts outside of land at {:?}", farmer.place),
                });
            }
        }
        let mut game = Self {
            known,
            landscaping: LandscapingDomain::default(),
            planting: PlantingDomain::default(),
            physics: PhysicsDomain::default(),
            inventory: InventoryDomain::default(),
            timing: TimingDomain::default(),
        };
        game.landscaping.load_land(land);
        game.physics.load_body(Body {
            place: farmer.place,
            direction: Direction::Down,
            energy: farmer.max_energy,
            max_energy: farmer.max_energy,
        });
        game.inventory.load_items(farmer.money, farmer.items);
        Ok(game)
    }

    /// Applies one player command.
    ///
    /// Rejected commands leave the game untouched and return no events,
    /// only malformed commands (unknown names, places outside of land) fail.
    pub fn perform_action(&mut self, action: Action) -> Result<Vec<Event>, ActionError> {
        let result = match &action {
            Action::MoveFarmer { direction } => self.move_farmer(*direction),
            Action::TillSoil { place } => self.till_soil(*place),
            Action::UntillSoil { place } => self.untill_soil(*place),
            Action::PlantCrop { place, plant } => self.plant_crop(*place, plant),
            Action::WaterPlant { place } => self.water_plant(*place),
            Action::HarvestPlant { place } => self.harvest_plant(*place),
            Action::RemovePlant { place } => self.remove_plant(*place),
            Action::SelectItem { item } => self.select_item(item),
            Action::BuyItem { item } => self.buy_item(item),
            Action::SellItem { item } => self.sell_item(item),
            Action::NewDay => Ok(self.start_new_day()),
        };
        match result {
            Err(error) if error.is_rejection() => {
                debug!("Action {:?} rejected: {:?}", action, error);
                Ok(vec![])
            }
            result => result,
        }
    }
}
