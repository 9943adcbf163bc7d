use log::debug;

use crate::api::{ActionError, Event};
use crate::math::TileMath;
use crate::physics::Direction;
use crate::{occur, Game};

impl Game {
    /// Turns the farmer and steps one cell forward if the way is open.
    pub(crate) fn move_farmer(&mut self, direction: Direction) -> Result<Vec<Event>, ActionError> {
        let cost = self.known.farmer.move_cost;
        let destination = self
            .physics
            .body
            .place
            .add_offset(direction.offset())
            .filter(|place| self.is_place_passable(*place));
        let events = match destination {
            Some(destination) => {
                let move_body = self.physics.move_body(direction, destination, cost);
                occur![move_body()]
            }
            None => {
                debug!("Farmer path {:?} blocked", direction);
                let turn_body = self.physics.turn_body(direction);
                occur![turn_body()]
            }
        };
        Ok(events)
    }
}
