use log::info;

use crate::api::Event;
use crate::{occur, Game};

impl Game {
    /// Grows every plant, rests the farmer and turns the calendar.
    /// None of the steps can fail, so the day always advances as a whole.
    pub(crate) fn start_new_day(&mut self) -> Vec<Event> {
        let planting_events = self.planting.grow_plants();
        let physics_events = self.physics.restore_energy();
        let timing_events = self.timing.start_day();
        info!(
            "Day {} started, {} plants grew",
            self.timing.days_elapsed,
            planting_events.len()
        );
        occur![planting_events, physics_events, timing_events]
    }
}
