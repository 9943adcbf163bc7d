use crate::landscaping::Place;
use crate::physics::{Direction, Physics, PhysicsDomain};

impl PhysicsDomain {
    /// Steps the body onto a destination already checked for passability.
    /// Energy never drops below zero, exhausted bodies still move.
    pub fn move_body(
        &mut self,
        direction: Direction,
        destination: Place,
        cost: u32,
    ) -> impl FnOnce() -> Vec<Physics> + '_ {
        let body = &mut self.body;
        move || {
            let mut events = vec![];
            if body.direction != direction {
                body.direction = direction;
                events.push(Physics::BodyTurned { direction });
            }
            body.place = destination;
            events.push(Physics::BodyMoved { place: destination });
            let energy = body.energy.saturating_sub(cost);
            if energy != body.energy {
                body.energy = energy;
                events.push(Physics::EnergyChanged { energy });
            }
            events
        }
    }
}
