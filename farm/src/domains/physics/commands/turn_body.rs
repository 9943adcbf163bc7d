use crate::physics::{Direction, Physics, PhysicsDomain};

impl PhysicsDomain {
    pub fn turn_body(&mut self, direction: Direction) -> impl FnOnce() -> Vec<Physics> + '_ {
        let body = &mut self.body;
        move || {
            if body.direction == direction {
                return vec![];
            }
            body.direction = direction;
            vec![Physics::BodyTurned { direction }]
        }
    }
}
