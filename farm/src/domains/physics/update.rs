use crate::physics::{Physics, PhysicsDomain};

impl PhysicsDomain {
    pub fn restore_energy(&mut self) -> Vec<Physics> {
        let body = &mut self.body;
        if body.energy == body.max_energy {
            return vec![];
        }
        body.energy = body.max_energy;
        vec![Physics::EnergyChanged {
            energy: body.energy,
        }]
    }
}
