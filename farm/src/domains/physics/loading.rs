use crate::physics::{Body, PhysicsDomain};

impl PhysicsDomain {
    pub fn load_body(&mut self, body: Body) {
        self.body = body;
    }
}
