use crate::landscaping::{Place, Surface};
use crate::Game;

impl Game {
    /// Plants never block the way, only obstacles and the land edge do.
    pub fn is_place_passable(&self, place: Place) -> bool {
        match self.landscaping.get_surface(place) {
            Ok(surface) => surface != Surface::Obstacle,
            Err(_) => false,
        }
    }
}
