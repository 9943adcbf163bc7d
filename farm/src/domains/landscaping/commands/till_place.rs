use crate::landscaping::{Landscaping, LandscapingDomain, LandscapingError, Place, Surface};

impl LandscapingDomain {
    pub fn till_place(
        &mut self,
        place: Place,
    ) -> Result<impl FnOnce() -> Vec<Landscaping> + '_, LandscapingError> {
        let surface = self.land.get_surface(place)?;
        let land = &mut self.land;
        let command = move || {
            if surface != Surface::Untilled {
                return vec![];
            }
            let [row, column] = place;
            land.surface[row][column] = Surface::Soil;
            vec![Landscaping::SurfaceChanged {
                place,
                surface: Surface::Soil,
            }]
        };
        Ok(command)
    }
}
