use crate::landscaping::{Landscaping, LandscapingDomain, LandscapingError, Place, Surface};

impl LandscapingDomain {
    /// Reverts soil to untilled ground. Callers must make sure nothing grows there.
    pub fn untill_place(
        &mut self,
        place: Place,
    ) -> Result<impl FnOnce() -> Vec<Landscaping> + '_, LandscapingError> {
        let surface = self.land.get_surface(place)?;
        let land = &mut self.land;
        let command = move || {
            if surface != Surface::Soil {
                return vec![];
            }
            let [row, column] = place;
            land.surface[row][column] = Surface::Untilled;
            vec![Landscaping::SurfaceChanged {
                place,
                surface: Surface::Untilled,
            }]
        };
        Ok(command)
    }
}
