use crate::landscaping::{Land, LandscapingDomain, LandscapingError, Place, Surface};

impl Land {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn surface(&self) -> &[Vec<Surface>] {
        &self.surface
    }

    pub fn contains(&self, place: Place) -> bool {
        let [row, column] = place;
        row < self.rows && column < self.columns
    }

    pub fn get_surface(&self, place: Place) -> Result<Surface, LandscapingError> {
        if self.contains(place) {
            let [row, column] = place;
            Ok(self.surface[row][column])
        } else {
            Err(LandscapingError::OutOfLand { place })
        }
    }

    pub fn ensure_surface(
        &self,
        place: Place,
        expected: Surface,
    ) -> Result<Surface, LandscapingError> {
        let actual = self.get_surface(place)?;
        if actual != expected {
            Err(LandscapingError::InvalidSurface {
                place,
                actual,
                expected,
            })
        } else {
            Ok(actual)
        }
    }
}

impl LandscapingDomain {
    pub fn get_surface(&self, place: Place) -> Result<Surface, LandscapingError> {
        self.land.get_surface(place)
    }
}
