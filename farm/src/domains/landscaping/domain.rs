use serde::{Deserialize, Serialize};

/// Cell coordinates as `[row, column]`.
pub type Place = [usize; 2];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Surface {
    Untilled,
    Soil,
    Grass,
    Obstacle,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Rectangular grid of surfaces, built only by [`Land::parse`].
pub struct Land {
    pub(crate) rows: usize,
    pub(crate) columns: usize,
    pub(crate) surface: Vec<Vec<Surface>>,
}

#[derive(Default)]
pub struct LandscapingDomain {
    pub land: Land,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Landscaping {
    SurfaceChanged { place: Place, surface: Surface },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LandscapingError {
    OutOfLand {
        place: Place,
    },
    InvalidSurface {
        place: Place,
        actual: Surface,
        expected: Surface,
    },
    EmptyMap,
    RaggedMap {
        row: usize,
        expected: usize,
        actual: usize,
    },
    UnknownSymbol {
        row: usize,
        column: usize,
        symbol: char,
    },
}
