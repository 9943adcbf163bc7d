pub type Tile = [usize; 2];

pub trait TileMath {
    fn add_offset(self, offset: [isize; 2]) -> Option<Self>
    where
        Self: Sized;
}

impl TileMath for Tile {
    fn add_offset(self, offset: [isize; 2]) -> Option<Self> {
        let row = self[0].checked_add_signed(offset[0])?;
        let column = self[1].checked_add_signed(offset[1])?;
        Some([row, column])
    }
}
