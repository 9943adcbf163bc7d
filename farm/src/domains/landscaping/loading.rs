use std::fmt::{Display, Formatter};

use crate::landscaping::{Land, LandscapingDomain, LandscapingError, Surface};

impl Surface {
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'U' => Some(Surface::Untilled),
            'S' => Some(Surface::Soil),
            'G' => Some(Surface::Grass),
            '#' => Some(Surface::Obstacle),
            _ => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Surface::Untilled => 'U',
            Surface::Soil => 'S',
            Surface::Grass => 'G',
            Surface::Obstacle => '#',
        }
    }
}

impl Land {
    /// Parses map text: one line per row, one symbol per cell.
    pub fn parse(text: &str) -> Result<Self, LandscapingError> {
        let text = text.trim_end_matches(|symbol| symbol == '\n' || symbol == '\r');
        let mut surface: Vec<Vec<Surface>> = vec![];
        for (row, line) in text.lines().enumerate() {
            let cells = line
                .chars()
                .enumerate()
                .map(|(column, symbol)| {
                    Surface::from_symbol(symbol).ok_or(LandscapingError::UnknownSymbol {
                        row,
                        column,
                        symbol,
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            if let Some(first) = surface.first() {
                if first.len() != cells.len() {
                    return Err(LandscapingError::RaggedMap {
                        row,
                        expected: first.len(),
                        actual: cells.len(),
                    });
                }
            }
            surface.push(cells);
        }
        let columns = surface.first().map(Vec::len).unwrap_or(0);
        if columns == 0 {
            return Err(LandscapingError::EmptyMap);
        }
        Ok(Land {
            rows: surface.len(),
            columns,
            surface,
        })
    }
}

impl Display for Land {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in &self.surface {
            for surface in row {
                write!(f, "{}", surface.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Display for LandscapingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LandscapingError::OutOfLand { place } => {
                write!(f, "place {:?} is outside of land", place)
            }
            LandscapingError::InvalidSurface {
                place,
                actual,
                expected,
            } => write!(
                f,
                "place {:?} is {:?}, expected {:?}",
                place, actual, expected
            ),
            LandscapingError::EmptyMap => write!(f, "map is empty"),
            LandscapingError::RaggedMap {
                row,
                expected,
                actual,
            } => write!(
                f,
                "row {} has {} cells, expected {}",
                row, actual, expected
            ),
            LandscapingError::UnknownSymbol {
                row,
                column,
                symbol,
            } => write!(f, "unknown symbol {:?} at row {}, column {}", symbol, row, column),
        }
    }
}

impl LandscapingDomain {
    pub fn load_land(&mut self, land: Land) {
        self.land = land;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_map() {
        let land = Land::parse("GSU\n#GG\n").unwrap();
        assert_eq!(land.rows(), 2);
        assert_eq!(land.columns(), 3);
        assert_eq!(land.surface()[0][1], Surface::Soil);
        assert_eq!(land.surface()[1][0], Surface::Obstacle);
    }

    #[test]
    fn test_map_round_trip() {
        let text = "GGGG\nGSSU\nUU#G\n";
        let land = Land::parse(text).unwrap();
        assert_eq!(land.to_string(), text);
    }

    #[test]
    fn test_parse_map_with_windows_line_endings() {
        let land = Land::parse("GS\r\nUU\r\n").unwrap();
        assert_eq!(land.to_string(), "GS\nUU\n");
    }

    #[test]
    fn test_describe_map_error() {
        let error = Land::parse("GG\nGx\n").unwrap_err();
        assert_eq!(error.to_string(), "unknown symbol 'x' at row 1, column 1");
    }

    #[test]
    fn test_parse_ragged_map() {
        assert_eq!(
            Land::parse("GGG\nGG\n"),
            Err(LandscapingError::RaggedMap {
                row: 1,
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn test_parse_unknown_symbol() {
        assert_eq!(
            Land::parse("GG\nGx\n"),
            Err(LandscapingError::UnknownSymbol {
                row: 1,
                column: 1,
                symbol: 'x'
            })
        );
    }

    #[test]
    fn test_parse_empty_map() {
        assert_eq!(Land::parse(""), Err(LandscapingError::EmptyMap));
        assert_eq!(Land::parse("\n\n"), Err(LandscapingError::EmptyMap));
    }
}
