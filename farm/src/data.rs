use std::fmt;
use std::fs;
use std::path::Path;

use log::info;
use serde::Deserialize;

use crate::collections::{DictionaryError, Sequence};
use crate::inventory::{ItemKey, ItemKind};
use crate::landscaping::{Land, LandscapingError, Place};
use crate::model::{FarmerKind, Knowledge};
use crate::planting::{PlantKey, PlantKind};
use crate::Game;

#[derive(Debug)]
pub enum DataError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Landscaping(LandscapingError),
    Dictionary(DictionaryError),
    Invalid { reason: String },
}

impl From<std::io::Error> for DataError {
    fn from(error: std::io::Error) -> Self {
        Self::Io(error)
    }
}

impl From<serde_json::Error> for DataError {
    fn from(error: serde_json::Error) -> Self {
        Self::Json(error)
    }
}

impl From<LandscapingError> for DataError {
    fn from(error: LandscapingError) -> Self {
        Self::Landscaping(error)
    }
}

impl From<DictionaryError> for DataError {
    fn from(error: DictionaryError) -> Self {
        Self::Dictionary(error)
    }
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataError::Io(error) => write!(f, "{error}"),
            DataError::Json(error) => write!(f, "knowledge parse error: {error}"),
            DataError::Landscaping(error) => write!(f, "map error: {error}"),
            DataError::Dictionary(error) => write!(f, "knowledge reference error: {error}"),
            DataError::Invalid { reason } => write!(f, "invalid data: {reason}"),
        }
    }
}

impl std::error::Error for DataError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DataError::Io(error) => Some(error),
            DataError::Json(error) => Some(error),
            _ => None,
        }
    }
}

#[derive(Deserialize)]
struct KnowledgeData {
    items: Vec<ItemData>,
    plants: Vec<PlantData>,
    farmer: FarmerData,
}

#[derive(Deserialize)]
struct ItemData {
    name: String,
    #[serde(default)]
    buy_price: Option<u32>,
    sell_price: u32,
}

#[derive(Deserialize)]
struct PlantData {
    name: String,
    seed: String,
    days_to_mature: u8,
    product: String,
    quantity: u32,
    #[serde(default)]
    perennial: bool,
    #[serde(default)]
    needs_water: bool,
}

#[derive(Deserialize)]
struct StackData {
    item: String,
    quantity: u32,
}

#[derive(Deserialize)]
struct FarmerData {
    max_energy: u32,
    move_cost: u32,
    #[serde(default)]
    money: u32,
    #[serde(default)]
    items: Vec<StackData>,
    #[serde(default)]
    place: Place,
}

impl Knowledge {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DataError> {
        let path = path.as_ref();
        info!("Begin game knowledge loading from {}", path.display());
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, DataError> {
        let data: KnowledgeData = serde_json::from_str(text)?;
        let mut known = Knowledge::default();
        let mut items_id = Sequence::default();
        for data in data.items {
            let kind = known.load_item_kind(items_id.one(ItemKey), data)?;
            known.items.insert(kind.id, kind.name.clone(), kind);
        }
        let mut plants_id = Sequence::default();
        for data in data.plants {
            let kind = known.load_plant_kind(plants_id.one(PlantKey), data)?;
            known.plants.insert(kind.id, kind.name.clone(), kind);
        }
        known.farmer = known.load_farmer_kind(data.farmer)?;
        info!(
            "Game knowledge loaded: {} items, {} plants",
            known.items.len(),
            known.plants.len()
        );
        Ok(known)
    }

    fn load_item_kind(&self, id: ItemKey, data: ItemData) -> Result<ItemKind, DataError> {
        if self.items.find(&data.name).is_ok() {
            return Err(DataError::Invalid {
                reason: format!("item {:?} defined twice", data.name),
            });
        }
        Ok(ItemKind {
            id,
            name: data.name,
            buy_price: data.buy_price,
            sell_price: data.sell_price,
        })
    }

    fn load_plant_kind(&self, id: PlantKey, data: PlantData) -> Result<PlantKind, DataError> {
        if self.plants.find(&data.name).is_ok() {
            return Err(DataError::Invalid {
                reason: format!("plant {:?} defined twice", data.name),
            });
        }
        if data.days_to_mature == 0 {
            return Err(DataError::Invalid {
                reason: format!("plant {:?} must take at least one day to mature", data.name),
            });
        }
        let seed = self.items.find(&data.seed)?.id;
        if let Some(kind) = self.find_plant_by_seed(seed) {
            return Err(DataError::Invalid {
                reason: format!("plants {:?} and {:?} share one seed", kind.name, data.name),
            });
        }
        Ok(PlantKind {
            id,
            seed,
            product: self.items.find(&data.product)?.id,
            name: data.name,
            days_to_mature: data.days_to_mature,
            quantity: data.quantity,
            perennial: data.perennial,
            needs_water: data.needs_water,
        })
    }

    fn load_farmer_kind(&self, data: FarmerData) -> Result<FarmerKind, DataError> {
        let mut items = vec![];
        for stack in data.items {
            items.push((self.items.find(&stack.item)?.id, stack.quantity));
        }
        Ok(FarmerKind {
            max_energy: data.max_energy,
            move_cost: data.move_cost,
            money: data.money,
            items,
            place: data.place,
        })
    }
}

impl Land {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DataError> {
        let path = path.as_ref();
        info!("Begin map loading from {}", path.display());
        let text = fs::read_to_string(path)?;
        let land = Land::parse(&text)?;
        info!("Map loaded: {} rows, {} columns", land.rows(), land.columns());
        Ok(land)
    }
}

impl Game {
    pub fn load(
        knowledge: impl AsRef<Path>,
        map: impl AsRef<Path>,
    ) -> Result<Self, DataError> {
        let known = Knowledge::load(knowledge)?;
        let land = Land::load(map)?;
        Game::new(known, land)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KNOWLEDGE: &str = r#"{
        "items": [
            {"name": "Potato Seed", "buy_price": 2, "sell_price": 1},
            {"name": "Potato", "sell_price": 3}
        ],
        "plants": [
            {"name": "Potato", "seed": "Potato Seed", "days_to_mature": 3, "product": "Potato", "quantity": 1}
        ],
        "farmer": {
            "max_energy": 10,
            "move_cost": 1,
            "items": [{"item": "Potato Seed", "quantity": 2}]
        }
    }"#;

    #[test]
    fn test_knowledge_from_json() {
        let known = Knowledge::from_json(KNOWLEDGE).unwrap();
        let seed = known.items.find("Potato Seed").unwrap();
        let potato = known.plants.find("Potato").unwrap();
        assert_eq!(seed.buy_price, Some(2));
        assert_eq!(known.items.find("Potato").unwrap().buy_price, None);
        assert_eq!(potato.seed, seed.id);
        assert!(!potato.perennial);
        assert_eq!(known.farmer.items, vec![(seed.id, 2)]);
        assert_eq!(known.farmer.place, [0, 0]);
        assert_eq!(known.find_plant_by_seed(seed.id).unwrap().id, potato.id);
    }

    #[test]
    fn test_knowledge_with_dangling_seed() {
        let text = KNOWLEDGE.replace(r#""seed": "Potato Seed""#, r#""seed": "Kale Seed""#);
        let error = Knowledge::from_json(&text).err().unwrap();
        assert!(matches!(
            error,
            DataError::Dictionary(DictionaryError::NameNotFound { .. })
        ));
    }

    #[test]
    fn test_knowledge_with_twice_defined_plant() {
        let text = KNOWLEDGE.replace(
            r#""quantity": 1}"#,
            r#""quantity": 1},
            {"name": "Potato", "seed": "Potato", "days_to_mature": 9, "product": "Potato", "quantity": 1}"#,
        );
        let error = Knowledge::from_json(&text).err().unwrap();
        assert!(matches!(error, DataError::Invalid { .. }));
    }

    #[test]
    fn test_knowledge_with_shared_seed() {
        let text = KNOWLEDGE.replace(
            r#""quantity": 1}"#,
            r#""quantity": 1},
            {"name": "Early Potato", "seed": "Potato Seed", "days_to_mature": 2, "product": "Potato", "quantity": 1}"#,
        );
        let error = Knowledge::from_json(&text).err().unwrap();
        assert!(matches!(error, DataError::Invalid { .. }));
    }

    #[test]
    fn test_game_with_farmer_outside_land() {
        let known = Knowledge::from_json(KNOWLEDGE).unwrap();
        let error = Game::new(known, Land::default()).err().unwrap();
        assert!(matches!(error, DataError::Invalid { .. }));
    }

    #[test]
    fn test_game_with_farmer_on_obstacle() {
        let known = Knowledge::from_json(KNOWLEDGE).unwrap();
        let land = Land::parse("#U\n").unwrap();
        let error = Game::new(known, land).err().unwrap();
        assert_eq!(
            error.to_string(),
            "invalid data: farmer starts on obstacle at [0, 0]"
        );
    }

    #[test]
    fn test_describe_dangling_reference() {
        let text = KNOWLEDGE.replace(r#""item": "Potato Seed""#, r#""item": "Kale Seed""#);
        let error = Knowledge::from_json(&text).err().unwrap();
        assert_eq!(
            error.to_string(),
            "knowledge reference error: unknown name \"Kale Seed\""
        );
    }

    #[test]
    fn test_knowledge_with_instant_plant() {
        let text = KNOWLEDGE.replace(r#""days_to_mature": 3"#, r#""days_to_mature": 0"#);
        let error = Knowledge::from_json(&text).err().unwrap();
        assert!(matches!(error, DataError::Invalid { .. }));
    }
}
