use farm::api::Action;
use farm::physics::Direction;
use farm::Game;

/// Maps a key press to a command against the cell the farmer stands on.
pub fn translate(key: char, game: &Game) -> Option<Action> {
    let place = game.get_farmer_place();
    let action = match key {
        'w' => Action::MoveFarmer {
            direction: Direction::Up,
        },
        'a' => Action::MoveFarmer {
            direction: Direction::Left,
        },
        's' => Action::MoveFarmer {
            direction: Direction::Down,
        },
        'd' => Action::MoveFarmer {
            direction: Direction::Right,
        },
        't' => Action::TillSoil { place },
        'u' => Action::UntillSoil { place },
        'i' => Action::WaterPlant { place },
        'h' => Action::HarvestPlant { place },
        'r' => Action::RemovePlant { place },
        'n' => Action::NewDay,
        'p' => {
            let seed = game.get_selected_item()?;
            let kind = game.known().find_plant_by_seed(seed.id)?;
            Action::PlantCrop {
                place,
                plant: kind.name.clone(),
            }
        }
        'b' => Action::BuyItem {
            item: game.get_selected_item()?.name.clone(),
        },
        'x' => Action::SellItem {
            item: game.get_selected_item()?.name.clone(),
        },
        '1'..='9' => {
            let index = key.to_digit(10)? as usize - 1;
            let kind = game.known().items.iter().nth(index)?;
            Action::SelectItem {
                item: kind.name.clone(),
            }
        }
        _ => return None,
    };
    Some(action)
}
