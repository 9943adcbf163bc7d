use farm::physics::Direction;
use farm::planting::Plant;
use farm::Game;

/// Draws the land grid, the info bar and the inventory as plain text.
pub fn render(game: &Game) -> String {
    let mut output = String::new();
    let farmer = game.get_farmer_place();
    for (row, cells) in game.get_land().surface().iter().enumerate() {
        for (column, surface) in cells.iter().enumerate() {
            let place = [row, column];
            let symbol = if place == farmer {
                farmer_symbol(game.get_farmer_direction())
            } else if let Some(plant) = game.get_plant(place) {
                plant_symbol(plant)
            } else {
                surface.symbol()
            };
            output.push(symbol);
        }
        output.push('\n');
    }
    output.push_str(&format!(
        "Day {} | Money ${} | Energy {}/{}\n",
        game.get_days_elapsed(),
        game.get_money(),
        game.get_farmer_energy(),
        game.known().farmer.max_energy
    ));
    let selected = game.get_selected_item().map(|kind| kind.id);
    for (index, kind) in game.known().items.iter().enumerate() {
        let quantity = game.get_items().get(&kind.id).copied().unwrap_or(0);
        let marker = if selected == Some(kind.id) { '>' } else { ' ' };
        let buy = match kind.buy_price {
            Some(price) => format!("${}", price),
            None => "-".to_string(),
        };
        output.push_str(&format!(
            "{}{} {:<12} x{:<3} buy {:<4} sell ${}\n",
            marker,
            index + 1,
            kind.name,
            quantity,
            buy,
            kind.sell_price
        ));
    }
    output
}

fn farmer_symbol(direction: Direction) -> char {
    match direction {
        Direction::Up => '^',
        Direction::Down => 'v',
        Direction::Left => '<',
        Direction::Right => '>',
    }
}

/// Plant initial, uppercase once ready to harvest.
fn plant_symbol(plant: &Plant) -> char {
    let initial = plant.kind.name.chars().next().unwrap_or('*');
    if plant.is_mature() {
        initial.to_ascii_uppercase()
    } else {
        initial.to_ascii_lowercase()
    }
}
