use std::env;
use std::io::{self, BufRead, Write};
use std::process;

use farm::Game;
use log::{debug, error, info, warn};

use crate::input::translate;
use crate::rendering::render;

mod input;
mod rendering;

const DEFAULT_MAP: &str = "assets/maps/farm.txt";
const DEFAULT_KNOWLEDGE: &str = "assets/knowledge.json";

fn main() {
    env_logger::init();
    let mut args = env::args().skip(1);
    let map = args.next().unwrap_or_else(|| DEFAULT_MAP.to_string());
    let knowledge = args.next().unwrap_or_else(|| DEFAULT_KNOWLEDGE.to_string());
    info!("Farm map: {}, knowledge: {}", map, knowledge);

    let mut game = match Game::load(&knowledge, &map) {
        Ok(game) => game,
        Err(error) => {
            error!("Unable to load farm: {}", error);
            process::exit(1);
        }
    };

    let mut stdout = io::stdout();
    if let Err(error) = write!(stdout, "{}", render(&game)).and_then(|_| stdout.flush()) {
        error!("Unable to draw farm: {}", error);
        process::exit(1);
    }

    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(error) => {
                error!("Unable to read input: {}", error);
                break;
            }
        };
        let keys: Vec<char> = line.trim().chars().map(|key| key.to_ascii_lowercase()).collect();
        if keys.contains(&'q') {
            break;
        }
        for key in keys {
            let action = match translate(key, &game) {
                Some(action) => action,
                None => {
                    debug!("Key {:?} ignored", key);
                    continue;
                }
            };
            match game.perform_action(action) {
                Ok(events) => debug!("Events: {:?}", events),
                Err(error) => warn!("Action failed: {:?}", error),
            }
        }
        if let Err(error) = write!(stdout, "{}", render(&game)).and_then(|_| stdout.flush()) {
            error!("Unable to draw farm: {}", error);
            break;
        }
    }
    info!("Farm closed on day {}", game.get_days_elapsed());
}
