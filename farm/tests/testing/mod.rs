#![allow(dead_code)]

use farm::api::{Action, ActionError, Event};
use farm::inventory::ItemKey;
use farm::landscaping::{Land, Place, Surface};
use farm::model::Knowledge;
use farm::physics::Direction;
use farm::Game;

pub fn at(row: usize, column: usize) -> Place {
    [row, column]
}

pub const ORIGIN: Place = [0, 0];

pub struct FarmTestScenario {
    known: Option<Knowledge>,
    map: String,
    game: Option<Game>,
    current_action_result: Result<Vec<Event>, ActionError>,
}

impl FarmTestScenario {
    pub fn new() -> Self {
        let known = Knowledge::load("../assets/knowledge.json").unwrap();
        FarmTestScenario {
            known: Some(known),
            map: "U\n".to_string(),
            game: None,
            current_action_result: Ok(vec![]),
        }
    }

    fn knowledge(&mut self) -> &mut Knowledge {
        self.known
            .as_mut()
            .expect("knowledge can be changed only before first action")
    }

    fn game(&mut self) -> &mut Game {
        if self.game.is_none() {
            let known = self.known.take().unwrap();
            let land = Land::parse(&self.map).unwrap();
            self.game = Some(Game::new(known, land).unwrap());
        }
        self.game.as_mut().unwrap()
    }

    pub fn item_key(&mut self, name: &str) -> ItemKey {
        match &self.known {
            Some(known) => known.items.find(name).unwrap().id,
            None => self.game().known().items.find(name).unwrap().id,
        }
    }

    pub fn given_map(mut self, map: &str) -> Self {
        self.map = map.to_string();
        self
    }

    pub fn given_farmer(mut self, place: Place) -> Self {
        self.knowledge().farmer.place = place;
        self
    }

    pub fn given_energy(mut self, max_energy: u32, move_cost: u32) -> Self {
        let farmer = &mut self.knowledge().farmer;
        farmer.max_energy = max_energy;
        farmer.move_cost = move_cost;
        self
    }

    pub fn given_money(mut self, money: u32) -> Self {
        self.knowledge().farmer.money = money;
        self
    }

    pub fn given_item(mut self, item: &str, quantity: u32) -> Self {
        let item = self.item_key(item);
        let items = &mut self.knowledge().farmer.items;
        items.retain(|(key, _)| *key != item);
        items.push((item, quantity));
        self
    }

    pub fn given_no_items(mut self) -> Self {
        self.knowledge().farmer.items.clear();
        self
    }

    pub fn given_plant(mut self, plant: &str, place: Place) -> Self {
        let events = self
            .game()
            .perform_action(Action::PlantCrop {
                place,
                plant: plant.to_string(),
            })
            .unwrap();
        assert!(!events.is_empty(), "unable to plant {plant} at {place:?}, no seeds or soil");
        self
    }

    pub fn when_farmer_perform(mut self, action: Action) -> Self {
        self.current_action_result = self.game().perform_action(action);
        self
    }

    pub fn when_farmer_moves(mut self, directions: &[Direction]) -> Self {
        for direction in directions {
            let direction = *direction;
            self.current_action_result = self
                .game()
                .perform_action(Action::MoveFarmer { direction });
        }
        self
    }

    pub fn when_days_pass(mut self, days: usize) -> Self {
        for _ in 0..days {
            self.current_action_result = self.game().perform_action(Action::NewDay);
        }
        self
    }

    pub fn then_action_should_succeed(self) -> Self {
        match &self.current_action_result {
            Ok(events) => assert!(!events.is_empty(), "action has no effect"),
            Err(error) => panic!("action failed: {error:?}"),
        }
        self
    }

    pub fn then_action_should_be_rejected(self) -> Self {
        assert_eq!(self.current_action_result, Ok(vec![]));
        self
    }

    pub fn then_action_should_fail<F>(mut self, expected: F) -> Self
    where
        F: FnOnce(&mut Self) -> ActionError,
    {
        let expected = expected(&mut self);
        assert_eq!(self.current_action_result, Err(expected));
        self
    }

    pub fn then_events_should_be(self, expected: Vec<Event>) -> Self {
        assert_eq!(self.current_action_result, Ok(expected));
        self
    }

    pub fn then_surface_should_be(mut self, place: Place, expected: Surface) -> Self {
        assert_eq!(self.game().get_surface(place), Ok(expected));
        self
    }

    pub fn then_plant_growth_should_be(mut self, place: Place, expected: u8) -> Self {
        let plant = self.game().get_plant(place);
        assert_eq!(plant.map(|plant| plant.growth), Some(expected));
        self
    }

    pub fn then_plant_should_be_mature(mut self, place: Place) -> Self {
        let plant = self.game().get_plant(place).expect("plant not found");
        assert!(plant.is_mature());
        self
    }

    pub fn then_no_plant_at(mut self, place: Place) -> Self {
        assert!(self.game().get_plant(place).is_none());
        self
    }

    pub fn then_farmer_should_be(mut self, place: Place, direction: Direction) -> Self {
        let game = self.game();
        assert_eq!(game.get_farmer_place(), place);
        assert_eq!(game.get_farmer_direction(), direction);
        self
    }

    pub fn then_energy_should_be(mut self, expected: u32) -> Self {
        assert_eq!(self.game().get_farmer_energy(), expected);
        self
    }

    pub fn then_money_should_be(mut self, expected: u32) -> Self {
        assert_eq!(self.game().get_money(), expected);
        self
    }

    pub fn then_item_quantity_should_be(mut self, item: &str, expected: u32) -> Self {
        assert_eq!(self.game().get_item_quantity(item), Ok(expected));
        self
    }

    pub fn then_selected_item_should_be(mut self, expected: Option<&str>) -> Self {
        let selected = self.game().get_selected_item();
        assert_eq!(selected.as_ref().map(|kind| kind.name.as_str()), expected);
        self
    }

    pub fn then_days_elapsed_should_be(mut self, expected: u32) -> Self {
        assert_eq!(self.game().get_days_elapsed(), expected);
        self
    }
}
