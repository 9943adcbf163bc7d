mod is_place_passable;
