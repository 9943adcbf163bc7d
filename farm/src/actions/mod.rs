mod buy_item;
mod harvest_plant;
mod move_farmer;
mod plant_crop;
mod remove_plant;
mod select_item;
mod sell_item;
mod till_soil;
mod untill_soil;
mod water_plant;
