pub mod inventory;
pub mod landscaping;
pub mod physics;
pub mod planting;
pub mod timing;
