pub mod planter;
