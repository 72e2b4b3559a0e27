//! The haunted neighborhood: a grid of houses full of monsters

pub mod house;
pub mod neighborhood;

pub use house::House;
pub use neighborhood::{create_neighborhood, create_player, Neighborhood};
