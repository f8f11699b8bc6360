pub mod collision;
pub mod movement;
