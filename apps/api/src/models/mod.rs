pub mod idea;
pub mod quiz;
pub mod user;
