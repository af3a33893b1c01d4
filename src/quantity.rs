#[macro_use]
pub mod macros;

pub mod cost;
pub mod days;
