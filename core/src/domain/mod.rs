pub mod common;
pub mod recipe;
