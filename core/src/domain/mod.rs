pub mod common;
pub mod diagnosis;
