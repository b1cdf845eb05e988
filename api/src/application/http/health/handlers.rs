pub mod hello;
pub mod liveness;
