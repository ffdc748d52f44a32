pub mod general;
pub mod time;
