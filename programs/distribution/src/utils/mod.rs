pub mod math;
pub mod schedule;
pub mod token;
