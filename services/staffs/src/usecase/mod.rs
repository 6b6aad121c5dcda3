pub mod seed;
pub mod staff;
