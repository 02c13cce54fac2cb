pub mod docs;
pub mod general;
pub mod math;
