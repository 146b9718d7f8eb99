pub mod debug;
pub mod math;

pub use math::prelude;
