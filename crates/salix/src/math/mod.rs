pub mod point;
pub mod segment;
pub mod vector;

pub type FloatNum = f64;
