pub mod f2m;
pub mod fp;
pub mod matrix;
pub mod mpoly;
pub mod poly;
