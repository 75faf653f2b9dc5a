pub mod atmosphere;
pub mod standard_atmosphere;
