pub mod collections;
pub mod properties;
