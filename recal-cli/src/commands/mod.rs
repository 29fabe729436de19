pub mod expand;
pub mod series;
