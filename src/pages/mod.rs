pub mod comparison;
pub mod distribution;
pub mod overview;
