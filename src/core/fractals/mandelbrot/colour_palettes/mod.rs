pub mod amber;
pub mod factory;
pub mod hue_cycle;
pub mod kinds;
pub mod smooth;
