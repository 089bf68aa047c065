pub mod factory;
pub mod frame;
pub mod presenter;
