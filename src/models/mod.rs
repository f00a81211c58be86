// Module exports for models

pub mod components;
pub mod offset;
pub mod unit;
