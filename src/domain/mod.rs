// Domain layer: card models and ports (interfaces) for the data source and the clock.

pub mod model;
pub mod ports;
