// Domain layer: models and ports (interfaces) for the recipe assistant.

pub mod model;
pub mod ports;
pub mod sanitizer;
