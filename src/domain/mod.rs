// Domain layer: models and ports. Adapters and the core depend on this, never the other way.

pub mod model;
pub mod ports;
