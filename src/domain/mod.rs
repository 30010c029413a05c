// Domain layer: the name/joke models and the capabilities the orchestrator depends on.

pub mod model;
pub mod ports;
