// Domain layer: models and ports (traits). No runtime or CLI dependencies here.

pub mod model;
pub mod ports;
