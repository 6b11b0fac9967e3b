// Domain layer: schema descriptors, field values and ports.

pub mod model;
pub mod ports;
