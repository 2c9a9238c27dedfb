// Domain layer: content records and the read-only provider port.

pub mod model;
pub mod ports;
