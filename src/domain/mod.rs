// Domain layer: read models, wire shapes and ports. No framework types leak
// past this boundary.

pub mod model;
pub mod ports;
pub mod wire;
