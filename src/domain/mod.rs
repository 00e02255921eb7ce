// Domain layer: core models and ports (interfaces). No dependencies on the
// concrete page or network adapters.

pub mod model;
pub mod ports;
