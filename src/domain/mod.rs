// Domain layer: report model and ports. Only std/serde/chrono here.

pub mod model;
pub mod ports;
