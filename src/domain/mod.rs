// Domain layer: word model, pool and the ports backends implement.

pub mod model;
pub mod pool;
pub mod ports;
