// Domain layer: the Student value object and the port the outer layers feed it through.

pub mod model;
pub mod ports;
