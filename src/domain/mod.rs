// Domain layer: models and ports. Nothing here knows about files, HTTP or the map widget.

pub mod model;
pub mod ports;
