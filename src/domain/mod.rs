// Domain layer: value types and ports. Nothing here touches the filesystem.

pub mod model;
pub mod ports;
