// Domain layer: records, templates and ports. No file or CLI access here.

pub mod model;
pub mod ports;
pub mod template;
