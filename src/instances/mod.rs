// Bundled problem instances: numeric configuration fed into the generic
// model-construction layer

pub mod farmer;
pub mod manufacturer;
