// Application layer: model building templates and result reporting

pub mod builder;
pub mod reporter;
