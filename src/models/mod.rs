pub mod annotation;
pub mod scan;
