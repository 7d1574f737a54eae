pub mod placement;
pub mod scan;
pub mod vision;
