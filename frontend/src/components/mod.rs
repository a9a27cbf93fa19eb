pub mod error_boundary;
pub mod suspend_boundary;
pub mod navbar;
pub mod tag_components;
pub mod job_components;
