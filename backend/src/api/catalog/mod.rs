//! Catalog endpoints of the provider and module exports.

mod list_skills;
pub use list_skills::{list_skills, list_skills_from};

mod list_jobs;
pub use list_jobs::{list_jobs, list_jobs_from};

#[cfg(test)]
mod tests;
