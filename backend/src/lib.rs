//! Server-side access to the job/skill catalog provider.

pub mod api;
pub mod provider_utils;
