//! Common library exports shared between frontend and backend.
//!
//! Everything in here is free of I/O: the catalog records, the tag collectors,
//! the facet filter engine and the per-page session objects that tie them to
//! the fetched catalogs.

extern crate serde;


pub mod catalog;
pub mod facets;
pub mod search_query;
pub mod job_filter;
pub mod tag_collector;
pub mod profile;
pub mod session;
