pub mod page_sessions;
