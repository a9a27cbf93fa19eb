pub mod job_filter_panel;
pub mod job_search_bar;
pub mod job_list;
pub mod job_card;
