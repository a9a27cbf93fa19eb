pub mod home_page;
pub mod assessment_page;
pub mod job_recommendation_page;
