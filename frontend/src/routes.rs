use dioxus::prelude::*;

use crate::components::navbar::Navbar;

use crate::pages::home_page::HomePage;
use crate::pages::assessment_page::AssessmentPage;
use crate::pages::job_recommendation_page::JobRecommendationPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]


    #[route("/")]
    HomePage {},


    #[route("/assessment")]
    AssessmentPage {},


    #[route("/jobs")]
    JobRecommendationPage {},

}
