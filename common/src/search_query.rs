//! Shared job search query models and helpers.

use serde::{Deserialize, Serialize};

use crate::{catalog::JobItem, facets::FacetSelection};


#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct JobSearchQuery {
    pub query_string: String,
    pub facet_filters: FacetSelection,
}

impl JobSearchQuery {
    /// Case-insensitive substring match against the job title.
    pub fn matches_search(&self, job: &JobItem) -> bool {
        if self.query_string.is_empty() {
            return true;
        }
        job.job_title.to_lowercase().contains(&self.query_string.to_lowercase())
    }

    pub fn matches(&self, job: &JobItem) -> bool {
        self.matches_search(job) && self.facet_filters.matches(job)
    }

    pub fn is_unrestricted(&self) -> bool {
        self.query_string.is_empty() && self.facet_filters.is_empty()
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{JobLevel, JobModel, JobType};

    #[test]
    fn test_search_ignores_case() {
        let job = JobItem::new(1, "Senior Manager", JobModel::Remote, JobType::FullTime, JobLevel::Director);
        let query = JobSearchQuery { query_string: "MAN".to_string(), ..Default::default() };
        assert!(query.matches(&job));
        let query = JobSearchQuery { query_string: "engineer".to_string(), ..Default::default() };
        assert!(!query.matches(&job));
    }

    #[test]
    fn test_default_query_is_unrestricted() {
        assert!(JobSearchQuery::default().is_unrestricted());
    }
}
