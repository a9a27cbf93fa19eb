//! Facet filter engine: search text plus category checkboxes over a job catalog.
//!
//! The engine only stores what the user picked. The visible job list is never
//! stored; callers derive it with [`JobFilterEngine::filtered_view`] (or the free
//! function [`filter_jobs`]) whenever the catalog or the engine changes.

use serde::{Deserialize, Serialize};

use crate::{catalog::JobItem, facets::{FacetSelection, FacetValue}, search_query::JobSearchQuery};

/// Keeps the catalog order. All four predicates are ANDed.
pub fn filter_jobs(catalog: &[JobItem], query: &JobSearchQuery) -> Vec<JobItem> {
    if query.is_unrestricted() {
        return catalog.to_vec();
    }
    catalog.iter().filter(|job| query.matches(job)).cloned().collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct JobFilterEngine {
    query: JobSearchQuery,
    // Set by `clear_all`: the view shows the whole catalog even if search text is left over.
    // Any later edit ends it.
    show_full_catalog: bool,
}

impl JobFilterEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &JobSearchQuery {
        &self.query
    }

    pub fn search_query(&self) -> &str {
        &self.query.query_string
    }

    pub fn selection(&self) -> &FacetSelection {
        &self.query.facet_filters
    }

    pub fn is_checked(&self, value: FacetValue) -> bool {
        self.query.facet_filters.contains(value)
    }

    pub fn has_active_facets(&self) -> bool {
        !self.query.facet_filters.is_empty()
    }

    /// True between a `clear_all` and the next edit.
    pub fn is_reset(&self) -> bool {
        self.show_full_catalog
    }

    /// Returns whether `value` is selected afterwards.
    pub fn toggle_facet(&mut self, value: FacetValue) -> bool {
        self.show_full_catalog = false;
        self.query.facet_filters.toggle(value)
    }

    /// Empties every facet and shows the full catalog. The search text is kept as is.
    pub fn clear_all(&mut self) {
        self.query.facet_filters.clear();
        self.show_full_catalog = true;
    }

    pub fn set_search_query(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text == self.query.query_string {
            return;
        }
        self.query.query_string = text;
        self.show_full_catalog = false;
    }

    /// Manual "search" button. Recomputes exactly as an edit would.
    pub fn apply(&mut self) {
        self.show_full_catalog = false;
    }

    pub fn filtered_view(&self, catalog: &[JobItem]) -> Vec<JobItem> {
        if self.show_full_catalog {
            return catalog.to_vec();
        }
        filter_jobs(catalog, &self.query)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{JobLevel, JobModel, JobType};

    fn catalog() -> Vec<JobItem> {
        vec![
            JobItem::new(1, "Engineer", JobModel::Remote, JobType::FullTime, JobLevel::EntryLevel),
            JobItem::new(2, "Manager", JobModel::OnSite, JobType::FullTime, JobLevel::Director),
        ]
    }

    fn titles(jobs: &[JobItem]) -> Vec<&str> {
        jobs.iter().map(|j| j.job_title.as_str()).collect()
    }

    #[test]
    fn test_no_filters_is_identity() {
        let engine = JobFilterEngine::new();
        assert_eq!(engine.filtered_view(&catalog()), catalog());
    }

    #[test]
    fn test_empty_catalog_stays_empty() {
        let mut engine = JobFilterEngine::new();
        assert!(engine.filtered_view(&[]).is_empty());
        engine.toggle_facet(FacetValue::JobModel(JobModel::Remote));
        engine.set_search_query("eng");
        assert!(engine.filtered_view(&[]).is_empty());
        engine.clear_all();
        assert!(engine.filtered_view(&[]).is_empty());
    }

    #[test]
    fn test_facet_and_search_are_anded() {
        let mut engine = JobFilterEngine::new();
        engine.toggle_facet(FacetValue::JobModel(JobModel::Remote));
        assert_eq!(titles(&engine.filtered_view(&catalog())), vec!["Engineer"]);
        engine.set_search_query("man");
        assert!(engine.filtered_view(&catalog()).is_empty());
    }

    #[test]
    fn test_recompute_is_stable() {
        let mut engine = JobFilterEngine::new();
        engine.toggle_facet(FacetValue::JobType(JobType::FullTime));
        engine.set_search_query("E");
        let first = engine.filtered_view(&catalog());
        let second = engine.filtered_view(&catalog());
        assert_eq!(first, second);
        assert_eq!(titles(&first), vec!["Engineer", "Manager"]);
    }

    #[test]
    fn test_view_matches_predicate_filter() {
        let mut engine = JobFilterEngine::new();
        engine.toggle_facet(FacetValue::JobLevel(JobLevel::Director));
        engine.toggle_facet(FacetValue::JobLevel(JobLevel::EntryLevel));
        engine.set_search_query("AGE");
        let expected: Vec<JobItem> = catalog().into_iter().filter(|j| engine.query().matches(j)).collect();
        assert_eq!(engine.filtered_view(&catalog()), expected);
        assert_eq!(titles(&expected), vec!["Manager"]);
    }

    #[test]
    fn test_clear_all_shows_full_catalog_despite_search() {
        let mut engine = JobFilterEngine::new();
        engine.toggle_facet(FacetValue::JobModel(JobModel::Remote));
        engine.set_search_query("man");
        assert!(engine.filtered_view(&catalog()).is_empty());

        engine.clear_all();
        assert_eq!(engine.filtered_view(&catalog()), catalog());
        assert_eq!(engine.search_query(), "man");
        assert!(!engine.has_active_facets());
        assert!(engine.is_reset());
    }

    #[test]
    fn test_edit_after_clear_all_applies_stale_search() {
        let mut engine = JobFilterEngine::new();
        engine.set_search_query("man");
        engine.clear_all();
        engine.toggle_facet(FacetValue::JobType(JobType::FullTime));
        assert_eq!(titles(&engine.filtered_view(&catalog())), vec!["Manager"]);
    }

    #[test]
    fn test_apply_after_clear_all_applies_stale_search() {
        let mut engine = JobFilterEngine::new();
        engine.set_search_query("eng");
        engine.clear_all();
        engine.set_search_query("eng");
        assert!(engine.is_reset());
        engine.apply();
        assert_eq!(titles(&engine.filtered_view(&catalog())), vec!["Engineer"]);
    }

    #[test]
    fn test_apply_without_changes_is_noop() {
        let mut engine = JobFilterEngine::new();
        engine.toggle_facet(FacetValue::JobModel(JobModel::OnSite));
        let before = engine.filtered_view(&catalog());
        engine.apply();
        assert_eq!(engine.filtered_view(&catalog()), before);
    }
}
