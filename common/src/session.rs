//! Per-page session state.
//!
//! A session is created when its page mounts and dropped when the page goes
//! away. Nothing here is shared between pages or kept after navigation.

use serde::{Deserialize, Serialize};

use crate::{
    catalog::{JobItem, SkillItem},
    job_filter::JobFilterEngine,
    profile::{parse_years_of_experience, AssessmentProfile, Degree},
    tag_collector::{TagCollector, TagVariant},
};

/// Lifecycle of a catalog fetched once per page: `Loading` until the single
/// fetch settles, then `Loaded` or `FetchFailed` for the rest of the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CatalogState<T> {
    Loading,
    Loaded(Vec<T>),
    FetchFailed,
}

impl<T> Default for CatalogState<T> {
    fn default() -> Self {
        Self::Loading
    }
}

impl<T> CatalogState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::FetchFailed)
    }

    /// Empty while loading or after a failed fetch.
    pub fn items(&self) -> &[T] {
        match self {
            Self::Loaded(items) => items,
            Self::Loading | Self::FetchFailed => &[],
        }
    }

    /// Settles the fetch. Returns false if it had already settled; the first
    /// outcome wins.
    pub fn settle<E>(&mut self, result: Result<Vec<T>, E>) -> bool {
        if !self.is_loading() {
            return false;
        }
        *self = match result {
            Ok(items) => Self::Loaded(items),
            Err(_) => Self::FetchFailed,
        };
        true
    }
}

/// Jobs questionnaire page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentSession {
    pub job_titles: TagCollector,
    pub skills: TagCollector,
    pub experiences: TagCollector,
    pub degree: Degree,
    pub years_of_experience: Option<u32>,
    pub skill_catalog: CatalogState<SkillItem>,
}

impl Default for AssessmentSession {
    fn default() -> Self {
        Self::new()
    }
}

impl AssessmentSession {
    pub fn new() -> Self {
        Self {
            job_titles: TagCollector::new(TagVariant::JobTitles),
            skills: TagCollector::new(TagVariant::Skills),
            experiences: TagCollector::new(TagVariant::Experiences),
            degree: Degree::default(),
            years_of_experience: None,
            skill_catalog: CatalogState::Loading,
        }
    }

    pub fn collector(&self, variant: TagVariant) -> &TagCollector {
        match variant {
            TagVariant::JobTitles => &self.job_titles,
            TagVariant::Skills => &self.skills,
            TagVariant::Experiences => &self.experiences,
        }
    }

    pub fn collector_mut(&mut self, variant: TagVariant) -> &mut TagCollector {
        match variant {
            TagVariant::JobTitles => &mut self.job_titles,
            TagVariant::Skills => &mut self.skills,
            TagVariant::Experiences => &mut self.experiences,
        }
    }

    pub fn skill_suggestions(&self) -> Vec<SkillItem> {
        self.skills.suggestions(self.skill_catalog.items())
    }

    pub fn set_years_text(&mut self, text: &str) {
        self.years_of_experience = parse_years_of_experience(text);
    }

    pub fn submit(&self) -> AssessmentProfile {
        AssessmentProfile {
            job_titles: self.job_titles.tags().to_vec(),
            skills: self.skills.tags().to_vec(),
            experiences: self.experiences.tags().to_vec(),
            degree: self.degree,
            years_of_experience: self.years_of_experience,
        }
    }
}

/// Job recommendations page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct JobBrowserSession {
    pub engine: JobFilterEngine,
    pub job_catalog: CatalogState<JobItem>,
}

impl JobBrowserSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.job_catalog.is_loading()
    }

    pub fn filtered_jobs(&self) -> Vec<JobItem> {
        self.engine.filtered_view(self.job_catalog.items())
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::{catalog::{JobLevel, JobModel, JobType}, facets::FacetValue};

    #[test]
    fn test_catalog_starts_loading_and_empty() {
        let state = CatalogState::<SkillItem>::default();
        assert!(state.is_loading());
        assert!(state.items().is_empty());
    }

    #[test]
    fn test_failed_fetch_leaves_catalog_empty() {
        let mut state = CatalogState::<SkillItem>::Loading;
        assert!(state.settle::<&str>(Err("connection refused")));
        assert!(!state.is_loading());
        assert!(state.is_failed());
        assert!(state.items().is_empty());
    }

    #[test]
    fn test_catalog_is_populated_once() {
        let mut state = CatalogState::Loading;
        assert!(state.settle::<()>(Ok(vec![SkillItem::new(1, "Go")])));
        assert!(!state.settle::<()>(Ok(vec![])));
        assert!(!state.settle::<()>(Err(())));
        assert_eq!(state.items().len(), 1);
    }

    #[test]
    fn test_suggestions_follow_catalog_arrival() {
        let mut session = AssessmentSession::new();
        session.skills.set_input_text("py");
        assert!(session.skill_suggestions().is_empty());
        session.skill_catalog.settle::<()>(Ok(vec![SkillItem::new(1, "Python"), SkillItem::new(2, "Go")]));
        assert_eq!(session.skill_suggestions(), vec![SkillItem::new(1, "Python")]);
    }

    #[test]
    fn test_submit_snapshots_answers() {
        let mut session = AssessmentSession::new();
        session.collector_mut(TagVariant::JobTitles).set_input_text("Backend Developer");
        session.collector_mut(TagVariant::JobTitles).commit_from_input();
        session.collector_mut(TagVariant::Skills).commit_from_suggestion("Rust");
        session.degree = Degree::Master;
        session.set_years_text("4");

        let profile = session.submit();
        assert_eq!(profile.job_titles, vec!["Backend Developer".to_string()]);
        assert_eq!(profile.skills, vec!["Rust".to_string()]);
        assert!(profile.experiences.is_empty());
        assert_eq!(profile.degree, Degree::Master);
        assert_eq!(profile.years_of_experience, Some(4));
        assert!(!profile.is_empty());
        assert!(AssessmentSession::new().submit().is_empty());
    }

    #[test]
    fn test_job_browser_filters_loaded_catalog() {
        let mut session = JobBrowserSession::new();
        assert!(session.is_loading());
        assert!(session.filtered_jobs().is_empty());

        session.job_catalog.settle::<()>(Ok(vec![
            JobItem::new(1, "Engineer", JobModel::Remote, JobType::FullTime, JobLevel::EntryLevel),
            JobItem::new(2, "Manager", JobModel::OnSite, JobType::FullTime, JobLevel::Director),
        ]));
        session.engine.toggle_facet(FacetValue::JobModel(JobModel::Remote));
        let titles: Vec<String> = session.filtered_jobs().into_iter().map(|j| j.job_title).collect();
        assert_eq!(titles, vec!["Engineer".to_string()]);

        session.engine.clear_all();
        assert_eq!(session.filtered_jobs().len(), 2);
    }
}
