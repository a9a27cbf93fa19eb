//! Page-scoped session stores.
//!
//! Each page creates its own session signal when it mounts; the signal is
//! dropped with the page, so nothing survives navigation. Derived views are
//! memos over the session and recompute whenever the session changes.

use common::{catalog::{JobItem, SkillItem}, session::{AssessmentSession, JobBrowserSession}};
use dioxus::{logger::tracing, prelude::*};

use crate::api::catalog_api::{fetch_job_catalog, fetch_skill_catalog};

#[derive(Clone, Copy)]
pub struct AssessmentContext {
    pub session: Signal<AssessmentSession>,
    pub skill_suggestions: Memo<Vec<SkillItem>>,
    pub skills_loading: Memo<bool>,
}

#[derive(Clone, Copy)]
pub struct JobBrowserContext {
    pub session: Signal<JobBrowserSession>,
    pub filtered_jobs: Memo<Vec<JobItem>>,
    pub is_loading: Memo<bool>,
}

fn log_fetch_outcome<T>(catalog_name: &str, result: &Result<Vec<T>, ServerFnError>) {
    match result {
        Ok(items) => tracing::info!("{} catalog loaded: {} items", catalog_name, items.len()),
        Err(e) => tracing::error!("{} catalog fetch failed, continuing with an empty catalog: {:#?}", catalog_name, e),
    }
}

/// Creates the questionnaire session and starts the skill catalog fetch.
pub fn use_assessment_session_provider() -> AssessmentContext {
    let mut session = use_signal(AssessmentSession::new);

    let skill_catalog = use_resource(move || fetch_skill_catalog());
    // the resource resolves once per mount; the first outcome settles the catalog
    use_effect(move || {
        if let Some(result) = skill_catalog.read().as_ref() {
            if session.peek().skill_catalog.is_loading() {
                log_fetch_outcome("Skill", result);
                session.write().skill_catalog.settle(result.clone());
            }
        }
    });

    let skill_suggestions = use_memo(move || session.read().skill_suggestions());
    let skills_loading = use_memo(move || session.read().skill_catalog.is_loading());

    use_context_provider(move || AssessmentContext {
        session,
        skill_suggestions,
        skills_loading,
    })
}

/// Creates the job browser session and starts the job catalog fetch.
pub fn use_job_browser_session_provider() -> JobBrowserContext {
    let mut session = use_signal(JobBrowserSession::new);

    let job_catalog = use_resource(move || fetch_job_catalog());
    use_effect(move || {
        if let Some(result) = job_catalog.read().as_ref() {
            if session.peek().job_catalog.is_loading() {
                log_fetch_outcome("Job", result);
                session.write().job_catalog.settle(result.clone());
            }
        }
    });

    let filtered_jobs = use_memo(move || session.read().filtered_jobs());
    let is_loading = use_memo(move || session.read().is_loading());

    use_context_provider(move || JobBrowserContext {
        session,
        filtered_jobs,
        is_loading,
    })
}
