//! Facet categories of a job record and the per-category selected sets.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::catalog::{JobItem, JobLevel, JobModel, JobType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FacetCategory {
    JobModel,
    JobType,
    JobLevel,
}

impl FacetCategory {
    pub const ALL: [FacetCategory; 3] = [FacetCategory::JobModel, FacetCategory::JobType, FacetCategory::JobLevel];

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::JobModel => "Working Model",
            Self::JobType => "Working Time",
            Self::JobLevel => "Job Level",
        }
    }

    /// Name of the job record field this facet reads.
    pub fn field_name(&self) -> &'static str {
        match self {
            Self::JobModel => "job_model",
            Self::JobType => "job_type",
            Self::JobLevel => "job_level",
        }
    }

    /// Checkbox options, in display order.
    pub fn options(&self) -> Vec<FacetValue> {
        match self {
            Self::JobModel => JobModel::ALL.into_iter().map(FacetValue::JobModel).collect(),
            Self::JobType => JobType::ALL.into_iter().map(FacetValue::JobType).collect(),
            Self::JobLevel => JobLevel::ALL.into_iter().map(FacetValue::JobLevel).collect(),
        }
    }
}

/// One checkbox: a value tagged with the category it belongs to.
///
/// `Internship` exists both as a working time and as a job level; the tag keeps
/// the two checkboxes independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FacetValue {
    JobModel(JobModel),
    JobType(JobType),
    JobLevel(JobLevel),
}

impl FacetValue {
    pub fn category(&self) -> FacetCategory {
        match self {
            Self::JobModel(_) => FacetCategory::JobModel,
            Self::JobType(_) => FacetCategory::JobType,
            Self::JobLevel(_) => FacetCategory::JobLevel,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::JobModel(v) => v.as_str(),
            Self::JobType(v) => v.as_str(),
            Self::JobLevel(v) => v.as_str(),
        }
    }

    pub fn matches(&self, job: &JobItem) -> bool {
        match self {
            Self::JobModel(v) => job.job_model == *v,
            Self::JobType(v) => job.job_type == *v,
            Self::JobLevel(v) => job.job_level == *v,
        }
    }
}

/// Number of catalog jobs carrying `value`, shown next to its checkbox.
pub fn count_facet_value(catalog: &[JobItem], value: FacetValue) -> usize {
    catalog.iter().filter(|job| value.matches(job)).count()
}

/// Selected values per facet category. An empty set places no restriction on
/// its category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FacetSelection {
    pub job_model: BTreeSet<JobModel>,
    pub job_type: BTreeSet<JobType>,
    pub job_level: BTreeSet<JobLevel>,
}

impl FacetSelection {
    /// Flips membership of `value` in its category. Returns whether it is now selected.
    pub fn toggle(&mut self, value: FacetValue) -> bool {
        fn flip<T: Ord>(set: &mut BTreeSet<T>, v: T) -> bool {
            if set.remove(&v) {
                false
            } else {
                set.insert(v);
                true
            }
        }
        match value {
            FacetValue::JobModel(v) => flip(&mut self.job_model, v),
            FacetValue::JobType(v) => flip(&mut self.job_type, v),
            FacetValue::JobLevel(v) => flip(&mut self.job_level, v),
        }
    }

    pub fn contains(&self, value: FacetValue) -> bool {
        match value {
            FacetValue::JobModel(v) => self.job_model.contains(&v),
            FacetValue::JobType(v) => self.job_type.contains(&v),
            FacetValue::JobLevel(v) => self.job_level.contains(&v),
        }
    }

    pub fn clear(&mut self) {
        self.job_model.clear();
        self.job_type.clear();
        self.job_level.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }

    pub fn active_count(&self) -> usize {
        self.job_model.len() + self.job_type.len() + self.job_level.len()
    }

    pub fn category_is_filtered(&self, category: FacetCategory) -> bool {
        match category {
            FacetCategory::JobModel => !self.job_model.is_empty(),
            FacetCategory::JobType => !self.job_type.is_empty(),
            FacetCategory::JobLevel => !self.job_level.is_empty(),
        }
    }

    /// Union within a category, intersection across categories.
    pub fn matches(&self, job: &JobItem) -> bool {
        (self.job_model.is_empty() || self.job_model.contains(&job.job_model))
            && (self.job_type.is_empty() || self.job_type.contains(&job.job_type))
            && (self.job_level.is_empty() || self.job_level.contains(&job.job_level))
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn job(model: JobModel, job_type: JobType, level: JobLevel) -> JobItem {
        JobItem::new(1, "Any", model, job_type, level)
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut selection = FacetSelection::default();
        assert!(selection.toggle(FacetValue::JobModel(JobModel::Remote)));
        assert!(selection.contains(FacetValue::JobModel(JobModel::Remote)));
        assert!(!selection.toggle(FacetValue::JobModel(JobModel::Remote)));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_internship_checkboxes_are_independent() {
        let mut selection = FacetSelection::default();
        selection.toggle(FacetValue::JobType(JobType::Internship));
        assert!(selection.contains(FacetValue::JobType(JobType::Internship)));
        assert!(!selection.contains(FacetValue::JobLevel(JobLevel::Internship)));
        assert!(selection.category_is_filtered(FacetCategory::JobType));
        assert!(!selection.category_is_filtered(FacetCategory::JobLevel));
    }

    #[test]
    fn test_union_within_category() {
        let mut selection = FacetSelection::default();
        selection.toggle(FacetValue::JobModel(JobModel::Remote));
        selection.toggle(FacetValue::JobModel(JobModel::Hybrid));
        assert!(selection.matches(&job(JobModel::Remote, JobType::Contract, JobLevel::Associate)));
        assert!(selection.matches(&job(JobModel::Hybrid, JobType::Contract, JobLevel::Associate)));
        assert!(!selection.matches(&job(JobModel::OnSite, JobType::Contract, JobLevel::Associate)));
    }

    #[test]
    fn test_intersection_across_categories() {
        let mut selection = FacetSelection::default();
        selection.toggle(FacetValue::JobModel(JobModel::Remote));
        selection.toggle(FacetValue::JobLevel(JobLevel::Director));
        assert!(selection.matches(&job(JobModel::Remote, JobType::FullTime, JobLevel::Director)));
        assert!(!selection.matches(&job(JobModel::Remote, JobType::FullTime, JobLevel::EntryLevel)));
        assert_eq!(selection.active_count(), 2);
    }

    #[test]
    fn test_count_facet_value() {
        let catalog = vec![
            job(JobModel::Remote, JobType::Internship, JobLevel::Internship),
            job(JobModel::Remote, JobType::FullTime, JobLevel::Associate),
            job(JobModel::Hybrid, JobType::FullTime, JobLevel::Internship),
        ];
        assert_eq!(count_facet_value(&catalog, FacetValue::JobModel(JobModel::Remote)), 2);
        assert_eq!(count_facet_value(&catalog, FacetValue::JobType(JobType::Internship)), 1);
        assert_eq!(count_facet_value(&catalog, FacetValue::JobLevel(JobLevel::Internship)), 2);
        assert_eq!(count_facet_value(&[], FacetValue::JobModel(JobModel::OnSite)), 0);
    }

    #[test]
    fn test_options_follow_category() {
        for category in FacetCategory::ALL {
            assert!(category.options().iter().all(|v| v.category() == category));
        }
        assert_eq!(FacetCategory::JobLevel.options().len(), 5);
        assert_eq!(FacetCategory::JobModel.options()[1].label(), "On-site");
    }
}
