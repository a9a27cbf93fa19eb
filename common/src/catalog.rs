//! Catalog records as served by the job/skill provider.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Record identifier. The provider is not consistent about numeric vs string ids.
#[derive(Debug, Clone, Serialize, Deserialize, Hash, PartialOrd, Ord, PartialEq, Eq)]
#[serde(untagged)]
pub enum CatalogId {
    Int(i64),
    String(String),
}

impl Display for CatalogId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{}", i),
            Self::String(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for CatalogId {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillItem {
    pub id: CatalogId,
    pub skill_name: String,
}

impl SkillItem {
    pub fn new(id: i64, skill_name: impl Into<String>) -> Self {
        Self { id: id.into(), skill_name: skill_name.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobItem {
    pub id: CatalogId,
    pub job_title: String,
    pub job_model: JobModel,
    pub job_type: JobType,
    pub job_level: JobLevel,

    // display only
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub job_description: Option<String>,
    #[serde(default)]
    pub salary: Option<String>,
    #[serde(default)]
    pub posted_at: Option<String>,
}

impl JobItem {
    pub fn new(id: i64, job_title: impl Into<String>, job_model: JobModel, job_type: JobType, job_level: JobLevel) -> Self {
        Self {
            id: id.into(),
            job_title: job_title.into(),
            job_model,
            job_type,
            job_level,
            company_name: None,
            location: None,
            job_description: None,
            salary: None,
            posted_at: None,
        }
    }
}

/// Working model of a job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum JobModel {
    Hybrid,
    #[serde(rename = "On-site")]
    OnSite,
    Remote,
}

impl JobModel {
    pub const ALL: [JobModel; 3] = [JobModel::Hybrid, JobModel::OnSite, JobModel::Remote];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hybrid => "Hybrid",
            Self::OnSite => "On-site",
            Self::Remote => "Remote",
        }
    }
}

/// Working time of a job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum JobType {
    #[serde(rename = "Part-time")]
    PartTime,
    #[serde(rename = "Full-time")]
    FullTime,
    Contract,
    Internship,
}

impl JobType {
    pub const ALL: [JobType; 4] = [JobType::PartTime, JobType::FullTime, JobType::Contract, JobType::Internship];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PartTime => "Part-time",
            Self::FullTime => "Full-time",
            Self::Contract => "Contract",
            Self::Internship => "Internship",
        }
    }
}

/// Seniority of a job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum JobLevel {
    #[serde(rename = "Entry-level")]
    EntryLevel,
    Internship,
    Associate,
    Director,
    #[serde(rename = "Mid-senior")]
    MidSenior,
}

impl JobLevel {
    pub const ALL: [JobLevel; 5] = [
        JobLevel::EntryLevel,
        JobLevel::Internship,
        JobLevel::Associate,
        JobLevel::Director,
        JobLevel::MidSenior,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EntryLevel => "Entry-level",
            Self::Internship => "Internship",
            Self::Associate => "Associate",
            Self::Director => "Director",
            Self::MidSenior => "Mid-senior",
        }
    }
}

impl Display for JobModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Display for JobType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Display for JobLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
