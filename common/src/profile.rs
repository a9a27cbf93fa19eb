//! Questionnaire answers that are not tag lists, and the submitted profile.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Degree {
    #[default]
    #[serde(rename = "No Degree")]
    NoDegree,
    Bachelor,
    Master,
    #[serde(rename = "MBA")]
    Mba,
    #[serde(rename = "PhD")]
    PhD,
}

impl Degree {
    pub const ALL: [Degree; 5] = [Degree::NoDegree, Degree::Bachelor, Degree::Master, Degree::Mba, Degree::PhD];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NoDegree => "No Degree",
            Self::Bachelor => "Bachelor",
            Self::Master => "Master",
            Self::Mba => "MBA",
            Self::PhD => "PhD",
        }
    }

    /// Stable id for the radio input.
    pub fn input_id(&self) -> &'static str {
        match self {
            Self::NoDegree => "no-degree",
            Self::Bachelor => "bachelor",
            Self::Master => "master",
            Self::Mba => "mba",
            Self::PhD => "phd",
        }
    }
}

/// Years typed into the number field. Anything that is not a whole
/// non-negative number leaves the answer unset.
pub fn parse_years_of_experience(text: &str) -> Option<u32> {
    text.trim().parse::<u32>().ok()
}

/// Snapshot of the questionnaire at submit time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AssessmentProfile {
    pub job_titles: Vec<String>,
    pub skills: Vec<String>,
    pub experiences: Vec<String>,
    pub degree: Degree,
    pub years_of_experience: Option<u32>,
}

impl AssessmentProfile {
    pub fn is_empty(&self) -> bool {
        self.job_titles.is_empty() && self.skills.is_empty() && self.experiences.is_empty() && self.years_of_experience.is_none()
    }
}
