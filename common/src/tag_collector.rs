//! Free-text tag collection for the profile questionnaire.
//!
//! A [`TagCollector`] owns the pending input text and the ordered tag list for
//! one field of the questionnaire. Invalid input is never an error: a commit
//! that does not satisfy the field's rules simply does nothing.

use serde::{Deserialize, Serialize};

use crate::catalog::SkillItem;

/// Minimum length (in characters, after trimming) of a job title tag.
pub const MIN_JOB_TITLE_LEN: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TagVariant {
    JobTitles,
    Skills,
    Experiences,
}

impl TagVariant {
    /// Only skills reject duplicates.
    pub fn unique_entries(&self) -> bool {
        matches!(self, Self::Skills)
    }

    /// Skills are picked from the suggestion dropdown, never typed in directly.
    pub fn uses_suggestions(&self) -> bool {
        matches!(self, Self::Skills)
    }

    pub fn min_len(&self) -> usize {
        match self {
            Self::JobTitles => MIN_JOB_TITLE_LEN,
            Self::Skills | Self::Experiences => 1,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::JobTitles => "Your Job Titles",
            Self::Skills => "Your Skills",
            Self::Experiences => "Your Experiences",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::JobTitles => "Enter a job title",
            Self::Skills => "Start typing your skills",
            Self::Experiences => "Created an application that uses AI for talent growth",
        }
    }
}

/// Catalog entries whose name contains `text`, ignoring case, in catalog order.
pub fn suggest_skills(text: &str, catalog: &[SkillItem]) -> Vec<SkillItem> {
    if text.is_empty() {
        return vec![];
    }
    let needle = text.to_lowercase();
    catalog
        .iter()
        .filter(|skill| skill.skill_name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagCollector {
    variant: TagVariant,
    tags: Vec<String>,
    input: String,
}

impl TagCollector {
    pub fn new(variant: TagVariant) -> Self {
        Self { variant, tags: vec![], input: String::new() }
    }

    pub fn variant(&self) -> TagVariant {
        self.variant
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input_text(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Derived from the current input on every call; empty for variants without a dropdown.
    pub fn suggestions(&self, catalog: &[SkillItem]) -> Vec<SkillItem> {
        if !self.variant.uses_suggestions() {
            return vec![];
        }
        suggest_skills(&self.input, catalog)
    }

    /// Adds the trimmed input as a tag. Returns false (and keeps the input) if
    /// the input is too short or this field only takes suggestions.
    pub fn commit_from_input(&mut self) -> bool {
        if self.variant.uses_suggestions() {
            return false;
        }
        let value = self.input.trim();
        if value.is_empty() || value.chars().count() < self.variant.min_len() {
            return false;
        }
        if self.variant.unique_entries() && self.tags.iter().any(|t| t == value) {
            return false;
        }
        self.tags.push(value.to_string());
        self.input.clear();
        true
    }

    /// Adds a picked suggestion unless already present. Input and dropdown are
    /// cleared either way.
    pub fn commit_from_suggestion(&mut self, value: impl Into<String>) -> bool {
        let value = value.into();
        self.input.clear();
        if self.tags.contains(&value) {
            return false;
        }
        self.tags.push(value);
        true
    }

    /// Removes every tag equal to `value`. Returns how many were removed.
    pub fn remove(&mut self, value: &str) -> usize {
        let before = self.tags.len();
        self.tags.retain(|t| t != value);
        before - self.tags.len()
    }
}
