use serde::de::DeserializeOwned;

/// Decodes each record on its own. A record that does not fit `T` is logged
/// and left out; the rest of the catalog is kept.
pub fn decode_records<T: DeserializeOwned>(endpoint: &str, records: Vec<serde_json::Value>) -> Vec<T> {
    let total = records.len();
    let mut decoded = Vec::with_capacity(total);
    for (index, record) in records.into_iter().enumerate() {
        match serde_json::from_value::<T>(record) {
            Ok(item) => decoded.push(item),
            Err(e) => tracing::warn!("Skipping record {} from {}: {}", index, endpoint, e),
        }
    }
    if decoded.len() < total {
        tracing::warn!("Catalog {}: kept {} of {} records", endpoint, decoded.len(), total);
    }
    decoded
}


#[cfg(test)]
mod tests {
    use super::*;
    use common::catalog::{JobItem, JobLevel, SkillItem};
    use serde_json::json;

    #[test]
    fn test_bad_record_is_skipped() {
        let records = vec![
            json!({"id": 1, "job_title": "Engineer", "job_model": "Remote", "job_type": "Full-time", "job_level": "Entry-level"}),
            json!({"id": 2, "job_title": "Wizard", "job_model": "Remote", "job_type": "Full-time", "job_level": "Archmage"}),
            json!({"id": 3, "job_title": "Director of Ops", "job_model": "Hybrid", "job_type": "Contract", "job_level": "Director", "location": "Berlin"}),
        ];
        let jobs = decode_records::<JobItem>("jobs", records);
        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[0].job_title, "Engineer");
        assert_eq!(jobs[1].job_level, JobLevel::Director);
        assert_eq!(jobs[1].location.as_deref(), Some("Berlin"));
    }

    #[test]
    fn test_skills_keep_order() {
        let records = vec![
            json!({"id": 1, "skill_name": "Python"}),
            json!({"id": 2, "skill_name": "Go"}),
        ];
        let skills = decode_records::<SkillItem>("skills", records);
        assert_eq!(skills, vec![SkillItem::new(1, "Python"), SkillItem::new(2, "Go")]);
    }
}
