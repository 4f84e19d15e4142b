//! Progress model - per-category answers and weekly completion counts.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::week::WeekKey;

/// Number of fixed questions in every category.
pub const QUESTIONS_PER_CATEGORY: usize = 7;

/// Self-reported state of a single question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerState {
    /// Not answered yet
    #[default]
    Unset,
    /// "Got it"
    Understood,
    /// "Not fully clear"
    #[serde(alias = "notyet")]
    NotUnderstood,
}

impl AnswerState {
    /// Decode one persisted slot. Anything unrecognized, including `null`,
    /// becomes [`AnswerState::Unset`].
    fn from_value(value: &Value) -> Self {
        match value.as_str() {
            Some("understood") => Self::Understood,
            Some("not_understood") | Some("notyet") => Self::NotUnderstood,
            _ => Self::Unset,
        }
    }

    /// Canonical persisted name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unset => "unset",
            Self::Understood => "understood",
            Self::NotUnderstood => "not_understood",
        }
    }
}

impl std::fmt::Display for AnswerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned for an unknown answer token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown answer '{0}', expected got-it, not-yet or unset")]
pub struct ParseAnswerError(String);

impl std::str::FromStr for AnswerState {
    type Err = ParseAnswerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "unset" | "clear" => Ok(Self::Unset),
            "understood" | "got-it" | "got_it" | "yes" => Ok(Self::Understood),
            "not_understood" | "not-understood" | "not-yet" | "notyet" | "no" => {
                Ok(Self::NotUnderstood)
            }
            _ => Err(ParseAnswerError(s.to_string())),
        }
    }
}

/// The answer slots of one category. The length is fixed by the type.
pub type Answers = [AnswerState; QUESTIONS_PER_CATEGORY];

/// Normalize an arbitrary persisted `answers` value to exactly
/// [`QUESTIONS_PER_CATEGORY`] slots: extras are dropped, missing slots
/// and non-array values become [`AnswerState::Unset`].
pub fn heal_answers(raw: &Value) -> Answers {
    let mut answers = [AnswerState::Unset; QUESTIONS_PER_CATEGORY];
    let Some(items) = raw.as_array() else {
        if !raw.is_null() {
            tracing::warn!("answers is not an array, resetting to unset");
        }
        return answers;
    };
    if items.len() != QUESTIONS_PER_CATEGORY {
        tracing::warn!(
            "answers has {} slots, healing to {}",
            items.len(),
            QUESTIONS_PER_CATEGORY
        );
    }
    for (slot, item) in answers.iter_mut().zip(items) {
        *slot = AnswerState::from_value(item);
    }
    answers
}

fn deserialize_answers<'de, D>(deserializer: D) -> Result<Answers, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    Ok(heal_answers(&raw))
}

/// Progress for one category, created lazily on first access.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryProgress {
    /// Number of distinct weeks this category was completed in
    #[serde(default, alias = "count")]
    pub completion_count: u32,

    /// Week of the most recent completion
    #[serde(default, alias = "lastWeekKey")]
    pub last_completed_week: Option<WeekKey>,

    /// Answer slots
    #[serde(default, deserialize_with = "deserialize_answers")]
    pub answers: Answers,
}

impl CategoryProgress {
    /// Whether every question is marked understood.
    pub fn all_understood(&self) -> bool {
        self.answers.iter().all(|a| *a == AnswerState::Understood)
    }

    /// Whether a completion was already recorded in `week`.
    pub fn completed_in(&self, week: &WeekKey) -> bool {
        self.last_completed_week.as_ref() == Some(week)
    }
}

/// Root of all persisted state for the single local user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileState {
    /// Store name, free text
    #[serde(default, alias = "store")]
    pub store_name: String,

    /// User name, free text
    #[serde(default, alias = "name")]
    pub user_name: String,

    /// Progress by category id
    #[serde(default, alias = "progress")]
    pub progress_by_id: BTreeMap<String, CategoryProgress>,
}

impl ProfileState {
    /// Create an empty profile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Progress for a category, or the defaults if none was recorded yet.
    pub fn progress(&self, id: &str) -> CategoryProgress {
        self.progress_by_id.get(id).cloned().unwrap_or_default()
    }

    /// Completion count for a category without materializing it.
    pub fn completion_count(&self, id: &str) -> u32 {
        self.progress_by_id
            .get(id)
            .map(|p| p.completion_count)
            .unwrap_or(0)
    }

    /// Mutable progress for a category, materializing defaults if absent.
    pub fn progress_mut(&mut self, id: &str) -> &mut CategoryProgress {
        self.progress_by_id.entry(id.to_string()).or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_short_answers_padded() {
        let progress: CategoryProgress = serde_json::from_value(json!({
            "completionCount": 1,
            "lastCompletedWeek": "2026-W06",
            "answers": ["understood", "not_understood", "understood"]
        }))
        .unwrap();

        assert_eq!(progress.answers.len(), QUESTIONS_PER_CATEGORY);
        assert_eq!(progress.answers[0], AnswerState::Understood);
        assert_eq!(progress.answers[1], AnswerState::NotUnderstood);
        assert_eq!(progress.answers[2], AnswerState::Understood);
        assert!(progress.answers[3..].iter().all(|a| *a == AnswerState::Unset));
    }

    #[test]
    fn test_long_answers_truncated() {
        let raw = Value::Array(vec![json!("understood"); 9]);
        let answers = heal_answers(&raw);
        assert_eq!(answers, [AnswerState::Understood; QUESTIONS_PER_CATEGORY]);
    }

    #[test]
    fn test_non_array_answers_reset() {
        assert_eq!(heal_answers(&json!("oops")), [AnswerState::Unset; QUESTIONS_PER_CATEGORY]);
        assert_eq!(heal_answers(&json!({"0": "understood"})), [AnswerState::Unset; QUESTIONS_PER_CATEGORY]);

        let progress: CategoryProgress =
            serde_json::from_value(json!({"completionCount": 2})).unwrap();
        assert_eq!(progress.answers, [AnswerState::Unset; QUESTIONS_PER_CATEGORY]);
        assert_eq!(progress.completion_count, 2);
        assert_eq!(progress.last_completed_week, None);
    }

    #[test]
    fn test_legacy_profile_shape() {
        let profile: ProfileState = serde_json::from_value(json!({
            "store": "Main St",
            "name": "Ana",
            "progress": {
                "culture": {
                    "count": 2,
                    "lastWeekKey": "2026-W07",
                    "answers": ["understood", null, "notyet", "bogus", null, null, null]
                }
            }
        }))
        .unwrap();

        assert_eq!(profile.store_name, "Main St");
        assert_eq!(profile.user_name, "Ana");
        let culture = profile.progress("culture");
        assert_eq!(culture.completion_count, 2);
        assert_eq!(culture.last_completed_week.as_ref().map(|w| w.as_str()), Some("2026-W07"));
        assert_eq!(culture.answers[0], AnswerState::Understood);
        assert_eq!(culture.answers[1], AnswerState::Unset);
        assert_eq!(culture.answers[2], AnswerState::NotUnderstood);
        assert_eq!(culture.answers[3], AnswerState::Unset);
    }

    #[test]
    fn test_serialized_shape() {
        let mut profile = ProfileState::new();
        profile.store_name = "Main St".to_string();
        profile.progress_mut("culture").answers[0] = AnswerState::NotUnderstood;

        let value = serde_json::to_value(&profile).unwrap();
        assert_eq!(value["storeName"], "Main St");
        assert_eq!(value["userName"], "");
        let culture = &value["progressById"]["culture"];
        assert_eq!(culture["completionCount"], 0);
        assert!(culture["lastCompletedWeek"].is_null());
        assert_eq!(culture["answers"].as_array().unwrap().len(), QUESTIONS_PER_CATEGORY);
        assert_eq!(culture["answers"][0], "not_understood");
        assert_eq!(culture["answers"][1], "unset");
    }

    #[test]
    fn test_progress_lookup_is_lazy() {
        let mut profile = ProfileState::new();
        assert_eq!(profile.progress("culture"), CategoryProgress::default());
        assert!(profile.progress_by_id.is_empty());

        profile.progress_mut("culture").completion_count = 3;
        assert_eq!(profile.completion_count("culture"), 3);
        assert_eq!(profile.progress_by_id.len(), 1);
    }

    #[test]
    fn test_parse_answer_tokens() {
        assert_eq!("got-it".parse::<AnswerState>().unwrap(), AnswerState::Understood);
        assert_eq!("Not-Yet".parse::<AnswerState>().unwrap(), AnswerState::NotUnderstood);
        assert_eq!("unset".parse::<AnswerState>().unwrap(), AnswerState::Unset);
        assert!("maybe".parse::<AnswerState>().is_err());
    }
}
