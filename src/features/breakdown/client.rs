//! AI goal decomposition.
//!
//! `GoalPlanner` is the seam; `GeminiPlanner` talks to the Gemini
//! `generateContent` endpoint with a JSON response schema. Any failure along
//! the way collapses into `ServiceUnavailable` so callers never leak
//! transport details to the user.

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::SmarttimeError;
use crate::features::tasks::Priority;

/// Model used when the config does not override it.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// A subtask proposed by the planner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposedTask {
    /// Actionable subtask title
    pub title: String,
    /// Estimated effort in minutes
    pub estimated_minutes: u32,
    /// Suggested priority
    pub priority: Priority,
}

/// Decomposes a goal into actionable subtasks.
#[cfg_attr(test, mockall::automock)]
pub trait GoalPlanner {
    /// Break a goal into 3-6 subtasks.
    ///
    /// # Errors
    /// `ServiceUnavailable` on any failure; no partial results.
    fn break_down_goal(&self, goal: &str) -> Result<Vec<ProposedTask>, SmarttimeError>;
}

/// Gemini-backed planner.
pub struct GeminiPlanner {
    client: reqwest::blocking::Client,
    api_key: String,
    model: String,
}

impl GeminiPlanner {
    /// Create a planner with the given API key and model name.
    #[must_use]
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    fn request_body(goal: &str) -> serde_json::Value {
        json!({
            "contents": [{
                "parts": [{
                    "text": format!(
                        "Break down the goal \"{goal}\" into 3 to 6 small, actionable subtasks. \
                         For each subtask give a concise title, an estimated duration in minutes, \
                         and a priority."
                    )
                }]
            }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": {
                    "type": "ARRAY",
                    "items": {
                        "type": "OBJECT",
                        "properties": {
                            "title": { "type": "STRING" },
                            "estimatedMinutes": { "type": "INTEGER" },
                            "priority": {
                                "type": "STRING",
                                "enum": ["HIGH", "MEDIUM", "LOW"]
                            }
                        },
                        "required": ["title", "estimatedMinutes", "priority"]
                    }
                }
            }
        })
    }
}

impl GoalPlanner for GeminiPlanner {
    fn break_down_goal(&self, goal: &str) -> Result<Vec<ProposedTask>, SmarttimeError> {
        let url = format!("{API_BASE}/{}:generateContent", self.model);
        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&Self::request_body(goal))
            .send()
            .map_err(|_| SmarttimeError::ServiceUnavailable)?;

        if !response.status().is_success() {
            return Err(SmarttimeError::ServiceUnavailable);
        }

        let payload: GenerateContentResponse = response
            .json()
            .map_err(|_| SmarttimeError::ServiceUnavailable)?;
        let text = payload
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .and_then(|p| p.text.as_deref())
            .ok_or(SmarttimeError::ServiceUnavailable)?;

        let mut tasks: Vec<ProposedTask> =
            serde_json::from_str(text).map_err(|_| SmarttimeError::ServiceUnavailable)?;
        if tasks.is_empty() {
            return Err(SmarttimeError::ServiceUnavailable);
        }
        for task in &mut tasks {
            task.estimated_minutes = task.estimated_minutes.max(1);
        }
        Ok(tasks)
    }
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Content,
}

#[derive(Debug, Default, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_proposed_task_deserializes_camel_case() {
        let json = r#"[{"title":"Outline chapters","estimatedMinutes":30,"priority":"HIGH"}]"#;
        let tasks: Vec<ProposedTask> = serde_json::from_str(json).unwrap();
        assert_eq!(tasks[0].title, "Outline chapters");
        assert_eq!(tasks[0].estimated_minutes, 30);
        assert_eq!(tasks[0].priority, Priority::High);
    }

    #[test]
    fn test_response_payload_shape() {
        let json = r#"{"candidates":[{"content":{"parts":[{"text":"[]"}]}}]}"#;
        let payload: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            payload.candidates[0].content.parts[0].text.as_deref(),
            Some("[]")
        );
    }

    #[test]
    fn test_mock_planner() {
        let mut planner = MockGoalPlanner::new();
        planner.expect_break_down_goal().returning(|_| {
            Ok(vec![ProposedTask {
                title: "Step one".to_string(),
                estimated_minutes: 15,
                priority: Priority::Medium,
            }])
        });
        let result = planner.break_down_goal("learn piano").unwrap();
        assert_eq!(result.len(), 1);
    }
}
