//! Participant list filtering.
//!
//! Two filter modes exist and are mutually exclusive: a plan-scope filter
//! and a free-text filter. When a request carries both, the plan filter
//! wins; the precedence is explicit here rather than an accident of caller
//! ordering.

use serde_json::Value;

use crate::domain::foundation::PlanId;

use super::Participant;

/// Active filter over a participant list.
#[derive(Debug, Clone, PartialEq)]
pub enum ParticipantFilter {
    /// No filtering; every participant passes.
    None,
    /// Restrict to participants whose plan reference matches.
    ByPlan(PlanId),
    /// Restrict to participants where the string form of any field value
    /// contains the query, case-insensitively.
    ByText(String),
}

impl ParticipantFilter {
    /// Resolves a filter from request parameters. Plan scope takes
    /// precedence over free text when both are present.
    pub fn resolve(plan: Option<PlanId>, text: Option<String>) -> Self {
        match (plan, text) {
            (Some(plan), _) => ParticipantFilter::ByPlan(plan),
            (None, Some(text)) if !text.trim().is_empty() => {
                ParticipantFilter::ByText(text)
            }
            _ => ParticipantFilter::None,
        }
    }

    /// Whether a participant passes the filter.
    pub fn matches(&self, participant: &Participant) -> bool {
        match self {
            ParticipantFilter::None => true,
            ParticipantFilter::ByPlan(plan) => &participant.plan == plan,
            ParticipantFilter::ByText(query) => {
                let needle = query.to_lowercase();
                match serde_json::to_value(participant) {
                    Ok(value) => value_contains(&value, &needle),
                    Err(_) => false,
                }
            }
        }
    }

    /// Applies the filter to a list, preserving order.
    pub fn apply<'a>(&self, participants: &'a [Participant]) -> Vec<&'a Participant> {
        participants.iter().filter(|p| self.matches(p)).collect()
    }
}

/// Walks every leaf of a JSON value looking for the lowercased needle.
fn value_contains(value: &Value, needle: &str) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => b.to_string().contains(needle),
        Value::Number(n) => n.to_string().contains(needle),
        Value::String(s) => s.to_lowercase().contains(needle),
        Value::Array(items) => items.iter().any(|v| value_contains(v, needle)),
        Value::Object(map) => map.values().any(|v| value_contains(v, needle)),
    }
}
