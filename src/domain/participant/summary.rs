//! Summary statistics over a participant list.

use serde::Serialize;

use super::Participant;

/// Aggregated view of a (possibly filtered) participant list.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantSummary {
    pub count: usize,
    pub total_balance: f64,
    pub average_age: f64,
    pub average_savings_rate: f64,
}

impl ParticipantSummary {
    /// Computes the summary. An empty list yields all zeros; missing
    /// balances count as 0; the averages guard division by zero.
    pub fn of(participants: &[&Participant]) -> Self {
        let count = participants.len();
        let total_balance = participants
            .iter()
            .map(|p| p.balance.unwrap_or(0.0))
            .sum();

        let average_age = if count == 0 {
            0.0
        } else {
            participants.iter().map(|p| f64::from(p.age)).sum::<f64>() / count as f64
        };

        let average_savings_rate = if count == 0 {
            0.0
        } else {
            participants
                .iter()
                .map(|p| p.savings_rate_percent.unwrap_or(0.0))
                .sum::<f64>()
                / count as f64
        };

        Self {
            count,
            total_balance,
            average_age,
            average_savings_rate,
        }
    }
}
