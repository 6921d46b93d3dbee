//! In-memory plan directory with the demo data set.

use async_trait::async_trait;

use crate::domain::foundation::{ParticipantId, PlanId};
use crate::domain::participant::{Participant, ScoreCategory, ScoreSet};
use crate::domain::plan::Plan;
use crate::ports::{DirectoryError, PlanDirectory};

/// Plan directory backed by a fixed in-process data set.
pub struct InMemoryPlanDirectory {
    plans: Vec<Plan>,
}

impl InMemoryPlanDirectory {
    /// Creates a directory over the given plans.
    pub fn new(plans: Vec<Plan>) -> Self {
        Self { plans }
    }

    /// Creates a directory seeded with the demo data set.
    pub fn with_demo_data() -> Self {
        Self::new(demo_plans())
    }
}

#[async_trait]
impl PlanDirectory for InMemoryPlanDirectory {
    async fn plans(&self) -> Result<Vec<Plan>, DirectoryError> {
        Ok(self.plans.clone())
    }

    async fn participants(&self) -> Result<Vec<Participant>, DirectoryError> {
        Ok(self
            .plans
            .iter()
            .flat_map(|plan| plan.participants.iter().cloned())
            .collect())
    }
}

fn participant(
    id: &str,
    name: &str,
    age: u32,
    balance: f64,
    need: &str,
    plan: &str,
    employer: &str,
    scores: ScoreSet,
) -> Participant {
    Participant {
        id: ParticipantId::new(id).expect("demo participant id"),
        name: name.to_string(),
        age,
        balance: Some(balance),
        need: Some(need.to_string()),
        plan: PlanId::new(plan).expect("demo plan id"),
        employer: Some(employer.to_string()),
        state: None,
        marital_status: None,
        gender: None,
        salary: None,
        savings_rate_percent: None,
        scores,
    }
}

fn demo_plans() -> Vec<Plan> {
    vec![
        Plan {
            id: PlanId::new("plan-a").expect("demo plan id"),
            name: "Plan A".to_string(),
            assets: Some("High".to_string()),
            health: Some("Good".to_string()),
            participants: vec![
                participant(
                    "p-1",
                    "John Doe",
                    45,
                    150_000.0,
                    "High",
                    "plan-a",
                    "ABC Inc.",
                    ScoreSet::new()
                        .with(ScoreCategory::Retirement, 92.0)
                        .with(ScoreCategory::Financial, 78.0)
                        .with(ScoreCategory::Tax, 82.0)
                        .with(ScoreCategory::Investment, 48.0)
                        .with(ScoreCategory::Estate, 76.0)
                        .with(ScoreCategory::Other, 14.0),
                ),
                participant(
                    "p-2",
                    "Maria Alvarez",
                    38,
                    64_000.0,
                    "Medium",
                    "plan-a",
                    "ABC Inc.",
                    ScoreSet::new()
                        .with(ScoreCategory::Retirement, 55.0)
                        .with(ScoreCategory::Financial, 71.0)
                        .with(ScoreCategory::Investment, 63.0),
                ),
            ],
        },
        Plan {
            id: PlanId::new("plan-b").expect("demo plan id"),
            name: "Plan B".to_string(),
            assets: Some("Medium".to_string()),
            health: Some("Fair".to_string()),
            participants: vec![participant(
                "p-3",
                "Sam Carter",
                58,
                310_000.0,
                "Low",
                "plan-b",
                "Delta Corp",
                ScoreSet::new()
                    .with(ScoreCategory::Retirement, 88.0)
                    .with(ScoreCategory::Estate, 41.0),
            )],
        },
    ]
}
