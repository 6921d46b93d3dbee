//! Prompt builders for the advisor workflows.
//!
//! Each builder assembles the structured fields of one workflow into a
//! [`PromptContent`]; [`render_prompt`] embeds the flattened block under the
//! fixed advisory preamble that every request carries.

use super::{PromptContent, PromptValue};

/// Fixed instructional preamble for every generated request.
const ADVISOR_PREAMBLE: &str = "You're a financial advisor providing advice based on plans provided \
by employers to their participants enrolled in the plan. Based on the selected user input, provide \
a campaign message for the financial advisor from the information given.";

/// Embeds rendered content under the advisory preamble.
///
/// An empty mapping yields the preamble followed by a blank content block.
pub fn render_prompt(content: &PromptContent) -> String {
    format!("{}\n\n{}", ADVISOR_PREAMBLE, content.render())
}

/// Content for a campaign message request.
pub fn campaign_prompt(
    campaign_name: &str,
    campaign_type: &str,
    advice_scenarios: &[String],
    age_group: &str,
) -> PromptContent {
    PromptContent::new()
        .with("Campaign Name", campaign_name)
        .with("Campaign Type", campaign_type)
        .with("Advice Scores", advice_scenarios.to_vec())
        .with("Age Group", age_group)
}

/// Content for a value proposition draft request.
///
/// The three trailing fields are fixed advisory context carried on every
/// value proposition request.
pub fn value_prop_prompt(
    age_group: &str,
    role: &str,
    unique_description: &str,
    ideal_client: &[String],
) -> PromptContent {
    PromptContent::new()
        .with("Age", age_group)
        .with("Role", role)
        .with("Unique Description", unique_description)
        .with("Ideal Client", ideal_client.to_vec())
        .with(
            "Financial Experience",
            "Expertise in financial planning, investment strategies, retirement planning, etc.",
        )
        .with(
            "Industry Knowledge",
            "Understanding of financial markets, regulations, and client needs.",
        )
        .with(
            "Client Engagement",
            "Effective communication skills, ability to build trust and provide tailored solutions.",
        )
}

/// Content for an advanced advice request.
pub fn advice_prompt(financial_details: &str, user_id: &str) -> PromptContent {
    PromptContent::new()
        .with("Financial Details", financial_details)
        .with("User ID", user_id)
        .with(
            "Interest Areas",
            PromptValue::List(vec![
                "Investment strategies".to_string(),
                "Risk management".to_string(),
                "Wealth preservation".to_string(),
            ]),
        )
        .with(
            "Predictive Analytics",
            "Utilize predictive modeling for future financial forecasting.",
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rendered_prompt_starts_with_preamble() {
        let content = PromptContent::new().with("Age", "45");
        let prompt = render_prompt(&content);
        assert!(prompt.starts_with(ADVISOR_PREAMBLE));
        assert!(prompt.ends_with("- Age: 45"));
    }

    #[test]
    fn empty_content_still_renders_preamble() {
        let prompt = render_prompt(&PromptContent::new());
        assert_eq!(prompt, format!("{}\n\n", ADVISOR_PREAMBLE));
    }

    #[test]
    fn campaign_prompt_carries_fields_in_order() {
        let scenarios = vec![
            "Not contributing to their plan, but eligible".to_string(),
            "Opportunity to save more".to_string(),
        ];
        let content = campaign_prompt("Q3 Outreach", "Plan A", &scenarios, "45");

        let labels: Vec<&str> = content.entries().map(|(label, _)| label).collect();
        assert_eq!(
            labels,
            vec!["Campaign Name", "Campaign Type", "Advice Scores", "Age Group"]
        );
        assert!(content.render().contains(
            "- Advice Scores: Not contributing to their plan, but eligible, Opportunity to save more"
        ));
    }

    #[test]
    fn value_prop_prompt_includes_fixed_advisory_fields() {
        let content = value_prop_prompt(
            "30-45",
            "Advisor",
            "Financial advisor specializing in retirement planning",
            &["Retirees".to_string()],
        );

        let rendered = content.render();
        assert_eq!(content.len(), 7);
        assert!(rendered.contains("- Financial Experience: "));
        assert!(rendered.contains("- Industry Knowledge: "));
        assert!(rendered.contains("- Client Engagement: "));
    }

    #[test]
    fn advice_prompt_lists_interest_areas() {
        let content = advice_prompt("Rollover of a 401(k) balance", "user-1");
        assert!(content
            .render()
            .contains("- Interest Areas: Investment strategies, Risk management, Wealth preservation"));
    }
}
