//! API integration prompt definition.

use super::PromptDefinition;
use crate::domains::prompts::templates::PromptArgument;

/// A prompt guiding integration of an external API.
pub struct ApiIntegrationPrompt;

impl PromptDefinition for ApiIntegrationPrompt {
    const NAME: &'static str = "api_integration";
    const DESCRIPTION: &'static str = "Generate an API integration guidance prompt for a given API and use case";

    fn template() -> &'static str {
        r#"You are an API integration specialist. Please provide guidance for integrating the {{api_name}} API for the following use case: {{use_case}}

Please include:
1. Authentication requirements
2. Rate limiting considerations
3. Error handling strategies
4. Data transformation needs
5. Testing approaches
6. Security best practices

Provide practical, production-ready advice."#
    }

    fn arguments() -> Vec<PromptArgument> {
        vec![
            PromptArgument::required("api_name", "Name of the API to integrate"),
            PromptArgument::required("use_case", "Specific use case or goal"),
        ]
    }
}
