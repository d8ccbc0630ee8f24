//! Data analysis prompt definition.

use super::PromptDefinition;
use crate::domains::prompts::templates::PromptArgument;

/// A prompt guiding analysis of a data file.
pub struct DataAnalysisPrompt;

impl PromptDefinition for DataAnalysisPrompt {
    const NAME: &'static str = "data_analysis";
    const DESCRIPTION: &'static str = "Generate a data analysis prompt for a given data type and objective";

    fn template() -> &'static str {
        r#"You are a data analysis expert. Please help analyze {{data_type}} data with the following objective: {{objective}}

Please provide:
1. Initial data exploration steps
2. Relevant statistical measures or metrics
3. Visualization recommendations
4. Key insights to look for
5. Potential pitfalls or limitations to consider

Make your analysis thorough but accessible to non-experts."#
    }

    fn arguments() -> Vec<PromptArgument> {
        vec![
            PromptArgument::required("data_type", "Type of data to analyze (csv, json, text, ...)"),
            PromptArgument::required("objective", "What the analysis should achieve"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_analysis_metadata() {
        assert_eq!(DataAnalysisPrompt::NAME, "data_analysis");
        assert!(!DataAnalysisPrompt::DESCRIPTION.is_empty());

        let args = DataAnalysisPrompt::arguments();
        assert_eq!(args.len(), 2);
        assert!(args.iter().all(|a| a.required));
    }

    #[test]
    fn test_template_uses_declared_arguments() {
        let template = DataAnalysisPrompt::template();
        assert!(template.contains("{{data_type}}"));
        assert!(template.contains("{{objective}}"));
    }
}
