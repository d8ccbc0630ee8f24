//! Style guide resource definition.
//!
//! Exposes the checklist enforced by the `check_code_style` tool so clients
//! can discover the rules before submitting source text.

use super::ResourceDefinition;
use crate::domains::resources::service::ResourceContent;
use crate::domains::tools::definitions::style::STYLE_RULES;

/// Style guide resource: the rule catalogue as markdown.
pub struct StyleGuideResource;

impl ResourceDefinition for StyleGuideResource {
    const URI: &'static str = "guide://pep8";
    const NAME: &'static str = "Code Style Guide";
    const DESCRIPTION: &'static str =
        "The PEP8-style checklist enforced by the check_code_style tool";
    const MIME_TYPE: &'static str = "text/markdown";

    fn content() -> ResourceContent {
        let mut guide = String::from(
            "# Code Style Checklist\n\n\
             Rules applied per line by the `check_code_style` tool:\n\n",
        );
        for (id, description) in STYLE_RULES {
            guide.push_str(&format!("- **{}**: {}\n", id, description));
        }
        guide.push_str(
            "\nCallers may add substring rules via the `custom_rules` parameter; \
             each is reported under its own rule id.\n",
        );

        ResourceContent::Text(guide)
    }
}
