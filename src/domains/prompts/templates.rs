//! Prompt templates module.
//!
//! This module contains the PromptTemplate struct and related utilities
//! for defining and rendering prompt templates.

use serde::Serialize;
use std::collections::HashMap;

/// An argument accepted by a prompt.
#[derive(Debug, Clone, Serialize)]
pub struct PromptArgument {
    /// Argument name as used in the template.
    pub name: String,

    /// A description of the argument.
    pub description: Option<String>,

    /// Whether the argument must be provided.
    pub required: bool,
}

impl PromptArgument {
    /// Declare a required argument.
    pub fn required(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: Some(description.into()),
            required: true,
        }
    }

    /// Declare an optional argument.
    pub fn optional(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: Some(description.into()),
            required: false,
        }
    }
}

/// A prompt template that can be instantiated with arguments.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    /// The unique name of the prompt.
    pub name: String,

    /// A description of what the prompt does.
    pub description: Option<String>,

    /// The arguments that this prompt accepts.
    pub arguments: Vec<PromptArgument>,

    /// The template string with placeholders.
    /// Uses a simple {{variable}} syntax for substitution.
    pub template: String,
}

impl PromptTemplate {
    /// Render the template with the given arguments.
    ///
    /// `{{variable}}` is replaced with the value of `variable`; placeholders
    /// for absent optional arguments are removed.
    pub fn render(&self, arguments: &HashMap<String, String>) -> String {
        let mut result = self.template.clone();

        for (key, value) in arguments {
            let placeholder = format!("{{{{{}}}}}", key);
            result = result.replace(&placeholder, value);
        }

        // Remove placeholders of arguments that were not supplied
        for arg in &self.arguments {
            let placeholder = format!("{{{{{}}}}}", arg.name);
            result = result.replace(&placeholder, "");
        }

        result
    }
}
