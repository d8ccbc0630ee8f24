//! Prompt service implementation.
//!
//! The PromptService manages prompt templates and their instantiation.
//! It maintains a registry of available prompts and handles argument
//! validation and substitution.
//!
//! Prompts are defined in `definitions/` and registered via `registry.rs`.
//! Adding a new prompt does NOT require modifying this file.

use serde::Serialize;
use std::collections::HashMap;
use tracing::info;

use super::error::PromptError;
use super::registry::get_all_prompts;
use super::templates::{PromptArgument, PromptTemplate};

/// Prompt metadata returned in listings.
#[derive(Debug, Clone, Serialize)]
pub struct PromptMetadata {
    /// The unique name of the prompt.
    pub name: String,

    /// A description of what the prompt does.
    pub description: Option<String>,

    /// The arguments the prompt accepts.
    pub arguments: Vec<PromptArgument>,
}

/// A rendered prompt.
#[derive(Debug, Clone, Serialize)]
pub struct PromptResult {
    /// Description of the prompt.
    pub description: Option<String>,

    /// The rendered messages.
    pub messages: Vec<PromptMessage>,
}

/// A single message of a rendered prompt.
#[derive(Debug, Clone, Serialize)]
pub struct PromptMessage {
    /// Message role ("user").
    pub role: String,

    /// Message text.
    pub content: String,
}

/// Service for managing and instantiating prompts.
pub struct PromptService {
    /// Registry of available prompts.
    /// Key: prompt name, Value: prompt template
    prompts: HashMap<String, PromptTemplate>,
}

impl PromptService {
    /// Create a new PromptService with all registered prompts.
    pub fn new() -> Self {
        info!("Initializing PromptService");

        let mut service = Self {
            prompts: HashMap::new(),
        };

        service.register_from_registry();

        service
    }

    /// Register all prompts from the registry.
    fn register_from_registry(&mut self) {
        info!("Registering prompts from registry");
        for template in get_all_prompts() {
            self.register_prompt(template);
        }
    }

    /// Register a prompt template.
    pub fn register_prompt(&mut self, template: PromptTemplate) {
        info!("Registering prompt: {}", template.name);
        self.prompts.insert(template.name.clone(), template);
    }

    /// List all available prompts.
    pub async fn list_prompts(&self) -> Vec<PromptMetadata> {
        let mut prompts: Vec<_> = self
            .prompts
            .values()
            .map(|template| PromptMetadata {
                name: template.name.clone(),
                description: template.description.clone(),
                arguments: template.arguments.clone(),
            })
            .collect();
        prompts.sort_by(|a, b| a.name.cmp(&b.name));
        prompts
    }

    /// Get a prompt with arguments substituted.
    pub async fn get_prompt(
        &self,
        name: &str,
        arguments: Option<HashMap<String, String>>,
    ) -> Result<PromptResult, PromptError> {
        let template = self
            .prompts
            .get(name)
            .ok_or_else(|| PromptError::not_found(name))?;

        let arguments = arguments.unwrap_or_default();

        // Validate required arguments
        for arg in &template.arguments {
            if arg.required && !arguments.contains_key(&arg.name) {
                return Err(PromptError::missing_argument(&arg.name));
            }
        }

        let content = template.render(&arguments);

        Ok(PromptResult {
            description: template.description.clone(),
            messages: vec![PromptMessage {
                role: "user".to_string(),
                content,
            }],
        })
    }
}

impl Default for PromptService {
    fn default() -> Self {
        Self::new()
    }
}
