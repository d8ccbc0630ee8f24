//! Code style check tool definition.
//!
//! Evaluates a fixed PEP8-style checklist over supplied source text: line
//! length, tab indentation, trailing whitespace, and function/class naming,
//! plus caller-supplied substring rules. The scan works line by line with no
//! parsing beyond line splitting.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::domains::tools::{
    ParamSpec, ParamType, ToolDescriptor, ToolError, ToolHandler, ToolSchema, parse_params,
};

/// Default maximum line length, per PEP8.
const DEFAULT_MAX_LINE_LENGTH: usize = 79;

/// The fixed checklist: rule id and what it checks.
pub const STYLE_RULES: &[(&str, &str)] = &[
    ("E501", "line longer than the configured maximum (default 79 characters)"),
    ("W191", "indentation contains tabs"),
    ("W291", "trailing whitespace"),
    ("N801", "class name should use the CapWords convention"),
    ("N802", "function name should be lowercase snake_case"),
];

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the code style check tool.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckCodeStyleParams {
    /// Source text to check.
    pub source: String,

    /// Maximum allowed line length.
    #[serde(default = "default_max_line_length")]
    pub max_line_length: usize,

    /// Additional caller-supplied rules, matched as plain substrings.
    #[serde(default)]
    pub custom_rules: Vec<CustomRule>,
}

fn default_max_line_length() -> usize {
    DEFAULT_MAX_LINE_LENGTH
}

/// A caller-supplied rule: any line containing `pattern` is a violation.
#[derive(Debug, Clone, Deserialize)]
pub struct CustomRule {
    /// Rule id reported in violations (default: "custom").
    #[serde(default = "default_custom_rule_id")]
    pub id: String,

    /// Substring that must not appear on any line.
    pub pattern: String,

    /// Message reported in violations; a default names the pattern.
    #[serde(default)]
    pub message: Option<String>,
}

fn default_custom_rule_id() -> String {
    "custom".to_string()
}

// ============================================================================
// Violations
// ============================================================================

/// A single checklist violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Id of the violated rule.
    pub rule: String,

    /// 1-based line number.
    pub line: usize,

    /// Human-readable description of the violation.
    pub message: String,
}

impl Violation {
    fn new(rule: &str, line: usize, message: impl Into<String>) -> Self {
        Self {
            rule: rule.to_string(),
            line,
            message: message.into(),
        }
    }
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Code style check tool - runs the checklist over source text.
pub struct CheckCodeStyleTool;

impl CheckCodeStyleTool {
    /// Tool name as registered in the registry.
    pub const NAME: &'static str = "check_code_style";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Check source text against a PEP8-style checklist: line length, tab indentation, trailing whitespace, naming conventions, and optional custom substring rules. Returns one violation record per finding.";

    /// Build the descriptor for registration.
    pub fn descriptor() -> ToolDescriptor {
        ToolDescriptor::new(
            Self::NAME,
            Self::DESCRIPTION,
            Self::schema(),
            Arc::new(Self),
        )
    }

    fn schema() -> ToolSchema {
        ToolSchema::new(vec![
            ParamSpec::required("source", ParamType::String, "Source text to check"),
            ParamSpec::optional(
                "max_line_length",
                ParamType::Integer,
                "Maximum allowed line length (default: 79)",
            ),
            ParamSpec::optional(
                "custom_rules",
                ParamType::Array,
                "Additional rules as objects with 'pattern' and optional 'id' and 'message'",
            ),
        ])
    }

    /// Execute the tool logic.
    #[instrument(skip_all)]
    pub fn execute(params: &CheckCodeStyleParams) -> Result<Value, ToolError> {
        let violations = check(&params.source, params.max_line_length, &params.custom_rules);
        let lines_checked = params.source.lines().count();

        info!(
            "Checked {} lines, found {} violations",
            lines_checked,
            violations.len()
        );

        Ok(serde_json::json!({
            "violations": violations,
            "lines_checked": lines_checked,
        }))
    }
}

#[async_trait::async_trait]
impl ToolHandler for CheckCodeStyleTool {
    async fn call(&self, arguments: serde_json::Map<String, Value>) -> Result<Value, ToolError> {
        let params: CheckCodeStyleParams = parse_params(arguments)?;
        Self::execute(&params)
    }
}

// ============================================================================
// Checklist
// ============================================================================

/// Run the checklist over every line of `source`.
fn check(source: &str, max_line_length: usize, custom_rules: &[CustomRule]) -> Vec<Violation> {
    let mut violations = Vec::new();

    for (index, line) in source.lines().enumerate() {
        let line_no = index + 1;
        let length = line.chars().count();

        if length > max_line_length {
            violations.push(Violation::new(
                "E501",
                line_no,
                format!("line too long ({} > {} characters)", length, max_line_length),
            ));
        }

        if line.starts_with('\t') {
            violations.push(Violation::new(
                "W191",
                line_no,
                "indentation contains tabs",
            ));
        }

        if line.trim_end() != line {
            violations.push(Violation::new("W291", line_no, "trailing whitespace"));
        }

        if let Some(name) = definition_name(line, "def ") {
            if name.chars().any(|c| c.is_ascii_uppercase()) {
                violations.push(Violation::new(
                    "N802",
                    line_no,
                    format!("function name '{}' should be lowercase snake_case", name),
                ));
            }
        }

        if let Some(name) = definition_name(line, "class ") {
            if name.chars().next().is_some_and(|c| c.is_ascii_lowercase()) {
                violations.push(Violation::new(
                    "N801",
                    line_no,
                    format!("class name '{}' should use the CapWords convention", name),
                ));
            }
        }

        for rule in custom_rules {
            if line.contains(&rule.pattern) {
                let message = rule
                    .message
                    .clone()
                    .unwrap_or_else(|| format!("line contains forbidden pattern '{}'", rule.pattern));
                violations.push(Violation {
                    rule: rule.id.clone(),
                    line: line_no,
                    message,
                });
            }
        }
    }

    violations
}

/// Extract the name following a `def ` or `class ` keyword, if the line is a
/// definition. Returns the identifier up to the first `(` or `:`.
fn definition_name<'a>(line: &'a str, keyword: &str) -> Option<&'a str> {
    let rest = line.trim_start().strip_prefix(keyword)?;
    let name = rest
        .split(|c| c == '(' || c == ':')
        .next()
        .unwrap_or("")
        .trim();
    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return None;
    }
    Some(name)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_long_line_cites_rule_and_line_number() {
        let source = format!("short = 1\n{}\n", "x = 1  # ".to_string() + &"a".repeat(76));
        assert!(source.lines().nth(1).unwrap().chars().count() == 85);

        let violations = check(&source, 79, &[]);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].rule, "E501");
        assert_eq!(violations[0].line, 2);
        assert!(violations[0].message.contains("85 > 79"));
    }

    #[test]
    fn test_compliant_source_has_no_violations() {
        let source = "def handler(request):\n    return request\n";
        assert!(check(source, 79, &[]).is_empty());
    }

    #[test]
    fn test_tab_indentation() {
        let violations = check("\treturn 1", 79, &[]);
        assert_eq!(violations[0].rule, "W191");
        assert_eq!(violations[0].line, 1);
    }

    #[test]
    fn test_trailing_whitespace() {
        let violations = check("x = 1   ", 79, &[]);
        assert_eq!(violations[0].rule, "W291");
    }

    #[test]
    fn test_function_naming() {
        let violations = check("def badName():\n    pass", 79, &[]);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].rule, "N802");
        assert!(violations[0].message.contains("badName"));
    }

    #[test]
    fn test_class_naming() {
        let violations = check("class widget:\n    pass", 79, &[]);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].rule, "N801");
        assert!(violations[0].message.contains("widget"));
    }

    #[test]
    fn test_capwords_class_is_compliant() {
        assert!(check("class Widget:\n    pass", 79, &[]).is_empty());
    }

    #[test]
    fn test_custom_rule() {
        let rules = vec![CustomRule {
            id: "X100".to_string(),
            pattern: "print(".to_string(),
            message: Some("use logging instead of print".to_string()),
        }];

        let violations = check("print('hi')\nlog('hi')\n", 79, &rules);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].rule, "X100");
        assert_eq!(violations[0].line, 1);
        assert_eq!(violations[0].message, "use logging instead of print");
    }

    #[test]
    fn test_custom_rule_defaults() {
        let rule: CustomRule = serde_json::from_value(serde_json::json!({"pattern": "TODO"})).unwrap();
        assert_eq!(rule.id, "custom");
        assert!(rule.message.is_none());
    }

    #[test]
    fn test_multiple_violations_on_one_line() {
        let source = format!("\tdef BadName():  {}", " ".repeat(70));
        let violations = check(&source, 79, &[]);

        let rules: Vec<_> = violations.iter().map(|v| v.rule.as_str()).collect();
        assert!(rules.contains(&"E501"));
        assert!(rules.contains(&"W191"));
        assert!(rules.contains(&"W291"));
        assert!(rules.contains(&"N802"));
    }

    #[test]
    fn test_custom_line_length() {
        let violations = check("abcdef", 5, &[]);
        assert_eq!(violations[0].rule, "E501");
        assert!(check("abcde", 5, &[]).is_empty());
    }

    #[test]
    fn test_execute_result_shape() {
        let params = CheckCodeStyleParams {
            source: "x = 1\n".to_string(),
            max_line_length: 79,
            custom_rules: vec![],
        };
        let result = CheckCodeStyleTool::execute(&params).unwrap();

        assert_eq!(result["lines_checked"], 1);
        assert!(result["violations"].as_array().unwrap().is_empty());
    }
}
