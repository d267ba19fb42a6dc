//! Request parameter resolution.
//!
//! Raw query-string values are checked against a declarative schema.
//! Every parameter is visited, in declaration order, and every problem
//! is recorded; callers surface only the first code but the full list
//! stays available for diagnostics.

use std::collections::HashMap;

use crate::core::config::Config;
use crate::core::types::ErrorCode;
use crate::core::validator;

pub const NODE_ID: &str = "node_id";
pub const LANGUAGE: &str = "language";
pub const SEARCH_KEYWORD: &str = "search_keyword";
pub const PAGE_NUM: &str = "page_num";
pub const PAGE_SIZE: &str = "page_size";

/// Validation applied to a parameter after defaulting
///
/// Each rejecting rule carries the code appended when it fails.
#[derive(Debug, Clone)]
enum Rule {
    /// Integer, optionally bounded (inclusive)
    Integer {
        min: Option<i64>,
        max: Option<i64>,
        error: ErrorCode,
    },
    /// Exact member of a fixed set
    OneOf { set: Vec<String>, error: ErrorCode },
    /// Free text, always accepted
    Text,
}

#[derive(Debug, Clone)]
struct ParamSpec {
    name: &'static str,
    required: bool,
    default: Option<String>,
    rule: Rule,
}

/// A validated parameter value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    Int(i64),
    Text(String),
}

/// Fully validated request parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedParams {
    pub node_id: i64,
    pub language: String,
    pub search_keyword: String,
    pub page_num: i64,
    pub page_size: i64,
}

/// Errors collected while resolving a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionErrors {
    /// The code reported to the client
    pub primary: ErrorCode,
    /// Every code, in the order it was raised
    pub all: Vec<ErrorCode>,
}

/// Outcome of resolving one request
///
/// Values that passed validation are kept even when other parameters
/// failed. Check [`Resolution::has_errors`] before trusting them.
#[derive(Debug, Clone, Default)]
pub struct Resolution {
    values: HashMap<&'static str, ParamValue>,
    errors: Vec<ErrorCode>,
}

impl Resolution {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ErrorCode] {
        &self.errors
    }

    /// Validated value of a single parameter, if it passed
    pub fn value(&self, name: &str) -> Option<&ParamValue> {
        self.values.get(name)
    }

    fn int(&self, name: &str) -> Option<i64> {
        match self.values.get(name)? {
            ParamValue::Int(n) => Some(*n),
            ParamValue::Text(_) => None,
        }
    }

    fn text(&self, name: &str) -> Option<String> {
        match self.values.get(name)? {
            ParamValue::Text(s) => Some(s.clone()),
            ParamValue::Int(_) => None,
        }
    }

    fn bundle(&self) -> Option<ResolvedParams> {
        Some(ResolvedParams {
            node_id: self.int(NODE_ID)?,
            language: self.text(LANGUAGE)?,
            search_keyword: self.text(SEARCH_KEYWORD)?,
            page_num: self.int(PAGE_NUM)?,
            page_size: self.int(PAGE_SIZE)?,
        })
    }

    /// Typed bundle on zero errors, otherwise the collected errors
    pub fn into_result(self) -> std::result::Result<ResolvedParams, ResolutionErrors> {
        if let Some(&primary) = self.errors.first() {
            return Err(ResolutionErrors {
                primary,
                all: self.errors,
            });
        }

        self.bundle().ok_or(ResolutionErrors {
            primary: ErrorCode::MissingParameter,
            all: vec![ErrorCode::MissingParameter],
        })
    }
}

/// Resolves raw request inputs against the parameter schema
#[derive(Debug, Clone)]
pub struct ParameterResolver {
    schema: Vec<ParamSpec>,
}

impl ParameterResolver {
    /// Build the schema for the given language set and page limits
    pub fn new(languages: Vec<String>, default_page_size: usize, max_page_size: usize) -> Self {
        let schema = vec![
            ParamSpec {
                name: NODE_ID,
                required: true,
                default: None,
                rule: Rule::Integer {
                    min: None,
                    max: None,
                    error: ErrorCode::InvalidNode,
                },
            },
            ParamSpec {
                name: LANGUAGE,
                required: true,
                default: None,
                rule: Rule::OneOf {
                    set: languages,
                    error: ErrorCode::WrongLanguage,
                },
            },
            ParamSpec {
                name: SEARCH_KEYWORD,
                required: false,
                default: Some(String::new()),
                rule: Rule::Text,
            },
            ParamSpec {
                name: PAGE_NUM,
                required: false,
                default: Some("0".to_string()),
                rule: Rule::Integer {
                    min: Some(0),
                    max: None,
                    error: ErrorCode::InvalidPageNumber,
                },
            },
            ParamSpec {
                name: PAGE_SIZE,
                required: false,
                default: Some(default_page_size.to_string()),
                rule: Rule::Integer {
                    min: Some(0),
                    max: Some(i64::try_from(max_page_size).unwrap_or(i64::MAX)),
                    error: ErrorCode::InvalidPageSize,
                },
            },
        ];

        Self { schema }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.languages.supported.clone(),
            config.query.default_page_size,
            config.query.max_page_size,
        )
    }

    /// Resolve a raw request, collecting every error
    pub fn resolve(&self, raw: &HashMap<String, String>) -> Resolution {
        let mut resolution = Resolution::default();

        for spec in &self.schema {
            let value = raw
                .get(spec.name)
                .map(String::as_str)
                .filter(|v| validator::is_non_empty(Some(*v)))
                .or(spec.default.as_deref());

            if spec.required && !validator::is_non_empty(value) {
                resolution.errors.push(ErrorCode::MissingParameter);
            }

            let value = value.unwrap_or_default();
            match check(&spec.rule, value) {
                Ok(parsed) => {
                    resolution.values.insert(spec.name, parsed);
                }
                Err(code) => resolution.errors.push(code),
            }
        }

        if resolution.has_errors() {
            tracing::debug!(errors = ?resolution.errors, "Request parameters rejected");
        }

        resolution
    }
}

fn check(rule: &Rule, value: &str) -> std::result::Result<ParamValue, ErrorCode> {
    match rule {
        Rule::Integer { min, max, error } => {
            let valid = match (min, max) {
                (Some(min), Some(max)) => validator::is_integer_in_range(value, *min, *max),
                (Some(min), None) => validator::is_integer_at_least(value, *min),
                (None, Some(max)) => validator::is_integer_in_range(value, i64::MIN, *max),
                (None, None) => validator::is_integer(value),
            };
            validator::parse_integer(value)
                .filter(|_| valid)
                .map(ParamValue::Int)
                .ok_or(*error)
        }
        Rule::OneOf { set, error } => {
            if validator::is_in_enum(value, set) {
                Ok(ParamValue::Text(value.to_string()))
            } else {
                Err(*error)
            }
        }
        Rule::Text => Ok(ParamValue::Text(value.to_string())),
    }
}
