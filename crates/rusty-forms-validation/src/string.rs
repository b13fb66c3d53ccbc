//! String schema and its rules

use crate::password::PasswordStrength;
use crate::{email, reason, reject, type_issue};
use once_cell::sync::Lazy;
use regex::Regex;
use rusty_forms_types::{ParseOutcome, Schema, ValidationError, ValidationIssue};
use serde_json::Value;
use std::sync::Arc;

static URL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https?://[^\s/$.?#].[^\s]*$").expect("url regex is valid"));

type Predicate = Arc<dyn Fn(&str) -> bool + Send + Sync>;

#[derive(Clone)]
enum StringRule {
    MinLength(usize),
    MaxLength(usize),
    Length(usize, usize),
    Email,
    NoPublicDomain,
    Url,
    Pattern(Regex),
    Password(PasswordStrength),
    OneOf(Vec<String>),
    Custom(Predicate),
}

impl StringRule {
    fn reason(&self) -> &'static str {
        match self {
            StringRule::MinLength(_) => reason::MIN_LENGTH,
            StringRule::MaxLength(_) => reason::MAX_LENGTH,
            StringRule::Length(..) => reason::LENGTH,
            StringRule::Email => reason::EMAIL,
            StringRule::NoPublicDomain => reason::PUBLIC_DOMAIN,
            StringRule::Url => reason::URL,
            StringRule::Pattern(_) => reason::PATTERN,
            StringRule::Password(_) => reason::PASSWORD,
            StringRule::OneOf(_) => reason::ONE_OF,
            StringRule::Custom(_) => reason::CUSTOM,
        }
    }

    /// Length is counted in characters, not bytes
    fn check(&self, value: &str) -> Result<(), String> {
        let len = value.chars().count();
        match self {
            StringRule::MinLength(min) if len < *min => {
                Err(format!("Must be at least {} characters", min))
            }
            StringRule::MaxLength(max) if len > *max => {
                Err(format!("Must be at most {} characters", max))
            }
            StringRule::Length(min, max) if len < *min || len > *max => {
                Err(format!("Must be between {} and {} characters", min, max))
            }
            StringRule::Email if !email::is_valid_email(value) => {
                Err("Invalid email address".to_string())
            }
            StringRule::NoPublicDomain if email::is_public_domain(value) => {
                Err("Please use your work email address".to_string())
            }
            StringRule::Url if !URL_REGEX.is_match(value) => Err("Invalid URL".to_string()),
            StringRule::Pattern(regex) if !regex.is_match(value) => {
                Err(format!("Must match pattern {}", regex.as_str()))
            }
            StringRule::Password(strength) => strength.check(value).map_err(str::to_string),
            StringRule::OneOf(allowed) if !allowed.iter().any(|a| a == value) => {
                Err(format!("Must be one of: {}", allowed.join(", ")))
            }
            StringRule::Custom(predicate) if !predicate(value) => Err("Invalid value".to_string()),
            _ => Ok(()),
        }
    }
}

#[derive(Clone)]
struct Rule {
    rule: StringRule,
    message: Option<String>,
}

/// Accepts JSON strings and runs every rule against them
///
/// All failing rules are reported unless [`StringSchema::abort_early`] is set.
#[derive(Clone, Default)]
pub struct StringSchema {
    rules: Vec<Rule>,
    abort_early: bool,
    type_message: Option<String>,
}

/// Start a string schema
pub fn string() -> StringSchema {
    StringSchema::default()
}

impl StringSchema {
    fn rule(mut self, rule: StringRule) -> Self {
        self.rules.push(Rule {
            rule,
            message: None,
        });
        self
    }

    pub fn min_length(self, min: usize) -> Self {
        self.rule(StringRule::MinLength(min))
    }

    pub fn max_length(self, max: usize) -> Self {
        self.rule(StringRule::MaxLength(max))
    }

    pub fn length(self, min: usize, max: usize) -> Self {
        self.rule(StringRule::Length(min, max))
    }

    pub fn email(self) -> Self {
        self.rule(StringRule::Email)
    }

    /// Reject addresses at free providers (gmail.com, outlook.com, ...)
    pub fn no_public_domain(self) -> Self {
        self.rule(StringRule::NoPublicDomain)
    }

    /// http(s) URL
    pub fn url(self) -> Self {
        self.rule(StringRule::Url)
    }

    pub fn pattern(self, regex: Regex) -> Self {
        self.rule(StringRule::Pattern(regex))
    }

    pub fn password(self, strength: PasswordStrength) -> Self {
        self.rule(StringRule::Password(strength))
    }

    pub fn one_of<I, T>(self, allowed: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.rule(StringRule::OneOf(allowed.into_iter().map(Into::into).collect()))
    }

    /// Rule passing when `predicate` returns true
    pub fn custom<F>(self, predicate: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.rule(StringRule::Custom(Arc::new(predicate)))
    }

    /// Override the message of the rule added last
    ///
    /// With no rules yet, overrides the wrong-type message instead.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        match self.rules.last_mut() {
            Some(last) => last.message = Some(message.into()),
            None => self.type_message = Some(message.into()),
        }
        self
    }

    /// Stop at the first failing rule
    pub fn abort_early(mut self) -> Self {
        self.abort_early = true;
        self
    }
}

impl Schema for StringSchema {
    fn parse(&self, input: &Value) -> ParseOutcome {
        let value = match input {
            Value::String(value) => value,
            other => {
                let mut issue = type_issue("string", other);
                if let Some(message) = &self.type_message {
                    issue.message = message.clone();
                }
                return Err(reject(issue));
            }
        };

        let mut issues = Vec::new();
        for Rule { rule, message } in &self.rules {
            if let Err(default_message) = rule.check(value) {
                issues.push(
                    ValidationIssue::new(
                        rule.reason(),
                        message.clone().unwrap_or(default_message),
                    )
                    .with_input(input.clone()),
                );
                if self.abort_early {
                    break;
                }
            }
        }

        if issues.is_empty() {
            Ok(input.clone())
        } else {
            Err(ValidationError::new(issues).into())
        }
    }
}
