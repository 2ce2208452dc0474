//! Result types produced by the requirement checks.
//!
//! A failed check produces a [`ValidationError`]: a message template, an
//! optional stable code, the template arguments and a title. The memory
//! check reports a [`MemoryStatus`] instead, which the environment check
//! folds into a `ValidationError` when memory is insufficient.

use serde::Serialize;
use std::fmt;

/// A single unmet requirement, ready to show to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    /// Message template; each `%s` is replaced by the next argument.
    pub message: String,
    /// Stable code identifying the requirement, if it has one.
    pub code: Option<u32>,
    /// Values substituted into the template.
    pub arguments: Vec<String>,
    /// Headline shown above the message.
    pub title: Option<String>,
}

impl ValidationError {
    /// An error with a code and template arguments.
    pub fn new(message: impl Into<String>, code: u32, arguments: Vec<String>) -> Self {
        Self {
            message: message.into(),
            code: Some(code),
            arguments,
            title: None,
        }
    }

    /// A free-form message with no code and no arguments.
    pub fn message_only(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
            arguments: Vec::new(),
            title: None,
        }
    }

    /// A copy of this error with a different title.
    ///
    /// Message, code and arguments are kept as they are.
    pub fn with_title(&self, title: impl Into<String>) -> Self {
        Self {
            message: self.message.clone(),
            code: self.code,
            arguments: self.arguments.clone(),
            title: Some(title.into()),
        }
    }

    /// The message with all `%s` placeholders filled in order.
    ///
    /// Placeholders without a matching argument are left untouched.
    pub fn render(&self) -> String {
        let mut rendered = String::with_capacity(self.message.len());
        let mut args = self.arguments.iter();
        let mut rest = self.message.as_str();

        while let Some(pos) = rest.find("%s") {
            rendered.push_str(&rest[..pos]);
            match args.next() {
                Some(arg) => rendered.push_str(arg),
                None => rendered.push_str("%s"),
            }
            rest = &rest[pos + 2..];
        }
        rendered.push_str(rest);
        rendered
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.title, self.code) {
            (Some(title), Some(code)) => write!(f, "{}: {} (#{})", title, self.render(), code),
            (Some(title), None) => write!(f, "{}: {}", title, self.render()),
            (None, Some(code)) => write!(f, "{} (#{})", self.render(), code),
            (None, None) => write!(f, "{}", self.render()),
        }
    }
}

/// Outcome of comparing the configured memory limits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemoryStatus {
    /// Both limits meet the minimum.
    Sufficient,

    /// The check could not be completed (the CLI query failed to run or
    /// timed out). Not treated as a failure.
    Unverifiable,

    /// At least one limit is below the minimum.
    Insufficient(String),
}

impl MemoryStatus {
    /// Whether the caller should treat this as a failure.
    pub fn is_failure(&self) -> bool {
        matches!(self, MemoryStatus::Insufficient(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_substitutes_arguments_in_order() {
        let err = ValidationError::new(
            "requires PHP %s or higher but found %s.",
            1172215790,
            vec!["5.3.2".into(), "5.2.17".into()],
        );
        assert_eq!(err.render(), "requires PHP 5.3.2 or higher but found 5.2.17.");
    }

    #[test]
    fn render_keeps_unmatched_placeholders() {
        let err = ValidationError::new("a %s b %s", 1, vec!["x".into()]);
        assert_eq!(err.render(), "a x b %s");
    }

    #[test]
    fn render_without_placeholders_is_message() {
        let err = ValidationError::message_only("100% sure");
        assert_eq!(err.render(), "100% sure");
    }

    #[test]
    fn with_title_preserves_everything_else() {
        let original = ValidationError::new("ext \"%s\" missing", 1329403181, vec!["json".into()]);
        let titled = original.with_title("Environment requirements not fulfilled");

        assert_eq!(titled.message, original.message);
        assert_eq!(titled.code, original.code);
        assert_eq!(titled.arguments, original.arguments);
        assert_eq!(
            titled.title.as_deref(),
            Some("Environment requirements not fulfilled")
        );
        assert!(original.title.is_none());
    }

    #[test]
    fn with_title_replaces_existing_title() {
        let first = ValidationError::message_only("m").with_title("one");
        let second = first.with_title("two");
        assert_eq!(second.title.as_deref(), Some("two"));
        assert_eq!(first.title.as_deref(), Some("one"));
    }

    #[test]
    fn display_includes_title_and_code() {
        let err = ValidationError::new("folder %s", 7, vec!["Data".into()]).with_title("Oops");
        assert_eq!(err.to_string(), "Oops: folder Data (#7)");
    }

    #[test]
    fn serializes_to_json() {
        let err = ValidationError::new("x %s", 5, vec!["y".into()]);
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], 5);
        assert_eq!(json["arguments"][0], "y");
        assert!(json["title"].is_null());
    }

    #[test]
    fn only_insufficient_is_failure() {
        assert!(!MemoryStatus::Sufficient.is_failure());
        assert!(!MemoryStatus::Unverifiable.is_failure());
        assert!(MemoryStatus::Insufficient("low".into()).is_failure());
    }
}
