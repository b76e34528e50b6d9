//! Construction-time errors.
//!
//! Normalizing an input never fails; the only failure mode is an authoring
//! defect in a token class table or a rule table, which surfaces when an
//! [`Engine`](crate::Engine) is built.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    /// Two token classes share a name.
    #[error("token class `{0}` is defined more than once")]
    DuplicateTokenClass(String),

    /// A token class name is not usable as a `{name}` placeholder.
    #[error("token class name `{0}` must start with a letter or `_` and contain only letters, digits and `_`")]
    InvalidTokenClassName(String),

    /// A rule template references a class that is not in the table.
    #[error("rule `{rule}` references unknown token class `{class}`")]
    UnknownTokenClass { rule: &'static str, class: String },

    /// A `{` opened a placeholder that is never closed.
    #[error("rule `{rule}` has an unterminated placeholder at byte {offset}")]
    UnterminatedPlaceholder { rule: &'static str, offset: usize },

    /// The expanded template is not a valid regex.
    #[error("rule `{rule}` failed to compile: {source}")]
    RegexCompile {
        rule: &'static str,
        #[source]
        source: regex::Error,
    },
}

pub type EngineResult<T> = Result<T, EngineError>;
