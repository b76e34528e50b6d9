//! Token class resolution and template expansion.
//!
//! Rule templates are written against a small vocabulary of named token
//! classes (`{num}`, `{sep}`, ...). Building patterns is a two-phase process:
//!
//! 1. [`FragmentTable::build`] resolves every [`TokenClass`] into one regex
//!    fragment, keyed by name. Names must be unique identifiers.
//! 2. [`FragmentTable::expand`] rewrites a template, replacing each
//!    `{name}` with the class fragment. An unknown name is an error, never a
//!    silent skip.
//!
//! Placeholder syntax:
//!
//! ```text
//! {name}   name = [A-Za-z_][A-Za-z0-9_]*   -> replaced by the class fragment
//! {2,4}    starts with a digit             -> left alone (regex repetition)
//! \{       escaped                         -> left alone
//! ```

use std::collections::HashMap;

use crate::TokenClass;
use crate::error::{EngineError, EngineResult};

/// Resolved token class fragments, keyed by class name.
#[derive(Debug, Clone, Default)]
pub struct FragmentTable {
    fragments: HashMap<&'static str, String>,
}

impl FragmentTable {
    /// Resolve `classes` into fragments.
    ///
    /// Each alternative is wrapped in a non-capturing group and the whole
    /// alternation is wrapped again, so `({num})` captures exactly one number
    /// regardless of how many alternatives the class has.
    pub fn build(classes: &[TokenClass]) -> EngineResult<Self> {
        let mut fragments = HashMap::with_capacity(classes.len());

        for class in classes {
            if !is_identifier(class.name) {
                return Err(EngineError::InvalidTokenClassName(class.name.to_string()));
            }

            let alternatives: Vec<String> = class.alternatives.iter().map(|alt| format!("(?:{alt})")).collect();
            let fragment = format!("(?:{})", alternatives.join("|"));

            if fragments.insert(class.name, fragment).is_some() {
                return Err(EngineError::DuplicateTokenClass(class.name.to_string()));
            }
        }

        Ok(FragmentTable { fragments })
    }

    /// Fragment for the class `name`, if defined.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fragments.get(name).map(String::as_str)
    }

    /// Expand every `{name}` placeholder in `template`.
    ///
    /// `rule` is only used to label errors.
    pub fn expand(&self, rule: &'static str, template: &str) -> EngineResult<String> {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;
        let mut offset = 0;

        while let Some(pos) = rest.find(|c: char| c == '\\' || c == '{') {
            out.push_str(&rest[..pos]);
            let tail = &rest[pos..];

            let consumed = if tail.starts_with('\\') {
                // Copy the escape and the escaped char as-is.
                let escaped = tail[1..].chars().next().map_or(0, char::len_utf8);
                out.push_str(&tail[..1 + escaped]);
                1 + escaped
            } else if tail[1..].starts_with(|c: char| c.is_ascii_alphabetic() || c == '_') {
                let end = tail.find('}').ok_or(EngineError::UnterminatedPlaceholder { rule, offset: offset + pos })?;
                let name = &tail[1..end];
                let fragment = self
                    .get(name)
                    .ok_or_else(|| EngineError::UnknownTokenClass { rule, class: name.to_string() })?;
                out.push_str(fragment);
                end + 1
            } else {
                out.push('{');
                1
            };

            offset += pos + consumed;
            rest = &rest[pos + consumed..];
        }

        out.push_str(rest);
        Ok(out)
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLASSES: &[TokenClass] = &[
        TokenClass { name: "sep", alternatives: &[r"\s*x\s*", r"\s*by\s*"] },
        TokenClass { name: "num", alternatives: &[r"[0-9]+"] },
    ];

    #[test]
    fn wraps_each_alternative() {
        let table = FragmentTable::build(CLASSES).unwrap();
        assert_eq!(table.get("sep"), Some(r"(?:(?:\s*x\s*)|(?:\s*by\s*))"));
        assert_eq!(table.get("num"), Some(r"(?:(?:[0-9]+))"));
        assert_eq!(table.get("missing"), None);
    }

    #[test]
    fn expands_placeholders() {
        let table = FragmentTable::build(CLASSES).unwrap();
        let expanded = table.expand("dims", r"^({num}){sep}({num})$").unwrap();
        assert_eq!(expanded, r"^((?:(?:[0-9]+)))(?:(?:\s*x\s*)|(?:\s*by\s*))((?:(?:[0-9]+)))$");
    }

    #[test]
    fn leaves_repetitions_and_escapes_alone() {
        let table = FragmentTable::build(CLASSES).unwrap();
        assert_eq!(table.expand("rep", r"^a{2,4}\{num\}$").unwrap(), r"^a{2,4}\{num\}$");
        assert_eq!(table.expand("plain", r"^.*\|0-4,050 sqft$").unwrap(), r"^.*\|0-4,050 sqft$");
    }

    #[test]
    fn unknown_class_is_an_error() {
        let table = FragmentTable::build(CLASSES).unwrap();
        let err = table.expand("bad", r"^({num}){acres}$").unwrap_err();
        assert!(
            matches!(&err, EngineError::UnknownTokenClass { rule: "bad", class } if class == "acres"),
            "unexpected error: {err:?}"
        );
    }

    #[test]
    fn unterminated_placeholder_is_an_error() {
        let table = FragmentTable::build(CLASSES).unwrap();
        let err = table.expand("open", r"^ab{num").unwrap_err();
        assert!(matches!(err, EngineError::UnterminatedPlaceholder { rule: "open", offset: 3 }));
    }

    #[test]
    fn duplicate_class_is_an_error() {
        let classes = [
            TokenClass { name: "num", alternatives: &["[0-9]+"] },
            TokenClass { name: "num", alternatives: &["[0-9]"] },
        ];
        let err = FragmentTable::build(&classes).unwrap_err();
        assert!(matches!(&err, EngineError::DuplicateTokenClass(name) if name == "num"));
    }

    #[test]
    fn invalid_class_name_is_an_error() {
        let classes = [TokenClass { name: "L.5", alternatives: &["under 1/2 acre"] }];
        let err = FragmentTable::build(&classes).unwrap_err();
        assert!(matches!(&err, EngineError::InvalidTokenClassName(name) if name == "L.5"));
    }
}
