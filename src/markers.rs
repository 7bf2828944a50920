use std::collections::BTreeSet;

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::SqlBatchError;
use crate::lexer::{SqliteLexer, TokenKind, Tokenize};

lazy_static! {
    static ref POSITIONAL_MARKER: Regex =
        Regex::new(r"^\?([0-9]*)").expect("positional marker pattern is valid");
}

const NAMED_SIGILS: [char; 3] = [':', '@', '$'];

/// Parameter requirements of a single statement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatementMarkers {
    /// Names of named markers, without their sigil.
    pub names: BTreeSet<String>,
    /// Number of bare `?` markers.
    pub positional: usize,
}

impl StatementMarkers {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty() && self.positional == 0
    }
}

/// What a single bind-parameter token asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindMarker<'a> {
    /// A bare `?`.
    Positional,
    /// A named marker; holds the name with its sigil stripped.
    Named(&'a str),
}

/// Classify the text of one bind-parameter token found in `statement`.
///
/// # Errors
///
/// Returns `SqlBatchError::UnsupportedIndexedPositional` for `?<number>` and
/// `SqlBatchError::InvalidNamedParameterPrefix` when the marker does not start with
/// `:`, `@` or `$`.
pub fn classify_marker<'a>(
    statement: &str,
    marker: &'a str,
) -> Result<BindMarker<'a>, SqlBatchError> {
    if let Some(caps) = POSITIONAL_MARKER.captures(marker) {
        if caps.get(1).is_some_and(|digits| !digits.as_str().is_empty()) {
            return Err(SqlBatchError::UnsupportedIndexedPositional {
                statement: statement.to_string(),
                marker: marker.to_string(),
            });
        }
        return Ok(BindMarker::Positional);
    }

    match marker.strip_prefix(NAMED_SIGILS) {
        Some(name) => Ok(BindMarker::Named(name)),
        None => Err(SqlBatchError::InvalidNamedParameterPrefix {
            statement: statement.to_string(),
            marker: marker.to_string(),
        }),
    }
}

/// Collect the bind markers of `statement` using `lexer`.
///
/// # Errors
///
/// Propagates lexical errors and the marker errors of [`classify_marker`].
pub fn extract_markers_with<L>(
    lexer: &L,
    statement: &str,
) -> Result<StatementMarkers, SqlBatchError>
where
    L: Tokenize + ?Sized,
{
    let mut markers = StatementMarkers::default();
    for token in lexer.tokenize(statement)? {
        if token.kind != TokenKind::BindParameter {
            continue;
        }
        match classify_marker(statement, token.text)? {
            BindMarker::Positional => markers.positional += 1,
            BindMarker::Named(name) => {
                markers.names.insert(name.to_string());
            }
        }
    }
    Ok(markers)
}

/// Collect the bind markers of `statement` with the default [`SqliteLexer`].
///
/// ```rust
/// use sql_batch_binder::prelude::*;
///
/// let markers = extract_markers("SELECT ?, :name, ?")?;
/// assert_eq!(markers.positional, 2);
/// assert!(markers.names.contains("name"));
/// # Ok::<(), SqlBatchError>(())
/// ```
///
/// # Errors
///
/// See [`extract_markers_with`].
pub fn extract_markers(statement: &str) -> Result<StatementMarkers, SqlBatchError> {
    extract_markers_with(&SqliteLexer, statement)
}
