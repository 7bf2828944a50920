use std::borrow::Cow;

use crate::error::SqlBatchError;
use crate::lexer::{SqliteLexer, Token, TokenKind, Tokenize};

/// Text of the statement being collected.
enum Pending<'a> {
    /// Contiguous tokens that still match the input, kept as one slice of it.
    Borrowed { start: usize, text: &'a str },
    Owned(String),
}

impl<'a> Pending<'a> {
    fn start(sql: &'a str, token: &Token<'a>) -> Self {
        match sql.get(token.span()) {
            Some(text) if text == token.text => Pending::Borrowed {
                start: token.start,
                text,
            },
            _ => Pending::Owned(token.text.to_owned()),
        }
    }

    fn push(self, sql: &'a str, token: &Token<'a>) -> Self {
        match self {
            Pending::Borrowed { start, text } => {
                let contiguous = token.start == start + text.len()
                    && sql.get(token.span()) == Some(token.text);
                match sql.get(start..token.span().end) {
                    Some(joined) if contiguous => Pending::Borrowed {
                        start,
                        text: joined,
                    },
                    _ => Pending::Owned(format!("{text}{}", token.text)),
                }
            }
            Pending::Owned(mut text) => {
                text.push_str(token.text);
                Pending::Owned(text)
            }
        }
    }

    fn finish(self) -> Option<Cow<'a, str>> {
        let statement = match self {
            Pending::Borrowed { text, .. } => Cow::Borrowed(text.trim()),
            Pending::Owned(text) if text.trim().len() == text.len() => Cow::Owned(text),
            Pending::Owned(text) => Cow::Owned(text.trim().to_owned()),
        };
        (!statement.is_empty()).then_some(statement)
    }
}

/// Split `sql` into trimmed, non-empty statements using `lexer`.
///
/// A statement is the concatenated text of the non-separator tokens between two
/// separators. Literals, comments and inner whitespace are kept as the lexer reported
/// them. When the tokens cover their part of the input contiguously the statement
/// borrows from `sql`; otherwise it is assembled from the token text.
///
/// # Errors
///
/// Returns `SqlBatchError::LexicalError` if `lexer` cannot tokenize the input.
pub fn split_statements_with<'a, L>(
    lexer: &L,
    sql: &'a str,
) -> Result<Vec<Cow<'a, str>>, SqlBatchError>
where
    L: Tokenize + ?Sized,
{
    let mut statements = Vec::with_capacity(8);
    let mut current: Option<Pending<'a>> = None;

    for token in lexer.tokenize(sql)? {
        if token.kind == TokenKind::Separator {
            statements.extend(current.take().and_then(Pending::finish));
        } else {
            current = Some(match current.take() {
                Some(pending) => pending.push(sql, &token),
                None => Pending::start(sql, &token),
            });
        }
    }
    statements.extend(current.and_then(Pending::finish));

    Ok(statements)
}

/// Split `sql` into statements with the default [`SqliteLexer`].
///
/// ```rust
/// use sql_batch_binder::prelude::*;
///
/// let statements = split_statements("SELECT ';'; SELECT 2;;  ")?;
/// assert_eq!(statements, vec!["SELECT ';'", "SELECT 2"]);
/// # Ok::<(), SqlBatchError>(())
/// ```
///
/// # Errors
///
/// Returns `SqlBatchError::LexicalError` for unterminated literals or quoted identifiers.
pub fn split_statements(sql: &str) -> Result<Vec<Cow<'_, str>>, SqlBatchError> {
    split_statements_with(&SqliteLexer, sql)
}
