//! Lexical analysis of SQL text.
//!
//! Only three token kinds matter downstream: statement separators, bind parameters and
//! everything else. The default [`SqliteLexer`] follows SQLite's lexical rules for string
//! literals, quoted identifiers and comments so that `;`, `?` and `:name` inside them are
//! never reported.

use std::ops::Range;

use crate::error::SqlBatchError;

mod parsers;
mod scanner;

use parsers::{
    bind_parameter_end, is_block_comment_end, is_block_comment_start, is_identifier_start,
    is_line_comment_start,
};
use scanner::{State, scan_identifier_end};

/// Kind of a lexical token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// The `;` between two statements.
    Separator,
    /// A placeholder such as `?`, `?3`, `:name`, `@name` or `$name`.
    BindParameter,
    /// Any other text, including whitespace, literals and comments.
    Other,
}

/// A token borrowed from the SQL it was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    /// Byte offset of `text` in the tokenized input.
    pub start: usize,
}

impl<'a> Token<'a> {
    fn new(kind: TokenKind, sql: &'a str, span: Range<usize>) -> Self {
        Self {
            kind,
            text: &sql[span.clone()],
            start: span.start,
        }
    }

    #[must_use]
    pub fn span(&self) -> Range<usize> {
        self.start..self.start.saturating_add(self.text.len())
    }
}

/// A tokenizer capability.
///
/// Implementations must return tokens in input order and must not emit separator or
/// bind-parameter tokens inside literals or comments.
pub trait Tokenize {
    /// Tokenize `sql`.
    ///
    /// # Errors
    ///
    /// Returns `SqlBatchError::LexicalError` if the input cannot be tokenized.
    fn tokenize<'a>(&self, sql: &'a str) -> Result<Vec<Token<'a>>, SqlBatchError>;
}

/// Tokenizer for SQLite / libSQL text.
///
/// Tokens are contiguous and cover the whole input; adjacent ordinary text is coalesced
/// into a single [`TokenKind::Other`] token.
#[derive(Debug, Clone, Copy, Default)]
pub struct SqliteLexer;

impl Tokenize for SqliteLexer {
    fn tokenize<'a>(&self, sql: &'a str) -> Result<Vec<Token<'a>>, SqlBatchError> {
        let bytes = sql.as_bytes();
        let mut tokens = Vec::new();
        let mut state = State::Normal;
        let mut other_start = 0;
        let mut idx = 0;

        while idx < bytes.len() {
            let b = bytes[idx];
            match state {
                State::Normal => match b {
                    b';' => {
                        push_other(&mut tokens, sql, other_start..idx);
                        tokens.push(Token::new(TokenKind::Separator, sql, idx..idx + 1));
                        other_start = idx + 1;
                    }
                    b'\'' | b'"' | b'`' => state = State::Quoted { quote: b, start: idx },
                    b'[' => state = State::Bracketed { start: idx },
                    _ if is_line_comment_start(bytes, idx) => {
                        state = State::LineComment;
                        idx += 1;
                    }
                    _ if is_block_comment_start(bytes, idx) => {
                        state = State::BlockComment;
                        idx += 1;
                    }
                    // `abc$def` is one identifier, not `abc` followed by `$def`.
                    _ if is_identifier_start(b) => idx = scan_identifier_end(bytes, idx) - 1,
                    _ => {
                        if let Some(end) = bind_parameter_end(bytes, idx) {
                            push_other(&mut tokens, sql, other_start..idx);
                            tokens.push(Token::new(TokenKind::BindParameter, sql, idx..end));
                            other_start = end;
                            idx = end;
                            continue;
                        }
                    }
                },
                State::Quoted { quote, .. } => {
                    if b == quote {
                        if bytes.get(idx + 1) == Some(&quote) {
                            idx += 1; // skip escaped quote
                        } else {
                            state = State::Normal;
                        }
                    }
                }
                State::Bracketed { .. } => {
                    if b == b']' {
                        state = State::Normal;
                    }
                }
                State::LineComment => {
                    if b == b'\n' {
                        state = State::Normal;
                    }
                }
                State::BlockComment => {
                    if is_block_comment_end(bytes, idx) {
                        state = State::Normal;
                        idx += 1;
                    }
                }
            }
            idx += 1;
        }

        if let Some((offset, message)) = state.describe_unterminated() {
            return Err(SqlBatchError::LexicalError {
                offset,
                message: message.to_string(),
            });
        }

        push_other(&mut tokens, sql, other_start..bytes.len());
        Ok(tokens)
    }
}

fn push_other<'a>(tokens: &mut Vec<Token<'a>>, sql: &'a str, span: Range<usize>) {
    if !span.is_empty() {
        tokens.push(Token::new(TokenKind::Other, sql, span));
    }
}

/// Tokenize `sql` with the default [`SqliteLexer`].
///
/// # Errors
///
/// Returns `SqlBatchError::LexicalError` for unterminated literals or quoted identifiers.
pub fn tokenize(sql: &str) -> Result<Vec<Token<'_>>, SqlBatchError> {
    SqliteLexer.tokenize(sql)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds_and_text(sql: &str) -> Vec<(TokenKind, &str)> {
        tokenize(sql)
            .unwrap()
            .into_iter()
            .map(|t| (t.kind, t.text))
            .collect()
    }

    #[test]
    fn emits_separators_and_bind_parameters() {
        let tokens = kinds_and_text("select ?, :a; select @b");
        assert_eq!(
            tokens,
            vec![
                (TokenKind::Other, "select "),
                (TokenKind::BindParameter, "?"),
                (TokenKind::Other, ", "),
                (TokenKind::BindParameter, ":a"),
                (TokenKind::Separator, ";"),
                (TokenKind::Other, " select "),
                (TokenKind::BindParameter, "@b"),
            ]
        );
    }

    #[test]
    fn tokens_cover_the_input() {
        let sql = "insert into t values ('a;b', ?1) -- c;\n; /* d; */ select $x";
        let rebuilt: String = tokenize(sql).unwrap().iter().map(|t| t.text).collect();
        assert_eq!(rebuilt, sql);
        for token in tokenize(sql).unwrap() {
            assert_eq!(&sql[token.span()], token.text);
        }
    }

    #[test]
    fn skips_inside_literals_and_comments() {
        let sql = "select ';?', \"a;:b\", `c;?`, [d;@e] -- ;?\n/* ; :x */ from t";
        let tokens = tokenize(sql).unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Other);
    }

    #[test]
    fn escaped_quotes_stay_inside_literal() {
        let tokens = kinds_and_text("select 'it''s; fine'; select 2");
        assert_eq!(tokens[1], (TokenKind::Separator, ";"));
        assert_eq!(tokens[0].1, "select 'it''s; fine'");
    }

    #[test]
    fn indexed_positional_is_one_token() {
        let tokens = kinds_and_text("select ?12 + 1");
        assert_eq!(tokens[1], (TokenKind::BindParameter, "?12"));
    }

    #[test]
    fn identifier_with_dollar_is_not_a_parameter() {
        let tokens = kinds_and_text("select abc$def from t");
        assert_eq!(tokens, vec![(TokenKind::Other, "select abc$def from t")]);
    }

    #[test]
    fn lone_sigil_is_ordinary_text() {
        let tokens = kinds_and_text("select 1 : 2");
        assert_eq!(tokens, vec![(TokenKind::Other, "select 1 : 2")]);
    }

    #[test]
    fn hash_parameter_is_lexed() {
        let tokens = kinds_and_text("select #bad");
        assert_eq!(tokens[1], (TokenKind::BindParameter, "#bad"));
    }

    #[test]
    fn block_comment_may_run_to_end_of_input() {
        let tokens = kinds_and_text("select 1; /* trailing ; ?");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[2].0, TokenKind::Other);
    }

    #[test]
    fn unterminated_string_is_a_lexical_error() {
        let err = tokenize("select 1; select 'oops").unwrap_err();
        match err {
            SqlBatchError::LexicalError { offset, message } => {
                assert_eq!(offset, 17);
                assert!(message.contains("string literal"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn unterminated_identifier_is_a_lexical_error() {
        assert!(matches!(
            tokenize("select [col"),
            Err(SqlBatchError::LexicalError { offset: 7, .. })
        ));
        assert!(matches!(
            tokenize("select \"col"),
            Err(SqlBatchError::LexicalError { offset: 7, .. })
        ));
    }

    #[test]
    fn non_ascii_names_are_kept_whole() {
        let tokens = kinds_and_text("select :naïve, 'é;'");
        assert_eq!(tokens[1], (TokenKind::BindParameter, ":naïve"));
        assert_eq!(tokens.len(), 3);
    }
}
