//! Planning a multi-statement call into per-statement `(sql, params)` pairs.

use std::borrow::Cow;

use serde::Serialize;
use tracing::debug;

use crate::binder::{StatementParams, bind_markers};
use crate::config::BatchOptions;
use crate::error::SqlBatchError;
use crate::lexer::{SqliteLexer, Tokenize};
use crate::markers::extract_markers_with;
use crate::params::ParameterSet;
use crate::segment::split_statements_with;

/// One statement of a batch with the parameters it must be sent with.
///
/// Serializes as `{"q": <sql>, "params": <array or object>}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoundStatement<'a> {
    #[serde(rename = "q")]
    pub sql: Cow<'a, str>,
    pub params: StatementParams<'a>,
}

/// Split `sql` and bind every statement against `params`, using `lexer`.
///
/// The running positional offset starts at zero and carries across statements in order,
/// so the Nth bare `?` of the whole string receives the Nth positional value. Either every
/// statement binds or the whole batch fails.
///
/// # Errors
///
/// Returns the first lexical, marker or binding error. Binding errors name the statement
/// that failed.
pub fn plan_batch_with<'a, L>(
    lexer: &L,
    sql: &'a str,
    params: &'a ParameterSet,
    options: &BatchOptions,
) -> Result<Vec<BoundStatement<'a>>, SqlBatchError>
where
    L: Tokenize + ?Sized,
{
    let statements = split_statements_with(lexer, sql)?;
    let mut bound = Vec::with_capacity(statements.len());
    let mut offset = 0;

    for statement in statements {
        let markers = extract_markers_with(lexer, &statement)?;
        let (stmt_params, next_offset) =
            bind_markers(&statement, &markers, params, offset, options.named_binding)?;
        offset = next_offset;
        bound.push(BoundStatement {
            sql: statement,
            params: stmt_params,
        });
    }

    debug!(
        statements = bound.len(),
        kind = ?params.kind(),
        supplied = params.len(),
        positional_used = offset,
        "planned statement batch"
    );
    Ok(bound)
}

/// Split `sql` and bind every statement with the default [`SqliteLexer`].
///
/// ```rust
/// use sql_batch_binder::prelude::*;
///
/// let params = ParameterSet::Positional(vec![SqlValue::Int(10), SqlValue::Int(20)]);
/// let batch = plan_batch(
///     "INSERT INTO t VALUES (?); INSERT INTO t VALUES (?);",
///     &params,
///     &BatchOptions::default(),
/// )?;
/// assert_eq!(batch.len(), 2);
/// assert_eq!(batch[1].params, StatementParams::Positional(&[SqlValue::Int(20)]));
/// # Ok::<(), SqlBatchError>(())
/// ```
///
/// # Errors
///
/// See [`plan_batch_with`].
pub fn plan_batch<'a>(
    sql: &'a str,
    params: &'a ParameterSet,
    options: &BatchOptions,
) -> Result<Vec<BoundStatement<'a>>, SqlBatchError> {
    plan_batch_with(&SqliteLexer, sql, params, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NamedBindingMode;
    use crate::types::SqlValue;

    #[test]
    fn second_statement_failure_aborts_the_batch() {
        let params = ParameterSet::Positional(vec![SqlValue::Int(1)]);
        let err = plan_batch("SELECT ?; SELECT ?", &params, &BatchOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            SqlBatchError::MissingPositionalParameters { ref statement, offset: 1, .. }
                if statement == "SELECT ?"
        ));
    }

    #[test]
    fn marker_error_in_later_statement_aborts_the_batch() {
        let params = ParameterSet::default();
        let err = plan_batch("SELECT 1; SELECT ?2", &params, &BatchOptions::default())
            .unwrap_err();
        assert!(matches!(
            err,
            SqlBatchError::UnsupportedIndexedPositional { ref statement, .. }
                if statement == "SELECT ?2"
        ));
    }

    #[test]
    fn named_batch_binds_each_statement_to_its_names() {
        let params: ParameterSet = [
            ("id", SqlValue::Int(1)),
            ("name", SqlValue::Text("bob".into())),
        ]
        .into_iter()
        .collect();
        let batch = plan_batch(
            "UPDATE t SET name = :name WHERE id = :id; SELECT * FROM t WHERE id = @id",
            &params,
            &BatchOptions::default(),
        )
        .unwrap();
        assert_eq!(batch.len(), 2);
        assert_eq!(batch[0].params.len(), 2);
        assert_eq!(batch[1].params.len(), 1);
        assert_eq!(batch[1].sql, "SELECT * FROM t WHERE id = @id");
    }

    #[test]
    fn strict_options_reject_missing_names() {
        let params: ParameterSet = [("id", SqlValue::Int(1))].into_iter().collect();
        let strict = BatchOptions::default().with_named_binding(NamedBindingMode::Strict);
        assert!(matches!(
            plan_batch("SELECT :id; SELECT :other", &params, &strict),
            Err(SqlBatchError::MissingNamedParameter { .. })
        ));
        assert!(plan_batch("SELECT :id; SELECT :other", &params, &BatchOptions::default()).is_ok());
    }

    #[test]
    fn unused_positional_values_are_ignored() {
        let params = ParameterSet::Positional(vec![SqlValue::Int(1), SqlValue::Int(2)]);
        let batch = plan_batch("SELECT ?", &params, &BatchOptions::default()).unwrap();
        assert_eq!(batch[0].params, StatementParams::Positional(&[SqlValue::Int(1)]));
    }

    #[test]
    fn serializes_for_the_transport() {
        let params = ParameterSet::Positional(vec![SqlValue::Int(5)]);
        let batch = plan_batch("SELECT ?;", &params, &BatchOptions::default()).unwrap();
        assert_eq!(
            serde_json::to_value(&batch).unwrap(),
            serde_json::json!([{ "q": "SELECT ?", "params": [5] }])
        );
    }
}
