use std::collections::BTreeMap;

use serde::Serialize;

use crate::config::NamedBindingMode;
use crate::error::SqlBatchError;
use crate::markers::{StatementMarkers, extract_markers};
use crate::params::{ParamKind, ParameterSet};
use crate::types::SqlValue;

/// The caller parameters one statement receives, borrowed from the call's `ParameterSet`.
///
/// Serializes as a JSON array (positional) or object (named).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StatementParams<'p> {
    Positional(&'p [SqlValue]),
    Named(BTreeMap<&'p str, &'p SqlValue>),
}

impl StatementParams<'_> {
    #[must_use]
    pub fn kind(&self) -> ParamKind {
        match self {
            StatementParams::Positional(_) => ParamKind::Positional,
            StatementParams::Named(_) => ParamKind::Named,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            StatementParams::Positional(values) => values.len(),
            StatementParams::Named(values) => values.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copy the bound values into an owned `ParameterSet`.
    #[must_use]
    pub fn to_parameter_set(&self) -> ParameterSet {
        match self {
            StatementParams::Positional(values) => ParameterSet::Positional(values.to_vec()),
            StatementParams::Named(values) => ParameterSet::Named(
                values
                    .iter()
                    .map(|(name, value)| ((*name).to_string(), (*value).clone()))
                    .collect(),
            ),
        }
    }
}

/// Select the parameters a statement with `markers` receives.
///
/// Positional calls take the contiguous slice `offset..offset + markers.positional`.
/// Named calls take only the names the statement uses; names the caller supplied but the
/// statement does not use are dropped. Returns the bound parameters and the new running
/// offset, which advances by the positional count in both modes.
///
/// # Errors
///
/// Returns `SqlBatchError::MissingPositionalParameters` when the slice runs past the
/// supplied values, and `SqlBatchError::MissingNamedParameter` in
/// `NamedBindingMode::Strict` when a used name was not supplied.
pub fn bind_markers<'p>(
    statement: &str,
    markers: &StatementMarkers,
    params: &'p ParameterSet,
    offset: usize,
    mode: NamedBindingMode,
) -> Result<(StatementParams<'p>, usize), SqlBatchError> {
    let next_offset = offset + markers.positional;

    let bound = match params {
        ParameterSet::Positional(values) => {
            let slice = values.get(offset..next_offset).ok_or_else(|| {
                SqlBatchError::MissingPositionalParameters {
                    statement: statement.to_string(),
                    offset,
                    required: markers.positional,
                    available: values.len(),
                }
            })?;
            StatementParams::Positional(slice)
        }
        ParameterSet::Named(values) => {
            let mut selected = BTreeMap::new();
            for name in &markers.names {
                match values.get_key_value(name.as_str()) {
                    Some((key, value)) => {
                        selected.insert(key.as_str(), value);
                    }
                    None if mode == NamedBindingMode::Strict => {
                        return Err(SqlBatchError::MissingNamedParameter {
                            statement: statement.to_string(),
                            name: name.clone(),
                        });
                    }
                    None => {}
                }
            }
            StatementParams::Named(selected)
        }
    };

    Ok((bound, next_offset))
}

/// Extract the markers of `statement` and bind it in `NamedBindingMode::Lazy`.
///
/// ```rust
/// use sql_batch_binder::prelude::*;
///
/// let params = ParameterSet::Positional(vec![SqlValue::Int(10), SqlValue::Int(20)]);
/// let (first, offset) = bind_statement("INSERT INTO t VALUES (?)", &params, 0)?;
/// let (second, offset) = bind_statement("INSERT INTO t VALUES (?)", &params, offset)?;
/// assert_eq!(first, StatementParams::Positional(&[SqlValue::Int(10)]));
/// assert_eq!(second, StatementParams::Positional(&[SqlValue::Int(20)]));
/// assert_eq!(offset, 2);
/// # Ok::<(), SqlBatchError>(())
/// ```
///
/// # Errors
///
/// Propagates marker extraction errors and the errors of [`bind_markers`].
pub fn bind_statement<'p>(
    statement: &str,
    params: &'p ParameterSet,
    offset: usize,
) -> Result<(StatementParams<'p>, usize), SqlBatchError> {
    let markers = extract_markers(statement)?;
    bind_markers(statement, &markers, params, offset, NamedBindingMode::Lazy)
}
