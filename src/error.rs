use thiserror::Error;

#[derive(Debug, Error)]
pub enum SqlBatchError {
    #[error("cannot mix positional and named parameters in one call")]
    MixedParameterKinds,

    #[error(
        "unsupported positional parameter `{marker}` in statement: {statement} (only bare `?` is accepted, not `?<number>`)"
    )]
    UnsupportedIndexedPositional { statement: String, marker: String },

    #[error(
        "named parameter `{marker}` must start with one of ':', '@', '$' (statement: {statement})"
    )]
    InvalidNamedParameterPrefix { statement: String, marker: String },

    #[error(
        "missing positional parameters for statement: {statement} (needs {required} from offset {offset}, {available} supplied)"
    )]
    MissingPositionalParameters {
        statement: String,
        offset: usize,
        required: usize,
        available: usize,
    },

    #[error("missing named parameter `{name}` for statement: {statement}")]
    MissingNamedParameter { statement: String, name: String },

    #[error("Lexical error at byte {offset}: {message}")]
    LexicalError { offset: usize, message: String },

    #[error("SQL execution error: {0}")]
    ExecutionError(String),

    #[error("Unimplemented feature: {0}")]
    Unimplemented(String),
}
