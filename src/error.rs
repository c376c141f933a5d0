/// The error type handlers and factories return. Any error converts into it with `?`.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A variant of this enum is returned when dispatch, an accessor or the store fails
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("[{name}] is not associated with an operation")]
    UnknownCommand { name: String },
    #[error("could not build command [{name}]")]
    FactoryFailure {
        name: String,
        #[source]
        source: BoxError,
    },
    #[error("expected argument at position {position}, but only {available} were provided")]
    ArgumentOutOfRange { position: usize, available: usize },
    #[error("expected one of [{}] at position {position}, but got [{actual}]", .expected.join(", "))]
    ArgumentMismatch {
        position: usize,
        expected: Vec<String>,
        actual: String,
    },
    #[error("store key '{0}' is already set")]
    DuplicateStoreKey(&'static str),
    #[error("store key '{0}' is not set")]
    MissingStoreKey(&'static str),
    #[error("store key '{0}' holds a value of a different type")]
    StoreTypeMismatch(&'static str),
    #[error("command [{command}] failed")]
    Command {
        command: String,
        #[source]
        source: BoxError,
    },
    #[error("default handler failed")]
    DefaultFailure(#[source] BoxError),
}

impl Error {
    /// Returns the name of the registered command an error refers to, if any
    pub fn command(&self) -> Option<&str> {
        match self {
            Error::UnknownCommand { name } | Error::FactoryFailure { name, .. } => Some(name),
            Error::Command { command, .. } => Some(command),
            _ => None,
        }
    }
}
