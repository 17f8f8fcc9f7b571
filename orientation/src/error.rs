use thiserror::Error;

/// Errors raised while building or rendering containers.
///
/// Absence and failure *inside* a computation are data (`Maybe::Nothing`, `Either::Left`);
/// this type only covers misuse of a constructor and failures of the diagnostic rendering.
#[derive(Debug, Error)]
pub enum Error {
    /// `Stream::cycle` needs at least one element to repeat
    #[error("cannot cycle an empty collection")]
    EmptyCycle,
    #[error("failed to render payload as json: {0}")]
    Render(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
