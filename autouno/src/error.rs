use thiserror::Error;

/// Reasons a turn could not be played. The game is left untouched.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnoError {
    #[error("The game is already over")]
    GameOver,
    #[error("The game has not been initialized")]
    NotInitialized,
    #[error("Player {index} is not seated at a table of {players}")]
    PlayerOutOfRange { index: usize, players: usize },
}

pub type Result<T, E = UnoError> = std::result::Result<T, E>;
