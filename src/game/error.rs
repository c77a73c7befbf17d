use thiserror::Error;

/// Rejected actions. The player's state is left untouched and the message
/// is shown to the player as is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("Not enough money! You need {required} 💵, you have {available} 💵")]
    InsufficientFunds { required: u64, available: u64 },
    #[error("You have no workers!")]
    NoWorkers,
}
