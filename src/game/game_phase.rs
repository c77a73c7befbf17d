#[derive(Clone, Copy, Debug, PartialEq, Eq, derive_more::Display)]
pub enum GamePhase {
    #[display(fmt = "playing")]
    Playing,
    /// Every mutating action is refused until the game is reset.
    #[display(fmt = "won")]
    Won,
}
