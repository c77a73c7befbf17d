#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Action {
    #[display(fmt = "Earn")]
    Earn,
    #[display(fmt = "Buy worker")]
    BuyWorker,
    #[display(fmt = "Buy workers with all money")]
    BuyWorkerMax,
    #[display(fmt = "Order to work")]
    OrderToWork,
    #[display(fmt = "Character info")]
    Info,
    #[display(fmt = "Help")]
    Help,
    #[display(fmt = "Reset game")]
    Reset,
    #[display(fmt = "/start")]
    Start,
}

/// Reply keyboard layout, one inner slice per row.
pub const KEYBOARD_LAYOUT: [&[Action]; 4] = [
    &[Action::Earn, Action::BuyWorker],
    &[Action::BuyWorkerMax, Action::OrderToWork],
    &[Action::Info, Action::Help],
    &[Action::Reset],
];

impl Action {
    /// Maps the text of a pressed keyboard button back to its action.
    pub fn from_label(text: &str) -> Option<Action> {
        KEYBOARD_LAYOUT
            .iter()
            .flat_map(|row| row.iter())
            .find(|a| a.to_string() == text.trim())
            .copied()
    }

    /// Whether the action can change the player's state. These are the
    /// actions closed off once the game is won.
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            Action::Earn | Action::BuyWorker | Action::BuyWorkerMax | Action::OrderToWork
        )
    }
}
