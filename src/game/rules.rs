/// Price of a single worker.
pub const WORKER_COST: u64 = 30;
/// What one worker brings in per work order.
pub const WORKER_YIELD: u64 = 2;
/// Balance at which the game is won.
pub const WIN_BALANCE: u64 = 100_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameRules {
    pub worker_cost: u64,
    pub worker_yield: u64,
    pub win_balance: u64,
}

impl Default for GameRules {
    fn default() -> Self {
        GameRules {
            worker_cost: WORKER_COST,
            worker_yield: WORKER_YIELD,
            win_balance: WIN_BALANCE,
        }
    }
}
