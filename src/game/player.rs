use super::{error::GameError, game_phase::GamePhase, reply::Reply, rules::GameRules};

/// Per-chat game record. Only the transition methods below change it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PlayerState {
    pub balance: u64,
    pub worker_count: u64,
}

impl PlayerState {
    pub fn new() -> PlayerState {
        PlayerState::default()
    }

    pub fn phase(&self, rules: &GameRules) -> GamePhase {
        if self.has_won(rules) {
            GamePhase::Won
        } else {
            GamePhase::Playing
        }
    }

    pub fn has_won(&self, rules: &GameRules) -> bool {
        self.balance >= rules.win_balance
    }

    pub fn earn(&self) -> (PlayerState, Reply) {
        let next = PlayerState {
            balance: self.balance.saturating_add(1),
            ..*self
        };
        (next, Reply::plain("You earned 1 💵!"))
    }

    pub fn buy_worker(&self, worker_cost: u64) -> Result<(PlayerState, Reply), GameError> {
        self.ensure_affordable(worker_cost)?;

        let next = PlayerState {
            balance: self.balance - worker_cost,
            worker_count: self.worker_count.saturating_add(1),
        };
        Ok((
            next,
            Reply::plain(format!("You bought a worker for {worker_cost} 💵!")),
        ))
    }

    /// Spends as much of the balance as possible on workers.
    pub fn buy_worker_max(&self, worker_cost: u64) -> Result<(PlayerState, Reply), GameError> {
        self.ensure_affordable(worker_cost)?;

        // worker_cost > 0 here, since balance >= worker_cost
        let count = self.balance / worker_cost;
        let price = count * worker_cost;
        let next = PlayerState {
            balance: self.balance - price,
            worker_count: self.worker_count.saturating_add(count),
        };
        Ok((
            next,
            Reply::plain(format!("You bought {count} workers for {price} 💵!")),
        ))
    }

    pub fn order_to_work(&self, worker_yield: u64) -> Result<(PlayerState, Reply), GameError> {
        if self.worker_count < 1 {
            return Err(GameError::NoWorkers);
        }

        let earned = self.worker_count.saturating_mul(worker_yield);
        let next = PlayerState {
            balance: self.balance.saturating_add(earned),
            ..*self
        };
        Ok((
            next,
            Reply::plain(format!("Your workers earned {earned} 💵!")),
        ))
    }

    pub fn reset(&self) -> (PlayerState, Reply) {
        (PlayerState::new(), Reply::plain("The game has been reset!"))
    }

    fn ensure_affordable(&self, worker_cost: u64) -> Result<(), GameError> {
        if self.balance < worker_cost || worker_cost == 0 {
            return Err(GameError::InsufficientFunds {
                required: worker_cost,
                available: self.balance,
            });
        }
        Ok(())
    }
}
