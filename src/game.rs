use log::debug;

use action::Action;
use player::PlayerState;
use reply::Reply;
use rules::GameRules;

pub mod action;
pub mod error;
pub mod game_phase;
pub mod player;
pub mod reply;
pub mod rules;

/// Applies one action to a player's state and returns the next state along
/// with what to tell the player.
///
/// Mutating actions are refused once the balance has reached the win
/// threshold. The action that crosses the threshold is still applied, and
/// its reply announces the win.
pub fn step(rules: &GameRules, state: PlayerState, action: Action) -> (PlayerState, Reply) {
    let was_won = state.has_won(rules);
    if action.is_mutating() && was_won {
        debug!("Refusing {action:?}: game already won");
        return (state, reply::won());
    }

    let result = match action {
        Action::Earn => Ok(state.earn()),
        Action::BuyWorker => state.buy_worker(rules.worker_cost),
        Action::BuyWorkerMax => state.buy_worker_max(rules.worker_cost),
        Action::OrderToWork => state.order_to_work(rules.worker_yield),
        Action::Reset => Ok(state.reset()),
        Action::Info => Ok((state, reply::info(&state))),
        Action::Help => Ok((state, reply::help(rules))),
        Action::Start => Ok((state, reply::start())),
    };

    match result {
        Ok((next, mut message)) => {
            if !was_won && next.has_won(rules) {
                message.push_paragraph(&reply::won().text);
            }
            (next, message)
        }
        Err(e) => {
            debug!("Rejected {action:?}: {e}");
            (state, Reply::plain(e.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn state(balance: u64, worker_count: u64) -> PlayerState {
        PlayerState {
            balance,
            worker_count,
        }
    }

    fn arb_action() -> impl Strategy<Value = Action> {
        prop_oneof![
            Just(Action::Earn),
            Just(Action::BuyWorker),
            Just(Action::BuyWorkerMax),
            Just(Action::OrderToWork),
            Just(Action::Info),
            Just(Action::Help),
            Just(Action::Reset),
            Just(Action::Start),
        ]
    }

    /// States of a game still in progress under the default rules.
    fn arb_state() -> impl Strategy<Value = PlayerState> {
        (0u64..100_000, 0u64..10_000).prop_map(|(b, w)| state(b, w))
    }

    #[test]
    fn failed_purchase_keeps_state_and_explains() {
        let rules = GameRules::default();
        let (next, reply) = step(&rules, state(29, 0), Action::BuyWorker);
        assert_eq!(next, state(29, 0));
        assert!(!reply.markdown);
        assert_eq!(
            reply.text,
            "Not enough money! You need 30 💵, you have 29 💵"
        );
    }

    #[test]
    fn work_order_without_workers_keeps_state() {
        let rules = GameRules::default();
        let (next, reply) = step(&rules, state(5, 0), Action::OrderToWork);
        assert_eq!(next, state(5, 0));
        assert_eq!(reply.text, "You have no workers!");
    }

    #[test]
    fn work_order_with_four_workers_earns_eight() {
        let rules = GameRules::default();
        let (next, _) = step(&rules, state(0, 4), Action::OrderToWork);
        assert_eq!(next, state(8, 4));
    }

    #[test]
    fn buy_max_on_95() {
        let rules = GameRules::default();
        let (next, _) = step(&rules, state(95, 0), Action::BuyWorkerMax);
        assert_eq!(next, state(5, 3));
    }

    #[test]
    fn action_reaching_threshold_is_applied_and_announces_win() {
        let rules = GameRules::default();
        let (next, message) = step(&rules, state(99_999, 0), Action::Earn);
        assert_eq!(next, state(100_000, 0));
        assert!(message.text.starts_with("You earned 1 💵!"));
        assert!(message.text.contains("Congratulations, you won!"));

        let (after, message) = step(&rules, next, Action::Earn);
        assert_eq!(after, next);
        assert_eq!(message, reply::won());
    }

    #[test]
    fn queries_still_work_after_winning() {
        let rules = GameRules::default();
        let won = state(100_000, 3);
        let (next, reply) = step(&rules, won, Action::Info);
        assert_eq!(next, won);
        assert!(reply.text.contains("Balance: 100000 💵"));

        let (next, _) = step(&rules, won, Action::Reset);
        assert_eq!(next, state(0, 0));
    }

    #[test]
    fn custom_rules_are_honoured() {
        let rules = GameRules {
            worker_cost: 10,
            worker_yield: 5,
            win_balance: 50,
        };
        let (next, _) = step(&rules, state(25, 0), Action::BuyWorkerMax);
        assert_eq!(next, state(5, 2));
        let (next, reply) = step(&rules, state(45, 1), Action::OrderToWork);
        assert_eq!(next, state(50, 1));
        assert!(reply.text.contains("Congratulations"));
    }

    proptest! {
        #[test]
        fn earn_adds_exactly_one(s in arb_state()) {
            let rules = GameRules::default();
            let (next, _) = step(&rules, s, Action::Earn);
            prop_assert_eq!(next.balance, s.balance + 1);
            prop_assert_eq!(next.worker_count, s.worker_count);
        }

        #[test]
        fn reset_always_clears(s in arb_state()) {
            let (next, _) = step(&GameRules::default(), s, Action::Reset);
            prop_assert_eq!(next, PlayerState::new());
        }

        #[test]
        fn read_only_actions_never_mutate(s in arb_state()) {
            let rules = GameRules::default();
            for action in [Action::Info, Action::Help, Action::Start] {
                let (next, _) = step(&rules, s, action);
                prop_assert_eq!(next, s);
            }
        }

        #[test]
        fn won_game_is_frozen_until_reset(
            balance in 100_000u64..1_000_000,
            workers in 0u64..10_000,
            actions in prop::collection::vec(arb_action(), 1..20),
        ) {
            let rules = GameRules::default();
            let mut current = state(balance, workers);
            for action in actions {
                let (next, _) = step(&rules, current, action);
                if action == Action::Reset {
                    prop_assert_eq!(next, PlayerState::new());
                    break;
                }
                prop_assert_eq!(next, current);
                current = next;
            }
        }

        #[test]
        fn purchases_conserve_value(s in arb_state()) {
            let rules = GameRules::default();
            let (next, _) = step(&rules, s, Action::BuyWorkerMax);
            let spent = s.balance - next.balance;
            let bought = next.worker_count - s.worker_count;
            prop_assert_eq!(spent, bought * rules.worker_cost);
            prop_assert!(next.balance < rules.worker_cost);
        }
    }
}
