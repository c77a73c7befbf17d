use teloxide::utils::markdown::{bold, escape};

use super::{action::Action, player::PlayerState, rules::GameRules};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    /// Set when `text` is already escaped MarkdownV2.
    pub markdown: bool,
}

impl Reply {
    pub fn plain(text: impl Into<String>) -> Reply {
        Reply {
            text: text.into(),
            markdown: false,
        }
    }

    pub fn markdown(text: String) -> Reply {
        Reply {
            text,
            markdown: true,
        }
    }

    /// Appends a paragraph of plain text, escaping it if needed.
    pub fn push_paragraph(&mut self, paragraph: &str) {
        self.text.push_str("\n\n");
        if self.markdown {
            self.text.push_str(&escape(paragraph));
        } else {
            self.text.push_str(paragraph);
        }
    }
}

fn quoted(action: Action) -> String {
    format!("\"{action}\"")
}

pub fn start() -> Reply {
    Reply::markdown(format!(
        "{}\n\n{}\n\n{}",
        escape("Hi!"),
        escape("This is a simple clicker game about the career of Petrovich, a very successful businessman."),
        escape("To begin, press ") + &bold(&escape(&quoted(Action::Help))),
    ))
}

pub fn help(rules: &GameRules) -> Reply {
    let lines = [
        format!("{} - adds 1 💵 to your wallet.", quoted(Action::Earn)),
        format!(
            "{} - for {} 💵 you hire a worker who brings {} 💵 every time you press {}.",
            quoted(Action::BuyWorker),
            rules.worker_cost,
            rules.worker_yield,
            quoted(Action::OrderToWork),
        ),
        format!(
            "{} - spends as much as possible on workers.",
            quoted(Action::BuyWorkerMax)
        ),
        format!(
            "{} - collects the earnings of all your workers.",
            quoted(Action::OrderToWork)
        ),
        format!("{} - shows your balance and workers.", quoted(Action::Info)),
        format!("{} - starts over from nothing.", quoted(Action::Reset)),
    ];

    let buttons = lines
        .iter()
        .map(|l| escape(l))
        .collect::<Vec<_>>()
        .join("\n");

    Reply::markdown(format!(
        "{}\n\n{}\n\n{}\n\n{}",
        escape("You are Petrovich."),
        escape(&format!(
            "The goal of the game is to earn {} 💵. That's all there is to it.",
            rules.win_balance
        )),
        bold("Buttons"),
        buttons,
    ))
}

pub fn info(state: &PlayerState) -> Reply {
    Reply::markdown(format!(
        "{}\n{}\n{}",
        bold("Character info"),
        escape(&format!("Balance: {} 💵", state.balance)),
        escape(&format!("Workers: {}", state.worker_count)),
    ))
}

pub fn won() -> Reply {
    Reply::plain(format!(
        "Congratulations, you won! Press {} to play again.",
        quoted(Action::Reset)
    ))
}
