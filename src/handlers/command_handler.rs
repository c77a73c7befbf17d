use teloxide::{prelude::*, utils::command::BotCommands};

use super::{run_action, AsyncBotState, BotHandler};
use crate::game::action::Action;

pub fn get_command_handler() -> BotHandler {
    dptree::entry()
        .filter_command::<GameCommand>()
        .endpoint(command_handler)
}

#[derive(BotCommands, Clone, Debug, PartialEq)]
#[command(rename_rule = "lowercase", description = "Game commands")]
pub enum GameCommand {
    #[command(description = "Show the greeting and the game keyboard.")]
    Start,
    #[command(description = "Explain the rules.")]
    Help,
    #[command(description = "Show your balance and workers.")]
    Info,
    #[command(description = "Start over from nothing.")]
    Reset,
}

impl GameCommand {
    pub fn action(&self) -> Action {
        match self {
            GameCommand::Start => Action::Start,
            GameCommand::Help => Action::Help,
            GameCommand::Info => Action::Info,
            GameCommand::Reset => Action::Reset,
        }
    }
}

async fn command_handler(
    bot_state: AsyncBotState,
    bot: Bot,
    msg: Message,
    cmd: GameCommand,
) -> Result<(), teloxide::RequestError> {
    run_action(bot_state, bot, msg.chat.id, cmd.action()).await
}
