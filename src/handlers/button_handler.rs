use teloxide::prelude::*;

use super::{run_action, AsyncBotState, BotHandler};
use crate::game::action::Action;

// Anything that isn't the exact text of a keyboard button falls through.
pub fn get_button_handler() -> BotHandler {
    dptree::filter_map(|msg: Message| msg.text().and_then(Action::from_label))
        .endpoint(button_handler)
}

async fn button_handler(
    bot_state: AsyncBotState,
    bot: Bot,
    msg: Message,
    action: Action,
) -> Result<(), teloxide::RequestError> {
    run_action(bot_state, bot, msg.chat.id, action).await
}
