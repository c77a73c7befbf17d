use std::sync::{Arc, Mutex, PoisonError};

use log::{debug, info};
use teloxide::{
    prelude::*,
    types::{KeyboardButton, KeyboardMarkup, ParseMode},
};

use crate::{
    game::{
        self,
        action::{Action, KEYBOARD_LAYOUT},
        reply::Reply,
        rules::GameRules,
    },
    session_manager::{local_session_manager::LocalSessionManager, SessionManager},
};

pub struct BotState<S: SessionManager> {
    pub session_manager: S,
    pub rules: GameRules,
}

pub type AsyncBotState = Arc<Mutex<BotState<LocalSessionManager>>>;

pub fn new_async_bot_state(rules: GameRules) -> AsyncBotState {
    Arc::new(Mutex::new(BotState {
        session_manager: LocalSessionManager::new(),
        rules,
    }))
}

pub type BotHandler = Handler<
    'static,
    DependencyMap,
    Result<(), teloxide::RequestError>,
    teloxide::dispatching::DpHandlerDescription,
>;

pub fn get_handler() -> BotHandler {
    Update::filter_message()
        .branch(command_handler::get_command_handler())
        .branch(button_handler::get_button_handler())
}

/// Loads the chat's session, runs the action through the game and stores
/// whatever state comes out.
pub fn apply_action<S: SessionManager>(
    bot_state: &mut BotState<S>,
    chat_id: ChatId,
    action: Action,
) -> Reply {
    let current = bot_state.session_manager.load_session(chat_id);
    let (next, reply) = game::step(&bot_state.rules, current, action);
    bot_state.session_manager.store_session(chat_id, next);

    debug!(
        "Chat {}: {action:?} -> balance={} workers={} ({})",
        chat_id.0,
        next.balance,
        next.worker_count,
        next.phase(&bot_state.rules)
    );
    if action == Action::Reset {
        info!("Chat {} reset their game", chat_id.0);
    }

    reply
}

async fn run_action(
    bot_state: AsyncBotState,
    bot: Bot,
    chat_id: ChatId,
    action: Action,
) -> Result<(), teloxide::RequestError> {
    // The guard must be gone before the first await
    let reply = {
        let mut state_lock = bot_state.lock().unwrap_or_else(PoisonError::into_inner);
        apply_action(&mut *state_lock, chat_id, action)
    };

    let request = bot
        .send_message(chat_id, reply.text)
        .reply_markup(make_keyboard());
    if reply.markdown {
        request.parse_mode(ParseMode::MarkdownV2).await?;
    } else {
        request.await?;
    }

    Ok(())
}

pub fn make_keyboard() -> KeyboardMarkup {
    let keyboard = KEYBOARD_LAYOUT
        .iter()
        .map(|row| {
            row.iter()
                .map(|action| KeyboardButton::new(action.to_string()))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    KeyboardMarkup::new(keyboard)
}

pub mod button_handler;
pub mod command_handler;
