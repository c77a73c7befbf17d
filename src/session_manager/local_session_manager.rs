use std::collections::HashMap;

use log::debug;
use teloxide::types::ChatId;

use crate::{game::player::PlayerState, session_manager::SessionManager};

/// Keeps every session in memory. Nothing survives a restart.
#[derive(Default)]
pub struct LocalSessionManager {
    sessions: HashMap<ChatId, PlayerState>,
}

impl LocalSessionManager {
    pub fn new() -> LocalSessionManager {
        LocalSessionManager {
            sessions: HashMap::new(),
        }
    }
}

impl SessionManager for LocalSessionManager {
    fn get_session(&self, chat_id: ChatId) -> Option<&PlayerState> {
        self.sessions.get(&chat_id)
    }

    fn load_session(&mut self, chat_id: ChatId) -> PlayerState {
        *self.sessions.entry(chat_id).or_insert_with(|| {
            debug!("New session for chat {}", chat_id.0);
            PlayerState::new()
        })
    }

    fn store_session(&mut self, chat_id: ChatId, state: PlayerState) {
        self.sessions.insert(chat_id, state);
    }

    fn session_count(&self) -> usize {
        self.sessions.len()
    }
}
