pub mod local_session_manager;

use teloxide::types::ChatId;

use crate::game::player::PlayerState;

pub trait SessionManager {
    // Gets the instantaneous game state, if present, of a chat user.
    fn get_session(&self, chat_id: ChatId) -> Option<&PlayerState>;

    // Same as get_session, but a chat seen for the first time gets a fresh game.
    fn load_session(&mut self, chat_id: ChatId) -> PlayerState;

    fn store_session(&mut self, chat_id: ChatId, state: PlayerState);

    fn session_count(&self) -> usize;
}
