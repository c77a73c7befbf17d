pub mod config;
pub mod game;
pub mod handlers;
pub mod session_manager;
