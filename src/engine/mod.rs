//! The engine facade a presentation layer talks to.
//!
//! `GameEngine` owns the authoritative state and applies intents;
//! `EngineView` is the read-only snapshot it hands back for rendering.

pub mod game_engine;
pub mod view;

pub use game_engine::GameEngine;
pub use view::EngineView;
