//! Turn orchestration for one playthrough

pub mod session;

pub use session::Game;
