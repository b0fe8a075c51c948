//! Handler modules for keyboard input, category selection and play.

mod category_handler;
mod game_handler;
mod input_handler;

pub use category_handler::CategoryHandler;
pub use game_handler::GameHandler;
pub use input_handler::InputHandler;
