// App module for issue-digest
// Handles application state and key handling

pub mod input;
pub mod state;

pub use input::handle_input;
pub use state::App;
