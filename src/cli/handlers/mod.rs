//! Command handlers for the CLI.

mod completions;
mod notes;
mod serve;

pub use completions::handle_completions;
pub use notes::{
    handle_add, handle_list, handle_menu, handle_remove, handle_show, handle_update,
};
pub use serve::handle_serve;
