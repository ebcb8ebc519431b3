mod commands;
mod handlers;

pub use commands::{Cli, Commands};
pub use handlers::{
    handle_add, handle_archive, handle_delete, handle_list, handle_search, handle_shell,
};
