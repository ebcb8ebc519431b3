use clap::{Parser, Subcommand};

use crate::api::DEFAULT_BASE_URL;
use crate::ui::DEFAULT_MAX_TITLE_LEN;

#[derive(Parser, Debug)]
#[command(name = "nota")]
#[command(version, about = "A terminal client for a remote notes service")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Base URL of the notes service
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Maximum allowed title length for new notes
    #[arg(long, default_value_t = DEFAULT_MAX_TITLE_LEN)]
    pub max_title_len: usize,

    /// Without a subcommand, starts the interactive shell
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all notes, split into active and archived
    List,

    /// Add a new note
    Add {
        /// Note title
        title: String,

        /// Note body
        #[arg(long, short = 'b')]
        body: String,
    },

    /// Delete a note by id
    Delete {
        /// Note id
        id: String,

        /// Skip the confirmation prompt
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Toggle a note in or out of the archive
    Archive {
        /// Note id
        id: String,
    },

    /// Show notes matching a search term
    Search {
        /// Case-insensitive term matched against title and body
        term: String,
    },

    /// Interactive shell
    Shell,
}
