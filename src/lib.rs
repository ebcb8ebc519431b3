pub mod api;
pub mod app;
pub mod cli;
pub mod error;
pub mod note;
pub mod notify;
pub mod render;
pub mod store;
pub mod ui;

pub use api::{ApiClient, NoteService};
pub use app::App;
pub use error::{NotaError, Result};
pub use note::Note;
pub use store::NoteStore;
