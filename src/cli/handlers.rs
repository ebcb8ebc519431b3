use std::io::{self, Write};

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use crate::api::ApiClient;
use crate::app::App;
use crate::error::Result;
use crate::notify::TermNotifier;
use crate::ui::{AddNoteForm, NoteActions, SearchBar, Widget};

fn build_app(base_url: &str) -> Result<App> {
    let client = ApiClient::new(base_url)?;
    Ok(App::new(
        Box::new(client),
        Box::new(TermNotifier),
        Box::new(io::stdout()),
    ))
}

/// Yes/no prompt on the controlling terminal. Answers no when stdin is
/// not a terminal, so scripts have to pass --force.
fn confirm_on_tty(prompt: &str) -> bool {
    if !atty::is(atty::Stream::Stdin) {
        return false;
    }
    eprint!("{} [y/N] ", prompt);
    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return false;
    }
    input.trim().eq_ignore_ascii_case("y")
}

pub async fn handle_list(base_url: String) -> Result<()> {
    let mut app = build_app(&base_url)?;
    app.load().await;
    Ok(())
}

pub async fn handle_add(
    base_url: String,
    max_title_len: usize,
    title: String,
    body: String,
) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut form = AddNoteForm::with_max_title_len(tx, max_title_len);

    form.input_title(&title);
    form.input_body(&body);
    if !form.submit() {
        if let Some(e) = form.title_error() {
            eprintln!("  ! {}", e);
        }
        if let Some(e) = form.body_error() {
            eprintln!("  ! {}", e);
        }
        return Ok(());
    }

    let mut app = build_app(&base_url)?;
    if let Some(event) = rx.recv().await {
        app.dispatch(event).await;
    }
    Ok(())
}

pub async fn handle_delete(base_url: String, id: String, force: bool) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let actions = NoteActions::new(tx);

    let confirmed = actions.request_delete(&id, || {
        force || confirm_on_tty(&format!("Delete note {}?", id))
    });
    if !confirmed {
        println!("Cancelled.");
        return Ok(());
    }

    let mut app = build_app(&base_url)?;
    app.load().await;
    if let Some(event) = rx.recv().await {
        app.dispatch(event).await;
    }
    Ok(())
}

pub async fn handle_archive(base_url: String, id: String) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let actions = NoteActions::new(tx);

    // The toggle direction depends on the note's current state, so the
    // store has to be populated first.
    let mut app = build_app(&base_url)?;
    app.load().await;

    actions.toggle_archive(&id);
    if let Some(event) = rx.recv().await {
        app.dispatch(event).await;
    }
    Ok(())
}

pub async fn handle_search(base_url: String, term: String) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut bar = SearchBar::new(tx);

    let mut app = build_app(&base_url)?;
    app.load().await;

    bar.input(&term);
    if let Some(event) = rx.recv().await {
        app.dispatch(event).await;
    }
    Ok(())
}

const SHELL_HELP: &str = "\
commands:
  list               redraw the note lists
  search <term>      filter notes (empty term clears)
  title <text>       set the add-form title
  body <text>        set the add-form body
  add                submit the add-form
  delete <id>        delete a note (asks for confirmation)
  archive <id>       toggle a note in or out of the archive
  help               show this message
  quit               exit";

/// Interactive shell: every line is routed through the widgets, which
/// emit events the orchestrator drains after each command.
pub async fn handle_shell(base_url: String, max_title_len: usize) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut form = AddNoteForm::with_max_title_len(tx.clone(), max_title_len);
    let mut search = SearchBar::new(tx.clone());
    let actions = NoteActions::new(tx);

    let mut app = build_app(&base_url)?;
    app.load().await;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let line = line.trim();
        let (command, rest) = match line.split_once(' ') {
            Some((c, r)) => (c, r.trim()),
            None => (line, ""),
        };

        match command {
            "" => continue,
            "quit" | "exit" => break,
            "help" => println!("{}", SHELL_HELP),
            "list" => app.refresh(),
            "search" => {
                search.input(rest);
                println!("{}", search.view());
            }
            "title" => {
                form.input_title(rest);
                print!("{}", form.view());
            }
            "body" => {
                form.input_body(rest);
                print!("{}", form.view());
            }
            "add" => {
                if !form.submit() {
                    print!("{}", form.view());
                }
            }
            "delete" => {
                if rest.is_empty() {
                    println!("usage: delete <id>");
                } else {
                    // The answer has to come through the shell's own line
                    // reader; a second stdin reader would race it.
                    eprint!("Delete note {}? [y/N] ", rest);
                    let answer = lines.next_line().await?.unwrap_or_default();
                    let confirmed = answer.trim().eq_ignore_ascii_case("y");
                    if !actions.request_delete(rest, || confirmed) {
                        println!("Cancelled.");
                    }
                }
            }
            "archive" => {
                if rest.is_empty() {
                    println!("usage: archive <id>");
                } else {
                    actions.toggle_archive(rest);
                }
            }
            _ => println!("unknown command '{}'; try 'help'", command),
        }

        while let Ok(event) = rx.try_recv() {
            app.dispatch(event).await;
        }
    }

    Ok(())
}
