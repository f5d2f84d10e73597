//! Horizon Breadcrumb Folders Example
//!
//! Interactive terminal demo of a breadcrumb bound to an observable folder
//! list. Type commands to mutate the list, resize the control or click
//! elements:
//!
//! ```text
//! add <name>            append a folder
//! move <from> <to>      move a folder
//! remove <name>         remove a folder by name
//! replace <index> <name>
//! reset                 remove every folder
//! width <px>            resize the control
//! click <position>      click a trail element
//! home                  click the home element
//! quit
//! ```
//!
//! Run with: cargo run -p horizon-breadcrumb --example folders [config.toml]
//!
//! Set `RUST_LOG=horizon_breadcrumb=debug` to see sync and layout decisions.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use horizon_breadcrumb::prelude::*;
use horizon_breadcrumb::widget::{TrailFormatOptions, TrailStyle};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, PartialEq, Serialize)]
struct Folder {
    name: String,
}

impl Folder {
    fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

fn main() -> CommandResult {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let folders = Arc::new(ObservableList::new(vec![
        Folder::new("Folder 1"),
        Folder::new("Folder 2"),
        Folder::new("Folder 3"),
    ]));

    let breadcrumb: Breadcrumb<Folder> = Breadcrumb::new();
    match std::env::args().nth(1) {
        Some(path) => breadcrumb.apply_config(&BreadcrumbConfig::load(path)?)?,
        None => breadcrumb.set_display_path(Some("name".into()))?,
    }

    let printer = TrailDebug::with_options(TrailFormatOptions {
        style: TrailStyle::Unicode,
        ..TrailFormatOptions::default()
    });
    breadcrumb
        .trail_changed()
        .connect(move |trail: &Trail<Folder>| println!("{}", printer.format(trail)));
    breadcrumb.home_selected().connect(|_| println!("Home clicked"));
    breadcrumb
        .item_selected()
        .connect(|selected: &ItemSelected<Folder>| {
            println!(
                "Item clicked: {} (index {})",
                selected.item.name, selected.index
            );
        });
    breadcrumb.sync_failed().connect(|failure: &SyncFailure| {
        println!("Could not apply {}: {}", failure.action, failure.message);
    });

    breadcrumb.set_items_source(folders.clone())?;
    breadcrumb.set_available_width(320.0)?;

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            continue;
        };
        let rest: Vec<&str> = words.collect();

        let outcome: CommandResult = match verb {
            "quit" | "exit" => break,
            "width" => parse(&rest, 0)
                .and_then(|width: f32| Ok(breadcrumb.set_available_width(width)?)),
            "click" => parse(&rest, 0).and_then(|position: usize| Ok(breadcrumb.click(position)?)),
            "home" => {
                breadcrumb.click_home();
                Ok(())
            }
            _ => match verb.parse::<ChangeAction>() {
                Ok(action) => run_change(&folders, action, &rest),
                Err(err) => Err(err.into()),
            },
        };

        if let Err(err) = outcome {
            println!("error: {err}");
        }
    }

    Ok(())
}

type CommandResult = Result<(), Box<dyn std::error::Error>>;

fn run_change(
    folders: &ObservableList<Folder>,
    action: ChangeAction,
    args: &[&str],
) -> CommandResult {
    match action {
        ChangeAction::Add => folders.push(Folder::new(args.join(" "))),
        ChangeAction::Move => {
            let from: usize = parse(args, 0)?;
            let to: usize = parse(args, 1)?;
            if !folders.move_item(from, to) {
                return Err(format!("cannot move {from} to {to}").into());
            }
        }
        ChangeAction::Remove => {
            if !folders.remove_item(&Folder::new(args.join(" "))) {
                return Err("no such folder".into());
            }
        }
        ChangeAction::Replace => {
            let index: usize = parse(args, 0)?;
            let name = args.get(1..).map(|words| words.join(" ")).unwrap_or_default();
            if folders.replace(index, Folder::new(name)).is_none() {
                return Err(format!("no folder at {index}").into());
            }
        }
        ChangeAction::Reset => folders.clear(),
    }
    Ok(())
}

fn parse<V>(args: &[&str], position: usize) -> Result<V, Box<dyn std::error::Error>>
where
    V: std::str::FromStr,
    V::Err: std::error::Error + 'static,
{
    let word = args
        .get(position)
        .ok_or_else(|| format!("missing argument {}", position + 1))?;
    Ok(word.parse()?)
}
