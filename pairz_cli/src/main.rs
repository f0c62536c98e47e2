use clap::Parser;
use directories::ProjectDirs;
use pairz_lib::auth::{Authorizer, StaticSecret};
use pairz_lib::messages::CmdMessage;
use pairz_lib::pairing::{run_pairings, ThreadRngShuffler};
use pairz_lib::registry::{Registry, TITLE_PROMPT_THRESHOLD};
use pairz_lib::store::fs::JsonFileStore;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

mod args;
mod render;

use args::Cli;
use render::SessionPresenter;

fn main() {
    let cli = Cli::parse();

    let data_file = cli.data_file.clone().unwrap_or_else(default_data_file);
    let mut registry = Registry::new(JsonFileStore::new(&data_file));
    let gate = StaticSecret::new(cli.admin_secret.clone());

    let stdin = io::stdin();
    let mut input = stdin.lock().lines();

    loop {
        render::print_menu();
        // EOF on stdin is a clean exit, same as choosing 4.
        let Some(choice) = prompt(&mut input, "Enter choice (1-4): ") else {
            break;
        };

        match choice.trim() {
            "1" => handle_register(&mut registry, &mut input),
            "2" => handle_pairings(&registry, cli.plain),
            "3" => handle_admin_view(&registry, &gate, &mut input),
            "4" => {
                println!("Exiting...");
                break;
            }
            _ => render::print_message(&CmdMessage::warning("Invalid choice.")),
        }
    }
}

fn default_data_file() -> PathBuf {
    match ProjectDirs::from("com", "pairz", "pairz") {
        Some(dirs) => dirs.data_dir().join("pairz.json"),
        None => PathBuf::from("pairz.json"),
    }
}

fn read_line(input: &mut impl Iterator<Item = io::Result<String>>) -> Option<String> {
    input.next()?.ok()
}

fn prompt(
    input: &mut impl Iterator<Item = io::Result<String>>,
    text: &str,
) -> Option<String> {
    print!("{}", text);
    let _ = io::stdout().flush();
    read_line(input)
}

fn handle_register(
    registry: &mut Registry<JsonFileStore>,
    input: &mut impl Iterator<Item = io::Result<String>>,
) {
    let Some(name) = prompt(input, "Enter player name: ") else {
        return;
    };
    let Some(elo_raw) = prompt(input, "Enter ELO rating: ") else {
        return;
    };
    let Ok(elo) = elo_raw.trim().parse::<i32>() else {
        render::print_message(&CmdMessage::error("Invalid ELO rating."));
        return;
    };

    // The title prompt is rating-gated: at or below the threshold there is
    // no request at all, not even for the floor-less FM/CM titles.
    let title_input = if elo > TITLE_PROMPT_THRESHOLD {
        render::print_message(&CmdMessage::info("High rating detected."));
        prompt(input, "Enter FIDE title (GM/IM/NM/FM/CM or 'None'): ")
    } else {
        None
    };

    match registry.register(&name, elo, title_input.as_deref()) {
        Ok(outcome) => {
            for message in outcome.messages() {
                render::print_message(&message);
            }
        }
        Err(err) => {
            render::print_message(&CmdMessage::error(format!("Registration failed: {}", err)));
        }
    }
}

fn handle_pairings(registry: &Registry<JsonFileStore>, plain: bool) {
    let mut shuffler = ThreadRngShuffler;
    let mut presenter = SessionPresenter::new(plain);

    match run_pairings(registry.players(), &mut shuffler, &mut presenter) {
        Ok(rows) if rows.is_empty() => {
            render::print_message(&CmdMessage::info("No players to pair."));
        }
        Ok(_) => {}
        Err(err) => render::print_message(&CmdMessage::error(format!("{}", err))),
    }
}

fn handle_admin_view(
    registry: &Registry<JsonFileStore>,
    gate: &dyn Authorizer,
    input: &mut impl Iterator<Item = io::Result<String>>,
) {
    let Some(secret) = prompt(input, "Enter admin password: ") else {
        return;
    };

    if !gate.authorize(&secret) {
        render::print_message(&CmdMessage::error("Access denied."));
        return;
    }

    render::print_players(registry.players());
}
