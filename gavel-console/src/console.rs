use std::sync::Arc;

use dashmap::DashMap;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info, warn};

use gavel_commands::moderation::login::screen_login;
use gavel_core::{CommandSender, Data, PlayerDirectory};
use gavel_utils::formatting::strip_color;

const GENERIC_FAILURE: &str = "An internal error occurred while running this command.";

/// The server operator typing into stdin.
pub struct ConsoleSender;

impl CommandSender for ConsoleSender {
    fn name(&self) -> &str {
        "CONSOLE"
    }

    fn is_console(&self) -> bool {
        true
    }

    fn has_permission(&self, _node: &str) -> bool {
        true
    }

    fn send_message(&self, message: &str) {
        println!("{}", strip_color(message));
    }
}

/// Connected players, keyed case-insensitively.
#[derive(Debug, Default)]
pub struct OnlinePlayers {
    players: DashMap<String, String>,
}

impl OnlinePlayers {
    pub fn join(&self, name: &str) {
        self.players.insert(name.to_lowercase(), name.to_owned());
    }

    pub fn quit(&self, name: &str) -> bool {
        self.players.remove(&name.to_lowercase()).is_some()
    }
}

impl PlayerDirectory for OnlinePlayers {
    fn online_players(&self) -> Vec<String> {
        let mut names: Vec<String> = self.players.iter().map(|entry| entry.value().clone()).collect();
        names.sort_unstable();
        names
    }

    fn kick(&self, name: &str, message: &str) -> bool {
        let Some((_, name)) = self.players.remove(&name.to_lowercase()) else {
            return false;
        };
        info!(player = %name, message = %strip_color(message), "player kicked");
        true
    }
}

/// One parsed console line: a label and its arguments.
#[derive(Debug, PartialEq, Eq)]
pub struct ConsoleLine {
    pub label: String,
    pub args: Vec<String>,
}

/// Split a console line on whitespace. A leading `/` is optional.
///
/// With `keep_trailing`, a line ending in whitespace gets an empty last argument,
/// which is what tab-completion needs to suggest the next argument.
pub fn split_line(line: &str, keep_trailing: bool) -> Option<ConsoleLine> {
    let trimmed = line.trim_start();
    let trimmed = trimmed.strip_prefix('/').unwrap_or(trimmed);

    let mut parts = trimmed.split_whitespace().map(str::to_owned);
    let label = parts.next()?;
    let mut args: Vec<String> = parts.collect();

    if keep_trailing && trimmed.ends_with(char::is_whitespace) {
        args.push(String::new());
    }

    Some(ConsoleLine { label, args })
}

/// Run the login screen for `name` and mark them online if they are let in.
pub async fn join(data: &Data, players: &OnlinePlayers, name: &str) {
    match screen_login(data, name).await {
        Ok(None) => {
            players.join(name);
            info!(player = name, "player joined");
        }
        Ok(Some(screen)) => {
            info!(player = name, screen = %strip_color(&screen), "login refused");
        }
        Err(error) => {
            error!(?error, player = name, "login screening failed; refusing connection");
        }
    }
}

/// Read commands from stdin until `stop` or end of input.
pub async fn run(data: &Data, players: Arc<OnlinePlayers>) -> anyhow::Result<()> {
    let sender = ConsoleSender;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    info!("Console ready. Type \"help\" for a list of commands.");

    while let Some(line) = lines.next_line().await? {
        let Some(ConsoleLine { label, args }) = split_line(&line, false) else {
            continue;
        };

        match label.to_ascii_lowercase().as_str() {
            "stop" | "exit" => break,
            "help" => print_help(&sender),
            "list" => {
                let online = players.online_players();
                sender.send_message(&format!("{} online: {}", online.len(), online.join(", ")));
            }
            "join" => match args.first() {
                Some(name) => join(data, &players, name).await,
                None => sender.send_message("Usage: join <player>"),
            },
            "quit" => match args.first() {
                Some(name) if players.quit(name) => info!(player = %name, "player left"),
                Some(name) => sender.send_message(&format!("{} is not online.", name)),
                None => sender.send_message("Usage: quit <player>"),
            },
            "complete" => {
                let args = split_line(&line, true).map(|parsed| parsed.args).unwrap_or_default();
                match args.split_first() {
                    Some((label, rest)) if !label.is_empty() => {
                        let suggestions = gavel_commands::complete(data, &sender, label, rest);
                        sender.send_message(&suggestions.join(" "));
                    }
                    _ => sender.send_message("Usage: complete <command> [args...]"),
                }
            }
            _ => match gavel_commands::execute(data, &sender, &label, &args).await {
                Ok(true) => {}
                Ok(false) => {
                    warn!(label = %label, "unknown command");
                    sender.send_message("Unknown command. Type \"help\" for help.");
                }
                Err(error) => {
                    error!(?error, label = %label, "command error");
                    sender.send_message(GENERIC_FAILURE);
                }
            },
        }
    }

    info!("Console closed.");
    Ok(())
}

fn print_help(sender: &ConsoleSender) {
    for command in gavel_commands::COMMANDS {
        sender.send_message(&format!("{} - {}", command.usage, command.desc));
    }
    sender.send_message("join <player> - simulate a player connecting");
    sender.send_message("quit <player> - simulate a player leaving");
    sender.send_message("list - show online players");
    sender.send_message("complete <command> [args...] - show tab-completions");
    sender.send_message("stop - shut down");
}
