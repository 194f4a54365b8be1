//! Interactive session over stdin.
//!
//! Each line is one command; state lives until the input ends or `quit`.

use std::io::{self, BufRead, Write};

use cardapio_core::{OrderSession, Price, RemoveOutcome};
use chrono::Timelike;
use tracing::warn;

use crate::config::CliConfig;
use crate::render::{render_event, render_hours, render_snapshot};

const HELP: &str = "\
Commands:
  add <price> <name>   add one unit of an item
  remove <name>        remove one unit of an item
  address [text]       set the delivery address
  cart                 show the cart
  checkout             send the order
  clear                empty the cart
  hours                show whether the store is open
  help                 show this message
  quit                 leave
";

/// A parsed shell line.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Add { name: String, price: Price },
    Remove(String),
    Address(String),
    Cart,
    Checkout,
    Clear,
    Hours,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    let (verb, rest) = line.split_once(' ').unwrap_or((line, ""));
    let rest = rest.trim();

    match verb {
        "add" => {
            let (price, name) = rest
                .split_once(' ')
                .ok_or_else(|| "usage: add <price> <name>".to_string())?;
            let price = Price::parse(price).map_err(|e| e.to_string())?;
            let name = name.trim();
            if name.is_empty() {
                return Err("usage: add <price> <name>".to_string());
            }
            Ok(Command::Add {
                name: name.to_string(),
                price,
            })
        }
        "remove" if !rest.is_empty() => Ok(Command::Remove(rest.to_string())),
        "remove" => Err("usage: remove <name>".to_string()),
        "address" => Ok(Command::Address(rest.to_string())),
        "cart" => Ok(Command::Cart),
        "checkout" => Ok(Command::Checkout),
        "clear" => Ok(Command::Clear),
        "hours" => Ok(Command::Hours),
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(format!("unknown command '{other}' (try 'help')")),
    }
}

/// Drive a session from `input`, writing feedback to `output`.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run<R: BufRead, W: Write>(input: R, mut output: W, config: &CliConfig) -> io::Result<()> {
    let mut session = OrderSession::with_options(config.checkout);

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(message) => {
                warn!(line = %line, "Unrecognized shell input");
                writeln!(output, "! {message}")?;
                continue;
            }
        };

        match command {
            Command::Add { name, price } => session.add_item(&name, price),
            Command::Remove(name) => {
                if session.remove_item(&name) == RemoveOutcome::NotInCart {
                    writeln!(output, "({name} is not in the cart)")?;
                }
            }
            Command::Address(value) => session.set_address(&value),
            Command::Cart => write!(output, "{}", render_snapshot(&session.snapshot()))?,
            Command::Checkout => {
                if let Ok(order) = session.attempt_checkout() {
                    writeln!(output, "Pedido:\n{}\n", order.text)?;
                    writeln!(output, "{}", config.handoff.url_for(&order.text))?;
                }
            }
            Command::Clear => session.clear_cart(),
            Command::Hours => {
                let hour = chrono::Local::now().hour();
                writeln!(output, "{}", render_hours(&config.hours, hour))?;
            }
            Command::Help => write!(output, "{HELP}")?,
            Command::Quit => break,
        }

        for event in session.drain_events() {
            if let Some(text) = render_event(&event) {
                writeln!(output, "* {text}")?;
            }
        }
        if session.address().is_flagged() {
            writeln!(output, "! address required")?;
        }
    }

    output.flush()
}
