//! One-shot order: replay a list of cart steps, then check out.

use std::io::Write;

use cardapio_core::{CartEvent, CartSnapshot, CheckoutError, OrderMessage, OrderSession, Price};
use serde::Serialize;
use tracing::{debug, info};

use crate::config::CliConfig;
use crate::render::{render_event, render_snapshot};

/// A single cart operation given on the command line.
///
/// Written as `add:NAME=PRICE` or `remove:NAME`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Add { name: String, price: Price },
    Remove { name: String },
}

impl std::str::FromStr for Step {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(rest) = s.strip_prefix("add:") {
            let (name, price) = rest
                .rsplit_once('=')
                .ok_or_else(|| format!("expected add:NAME=PRICE, got '{s}'"))?;
            if name.is_empty() {
                return Err("item name cannot be empty".to_string());
            }
            let price = Price::parse(price).map_err(|e| e.to_string())?;
            return Ok(Self::Add {
                name: name.to_string(),
                price,
            });
        }

        if let Some(name) = s.strip_prefix("remove:") {
            return Ok(Self::Remove {
                name: name.to_string(),
            });
        }

        Err(format!("unknown step '{s}' (use add:NAME=PRICE or remove:NAME)"))
    }
}

/// Everything that happened during a one-shot order.
#[derive(Debug, Serialize)]
pub struct OrderReport {
    pub cart: CartSnapshot,
    pub events: Vec<CartEvent>,
    pub order: Option<OrderMessage>,
    pub url: Option<String>,
    #[serde(skip)]
    pub rejection: Option<CheckoutError>,
}

/// Apply `steps` in order, set the address, and attempt checkout.
#[must_use]
pub fn execute(steps: &[Step], address: &str, config: &CliConfig) -> OrderReport {
    let mut session = OrderSession::with_options(config.checkout);

    for step in steps {
        match step {
            Step::Add { name, price } => session.add_item(name, *price),
            Step::Remove { name } => {
                let outcome = session.remove_item(name);
                debug!(name, ?outcome, "Applied removal");
            }
        }
    }
    session.set_address(address);

    // Snapshot before checkout so a configured clear does not hide the order.
    let cart = session.snapshot();
    let (order, rejection) = match session.attempt_checkout() {
        Ok(order) => (Some(order), None),
        Err(reason) => (None, Some(reason)),
    };
    let url = order
        .as_ref()
        .map(|order| config.handoff.url_for(&order.text).to_string());

    OrderReport {
        cart,
        events: session.drain_events(),
        order,
        url,
        rejection,
    }
}

/// Run the `order` command.
///
/// # Errors
///
/// Returns an error if output fails or checkout is rejected.
pub fn run(
    steps: &[Step],
    address: &str,
    json: bool,
    config: &CliConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let report = execute(steps, address, config);
    let mut stdout = std::io::stdout().lock();

    if json {
        serde_json::to_writer_pretty(&mut stdout, &report)?;
        writeln!(stdout)?;
    } else {
        write!(stdout, "{}", render_snapshot(&report.cart))?;
        for text in report.events.iter().filter_map(render_event) {
            writeln!(stdout, "* {text}")?;
        }
        if let (Some(order), Some(url)) = (&report.order, &report.url) {
            writeln!(stdout, "\nPedido:\n{}\n", order.text)?;
            writeln!(stdout, "{url}")?;
        }
    }

    if let Some(reason) = report.rejection {
        return Err(reason.into());
    }

    info!("Order ready for delivery");
    Ok(())
}
