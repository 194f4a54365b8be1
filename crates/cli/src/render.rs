//! Text rendering for the terminal storefront.
//!
//! Locale formatting lives here rather than in the core: totals are shown
//! the pt-BR way (`R$ 1.234,56`), while cart rows reuse the fixed
//! two-decimal form the order message uses.

use cardapio_core::{CartEvent, CartSnapshot, CheckoutError, OpeningHours, Price};
use rust_decimal::RoundingStrategy;

/// Inline warning shown when checkout needs an address.
pub const ADDRESS_WARNING: &str = "Digite seu endereço completo!";

/// Format a price as Brazilian reais, e.g. `R$ 1.234,56`.
#[must_use]
pub fn format_brl(price: Price) -> String {
    let rounded = price
        .amount()
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    let text = format!("{:.2}", rounded.abs());
    let (units, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    format!("{sign}R$ {},{cents}", group_thousands(units))
}

/// Insert `.` between groups of three digits, counting from the right.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

/// Render the cart the way the cart modal lists it.
#[must_use]
pub fn render_snapshot(snapshot: &CartSnapshot) -> String {
    let mut out = String::new();

    if snapshot.is_empty() {
        out.push_str("Carrinho vazio\n");
    }

    for line in &snapshot.lines {
        out.push_str(&format!(
            "{}\n  Qtd: {}  R${}\n",
            line.name(),
            line.quantity(),
            line.unit_price().to_fixed_2()
        ));
    }

    out.push_str(&format!("Total: {}\n", format_brl(snapshot.total)));
    out.push_str(&format!("Itens: {}\n", snapshot.count));
    out
}

/// Render a notification, if it has a textual form.
///
/// `checkout-ready` returns `None`: the order itself is printed instead.
#[must_use]
pub fn render_event(event: &CartEvent) -> Option<String> {
    match event {
        CartEvent::CheckoutRejected {
            reason: CheckoutError::MissingAddress,
        } => Some(ADDRESS_WARNING.to_string()),
        _ => event.toast_text(),
    }
}

/// Render the open/closed badge.
#[must_use]
pub fn render_hours(hours: &OpeningHours, hour: u32) -> String {
    let status = if hours.contains(hour) {
        "Aberto"
    } else {
        "Fechado"
    };
    format!(
        "{status} (seg-dom {:02}:00 - {:02}:59, agora {hour:02}h)",
        hours.open(),
        hours.close()
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use cardapio_core::CartStore;

    use super::*;

    fn price(s: &str) -> Price {
        Price::parse(s).unwrap()
    }

    #[test]
    fn test_format_brl() {
        assert_eq!(format_brl(Price::ZERO), "R$ 0,00");
        assert_eq!(format_brl(price("5")), "R$ 5,00");
        assert_eq!(format_brl(price("65.5")), "R$ 65,50");
        assert_eq!(format_brl(price("1234.56")), "R$ 1.234,56");
        assert_eq!(format_brl(price("1234567")), "R$ 1.234.567,00");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("1"), "1");
        assert_eq!(group_thousands("123"), "123");
        assert_eq!(group_thousands("1234"), "1.234");
        assert_eq!(group_thousands("123456"), "123.456");
    }

    #[test]
    fn test_render_snapshot() {
        let mut cart = CartStore::new();
        cart.add_item("Pizza", price("30"));
        cart.add_item("Pizza", price("30"));
        cart.add_item("Suco", price("5"));

        let text = render_snapshot(&cart.snapshot());
        assert_eq!(
            text,
            "Pizza\n  Qtd: 2  R$30.00\nSuco\n  Qtd: 1  R$5.00\nTotal: R$ 65,00\nItens: 2\n"
        );
    }

    #[test]
    fn test_render_empty_snapshot() {
        let text = render_snapshot(&CartStore::new().snapshot());
        assert!(text.starts_with("Carrinho vazio\n"));
        assert!(text.contains("Total: R$ 0,00"));
    }

    #[test]
    fn test_render_event() {
        let missing = CartEvent::CheckoutRejected {
            reason: CheckoutError::MissingAddress,
        };
        assert_eq!(render_event(&missing).as_deref(), Some(ADDRESS_WARNING));

        let ready = CartEvent::CheckoutReady {
            message: "x".to_string(),
        };
        assert!(render_event(&ready).is_none());
    }

    #[test]
    fn test_render_hours() {
        let hours = OpeningHours::default();
        assert!(render_hours(&hours, 19).starts_with("Aberto"));
        assert!(render_hours(&hours, 9).starts_with("Fechado"));
    }
}
