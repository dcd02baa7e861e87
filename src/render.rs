/// Order history rendering
///
/// Pure function from an ordered sequence of orders to an HTML fragment:
/// one card per order with the product name, timestamp, and the nested
/// credential list. Cards carry the `spotlight-card` class the pointer
/// effect binds to.
use crate::orders::Order;
use std::fmt::Write;

/// Escape text for safe interpolation into the fragment
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Render the order-history list
pub fn render_orders(orders: &[Order]) -> String {
    if orders.is_empty() {
        return "<p>No orders found.</p>".to_string();
    }

    let mut html = String::new();
    for order in orders {
        let mut accounts_html = String::from("<ul class=\"account-list\">");
        for account in &order.accounts {
            let _ = write!(
                accounts_html,
                "<li><span class=\"acc-user\">{}</span> : <span class=\"acc-pass\">{}</span></li>",
                escape_html(&account.username),
                escape_html(&account.password),
            );
        }
        accounts_html.push_str("</ul>");

        let _ = write!(
            html,
            concat!(
                "<div class=\"order-card spotlight-card\">",
                "<div class=\"order-header\">",
                "<h3>{}</h3>",
                "<span class=\"order-date\">{}</span>",
                "</div>",
                "<div class=\"order-body\">{}</div>",
                "</div>"
            ),
            escape_html(&order.product_name),
            escape_html(&order.created_at),
            accounts_html,
        );
    }

    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::AccountCredential;

    fn order(product: &str, accounts: Vec<AccountCredential>) -> Order {
        Order {
            id: 1,
            username: "alice".to_string(),
            product_name: product.to_string(),
            accounts,
            created_at: "2026-08-26 12:00:00".to_string(),
        }
    }

    #[test]
    fn empty_history_renders_placeholder() {
        assert_eq!(render_orders(&[]), "<p>No orders found.</p>");
    }

    #[test]
    fn renders_one_card_per_order() {
        let orders = vec![
            order("Starter Pack (1)", vec![]),
            order("Combo 5 Pack", vec![]),
        ];
        let html = render_orders(&orders);
        assert_eq!(html.matches("order-card spotlight-card").count(), 2);
        assert!(html.contains("<h3>Starter Pack (1)</h3>"));
        assert!(html.contains("<h3>Combo 5 Pack</h3>"));
        assert!(html.contains("2026-08-26 12:00:00"));
    }

    #[test]
    fn renders_credential_pairs() {
        let orders = vec![order(
            "Starter Pack (1)",
            vec![AccountCredential {
                username: "val_abc123de".to_string(),
                password: "s3cret!".to_string(),
            }],
        )];
        let html = render_orders(&orders);
        assert!(html.contains("<span class=\"acc-user\">val_abc123de</span>"));
        assert!(html.contains("<span class=\"acc-pass\">s3cret!</span>"));
    }

    #[test]
    fn escapes_markup_in_product_names() {
        let orders = vec![order("<script>alert(1)</script>", vec![])];
        let html = render_orders(&orders);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
