//! Payment plan section.

use bw_model::{ContentBlock, RenderedBlock};
use bw_richtext::escape_html;
use serde::Deserialize;
use serde_json::Value;

use crate::markup::render_rich_text;
use crate::registry::BlockRenderer;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PaymentPayload {
    title: String,
    product_id: String,
    amount: String,
    currency: String,
    description: String,
    items: Value,
}

fn currency_symbol(currency: &str) -> &'static str {
    match currency {
        "GBP" => "£",
        "USD" => "$",
        "EUR" => "€",
        _ => "",
    }
}

/// Renders `payment_block` blocks.
///
/// The plan card: title, description, rich-text inclusion list and the
/// monthly price. The product id rides along as a data attribute for the
/// checkout wiring downstream.
pub struct PaymentBlockRenderer;

impl PaymentBlockRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for PaymentBlockRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockRenderer for PaymentBlockRenderer {
    fn name(&self) -> &'static str {
        "payment_block"
    }

    fn render(&self, block: &ContentBlock) -> Option<RenderedBlock> {
        let payload: PaymentPayload = block.payload().ok()?;

        let amount = if payload.amount.is_empty() {
            "0.00"
        } else {
            &payload.amount
        };
        let currency = if payload.currency.is_empty() {
            "GBP"
        } else {
            &payload.currency
        };

        let mut html = String::from("<section class=\"payment-plan\"");
        if !payload.product_id.is_empty() {
            html.push_str(" data-product-id=\"");
            html.push_str(&escape_html(&payload.product_id));
            html.push('"');
        }
        html.push('>');

        if !payload.title.is_empty() {
            html.push_str("<h2>");
            html.push_str(&escape_html(&payload.title));
            html.push_str("</h2>");
        }
        if !payload.description.is_empty() {
            html.push_str("<p>");
            html.push_str(&escape_html(&payload.description));
            html.push_str("</p>");
        }

        let items = render_rich_text(Some(&payload.items));
        if !items.is_empty() {
            html.push_str("<div class=\"plan-items\">");
            html.push_str(&items);
            html.push_str("</div>");
        }

        html.push_str("<p class=\"plan-price\"><strong>");
        html.push_str(currency_symbol(currency));
        html.push_str(&escape_html(amount));
        html.push_str("</strong> per month</p></section>");

        Some(RenderedBlock::new(block.uid.clone(), html))
    }
}
