// SPDX-License-Identifier: PMPL-1.0-or-later

//! Donation section: transparency text, cost breakdown and the three
//! donation channels (bank transfer, PayPal, cash drop).
//!
//! A channel panel is shown only when its `enabled` flag is set in the
//! config document; populated details alone never reveal it.

use super::RenderContext;
use crate::locale::Locale;
use crate::types::{non_empty, Amount, CostRow};
use crate::view::{ids, Element, PagePatch};

pub fn render(ctx: &RenderContext, patch: &mut PagePatch) {
    let donate = ctx.content.donate.as_ref();
    let channels = ctx.config.donation.as_ref();
    let ui = ctx.ui();

    patch.set_hidden(ids::DONATE, donate.is_none() && channels.is_none());

    patch.set_text(ids::DONATE_TITLE, ui.get_or("titles.donate", ""));
    patch.set_text(
        ids::DONATE_TRANSPARENCY,
        donate
            .and_then(|d| d.transparency.clone())
            .unwrap_or_default(),
    );
    let rows = donate.map(|d| d.cost_breakdown.as_slice()).unwrap_or(&[]);
    patch.replace_children(
        ids::DONATE_BREAKDOWN,
        rows.iter().map(|row| breakdown_item(row, ctx.locale)),
    );

    // Bank transfer
    match channels.and_then(|c| c.bank.as_ref()).filter(|b| b.enabled) {
        Some(bank) => {
            patch.set_hidden(ids::BANK, false);
            patch.set_text(ids::BANK_TITLE, ui.get_or("donate.bankTitle", ""));
            for (key, id) in [
                ("donate.bankAccountHolderLabel", ids::BANK_ACCOUNT_HOLDER_LABEL),
                ("donate.bankIbanLabel", ids::BANK_IBAN_LABEL),
                ("donate.bankReferenceLabel", ids::BANK_REFERENCE_LABEL),
            ] {
                patch.set_text(id, format!("{} ", ui.get_or(key, "")));
            }
            patch.set_text(ids::BANK_ACCOUNT_NAME, bank.account_name.clone().unwrap_or_default());
            patch.set_text(ids::BANK_IBAN, bank.iban.clone().unwrap_or_default());
            patch.set_text(ids::BANK_REFERENCE, bank.reference.clone().unwrap_or_default());
        }
        None => patch.set_hidden(ids::BANK, true),
    }

    // PayPal
    match channels.and_then(|c| c.paypal.as_ref()).filter(|p| p.enabled) {
        Some(paypal) => {
            patch.set_hidden(ids::PAYPAL, false);
            patch.set_text(ids::PAYPAL_TITLE, ui.get_or("donate.paypalTitle", ""));
            patch.set_attr(ids::PAYPAL_URL, "href", non_empty(&paypal.url).unwrap_or("#"));
            patch.set_text(ids::PAYPAL_URL, ui.get_or("donate.paypalCta", ""));
            let note = donate
                .and_then(|d| non_empty(&d.paypal_note))
                .or_else(|| non_empty(&paypal.note))
                .unwrap_or("");
            patch.set_text(ids::PAYPAL_NOTE, note);
        }
        None => patch.set_hidden(ids::PAYPAL, true),
    }

    // Cash drop
    match channels.and_then(|c| c.cash_drop.as_ref()).filter(|c| c.enabled) {
        Some(cash) => {
            patch.set_hidden(ids::CASH, false);
            patch.set_text(ids::CASH_TITLE, ui.get_or("donate.cashTitle", ""));
            let description = donate
                .and_then(|d| non_empty(&d.cash_description))
                .or_else(|| non_empty(&cash.description))
                .unwrap_or("");
            patch.set_text(ids::CASH_DESC, description);
            patch.set_text(ids::CASH_ADDRESS, cash.address.clone().unwrap_or_default());
        }
        None => patch.set_hidden(ids::CASH, true),
    }
}

fn breakdown_item(row: &CostRow, locale: &Locale) -> Element {
    let amount = match &row.amount {
        Amount::Euros(value) => format_euros(*value, locale),
        Amount::Text(text) => text.clone(),
    };
    Element::new("li")
        .child(Element::new("span").text(row.item.clone()))
        .child(Element::new("span").text(amount))
}

/// Whole-euro amount in the locale's notation: `€1,500` for English,
/// `1.500 €` (non-breaking space) for everything else.
pub fn format_euros(amount: f64, locale: &Locale) -> String {
    let rounded = amount.round() as i64;
    let sign = if rounded < 0 { "-" } else { "" };
    if locale.code() == "en" {
        format!("{}€{}", sign, group_thousands(rounded.unsigned_abs(), ','))
    } else {
        format!("{}{}\u{a0}€", sign, group_thousands(rounded.unsigned_abs(), '.'))
    }
}

fn group_thousands(value: u64, separator: char) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}
