//! Donation screen

use crate::egui_app::effects::Effects;
use crate::egui_app::session::Session;
use crate::shared::error::FormError;

/// Card numbers are accepted only with exactly this many digits
pub const CARD_DIGITS: usize = 16;

#[derive(Debug, Default)]
pub struct DonateScreen {
    pub card_input: String,
    pub amount_input: String,
    pub name_input: String,
    pub date_input: String,
    pub message: String,
    pub donated: bool,
}

impl DonateScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn submit_form(&mut self, fx: &Effects, session: &Session) {
        let card = self.card_input.clone();
        let amount = self.amount_input.clone();
        let name = self.name_input.clone();
        let date = self.date_input.clone();
        self.submit(fx, session, &card, &amount, &name, &date);
    }

    /// Check the card and tell the administrator about the donation
    pub fn submit(
        &mut self,
        fx: &Effects,
        session: &Session,
        card: &str,
        amount: &str,
        name: &str,
        date: &str,
    ) {
        if let Err(e) = validate(card, amount, name, date) {
            self.message = e.to_string();
            return;
        }
        let amount = amount.trim();
        let notice = format!("{} has donated {} dollars", session.current_user(), amount);
        let users = fx.backend().users.clone();
        fx.detach(async move {
            users.add_notification(&notice).await;
        });

        self.card_input.clear();
        self.message = format!("Thank you for donating {} dollars!", amount);
        self.donated = true;
    }
}

fn validate(card: &str, amount: &str, name: &str, date: &str) -> Result<(), FormError> {
    let card = card.trim();
    if [card, amount, name, date].iter().any(|field| field.trim().is_empty()) {
        return Err(FormError::IncompleteDonation);
    }
    if card.len() != CARD_DIGITS || !card.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FormError::CardLength);
    }
    if !luhn_valid(card) {
        return Err(FormError::InvalidCard);
    }
    Ok(())
}

/// Luhn checksum over a string of decimal digits
pub fn luhn_valid(number: &str) -> bool {
    if number.is_empty() || !number.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    let sum: u32 = number
        .bytes()
        .rev()
        .enumerate()
        .map(|(i, b)| {
            let digit = u32::from(b - b'0');
            if i % 2 == 1 {
                let doubled = digit * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                digit
            }
        })
        .sum();
    sum % 10 == 0
}
