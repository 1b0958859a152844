//! # Price Quote
//!
//! Outcome of a price request and how it is rendered.

use std::fmt;

use crate::error::PricingError;

/// Shown instead of a price when the guard rejects a request.
pub const RARE_DIAMOND_MESSAGE: &str =
    "This is a rare diamond, our model cannot predict the price accurately.";

/// Which guard clause tripped. The limit is carried for reporting.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Rejection {
    CaratAboveLimit { carat: f64, limit: f64 },
    VolumeAboveLimit { volume: f64, limit: f64 },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::CaratAboveLimit { carat, limit } => {
                write!(f, "carat {carat} exceeds {limit}")
            }
            Rejection::VolumeAboveLimit { volume, limit } => {
                write!(f, "volume {volume} mm³ exceeds {limit} mm³")
            }
        }
    }
}

/// A predicted price in both currencies.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PriceQuote {
    /// Price in US dollars, as predicted by the model.
    pub price_usd: f64,
    /// Price in Singapore dollars.
    pub price_sgd: f64,
}

impl PriceQuote {
    /// `("USD", "$1,234.57")` and `("SGD", ...)`, in that order.
    pub fn display_pairs(&self) -> [(&'static str, String); 2] {
        [
            ("USD", format_money(self.price_usd)),
            ("SGD", format_money(self.price_sgd)),
        ]
    }
}

impl fmt::Display for PriceQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [(usd_label, usd), (sgd_label, sgd)] = self.display_pairs();
        write!(f, "{usd_label}: {usd}\n{sgd_label}: {sgd}")
    }
}

/// Terminal state of a request.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PredictionResult {
    /// The guard blocked inference; the model was not invoked.
    Rejected(Rejection),
    Priced(PriceQuote),
}

impl PredictionResult {
    pub fn is_rejected(&self) -> bool {
        matches!(self, PredictionResult::Rejected(_))
    }

    pub fn quote(&self) -> Option<&PriceQuote> {
        match self {
            PredictionResult::Priced(quote) => Some(quote),
            PredictionResult::Rejected(_) => None,
        }
    }

    /// Turns a rejection into [`PricingError::OutOfDistributionRejected`].
    pub fn into_quote(self) -> Result<PriceQuote, PricingError> {
        match self {
            PredictionResult::Priced(quote) => Ok(quote),
            PredictionResult::Rejected(rejection) => {
                Err(PricingError::OutOfDistributionRejected(rejection))
            }
        }
    }
}

/// Renders an amount as `$` plus a comma grouped, two decimal number.
///
/// The sign follows the dollar sign (`$-12.00`).
pub fn format_money(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (idx, digit) in whole.chars().enumerate() {
        if idx > 0 && (whole.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    format!("${sign}{grouped}.{cents}")
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
