//! Small shared helpers: money display, timestamps, order codes

use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A monetary amount in whole rupees
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[serde(transparent)]
pub struct Money(pub u64);

impl Money {
    /// Creates a Money value from an amount in whole rupees
    pub fn new(amount: u64) -> Self {
        Self(amount)
    }

    /// Returns the raw amount in whole rupees
    pub fn amount(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rs. {}", self.0)
    }
}

impl From<u64> for Money {
    fn from(amount: u64) -> Self {
        Self(amount)
    }
}

/// Returns the current Unix timestamp in seconds
pub fn now_timestamp() -> u64 {
    Utc::now().timestamp() as u64
}

/// Generates a pseudo-random order code, e.g. "QB-483920"
pub fn generate_order_code() -> String {
    let mut rng = rand::thread_rng();
    format!("QB-{:06}", rng.gen_range(0..1_000_000u32))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_display() {
        assert_eq!(Money::new(500).to_string(), "Rs. 500");
        assert_eq!(Money::new(0).to_string(), "Rs. 0");
        assert_eq!(Money::from(1000).to_string(), "Rs. 1000");
    }

    #[test]
    fn test_order_code_format() {
        let code = generate_order_code();
        assert!(code.starts_with("QB-"));
        assert_eq!(code.len(), 9);
        assert!(code[3..].chars().all(|c| c.is_ascii_digit()));
    }
}
