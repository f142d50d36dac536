//! Core data models for the financial companion

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

//
// ================= Enums =================
//

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Assistant,
}

/// Supported ticker symbols. Closed set; the presentation layer renders
/// `Ticker::ALL` as its picker.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Ticker {
    Aapl,
    Googl,
    Msft,
    Amzn,
    Meta,
    Tsla,
    Nvda,
}

impl Ticker {
    pub const ALL: [Ticker; 7] = [
        Ticker::Aapl,
        Ticker::Googl,
        Ticker::Msft,
        Ticker::Amzn,
        Ticker::Meta,
        Ticker::Tsla,
        Ticker::Nvda,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Ticker::Aapl => "AAPL",
            Ticker::Googl => "GOOGL",
            Ticker::Msft => "MSFT",
            Ticker::Amzn => "AMZN",
            Ticker::Meta => "META",
            Ticker::Tsla => "TSLA",
            Ticker::Nvda => "NVDA",
        }
    }
}

//
// ================= Message =================
//

/// A single conversational turn. Append-only once in the history; never
/// mutated or removed during a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: Uuid,
    pub sender: Sender,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl Message {
    pub fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender,
            text: text.into(),
            created_at: Utc::now(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Sender::User, text)
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(Sender::Assistant, text)
    }
}

//
// ================= Company Data =================
//

/// Structured financial snapshot for one ticker. Opaque record; no derived
/// fields, produced fresh on every selection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompanyDetails {
    pub industry: String,
    pub price: String,
    pub address: String,
    pub city: String,
    pub country: String,
    pub revenue: String,
    pub market_cap: String,
    pub website: String,
    pub pe_ratio: String,
    pub dividend_yield: String,
    pub beta: String,
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Sender::User => "user",
            Sender::Assistant => "assistant",
        };
        write!(f, "{}", s)
    }
}

impl fmt::Display for Ticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_ids_are_unique() {
        let a = Message::user("What is RSI?");
        let b = Message::user("What is RSI?");
        assert_ne!(a.id, b.id);
        assert_eq!(a.sender, Sender::User);
    }

    #[test]
    fn test_ticker_symbols() {
        assert_eq!(Ticker::Aapl.as_str(), "AAPL");
        assert_eq!(Ticker::Aapl.to_string(), "AAPL");
        assert_eq!(Ticker::ALL.len(), 7);
    }

    #[test]
    fn test_sender_serializes_lowercase() {
        let json = serde_json::to_string(&Sender::Assistant).unwrap();
        assert_eq!(json, "\"assistant\"");
    }

    #[test]
    fn test_company_details_deserialization() {
        let json = r#"{
            "industry": "Consumer Electronics",
            "price": "189.84",
            "address": "One Apple Park Way",
            "city": "Cupertino",
            "country": "United States",
            "revenue": "383.29B",
            "market_cap": "2.95T",
            "website": "https://www.apple.com",
            "pe_ratio": "29.53",
            "dividend_yield": "0.51%",
            "beta": "1.29"
        }"#;

        let details: CompanyDetails = serde_json::from_str(json).unwrap();
        assert_eq!(details.city, "Cupertino");
        assert_eq!(details.beta, "1.29");
    }
}
