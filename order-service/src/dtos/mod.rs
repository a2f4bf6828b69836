use serde::Deserialize;

/// Body of `POST /create-order`.
///
/// Every field is optional at the wire level so that a missing `amount`
/// reaches validation and is reported with the amount message.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateOrderRequest {
    /// Amount in major units (rupees).
    pub amount: Option<AmountInput>,
    pub activity: Option<String>,
    pub date: Option<String>,
    pub slots: Option<SlotsInput>,
}

/// `amount` arrives either as a JSON number or as numeric text.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AmountInput {
    Number(f64),
    Text(String),
}

impl AmountInput {
    /// Numeric value, if the input is convertible to one.
    pub fn to_number(&self) -> Option<f64> {
        match self {
            AmountInput::Number(n) => Some(*n),
            AmountInput::Text(s) => s.trim().parse::<f64>().ok(),
        }
    }
}

/// Booked slots: a list of labels or one pre-joined string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SlotsInput {
    Many(Vec<String>),
    One(String),
}

impl SlotsInput {
    pub fn joined(&self) -> String {
        match self {
            SlotsInput::Many(slots) => slots.join(","),
            SlotsInput::One(slot) => slot.clone(),
        }
    }
}
