// src/models/requests.rs

//! Request payloads for the mutation endpoints.
//!
//! Numeric fields accept either a JSON number or a quoted numeric string,
//! since admin form values frequently arrive stringly-typed.

use serde::{Deserialize, Serialize};

/// A numeric form field that may arrive as a JSON number or a string.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FormNumber {
  Num(f64),
  Text(String),
}

impl FormNumber {
  /// Parses to a float; `None` for non-numeric text, NaN and infinities.
  pub fn as_finite_f64(&self) -> Option<f64> {
    let value = match self {
      FormNumber::Num(n) => *n,
      FormNumber::Text(s) => s.trim().parse::<f64>().ok()?,
    };
    value.is_finite().then_some(value)
  }

  /// Parses to an integer; `None` for non-integral or non-numeric input.
  pub fn as_i64(&self) -> Option<i64> {
    match self {
      FormNumber::Num(n) => (n.fract() == 0.0 && n.is_finite()).then_some(*n as i64),
      FormNumber::Text(s) => s.trim().parse::<i64>().ok(),
    }
  }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryPayload {
  pub name: Option<String>,
  pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductPayload {
  pub name: Option<String>,
  pub description: Option<String>,
  pub price: Option<FormNumber>,
  pub category_id: Option<String>,
  pub stock: Option<FormNumber>,
  pub image_url: Option<String>,
}
