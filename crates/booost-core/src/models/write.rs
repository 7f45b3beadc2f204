use rust_decimal::{prelude::FromPrimitive, Decimal};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::parse_leading_decimal;

/// Accepts a number or a numeric-looking string; anything unreadable becomes `None`.
fn lenient_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Value>::deserialize(deserializer).map(|value| match value {
        Some(Value::Number(n)) => json_decimal(&n),
        Some(Value::String(s)) => parse_leading_decimal(&s),
        _ => None,
    })
}

fn json_decimal(n: &serde_json::Number) -> Option<Decimal> {
    if let Some(i) = n.as_i64() {
        Some(Decimal::from(i))
    } else if let Some(u) = n.as_u64() {
        Some(Decimal::from(u))
    } else {
        n.as_f64().and_then(Decimal::from_f64)
    }
}

/// Accepts a string, number or bool as text; null and other shapes become `None`.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Value>::deserialize(deserializer).map(|value| match value {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    })
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StylistData {
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub experience: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub specialization: Option<String>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub rating: Option<Decimal>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionData {
    #[serde(default, deserialize_with = "lenient_text")]
    pub stylist_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub stylist_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub client_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub service_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub amount: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub duration: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub rating: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub payment_status: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub payment_method: Option<String>,
}

impl SessionData {
    /// The payment recorded alongside this session.
    pub fn payment(&self, session_id: Option<&str>) -> PaymentData {
        PaymentData {
            stylist_id: self.stylist_id.clone(),
            client_name: self.client_name.clone(),
            amount: self.amount,
            payment_status: self.payment_status.clone(),
            payment_method: self.payment_method.clone(),
            location: self.location.clone(),
            session_id: session_id.map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentData {
    #[serde(default, deserialize_with = "lenient_text")]
    pub stylist_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub client_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub amount: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub payment_status: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub payment_method: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub session_id: Option<String>,
}
