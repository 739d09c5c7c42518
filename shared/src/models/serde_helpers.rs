//! Serde helpers for loosely typed storefront input

use serde::Deserializer;

/// Deserialize an optional price that may arrive as a JSON number or a
/// numeric string (`4.5`, `"4.50"`). `null` and a missing key both give `None`.
///
/// Use together with `#[serde(default)]`.
pub fn flexible_price<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    struct PriceVisitor;

    impl<'de> Visitor<'de> for PriceVisitor {
        type Value = Option<f64>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a number or a numeric string")
        }

        fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
            if value.is_finite() {
                Ok(Some(value))
            } else {
                Err(E::custom("price must be finite"))
            }
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
            Ok(Some(value as f64))
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
            Ok(Some(value as f64))
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            let parsed: f64 = value
                .trim()
                .parse()
                .map_err(|_| E::custom(format!("invalid price: {value}")))?;
            self.visit_f64(parsed)
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }
    }

    deserializer.deserialize_any(PriceVisitor)
}
