//! Record shapes supplied by the surrounding persistence/API layer.
//!
//! The core never fetches these itself; it receives fully-loaded rows. All
//! monetary fields use lenient deserialization: a JSON number, a numeric
//! string, `null`, or an absent field all coerce to `0.0`, so a partially
//! filled month can still be aggregated and rendered.

use crate::error::Result;
use schemars::JsonSchema;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub enum PartnerType {
    #[schemars(description = "Partner contributing capital; share derives from invested amount")]
    Investment,

    #[schemars(description = "Partner contributing working time rather than capital")]
    Time,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Partner {
    #[schemars(description = "Display name, e.g. 'Jitender' or 'Sunil Ji'")]
    pub name: String,

    /// Fraction of net profit in [0, 1]. The sum of ratios across partners
    /// is not validated to equal 1; historical data does not guarantee it.
    #[serde(default, deserialize_with = "lenient_f64")]
    #[schemars(with = "f64")]
    pub ratio: f64,

    #[serde(default, deserialize_with = "lenient_f64")]
    #[schemars(with = "f64")]
    pub investment_amount: f64,

    pub partner_type: PartnerType,
}

/// One month of the profit-sharing ledger, keyed by a `Mon'YY` period label.
///
/// `net_profit` is expected to equal `gross_profit - total_fix_cost`, but
/// that invariant is the caller population's to uphold; the core consumes
/// the stored value as-is. Explicit per-partner amounts live in
/// `partner_shares`, keyed by the normalized share key (see
/// [`crate::partner::share_key`]); hand-entered historical values there may
/// legitimately diverge from a pure ratio split.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct MonthlySummary {
    #[schemars(description = "Period label in Mon'YY form, e.g. Feb'26")]
    pub period: String,

    #[serde(default, deserialize_with = "lenient_f64")]
    #[schemars(with = "f64")]
    pub quantity: f64,

    #[serde(default, deserialize_with = "lenient_f64")]
    #[schemars(with = "f64")]
    pub revenue: f64,

    #[serde(default, deserialize_with = "lenient_f64")]
    #[schemars(with = "f64")]
    pub gross_profit: f64,

    #[serde(default, deserialize_with = "lenient_f64")]
    #[schemars(with = "f64")]
    pub total_fix_cost: f64,

    #[serde(default, deserialize_with = "lenient_f64")]
    #[schemars(with = "f64")]
    pub net_profit: f64,

    #[serde(default)]
    #[schemars(
        description = "Explicit per-partner monetary shares keyed by normalized first-name token. A stored zero is treated the same as an absent entry."
    )]
    pub partner_shares: BTreeMap<String, f64>,
}

impl MonthlySummary {
    pub fn schema_as_json() -> std::result::Result<String, serde_json::Error> {
        let schema = schemars::schema_for!(MonthlySummary);
        serde_json::to_string_pretty(&schema)
    }
}

impl Partner {
    pub fn schema_as_json() -> std::result::Result<String, serde_json::Error> {
        let schema = schemars::schema_for!(Partner);
        serde_json::to_string_pretty(&schema)
    }
}

pub fn partners_from_json(json: &str) -> Result<Vec<Partner>> {
    Ok(serde_json::from_str(json)?)
}

pub fn monthly_summaries_from_json(json: &str) -> Result<Vec<MonthlySummary>> {
    Ok(serde_json::from_str(json)?)
}

/// Coerces numbers, numeric strings, and null to `f64`, defaulting to 0.0
/// on anything unparseable. Display screens must stay renderable under
/// partial data, so malformed input never surfaces as an error here.
pub(crate) fn lenient_f64<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    struct LenientF64;

    impl<'de> Visitor<'de> for LenientF64 {
        type Value = f64;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a number, numeric string, or null")
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<f64, E> {
            Ok(v)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<f64, E> {
            Ok(v as f64)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<f64, E> {
            Ok(v as f64)
        }

        fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<f64, E> {
            Ok(v.trim().parse().unwrap_or(0.0))
        }

        fn visit_unit<E: de::Error>(self) -> std::result::Result<f64, E> {
            Ok(0.0)
        }

        fn visit_none<E: de::Error>(self) -> std::result::Result<f64, E> {
            Ok(0.0)
        }

        fn visit_some<D2: Deserializer<'de>>(
            self,
            deserializer: D2,
        ) -> std::result::Result<f64, D2::Error> {
            deserializer.deserialize_any(LenientF64)
        }
    }

    deserializer.deserialize_any(LenientF64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lenient_numeric_fields() {
        let json = r#"{
            "period": "Feb'26",
            "quantity": null,
            "revenue": "12.5",
            "gross_profit": "not a number",
            "net_profit": 4200
        }"#;

        let summary: MonthlySummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.quantity, 0.0);
        assert_eq!(summary.revenue, 12.5);
        assert_eq!(summary.gross_profit, 0.0);
        assert_eq!(summary.total_fix_cost, 0.0);
        assert_eq!(summary.net_profit, 4200.0);
        assert!(summary.partner_shares.is_empty());
    }

    #[test]
    fn test_partner_round_trip() {
        let partner = Partner {
            name: "Jitender".to_string(),
            ratio: 0.4,
            investment_amount: 500000.0,
            partner_type: PartnerType::Investment,
        };

        let json = serde_json::to_string(&partner).unwrap();
        assert!(json.contains("Investment"));

        let back: Partner = serde_json::from_str(&json).unwrap();
        assert_eq!(back.name, "Jitender");
        assert_eq!(back.ratio, 0.4);
    }

    #[test]
    fn test_summaries_from_json() {
        let json = r#"[
            {"period": "Jan'26", "net_profit": 1000, "partner_shares": {"jitender": 450.0}},
            {"period": "Feb'26", "net_profit": 2000}
        ]"#;

        let summaries = monthly_summaries_from_json(json).unwrap();
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].partner_shares.get("jitender"), Some(&450.0));
    }

    #[test]
    fn test_schema_generation() {
        let schema = MonthlySummary::schema_as_json().unwrap();
        assert!(schema.contains("period"));
        assert!(schema.contains("partner_shares"));

        let schema = Partner::schema_as_json().unwrap();
        assert!(schema.contains("ratio"));
    }
}
