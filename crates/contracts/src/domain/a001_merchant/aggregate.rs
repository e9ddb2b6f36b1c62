use crate::domain::common::AggregateId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор мерчанта (`m_<timestamp>` или внешний)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct MerchantId(pub String);

/// Accepts both `"m_1"` and `1`: older snapshots stored numeric ids.
impl<'de> Deserialize<'de> for MerchantId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(i64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => Self(s),
            RawId::Number(n) => Self(n.to_string()),
        })
    }
}

impl MerchantId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Id for a merchant created at `at`
    pub fn from_timestamp(at: DateTime<Utc>) -> Self {
        Self(format!("m_{}", at.timestamp_millis()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AggregateId for MerchantId {
    fn as_string(&self) -> String {
        self.0.clone()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err("Merchant id cannot be empty".into());
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl fmt::Display for MerchantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MerchantId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

// ============================================================================
// Enums
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MerchantStatus {
    #[default]
    Active,
    Paused,
    Blocked,
}

impl MerchantStatus {
    pub const ALL: [MerchantStatus; 3] = [Self::Active, Self::Paused, Self::Blocked];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Paused => "paused",
            Self::Blocked => "blocked",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Paused => "Paused",
            Self::Blocked => "Blocked",
        }
    }

    /// Badge variant used by the UI
    pub fn badge_variant(&self) -> &'static str {
        match self {
            Self::Active => "success",
            Self::Paused => "warning",
            Self::Blocked => "error",
        }
    }
}

impl FromStr for MerchantStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "paused" => Ok(Self::Paused),
            "blocked" => Ok(Self::Blocked),
            other => Err(format!("Unknown merchant status: {}", other)),
        }
    }
}

impl fmt::Display for MerchantStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MerchantRisk {
    #[default]
    Low,
    Medium,
    High,
}

impl MerchantRisk {
    pub const ALL: [MerchantRisk; 3] = [Self::Low, Self::Medium, Self::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    pub fn badge_variant(&self) -> &'static str {
        match self {
            Self::Low => "success",
            Self::Medium => "warning",
            Self::High => "error",
        }
    }
}

impl FromStr for MerchantRisk {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(format!("Unknown risk level: {}", other)),
        }
    }
}

impl fmt::Display for MerchantRisk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How worrying a chargeback ratio is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChargebackSeverity {
    Normal,
    Elevated,
    High,
}

impl ChargebackSeverity {
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio > 2.0 {
            Self::High
        } else if ratio > 1.0 {
            Self::Elevated
        } else {
            Self::Normal
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Normal => "text-success",
            Self::Elevated => "text-warning",
            Self::High => "text-error",
        }
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Мерчант
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Merchant {
    pub id: MerchantId,
    pub name: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub monthly_volume: f64,
    #[serde(default)]
    pub chargeback_ratio: f64,
    #[serde(default)]
    pub status: MerchantStatus,
    #[serde(default)]
    pub risk: MerchantRisk,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success_rate: Option<f64>,
    /// Legacy name of `chargeback_ratio`, only read by the stats aggregator
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chargeback_rate: Option<f64>,
}

impl Merchant {
    /// Merchant with default status/risk and no optional fields
    pub fn new(
        id: MerchantId,
        name: impl Into<String>,
        country: impl Into<String>,
        monthly_volume: f64,
        chargeback_ratio: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            country: country.into(),
            monthly_volume,
            chargeback_ratio,
            status: MerchantStatus::default(),
            risk: MerchantRisk::default(),
            description: None,
            success_rate: None,
            chargeback_rate: None,
        }
    }

    pub fn with_status(mut self, status: MerchantStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_risk(mut self, risk: MerchantRisk) -> Self {
        self.risk = risk;
        self
    }

    pub fn with_success_rate(mut self, rate: f64) -> Self {
        self.success_rate = Some(rate);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Chargeback value used for aggregation: the ratio, or the legacy rate
    /// when the ratio is zero, or zero.
    pub fn effective_chargeback(&self) -> f64 {
        if self.chargeback_ratio != 0.0 {
            self.chargeback_ratio
        } else {
            self.chargeback_rate.unwrap_or(0.0)
        }
    }

    pub fn chargeback_severity(&self) -> ChargebackSeverity {
        ChargebackSeverity::from_ratio(self.chargeback_ratio)
    }

    /// Shallow merge of the fields set in `patch`
    pub fn apply(&mut self, patch: &MerchantPatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(country) = &patch.country {
            self.country = country.clone();
        }
        if let Some(volume) = patch.monthly_volume {
            self.monthly_volume = volume;
        }
        if let Some(ratio) = patch.chargeback_ratio {
            self.chargeback_ratio = ratio;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(risk) = patch.risk {
            self.risk = risk;
        }
        if let Some(description) = &patch.description {
            self.description = description.clone();
        }
        if let Some(rate) = patch.success_rate {
            self.success_rate = Some(rate);
        }
    }
}

/// Partial update: every `Some` field replaces the merchant's value.
/// `description: Some(None)` clears the description.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MerchantPatch {
    pub name: Option<String>,
    pub country: Option<String>,
    pub monthly_volume: Option<f64>,
    pub chargeback_ratio: Option<f64>,
    pub status: Option<MerchantStatus>,
    pub risk: Option<MerchantRisk>,
    pub description: Option<Option<String>>,
    pub success_rate: Option<f64>,
}

impl MerchantPatch {
    pub fn status(status: MerchantStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn acme() -> Merchant {
        Merchant::new("m_1".into(), "Acme", "US", 5000.0, 0.4)
            .with_success_rate(97.5)
            .with_description("Hardware")
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(acme()).unwrap();
        assert_eq!(json["id"], "m_1");
        assert_eq!(json["monthlyVolume"], 5000.0);
        assert_eq!(json["chargebackRatio"], 0.4);
        assert_eq!(json["status"], "active");
        assert_eq!(json["risk"], "low");
        assert_eq!(json["successRate"], 97.5);
        assert!(json.get("chargebackRate").is_none());
    }

    #[test]
    fn test_defaults_when_fields_missing() {
        let m: Merchant = serde_json::from_str(r#"{"id":"x","name":"Minimal"}"#).unwrap();
        assert_eq!(m.status, MerchantStatus::Active);
        assert_eq!(m.risk, MerchantRisk::Low);
        assert_eq!(m.monthly_volume, 0.0);
        assert!(m.description.is_none());
    }

    #[test]
    fn test_effective_chargeback_falls_back_to_legacy() {
        let m: Merchant =
            serde_json::from_str(r#"{"id":"x","name":"Old","chargebackRate":1.5}"#).unwrap();
        assert_eq!(m.effective_chargeback(), 1.5);
        assert_eq!(acme().effective_chargeback(), 0.4);

        let none: Merchant = serde_json::from_str(r#"{"id":"y","name":"None"}"#).unwrap();
        assert_eq!(none.effective_chargeback(), 0.0);
    }

    #[test]
    fn test_apply_patch_touches_only_given_fields() {
        let mut m = acme();
        m.apply(&MerchantPatch::status(MerchantStatus::Blocked));

        let mut expected = acme();
        expected.status = MerchantStatus::Blocked;
        assert_eq!(m, expected);
    }

    #[test]
    fn test_apply_patch_clears_description() {
        let mut m = acme();
        m.apply(&MerchantPatch {
            description: Some(None),
            ..Default::default()
        });
        assert!(m.description.is_none());
    }

    #[test]
    fn test_enum_parsing() {
        assert_eq!("paused".parse::<MerchantStatus>(), Ok(MerchantStatus::Paused));
        assert!("Paused".parse::<MerchantStatus>().is_err());
        assert_eq!("high".parse::<MerchantRisk>(), Ok(MerchantRisk::High));
        assert!("extreme".parse::<MerchantRisk>().is_err());
    }

    #[test]
    fn test_chargeback_severity() {
        assert_eq!(ChargebackSeverity::from_ratio(0.5), ChargebackSeverity::Normal);
        assert_eq!(ChargebackSeverity::from_ratio(1.0), ChargebackSeverity::Normal);
        assert_eq!(ChargebackSeverity::from_ratio(1.5), ChargebackSeverity::Elevated);
        assert_eq!(ChargebackSeverity::from_ratio(2.5), ChargebackSeverity::High);
    }

    #[test]
    fn test_numeric_id_is_accepted() {
        let m: Merchant = serde_json::from_str(r#"{"id":2,"name":"Beta"}"#).unwrap();
        assert_eq!(m.id, MerchantId::new("2"));
    }

    #[test]
    fn test_id_from_timestamp() {
        let at = DateTime::from_timestamp_millis(1_700_000_000_123).unwrap();
        assert_eq!(MerchantId::from_timestamp(at).as_str(), "m_1700000000123");
        assert!(MerchantId::from_string("  ").is_err());
    }
}
