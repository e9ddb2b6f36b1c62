//! Add/edit form model and the status/risk editor of the detail view.

use super::aggregate::{Merchant, MerchantId, MerchantPatch, MerchantRisk, MerchantStatus};
use chrono::{DateTime, Utc};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MerchantFormField {
    Name,
    Country,
    MonthlyVolume,
    ChargebackRatio,
    Status,
    Risk,
    Description,
}

impl MerchantFormField {
    pub const ALL: [MerchantFormField; 7] = [
        Self::Name,
        Self::Country,
        Self::MonthlyVolume,
        Self::ChargebackRatio,
        Self::Status,
        Self::Risk,
        Self::Description,
    ];
}

/// Field → message for every field that failed validation
pub type FieldErrors = BTreeMap<MerchantFormField, &'static str>;

/// Raw form values as typed by the user
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MerchantForm {
    /// Set when editing an existing merchant
    pub id: Option<MerchantId>,
    pub name: String,
    pub country: String,
    pub monthly_volume: String,
    pub chargeback_ratio: String,
    pub status: MerchantStatus,
    pub risk: MerchantRisk,
    pub description: String,
    touched: BTreeSet<MerchantFormField>,
}

fn parse_number(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

impl MerchantForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_merchant(m: &Merchant) -> Self {
        Self {
            id: Some(m.id.clone()),
            name: m.name.clone(),
            country: m.country.clone(),
            monthly_volume: m.monthly_volume.to_string(),
            chargeback_ratio: m.chargeback_ratio.to_string(),
            status: m.status,
            risk: m.risk,
            description: m.description.clone().unwrap_or_default(),
            touched: BTreeSet::new(),
        }
    }

    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    /// Message for `field`, or `None` when the value is acceptable
    pub fn validate_field(&self, field: MerchantFormField) -> Option<&'static str> {
        match field {
            MerchantFormField::Name => {
                let name = self.name.trim();
                if name.is_empty() {
                    Some("Name is required")
                } else if name.chars().count() < 3 {
                    Some("Name must be at least 3 characters")
                } else {
                    None
                }
            }
            MerchantFormField::Country => {
                if self.country.trim().is_empty() {
                    Some("Country is required")
                } else {
                    None
                }
            }
            MerchantFormField::MonthlyVolume => {
                if self.monthly_volume.trim().is_empty() {
                    return Some("Monthly volume is required");
                }
                match parse_number(&self.monthly_volume) {
                    Some(v) if v > 0.0 => None,
                    _ => Some("Monthly volume must be greater than 0"),
                }
            }
            MerchantFormField::ChargebackRatio => {
                if self.chargeback_ratio.trim().is_empty() {
                    return Some("Chargeback ratio is required");
                }
                match parse_number(&self.chargeback_ratio) {
                    Some(v) if (0.0..=100.0).contains(&v) => None,
                    _ => Some("Chargeback ratio must be between 0–100"),
                }
            }
            MerchantFormField::Status | MerchantFormField::Risk | MerchantFormField::Description => {
                None
            }
        }
    }

    pub fn validate(&self) -> FieldErrors {
        MerchantFormField::ALL
            .iter()
            .filter_map(|field| self.validate_field(*field).map(|msg| (*field, msg)))
            .collect()
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// Field lost focus: from now on its error is shown
    pub fn touch(&mut self, field: MerchantFormField) {
        self.touched.insert(field);
    }

    pub fn touch_all(&mut self) {
        self.touched.extend(MerchantFormField::ALL);
    }

    pub fn is_touched(&self, field: MerchantFormField) -> bool {
        self.touched.contains(&field)
    }

    /// Error to display next to `field`; untouched fields show nothing
    pub fn visible_error(&self, field: MerchantFormField) -> Option<&'static str> {
        if self.is_touched(field) {
            self.validate_field(field)
        } else {
            None
        }
    }

    /// Builds the merchant to store. A new merchant gets an `m_<millis>` id
    /// from `now`; an edited one keeps its id. Fields not on the form
    /// (success rate, legacy chargeback) are taken from `existing`.
    pub fn to_merchant(
        &self,
        existing: Option<&Merchant>,
        now: DateTime<Utc>,
    ) -> Result<Merchant, FieldErrors> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(errors);
        }

        let id = self
            .id
            .clone()
            .unwrap_or_else(|| MerchantId::from_timestamp(now));
        let description = self.description.trim();

        Ok(Merchant {
            id,
            name: self.name.trim().to_string(),
            country: self.country.trim().to_string(),
            monthly_volume: parse_number(&self.monthly_volume).unwrap_or_default(),
            chargeback_ratio: parse_number(&self.chargeback_ratio).unwrap_or_default(),
            status: self.status,
            risk: self.risk,
            description: (!description.is_empty()).then(|| description.to_string()),
            success_rate: existing.and_then(|m| m.success_rate),
            chargeback_rate: existing.and_then(|m| m.chargeback_rate),
        })
    }
}

/// Outcome of a status change in the detail editor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusChange {
    Applied,
    /// Activating a high-risk merchant needs an explicit confirmation
    NeedsConfirmation,
}

/// Status/risk editor of the merchant detail view
#[derive(Debug, Clone, PartialEq)]
pub struct StatusRiskEdit {
    pub status: MerchantStatus,
    pub risk: MerchantRisk,
    pending_activation: bool,
}

impl StatusRiskEdit {
    pub fn from_merchant(m: &Merchant) -> Self {
        Self {
            status: m.status,
            risk: m.risk,
            pending_activation: false,
        }
    }

    pub fn set_status(&mut self, status: MerchantStatus) -> StatusChange {
        if status == MerchantStatus::Active && self.risk == MerchantRisk::High {
            self.pending_activation = true;
            return StatusChange::NeedsConfirmation;
        }
        self.status = status;
        StatusChange::Applied
    }

    pub fn set_risk(&mut self, risk: MerchantRisk) {
        self.risk = risk;
    }

    pub fn is_pending_activation(&self) -> bool {
        self.pending_activation
    }

    pub fn confirm_activation(&mut self) {
        if self.pending_activation {
            self.status = MerchantStatus::Active;
            self.pending_activation = false;
        }
    }

    pub fn cancel_activation(&mut self) {
        self.pending_activation = false;
    }

    pub fn to_patch(&self) -> MerchantPatch {
        MerchantPatch {
            status: Some(self.status),
            risk: Some(self.risk),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> MerchantForm {
        MerchantForm {
            name: "  Acme  ".into(),
            country: "US".into(),
            monthly_volume: "5000".into(),
            chargeback_ratio: "0.8".into(),
            ..Default::default()
        }
    }

    fn now() -> DateTime<Utc> {
        DateTime::from_timestamp_millis(1_700_000_000_000).unwrap()
    }

    #[test]
    fn test_empty_form_errors() {
        let errors = MerchantForm::new().validate();
        assert_eq!(errors.get(&MerchantFormField::Name), Some(&"Name is required"));
        assert_eq!(errors.get(&MerchantFormField::Country), Some(&"Country is required"));
        assert_eq!(
            errors.get(&MerchantFormField::MonthlyVolume),
            Some(&"Monthly volume is required")
        );
        assert_eq!(
            errors.get(&MerchantFormField::ChargebackRatio),
            Some(&"Chargeback ratio is required")
        );
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn test_range_errors() {
        let mut form = filled();
        form.name = " ab ".into();
        form.monthly_volume = "0".into();
        form.chargeback_ratio = "100.5".into();
        let errors = form.validate();
        assert_eq!(
            errors.get(&MerchantFormField::Name),
            Some(&"Name must be at least 3 characters")
        );
        assert_eq!(
            errors.get(&MerchantFormField::MonthlyVolume),
            Some(&"Monthly volume must be greater than 0")
        );
        assert_eq!(
            errors.get(&MerchantFormField::ChargebackRatio),
            Some(&"Chargeback ratio must be between 0–100")
        );

        form.monthly_volume = "lots".into();
        assert!(form.validate_field(MerchantFormField::MonthlyVolume).is_some());
        form.chargeback_ratio = "0".into();
        assert!(form.validate_field(MerchantFormField::ChargebackRatio).is_none());
    }

    #[test]
    fn test_touched_controls_visibility() {
        let mut form = MerchantForm::new();
        assert!(form.visible_error(MerchantFormField::Name).is_none());
        form.touch(MerchantFormField::Name);
        assert_eq!(form.visible_error(MerchantFormField::Name), Some("Name is required"));
        assert!(form.visible_error(MerchantFormField::Country).is_none());
        form.touch_all();
        assert!(form.visible_error(MerchantFormField::Country).is_some());
    }

    #[test]
    fn test_new_merchant_gets_timestamp_id() {
        let merchant = filled().to_merchant(None, now()).unwrap();
        assert_eq!(merchant.id.as_str(), "m_1700000000000");
        assert_eq!(merchant.name, "Acme");
        assert_eq!(merchant.monthly_volume, 5000.0);
        assert_eq!(merchant.chargeback_ratio, 0.8);
        assert_eq!(merchant.status, MerchantStatus::Active);
        assert_eq!(merchant.risk, MerchantRisk::Low);
        assert!(merchant.description.is_none());
    }

    #[test]
    fn test_edit_keeps_id_and_hidden_fields() {
        let existing = Merchant::new(MerchantId::new("m_42"), "Acme", "US", 10.0, 1.0)
            .with_success_rate(98.0);
        let mut form = MerchantForm::from_merchant(&existing);
        assert!(form.is_edit());
        form.monthly_volume = "25".into();
        form.description = "Updated".into();

        let merchant = form.to_merchant(Some(&existing), now()).unwrap();
        assert_eq!(merchant.id, existing.id);
        assert_eq!(merchant.monthly_volume, 25.0);
        assert_eq!(merchant.success_rate, Some(98.0));
        assert_eq!(merchant.description.as_deref(), Some("Updated"));
    }

    #[test]
    fn test_invalid_form_does_not_build() {
        let mut form = filled();
        form.country = "   ".into();
        let errors = form.to_merchant(None, now()).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors.contains_key(&MerchantFormField::Country));
    }

    #[test]
    fn test_activation_of_high_risk_needs_confirmation() {
        let m = Merchant::new(MerchantId::new("1"), "Beta", "DE", 1.0, 1.0)
            .with_status(MerchantStatus::Paused)
            .with_risk(MerchantRisk::High);
        let mut edit = StatusRiskEdit::from_merchant(&m);

        assert_eq!(edit.set_status(MerchantStatus::Active), StatusChange::NeedsConfirmation);
        assert_eq!(edit.status, MerchantStatus::Paused);
        assert!(edit.is_pending_activation());

        edit.cancel_activation();
        assert_eq!(edit.status, MerchantStatus::Paused);

        edit.set_status(MerchantStatus::Active);
        edit.confirm_activation();
        assert_eq!(edit.status, MerchantStatus::Active);
        assert!(!edit.is_pending_activation());
    }

    #[test]
    fn test_other_status_changes_apply() {
        let m = Merchant::new(MerchantId::new("1"), "Acme", "US", 1.0, 1.0);
        let mut edit = StatusRiskEdit::from_merchant(&m);
        assert_eq!(edit.set_status(MerchantStatus::Blocked), StatusChange::Applied);
        edit.set_risk(MerchantRisk::High);
        let patch = edit.to_patch();
        assert_eq!(patch.status, Some(MerchantStatus::Blocked));
        assert_eq!(patch.risk, Some(MerchantRisk::High));
        assert!(patch.name.is_none());
    }
}
