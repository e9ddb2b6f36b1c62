use crate::shared::delay::sleep;
use crate::shared::state::MerchantsHandle;
use contracts::domain::a001_merchant::form::{StatusChange, StatusRiskEdit};
use contracts::domain::a001_merchant::{Merchant, MerchantId, MerchantRisk, MerchantStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// ViewModel for merchant details: status/risk editor plus save flow
#[derive(Clone, Copy)]
pub struct MerchantDetailsViewModel {
    id: StoredValue<MerchantId>,
    store: MerchantsHandle,
    /// Store record; falls back to the record handed over by the list
    pub merchant: Memo<Option<Merchant>>,
    pub edit: RwSignal<Option<StatusRiskEdit>>,
    /// Radio group values
    pub status_value: RwSignal<String>,
    pub risk_value: RwSignal<String>,
    pub saving: RwSignal<bool>,
    pub show_success: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl MerchantDetailsViewModel {
    pub fn new(id: MerchantId, payload: Option<Merchant>, store: MerchantsHandle) -> Self {
        let payload = payload.filter(|m| m.id == id);
        let id = StoredValue::new(id);
        let payload = StoredValue::new(payload);

        let merchant = Memo::new(move |_| {
            let from_store = id.with_value(|id| {
                store.with(|s| s.get_by_id(id).ok().cloned())
            });
            from_store.or_else(|| payload.get_value())
        });

        let vm = Self {
            id,
            store,
            merchant,
            edit: RwSignal::new(None),
            status_value: RwSignal::new(String::new()),
            risk_value: RwSignal::new(String::new()),
            saving: RwSignal::new(false),
            show_success: RwSignal::new(false),
            error: RwSignal::new(None),
        };
        vm.bind_editor();
        vm
    }

    fn bind_editor(&self) {
        let vm = *self;

        // редактор создаётся, как только мерчант найден
        Effect::new(move |_| {
            let Some(m) = vm.merchant.get() else {
                return;
            };
            if vm.edit.with_untracked(|e| e.is_none()) {
                vm.status_value.set(m.status.as_str().to_string());
                vm.risk_value.set(m.risk.as_str().to_string());
                vm.edit.set(Some(StatusRiskEdit::from_merchant(&m)));
            }
        });

        Effect::new(move |prev: Option<String>| {
            let current = vm.status_value.get();
            if prev.is_some() {
                untrack(|| vm.select_status(&current));
            }
            current
        });

        Effect::new(move |prev: Option<String>| {
            let current = vm.risk_value.get();
            if prev.is_some() {
                untrack(|| vm.select_risk(&current));
            }
            current
        });
    }

    pub fn merchant_id(&self) -> MerchantId {
        self.id.get_value()
    }

    pub fn is_pending_activation(&self) -> bool {
        self.edit
            .with(|e| e.as_ref().is_some_and(|e| e.is_pending_activation()))
    }

    pub fn select_status(&self, raw: &str) {
        let Ok(status) = raw.parse::<MerchantStatus>() else {
            return;
        };
        let change = self
            .edit
            .try_update(|edit| match edit {
                Some(e) if e.status != status => {
                    e.cancel_activation();
                    Some(e.set_status(status))
                }
                _ => None,
            })
            .flatten();

        if change == Some(StatusChange::NeedsConfirmation) {
            // радио остаётся на прежнем статусе до подтверждения
            if let Some(current) = self.edit.with_untracked(|e| e.as_ref().map(|e| e.status)) {
                self.status_value.set(current.as_str().to_string());
            }
        }
    }

    pub fn select_risk(&self, raw: &str) {
        let Ok(risk) = raw.parse::<MerchantRisk>() else {
            return;
        };
        if self
            .edit
            .with_untracked(|e| e.as_ref().is_some_and(|e| e.risk != risk))
        {
            self.edit.update(|edit| {
                if let Some(e) = edit {
                    e.set_risk(risk);
                }
            });
        }
    }

    pub fn confirm_activation(&self) {
        self.edit.update(|edit| {
            if let Some(e) = edit {
                e.confirm_activation();
            }
        });
        self.status_value
            .set(MerchantStatus::Active.as_str().to_string());
    }

    pub fn cancel_activation(&self) {
        self.edit.update(|edit| {
            if let Some(e) = edit {
                e.cancel_activation();
            }
        });
    }

    /// Persist status and risk after the configured save latency
    pub fn save_command(&self, save_ms: u32) {
        if self.saving.get_untracked() || self.is_pending_activation_untracked() {
            return;
        }
        let Some(patch) = self
            .edit
            .with_untracked(|e| e.as_ref().map(StatusRiskEdit::to_patch))
        else {
            return;
        };

        let vm = *self;
        let id = self.merchant_id();
        vm.saving.set(true);
        vm.error.set(None);

        spawn_local(async move {
            sleep(save_ms).await;
            let saved = vm
                .store
                .update(|s| s.update(&id, &patch).is_some())
                .unwrap_or(false);
            if saved {
                log::info!("merchant {} saved", id);
                vm.show_success.try_set(true);
            } else {
                log::warn!("merchant {} disappeared before save", id);
                vm.error.try_set(Some(format!("Merchant not found: {}", id)));
            }
            vm.saving.try_set(false);
        });
    }

    fn is_pending_activation_untracked(&self) -> bool {
        self.edit
            .with_untracked(|e| e.as_ref().is_some_and(|e| e.is_pending_activation()))
    }
}
