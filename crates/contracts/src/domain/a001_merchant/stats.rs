//! Dashboard statistics derived from the merchant collection.

use super::aggregate::{Merchant, MerchantRisk, MerchantStatus};
use crate::shared::format::round1;
use crate::shared::list_utils::compare_f64;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MerchantStats {
    pub total_volume: f64,
    pub active_merchants: usize,
    /// Mean success rate, one decimal
    pub avg_success_rate: f64,
    /// Mean chargeback ratio, one decimal
    pub avg_chargeback: f64,
    /// Only risk levels present in the data appear as keys
    pub risk_counts: BTreeMap<MerchantRisk, usize>,
    pub status_counts: BTreeMap<MerchantStatus, usize>,
}

impl MerchantStats {
    pub fn risk_count(&self, risk: MerchantRisk) -> usize {
        self.risk_counts.get(&risk).copied().unwrap_or(0)
    }

    pub fn status_count(&self, status: MerchantStatus) -> usize {
        self.status_counts.get(&status).copied().unwrap_or(0)
    }
}

/// Count how many times each key value appears in `items`
pub fn count_by_key<T, K, F>(items: &[T], key: F) -> BTreeMap<K, usize>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    items.iter().fold(BTreeMap::new(), |mut acc, item| {
        *acc.entry(key(item)).or_insert(0) += 1;
        acc
    })
}

fn mean_by<F: Fn(&Merchant) -> f64>(merchants: &[Merchant], value: F) -> f64 {
    if merchants.is_empty() {
        return 0.0;
    }
    let sum: f64 = merchants.iter().map(value).sum();
    round1(sum / merchants.len() as f64)
}

pub fn compute_stats(merchants: &[Merchant]) -> MerchantStats {
    MerchantStats {
        total_volume: merchants.iter().map(|m| m.monthly_volume).sum(),
        active_merchants: merchants
            .iter()
            .filter(|m| m.status == MerchantStatus::Active)
            .count(),
        avg_success_rate: mean_by(merchants, |m| m.success_rate.unwrap_or(0.0)),
        avg_chargeback: mean_by(merchants, Merchant::effective_chargeback),
        risk_counts: count_by_key(merchants, |m| m.risk),
        status_counts: count_by_key(merchants, |m| m.status),
    }
}

/// Merchants ordered by monthly volume, largest first. Equal volumes keep
/// collection order. `limit = None` keeps every merchant.
pub fn top_by_volume(merchants: &[Merchant], limit: Option<usize>) -> Vec<Merchant> {
    let mut sorted = merchants.to_vec();
    sorted.sort_by(|a, b| compare_f64(b.monthly_volume, a.monthly_volume));
    if let Some(limit) = limit {
        sorted.truncate(limit);
    }
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_merchant::aggregate::MerchantId;

    fn acme_beta() -> Vec<Merchant> {
        vec![
            Merchant::new(MerchantId::new("1"), "Acme", "US", 5000.0, 0.0),
            Merchant::new(MerchantId::new("2"), "Beta", "DE", 9000.0, 0.0)
                .with_status(MerchantStatus::Paused)
                .with_risk(MerchantRisk::High),
        ]
    }

    #[test]
    fn test_acme_beta_example() {
        let stats = compute_stats(&acme_beta());
        assert_eq!(stats.total_volume, 14000.0);
        assert_eq!(stats.active_merchants, 1);
        assert_eq!(
            stats.risk_counts,
            BTreeMap::from([(MerchantRisk::Low, 1), (MerchantRisk::High, 1)])
        );
        assert_eq!(
            stats.status_counts,
            BTreeMap::from([(MerchantStatus::Active, 1), (MerchantStatus::Paused, 1)])
        );
        assert_eq!(stats.risk_count(MerchantRisk::Medium), 0);
    }

    #[test]
    fn test_empty_input() {
        let stats = compute_stats(&[]);
        assert_eq!(stats, MerchantStats::default());
        assert_eq!(stats.total_volume, 0.0);
        assert_eq!(stats.avg_success_rate, 0.0);
        assert_eq!(stats.avg_chargeback, 0.0);
        assert!(stats.risk_counts.is_empty());
        assert!(stats.status_counts.is_empty());
    }

    #[test]
    fn test_risk_counts_sum_to_len() {
        let mut merchants = acme_beta();
        merchants.push(
            Merchant::new(MerchantId::new("3"), "Gamma", "FR", 100.0, 1.0)
                .with_risk(MerchantRisk::Medium),
        );
        merchants.push(Merchant::new(MerchantId::new("4"), "Delta", "FR", 100.0, 1.0));

        let stats = compute_stats(&merchants);
        assert_eq!(stats.risk_counts.values().sum::<usize>(), merchants.len());
        assert_eq!(stats.status_counts.values().sum::<usize>(), merchants.len());
    }

    #[test]
    fn test_averages_round_to_one_decimal() {
        let merchants = vec![
            Merchant::new(MerchantId::new("1"), "A", "US", 1.0, 1.0).with_success_rate(90.0),
            Merchant::new(MerchantId::new("2"), "B", "US", 1.0, 2.0).with_success_rate(95.0),
            Merchant::new(MerchantId::new("3"), "C", "US", 1.0, 2.0),
        ];
        let stats = compute_stats(&merchants);
        // (90 + 95 + 0) / 3 = 61.666...
        assert_eq!(stats.avg_success_rate, 61.7);
        // 5 / 3 = 1.666...
        assert_eq!(stats.avg_chargeback, 1.7);
    }

    #[test]
    fn test_average_rounding_uses_exact_value() {
        let merchants = vec![
            Merchant::new(MerchantId::new("1"), "A", "US", 1.0, 0.5),
            Merchant::new(MerchantId::new("2"), "B", "US", 1.0, 2.4),
        ];
        // (0.5 + 2.4) / 2 is 1.4499.. in binary
        assert_eq!(compute_stats(&merchants).avg_chargeback, 1.4);
    }

    #[test]
    fn test_avg_chargeback_uses_legacy_rate() {
        let legacy: Merchant =
            serde_json::from_str(r#"{"id":"old","name":"Legacy","chargebackRate":3.0}"#).unwrap();
        let merchants = vec![
            legacy,
            Merchant::new(MerchantId::new("2"), "New", "US", 1.0, 1.0),
        ];
        assert_eq!(compute_stats(&merchants).avg_chargeback, 2.0);
    }

    #[test]
    fn test_count_by_key_generic() {
        let words = ["a", "bb", "cc", "ddd"];
        let counts = count_by_key(&words, |w| w.len());
        assert_eq!(counts, BTreeMap::from([(1, 1), (2, 2), (3, 1)]));
    }

    #[test]
    fn test_top_by_volume() {
        let mut merchants = acme_beta();
        merchants.push(Merchant::new(MerchantId::new("3"), "Gamma", "FR", 9000.0, 1.0));

        let top = top_by_volume(&merchants, None);
        let ids: Vec<_> = top.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "3", "1"]);

        let top_one = top_by_volume(&merchants, Some(1));
        assert_eq!(top_one.len(), 1);
        assert_eq!(top_one[0].name, "Beta");
    }
}
