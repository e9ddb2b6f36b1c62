//! Filter and sort pipeline behind the merchants table.

use super::aggregate::{Merchant, MerchantRisk, MerchantStatus};
use crate::shared::list_utils::{
    compare_f64, compare_ignore_case, contains_ignore_case, filter_list, sort_list, Searchable,
    Sortable,
};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Sentinel used by the status/risk dropdowns
pub const ALL: &str = "all";

/// Either every value or exactly one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter<T> {
    #[default]
    All,
    Only(T),
}

impl<T: PartialEq> CategoryFilter<T> {
    pub fn accepts(&self, value: &T) -> bool {
        match self {
            Self::All => true,
            Self::Only(expected) => expected == value,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl<T: FromStr<Err = String>> FromStr for CategoryFilter<T> {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Only)
        }
    }
}

impl<T: fmt::Display> fmt::Display for CategoryFilter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL),
            Self::Only(value) => value.fmt(f),
        }
    }
}

impl<T: fmt::Display> Serialize for CategoryFilter<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de, T: FromStr<Err = String>> Deserialize<'de> for CategoryFilter<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

pub type StatusFilter = CategoryFilter<MerchantStatus>;
pub type RiskFilter = CategoryFilter<MerchantRisk>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    #[default]
    Name,
    Country,
    MonthlyVolume,
    ChargebackRatio,
    Status,
    Risk,
}

impl SortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Country => "country",
            Self::MonthlyVolume => "monthlyVolume",
            Self::ChargebackRatio => "chargebackRatio",
            Self::Status => "status",
            Self::Risk => "risk",
        }
    }
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "country" => Ok(Self::Country),
            "monthlyVolume" => Ok(Self::MonthlyVolume),
            "chargebackRatio" => Ok(Self::ChargebackRatio),
            "status" => Ok(Self::Status),
            "risk" => Ok(Self::Risk),
            other => Err(format!("Unknown sort field: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    pub fn is_ascending(self) -> bool {
        self == Self::Asc
    }
}

impl Searchable for Merchant {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ignore_case(&self.name, filter)
    }
}

impl Sortable for Merchant {
    type Field = SortField;

    fn compare_by_field(&self, other: &Self, field: SortField) -> Ordering {
        match field {
            SortField::Name => compare_ignore_case(&self.name, &other.name),
            SortField::Country => compare_ignore_case(&self.country, &other.country),
            SortField::MonthlyVolume => compare_f64(self.monthly_volume, other.monthly_volume),
            SortField::ChargebackRatio => {
                compare_f64(self.chargeback_ratio, other.chargeback_ratio)
            }
            SortField::Status => self.status.as_str().cmp(other.status.as_str()),
            SortField::Risk => self.risk.as_str().cmp(other.risk.as_str()),
        }
    }
}

/// Everything the merchants table needs to derive its rows
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MerchantListQuery {
    #[serde(rename = "q")]
    pub search: String,
    pub status: StatusFilter,
    pub risk: RiskFilter,
    #[serde(rename = "sort")]
    pub sort_field: SortField,
    #[serde(rename = "dir")]
    pub sort_dir: SortDirection,
}

impl MerchantListQuery {
    pub fn matches(&self, merchant: &Merchant) -> bool {
        merchant.matches_filter(&self.search)
            && self.status.accepts(&merchant.status)
            && self.risk.accepts(&merchant.risk)
    }

    /// Filtered and sorted copy of `merchants`; the input is left untouched.
    pub fn apply(&self, merchants: &[Merchant]) -> Vec<Merchant> {
        let mut rows: Vec<Merchant> = filter_list(merchants.to_vec(), &self.search)
            .into_iter()
            .filter(|m| self.status.accepts(&m.status) && self.risk.accepts(&m.risk))
            .collect();
        sort_list(&mut rows, self.sort_field, self.sort_dir.is_ascending());
        rows
    }

    /// Header click: same field flips direction, another field starts ascending
    pub fn toggle_sort(&mut self, field: SortField) {
        if self.sort_field == field {
            self.sort_dir = self.sort_dir.toggled();
        } else {
            self.sort_field = field;
            self.sort_dir = SortDirection::Asc;
        }
    }

    /// Clears search and category filters; sorting is kept
    pub fn reset_filters(&mut self) {
        self.search.clear();
        self.status = CategoryFilter::All;
        self.risk = CategoryFilter::All;
    }

    pub fn has_filters(&self) -> bool {
        !self.search.is_empty() || !self.status.is_all() || !self.risk.is_all()
    }
}

pub fn view(
    merchants: &[Merchant],
    query: &str,
    status: StatusFilter,
    risk: RiskFilter,
    sort_field: SortField,
    sort_dir: SortDirection,
) -> Vec<Merchant> {
    MerchantListQuery {
        search: query.to_string(),
        status,
        risk,
        sort_field,
        sort_dir,
    }
    .apply(merchants)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_merchant::aggregate::MerchantId;

    fn merchant(id: &str, name: &str, country: &str, volume: f64) -> Merchant {
        Merchant::new(MerchantId::new(id), name, country, volume, 1.0)
    }

    fn sample() -> Vec<Merchant> {
        vec![
            merchant("1", "Acme", "us", 5000.0),
            merchant("2", "Beta", "DE", 9000.0)
                .with_status(MerchantStatus::Paused)
                .with_risk(MerchantRisk::High),
            merchant("3", "alpha", "Fr", 1200.0).with_risk(MerchantRisk::Medium),
            merchant("4", "Zebra Pay", "de", 7000.0).with_status(MerchantStatus::Blocked),
        ]
    }

    fn ids(rows: &[Merchant]) -> Vec<&str> {
        rows.iter().map(|m| m.id.as_str()).collect()
    }

    #[test]
    fn test_search_example() {
        let input = sample()[..2].to_vec();
        let rows = view(
            &input,
            "be",
            CategoryFilter::All,
            CategoryFilter::All,
            SortField::Name,
            SortDirection::Asc,
        );
        assert_eq!(ids(&rows), vec!["2"]);
    }

    #[test]
    fn test_search_matches_name_only() {
        // "de" is a country code of two rows but part of no name
        let rows = view(
            &sample(),
            "de",
            CategoryFilter::All,
            CategoryFilter::All,
            SortField::Name,
            SortDirection::Asc,
        );
        assert!(rows.is_empty());
    }

    #[test]
    fn test_no_filters_keeps_everything() {
        let input = sample();
        let mut query = MerchantListQuery::default();
        // every ratio is 1.0, so a stable sort keeps input order
        query.sort_field = SortField::ChargebackRatio;
        assert_eq!(query.apply(&input), input);
        assert!(!query.has_filters());
    }

    #[test]
    fn test_name_sort_is_case_insensitive() {
        let rows = MerchantListQuery::default().apply(&sample());
        assert_eq!(ids(&rows), vec!["1", "3", "2", "4"]);
    }

    #[test]
    fn test_volume_asc_and_desc_are_reversed() {
        let input = sample();
        let asc = view(
            &input,
            "",
            CategoryFilter::All,
            CategoryFilter::All,
            SortField::MonthlyVolume,
            SortDirection::Asc,
        );
        let mut desc = view(
            &input,
            "",
            CategoryFilter::All,
            CategoryFilter::All,
            SortField::MonthlyVolume,
            SortDirection::Desc,
        );
        assert_eq!(ids(&asc), vec!["3", "1", "4", "2"]);
        desc.reverse();
        assert_eq!(asc, desc);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let input = sample();
        for dir in [SortDirection::Asc, SortDirection::Desc] {
            let rows = view(
                &input,
                "",
                CategoryFilter::All,
                CategoryFilter::All,
                SortField::Country,
                dir,
            );
            let de: Vec<_> = rows
                .iter()
                .filter(|m| m.country.eq_ignore_ascii_case("de"))
                .map(|m| m.id.as_str())
                .collect();
            assert_eq!(de, vec!["2", "4"]);
        }
    }

    fn sorted_ids(field: SortField, dir: SortDirection) -> Vec<String> {
        let rows = view(
            &sample(),
            "",
            CategoryFilter::All,
            CategoryFilter::All,
            field,
            dir,
        );
        rows.iter().map(|m| m.id.as_str().to_string()).collect()
    }

    #[test]
    fn test_risk_sort_is_alphabetical() {
        // high < low < medium; the two "low" rows keep input order
        assert_eq!(
            sorted_ids(SortField::Risk, SortDirection::Asc),
            vec!["2", "1", "4", "3"]
        );
        assert_eq!(
            sorted_ids(SortField::Risk, SortDirection::Desc),
            vec!["3", "1", "4", "2"]
        );
    }

    #[test]
    fn test_status_sort_is_alphabetical() {
        // active < blocked < paused; the two "active" rows keep input order
        assert_eq!(
            sorted_ids(SortField::Status, SortDirection::Asc),
            vec!["1", "3", "4", "2"]
        );
        assert_eq!(
            sorted_ids(SortField::Status, SortDirection::Desc),
            vec!["2", "4", "1", "3"]
        );
    }

    #[test]
    fn test_category_filters() {
        let input = sample();
        let rows = view(
            &input,
            "",
            CategoryFilter::Only(MerchantStatus::Active),
            CategoryFilter::All,
            SortField::Name,
            SortDirection::Asc,
        );
        assert_eq!(ids(&rows), vec!["1", "3"]);

        let rows = view(
            &input,
            "a",
            CategoryFilter::Only(MerchantStatus::Active),
            CategoryFilter::Only(MerchantRisk::Medium),
            SortField::Name,
            SortDirection::Asc,
        );
        assert_eq!(ids(&rows), vec!["3"]);
    }

    #[test]
    fn test_input_not_mutated_and_idempotent() {
        let input = sample();
        let snapshot = input.clone();
        let query = MerchantListQuery {
            sort_field: SortField::MonthlyVolume,
            sort_dir: SortDirection::Desc,
            ..Default::default()
        };
        let first = query.apply(&input);
        let second = query.apply(&input);
        assert_eq!(first, second);
        assert_eq!(input, snapshot);
    }

    #[test]
    fn test_toggle_sort() {
        let mut query = MerchantListQuery::default();
        query.toggle_sort(SortField::Name);
        assert_eq!(query.sort_dir, SortDirection::Desc);
        query.toggle_sort(SortField::Country);
        assert_eq!(query.sort_field, SortField::Country);
        assert_eq!(query.sort_dir, SortDirection::Asc);
    }

    #[test]
    fn test_reset_filters_keeps_sort() {
        let mut query = MerchantListQuery {
            search: "acme".into(),
            status: CategoryFilter::Only(MerchantStatus::Paused),
            risk: CategoryFilter::Only(MerchantRisk::High),
            sort_field: SortField::Risk,
            sort_dir: SortDirection::Desc,
        };
        assert!(query.has_filters());
        query.reset_filters();
        assert!(!query.has_filters());
        assert_eq!(query.sort_field, SortField::Risk);
        assert_eq!(query.sort_dir, SortDirection::Desc);
    }

    #[test]
    fn test_filter_parsing() {
        assert_eq!("all".parse::<StatusFilter>(), Ok(CategoryFilter::All));
        assert_eq!(
            "blocked".parse::<StatusFilter>(),
            Ok(CategoryFilter::Only(MerchantStatus::Blocked))
        );
        assert!("everything".parse::<RiskFilter>().is_err());
        assert_eq!(CategoryFilter::Only(MerchantRisk::Low).to_string(), "low");
    }

    #[test]
    fn test_query_json_round_trip_names() {
        let query = MerchantListQuery {
            search: "be".into(),
            status: CategoryFilter::Only(MerchantStatus::Active),
            risk: CategoryFilter::All,
            sort_field: SortField::MonthlyVolume,
            sort_dir: SortDirection::Desc,
        };
        let json = serde_json::to_value(&query).unwrap();
        assert_eq!(json["q"], "be");
        assert_eq!(json["status"], "active");
        assert_eq!(json["risk"], "all");
        assert_eq!(json["sort"], "monthlyVolume");
        assert_eq!(json["dir"], "desc");
    }
}
