/// Универсальные утилиты для работы со списками (поиск, сортировка)
use std::cmp::Ordering;

/// Trait для типов данных, поддерживающих поиск
pub trait Searchable {
    /// Проверяет, соответствует ли объект поисковому запросу
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Trait для типов данных, поддерживающих сортировку
pub trait Sortable {
    type Field: Copy;

    /// Сравнивает два объекта по указанному полю
    fn compare_by_field(&self, other: &Self, field: Self::Field) -> Ordering;
}

/// Сортирует список по указанному полю.
///
/// Сортировка стабильная: элементы с равными ключами сохраняют исходный порядок
/// в обоих направлениях.
pub fn sort_list<T: Sortable>(items: &mut [T], field: T::Field, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending { cmp } else { cmp.reverse() }
    });
}

/// Фильтрует список по поисковому запросу (пустой запрос пропускает всё)
pub fn filter_list<T: Searchable>(items: Vec<T>, filter: &str) -> Vec<T> {
    if filter.is_empty() {
        return items;
    }

    items
        .into_iter()
        .filter(|item| item.matches_filter(filter))
        .collect()
}

/// Регистронезависимое сравнение строк
pub fn compare_ignore_case(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Регистронезависимый поиск подстроки
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Числовое сравнение; NaN считается равным всему
pub fn compare_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        label: &'static str,
        weight: f64,
    }

    impl Searchable for Row {
        fn matches_filter(&self, filter: &str) -> bool {
            contains_ignore_case(self.label, filter)
        }
    }

    impl Sortable for Row {
        type Field = ();

        fn compare_by_field(&self, other: &Self, _field: ()) -> Ordering {
            compare_f64(self.weight, other.weight)
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { label: "first", weight: 2.0 },
            Row { label: "Second", weight: 1.0 },
            Row { label: "third", weight: 2.0 },
        ]
    }

    #[test]
    fn test_sort_is_stable_both_ways() {
        let mut asc = rows();
        sort_list(&mut asc, (), true);
        let labels: Vec<_> = asc.iter().map(|r| r.label).collect();
        assert_eq!(labels, vec!["Second", "first", "third"]);

        let mut desc = rows();
        sort_list(&mut desc, (), false);
        let labels: Vec<_> = desc.iter().map(|r| r.label).collect();
        assert_eq!(labels, vec!["first", "third", "Second"]);
    }

    #[test]
    fn test_filter_list() {
        assert_eq!(filter_list(rows(), ""), rows());
        let found = filter_list(rows(), "SEC");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].label, "Second");
    }

    #[test]
    fn test_compare_ignore_case() {
        assert_eq!(compare_ignore_case("acme", "ACME"), Ordering::Equal);
        assert_eq!(compare_ignore_case("Beta", "alpha"), Ordering::Greater);
    }

    #[test]
    fn test_compare_f64_nan() {
        assert_eq!(compare_f64(f64::NAN, 1.0), Ordering::Equal);
        assert_eq!(compare_f64(1.0, 2.0), Ordering::Less);
    }
}
