/// UI-помощники для сортируемых заголовков таблиц
use contracts::domain::a001_merchant::list_view::{MerchantListQuery, SortField};
use leptos::ev::MouseEvent;
use leptos::prelude::*;

/// Индикатор направления для заголовка колонки
pub fn get_sort_indicator(current: SortField, field: SortField, ascending: bool) -> &'static str {
    if current == field {
        if ascending { " ▲" } else { " ▼" }
    } else {
        " ⇅"
    }
}

/// CSS-класс индикатора (активная колонка подсвечивается)
pub fn get_sort_class(current: SortField, field: SortField) -> &'static str {
    if current == field {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

/// Обработчик клика по заголовку: та же колонка меняет направление,
/// другая начинает с возрастания
pub fn create_sort_toggle(
    field: SortField,
    query: RwSignal<MerchantListQuery>,
) -> impl Fn(MouseEvent) + Clone + 'static {
    move |_| query.update(|q| q.toggle_sort(field))
}
