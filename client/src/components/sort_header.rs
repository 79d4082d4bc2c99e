//! Clickable table header cell with a sort marker.

use leptos::prelude::*;

use crate::util::table::SortState;

#[component]
pub fn SortHeader<K>(
    label: &'static str,
    column: K,
    #[prop(into)] sort: Signal<SortState<K>>,
    on_sort: Callback<K>,
) -> impl IntoView
where
    K: Copy + PartialEq + Send + Sync + 'static,
{
    view! {
        <th class="table__sortable" on:click=move |_| on_sort.run(column)>
            {label}
            {move || sort.get().indicator(column)}
        </th>
    }
}
