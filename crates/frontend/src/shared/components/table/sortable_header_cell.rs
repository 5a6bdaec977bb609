//! Header cell of a list table with an optional sort label
//!
//! ```rust,ignore
//! <SortableHeaderCell
//!     cell=HeadCell::new("createdAt", CellAlign::Center, "Ordered Date").sortable()
//!     sort_state=sort_state
//!     on_sort=Some(Callback::new(move |column: String| request_sort(column)))
//! />
//! ```

use super::align_class;
use crate::shared::icons::icon;
use contracts::shared::sorting::{ColumnSortState, SortDirection};
use contracts::shared::table::HeadCell;
use leptos::prelude::*;
use thaw::*;

/// Header cell for one [`HeadCell`] column.
///
/// A sortable column gets a clickable label only when `on_sort` is supplied;
/// otherwise the label is plain text. The callback receives the column id and
/// the owner decides what the click means.
#[component]
pub fn SortableHeaderCell(
    /// Column metadata
    cell: HeadCell,
    /// Current sort toggle state of the table
    #[prop(into)]
    sort_state: Signal<ColumnSortState>,
    /// Called with the column id when the sort label is clicked
    on_sort: Option<Callback<String>>,
) -> impl IntoView {
    let column = cell.id;
    let aria_sort = move || {
        sort_state.with(|s| s.direction_for(column).map(|d| d.aria_sort()))
    };

    let content = match on_sort {
        Some(on_sort) if cell.sortable => {
            let is_active = move || sort_state.with(|s| s.is_active(column));
            let arrow_class = move || {
                let direction = sort_state.with(|s| s.indicator_direction(column));
                match direction {
                    SortDirection::Asc => "table__sort-arrow table__sort-arrow--asc",
                    SortDirection::Desc => "table__sort-arrow table__sort-arrow--desc",
                }
            };
            view! {
                <button
                    type="button"
                    class="table__sort-label"
                    class:table__sort-label--active=is_active
                    on:click=move |_| on_sort.run(column.to_string())
                >
                    {cell.label}
                    <span class=arrow_class>{icon("sort-arrow")}</span>
                </button>
            }
            .into_any()
        }
        _ => view! { <span>{cell.label}</span> }.into_any(),
    };

    view! {
        <TableHeaderCell class=align_class(cell.align) attr:aria-sort=aria_sort>
            {content}
        </TableHeaderCell>
    }
}
