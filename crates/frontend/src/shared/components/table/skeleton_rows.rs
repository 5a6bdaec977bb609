//! Placeholder rows shown while table data is pending

use super::align_class;
use crate::shared::components::ui::SkeletonText;
use contracts::shared::table::CellAlign;
use leptos::prelude::*;
use thaw::*;

/// `rows` table rows with one text skeleton per column
#[component]
pub fn SkeletonRows(
    /// Number of placeholder rows
    rows: usize,
    /// Alignment of each column
    columns: Vec<CellAlign>,
) -> impl IntoView {
    (0..rows)
        .map(|_| {
            let cells = columns
                .iter()
                .map(|align| {
                    view! {
                        <TableCell class=align_class(*align)>
                            <SkeletonText />
                        </TableCell>
                    }
                })
                .collect_view();
            view! { <TableRow class:table__row--placeholder=true>{cells}</TableRow> }
        })
        .collect_view()
}
