//! Table cell for dollar amounts
//!
//! ```rust,ignore
//! <TableCellPrice value=order.total_price align=CellAlign::Center />
//! ```

use super::align_class;
use super::number_format::format_price;
use contracts::shared::table::CellAlign;
use leptos::prelude::*;
use thaw::*;

/// Renders `$` + value with two decimals
#[component]
pub fn TableCellPrice(
    /// Amount
    value: f64,
    /// Cell alignment
    #[prop(optional)]
    align: CellAlign,
) -> impl IntoView {
    view! {
        <TableCell class=align_class(align)>
            {format_price(value)}
        </TableCell>
    }
}
