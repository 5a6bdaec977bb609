pub mod number_format;
pub mod skeleton_rows;
pub mod sortable_header_cell;
pub mod table_cell_price;

pub use number_format::*;
pub use skeleton_rows::SkeletonRows;
pub use sortable_header_cell::SortableHeaderCell;
pub use table_cell_price::TableCellPrice;

use contracts::shared::table::CellAlign;

/// CSS class aligning a table cell's content
pub fn align_class(align: CellAlign) -> &'static str {
    match align {
        CellAlign::Left => "text-left",
        CellAlign::Center => "text-center",
        CellAlign::Right => "text-right",
    }
}
