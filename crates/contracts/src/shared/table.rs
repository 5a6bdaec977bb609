//! Static column metadata for list tables

/// Horizontal alignment of a table cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl CellAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

/// Header column of a list table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadCell {
    /// Column id, also the sort field sent upstream
    pub id: &'static str,
    pub align: CellAlign,
    pub label: &'static str,
    pub sortable: bool,
}

impl HeadCell {
    pub const fn new(id: &'static str, align: CellAlign, label: &'static str) -> Self {
        Self {
            id,
            align,
            label,
            sortable: false,
        }
    }

    pub const fn sortable(self) -> Self {
        Self {
            sortable: true,
            ..self
        }
    }
}
