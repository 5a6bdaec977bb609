//! Column sort state for list tables.
//!
//! Tables never reorder rows themselves: they track which column is active and
//! in which direction, and hand a [`SortKey`] to whoever owns the data.

use anyhow::{anyhow, bail};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    /// Value for the `aria-sort` attribute
    pub fn aria_sort(&self) -> &'static str {
        match self {
            Self::Asc => "ascending",
            Self::Desc => "descending",
        }
    }
}

impl FromStr for SortDirection {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(anyhow!("unknown sort direction: {other:?}")),
        }
    }
}

/// Sort request handed upstream, rendered as `field-direction`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortKey {
    pub field: String,
    pub direction: SortDirection,
}

impl SortKey {
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.field, self.direction.as_str())
    }
}

impl FromStr for SortKey {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        let Some((field, direction)) = s.rsplit_once('-') else {
            bail!("sort key {s:?} has no direction");
        };
        if field.is_empty() {
            bail!("sort key {s:?} has no field");
        }
        Ok(Self::new(field, direction.parse()?))
    }
}

/// UI toggle state of a sortable table header
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnSortState {
    pub order_by: Option<String>,
    pub direction: SortDirection,
}

impl ColumnSortState {
    /// Registers a click on `property` and returns the key to request.
    ///
    /// Clicking the active ascending column flips it to descending; any other
    /// click sorts `property` ascending.
    pub fn request_sort(&mut self, property: &str) -> SortKey {
        let is_asc = self.is_active(property) && self.direction == SortDirection::Asc;
        self.direction = if is_asc {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        };
        self.order_by = Some(property.to_string());
        SortKey::new(property, self.direction)
    }

    pub fn is_active(&self, column: &str) -> bool {
        self.order_by.as_deref() == Some(column)
    }

    /// Direction of `column` if it is the active one
    pub fn direction_for(&self, column: &str) -> Option<SortDirection> {
        self.is_active(column).then_some(self.direction)
    }

    /// Direction the column's indicator points to; inactive columns show ascending
    pub fn indicator_direction(&self, column: &str) -> SortDirection {
        self.direction_for(column).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_click_sorts_ascending() {
        let mut state = ColumnSortState::default();
        let key = state.request_sort("createdAt");
        assert_eq!(key.to_string(), "createdAt-asc");
        assert!(state.is_active("createdAt"));
        assert_eq!(state.direction_for("amount"), None);
    }

    #[test]
    fn test_repeated_clicks_toggle() {
        let mut state = ColumnSortState::default();
        state.request_sort("amount");
        assert_eq!(state.request_sort("amount").to_string(), "amount-desc");
        assert_eq!(state.request_sort("amount").to_string(), "amount-asc");
        assert_eq!(state.direction_for("amount"), Some(SortDirection::Asc));
    }

    #[test]
    fn test_switching_column_resets_to_ascending() {
        let mut state = ColumnSortState::default();
        state.request_sort("amount");
        state.request_sort("amount");
        assert_eq!(state.direction, SortDirection::Desc);

        let key = state.request_sort("createdAt");
        assert_eq!(key, SortKey::new("createdAt", SortDirection::Asc));
        assert_eq!(state.indicator_direction("amount"), SortDirection::Asc);
        assert_eq!(state.indicator_direction("createdAt"), SortDirection::Asc);
    }

    #[test]
    fn test_indicator_follows_active_direction() {
        let mut state = ColumnSortState::default();
        state.request_sort("createdAt");
        state.request_sort("createdAt");
        assert_eq!(state.indicator_direction("createdAt"), SortDirection::Desc);
        assert_eq!(SortDirection::Desc.aria_sort(), "descending");
    }

    #[test]
    fn test_parse_sort_key() {
        let key: SortKey = "created-at-desc".parse().unwrap();
        assert_eq!(key.field, "created-at");
        assert_eq!(key.direction, SortDirection::Desc);

        assert!("createdAt".parse::<SortKey>().is_err());
        assert!("-asc".parse::<SortKey>().is_err());
        assert!("amount-up".parse::<SortKey>().is_err());
    }
}
