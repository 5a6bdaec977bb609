use crate::shared::components::ui::SeverityColor;
use contracts::domain::a001_order::{Order, OrderListResponse, ProductOrder, TrackingState};
use contracts::shared::pagination::PaginationParams;
use contracts::shared::sorting::SortKey;
use contracts::shared::table::{CellAlign, HeadCell};
use leptos::prelude::*;

/// Columns of the order table, in display order
pub const ORDER_HEAD_CELLS: [HeadCell; 7] = [
    HeadCell::new("name", CellAlign::Left, "Customer"),
    HeadCell::new("products", CellAlign::Left, "Products"),
    HeadCell::new("createdAt", CellAlign::Center, "Ordered Date").sortable(),
    HeadCell::new("amount", CellAlign::Center, "Price").sortable(),
    HeadCell::new("payment", CellAlign::Center, "Payment"),
    HeadCell::new("status", CellAlign::Center, "Status"),
    HeadCell::new("actions", CellAlign::Center, "Actions"),
];

/// Placeholder rows while the list is loading
pub const LIST_SKELETON_ROWS: usize = 10;

/// Product avatars shown per order before collapsing into "..."
pub const PREVIEW_LIMIT: usize = 3;

pub fn column_aligns() -> Vec<CellAlign> {
    ORDER_HEAD_CELLS.iter().map(|c| c.align).collect()
}

/// First [`PREVIEW_LIMIT`] items and whether more were cut off
pub fn preview_items(items: &[ProductOrder]) -> (&[ProductOrder], bool) {
    let shown = items.len().min(PREVIEW_LIMIT);
    (&items[..shown], items.len() > PREVIEW_LIMIT)
}

pub fn status_color(state: &TrackingState) -> SeverityColor {
    match state {
        TrackingState::Pending => SeverityColor::Info,
        TrackingState::Preparing => SeverityColor::Secondary,
        TrackingState::OnTheWay => SeverityColor::Error,
        TrackingState::Delivered => SeverityColor::Primary,
        TrackingState::Cancel => SeverityColor::Warning,
        TrackingState::Other(_) => SeverityColor::Neutral,
    }
}

/// State of the order list page
#[derive(Clone, Debug)]
pub struct OrderListState {
    /// `None` until the first page arrives and while reloading
    pub orders: Option<Vec<Order>>,
    pub total_count: usize,
    /// Sort last requested by the table
    pub sort: Option<SortKey>,
    pub page_size: u32,
    pub error: Option<String>,
    /// Number of the latest load; responses of older loads are dropped
    pub request_seq: u64,
}

impl Default for OrderListState {
    fn default() -> Self {
        Self {
            orders: None,
            total_count: 0,
            sort: None,
            page_size: 50,
            error: None,
            request_seq: 0,
        }
    }
}

impl OrderListState {
    /// Query for the current sort, always the first page
    pub fn params(&self) -> PaginationParams {
        PaginationParams::first_page(self.page_size)
            .with_sort(self.sort.as_ref().map(ToString::to_string))
    }

    /// Stores a sort key reported by the table.
    ///
    /// Returns `false` and keeps the previous sort when the key is malformed.
    pub fn set_sort(&mut self, key: &str) -> bool {
        match key.parse::<SortKey>() {
            Ok(sort) => {
                self.sort = Some(sort);
                true
            }
            Err(e) => {
                log::warn!("Ignoring sort request {:?}: {}", key, e);
                false
            }
        }
    }

    /// Clears the table for a new load and returns the load's number
    pub fn begin_load(&mut self) -> u64 {
        self.request_seq += 1;
        self.orders = None;
        self.error = None;
        self.request_seq
    }

    /// Applies the response of load `seq`.
    ///
    /// Returns `false` without touching the state when a newer load was started
    /// in the meantime.
    pub fn finish_load(&mut self, seq: u64, result: Result<OrderListResponse, String>) -> bool {
        if seq != self.request_seq {
            return false;
        }
        match result {
            Ok(data) => {
                self.total_count = data.total;
                self.orders = Some(data.items);
            }
            Err(e) => {
                self.orders = Some(Vec::new());
                self.error = Some(e);
            }
        }
        true
    }
}

// Create state within component scope so it is disposed with the page
pub fn create_state() -> RwSignal<OrderListState> {
    RwSignal::new(OrderListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str) -> ProductOrder {
        ProductOrder {
            id: id.to_string(),
            quantity: 1.0,
            price: 1.0,
            food_origin: None,
        }
    }

    #[test]
    fn test_head_cells() {
        let sortable: Vec<&str> = ORDER_HEAD_CELLS
            .iter()
            .filter(|c| c.sortable)
            .map(|c| c.id)
            .collect();
        assert_eq!(sortable, vec!["createdAt", "amount"]);
        assert_eq!(column_aligns().len(), 7);
        assert_eq!(ORDER_HEAD_CELLS[0].align, CellAlign::Left);
        assert_eq!(ORDER_HEAD_CELLS[6].label, "Actions");
    }

    fn order(id: &str) -> Order {
        serde_json::from_value(serde_json::json!({ "id": id })).unwrap()
    }

    fn page(ids: &[&str]) -> Result<OrderListResponse, String> {
        Ok(OrderListResponse {
            items: ids.iter().map(|id| order(id)).collect(),
            total: ids.len(),
        })
    }

    fn loaded_ids(state: &OrderListState) -> Vec<String> {
        state
            .orders
            .iter()
            .flatten()
            .map(|o| o.id.clone())
            .collect()
    }

    #[test]
    fn test_sort_goes_into_query() {
        let mut state = OrderListState::default();
        assert_eq!(state.params(), PaginationParams::first_page(50));

        assert!(state.set_sort("createdAt-desc"));
        assert_eq!(state.params().sort.as_deref(), Some("createdAt-desc"));

        assert!(!state.set_sort("createdAt"));
        assert_eq!(state.params().sort.as_deref(), Some("createdAt-desc"));
    }

    #[test]
    fn test_late_response_of_older_load_is_dropped() {
        let mut state = OrderListState::default();
        state.set_sort("createdAt-asc");
        let asc = state.begin_load();
        state.set_sort("createdAt-desc");
        let desc = state.begin_load();

        assert!(state.finish_load(desc, page(&["new", "old"])));
        assert!(!state.finish_load(asc, page(&["old", "new"])));
        assert_eq!(loaded_ids(&state), ["new", "old"]);
        assert_eq!(state.total_count, 2);
    }

    #[test]
    fn test_failed_load() {
        let mut state = OrderListState::default();
        let first = state.begin_load();
        let second = state.begin_load();

        assert!(!state.finish_load(first, Err("HTTP 500".to_string())));
        assert_eq!(state.error, None);
        assert_eq!(state.orders, None);

        assert!(state.finish_load(second, Err("HTTP 502".to_string())));
        assert_eq!(state.error.as_deref(), Some("HTTP 502"));
        assert_eq!(state.orders, Some(Vec::new()));

        state.begin_load();
        assert_eq!(state.error, None);
        assert_eq!(state.orders, None);
    }

    #[test]
    fn test_preview_items() {
        let few: Vec<_> = ["a", "b", "c"].iter().map(|id| item(id)).collect();
        let (shown, more) = preview_items(&few);
        assert_eq!(shown.len(), 3);
        assert!(!more);

        let many: Vec<_> = ["a", "b", "c", "d"].iter().map(|id| item(id)).collect();
        let (shown, more) = preview_items(&many);
        assert_eq!(shown.iter().map(|i| i.id.as_str()).collect::<Vec<_>>(), ["a", "b", "c"]);
        assert!(more);

        let (shown, more) = preview_items(&[]);
        assert!(shown.is_empty());
        assert!(!more);
    }

    #[test]
    fn test_status_colors() {
        assert_eq!(status_color(&TrackingState::Pending), SeverityColor::Info);
        assert_eq!(status_color(&TrackingState::Preparing), SeverityColor::Secondary);
        assert_eq!(status_color(&TrackingState::OnTheWay), SeverityColor::Error);
        assert_eq!(status_color(&TrackingState::Delivered), SeverityColor::Primary);
        assert_eq!(status_color(&TrackingState::Cancel), SeverityColor::Warning);
        assert_eq!(
            status_color(&TrackingState::Other("lost".to_string())),
            SeverityColor::Neutral
        );
    }
}
