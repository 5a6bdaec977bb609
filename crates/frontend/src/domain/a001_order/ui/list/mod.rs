pub mod model;
pub mod results;
pub mod state;

pub use results::OrderListResults;

use crate::routes::paths::order_path;
use crate::shared::components::PageHeader;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a001_order::Order;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use state::create_state;

/// Order list page: loads the first page and reloads it whenever the table
/// asks for another sort order.
#[component]
pub fn OrderList() -> impl IntoView {
    let state = create_state();
    let navigate = use_navigate();

    let load_orders = move || {
        let params = state.with_untracked(|s| s.params());
        let seq = state.try_update(|s| s.begin_load()).unwrap_or_default();
        wasm_bindgen_futures::spawn_local(async move {
            let result = model::fetch_orders(&params).await;
            match &result {
                Ok(data) => log::info!(
                    "Loaded {} orders (total: {})",
                    data.items.len(),
                    data.total
                ),
                Err(e) => log::warn!("Failed to load orders: {}", e),
            }
            let applied = state
                .try_update(|s| s.finish_load(seq, result))
                .unwrap_or(false);
            if !applied {
                log::debug!("Dropped orders of superseded load {}", seq);
            }
        });
    };

    load_orders();

    let on_sort = Callback::new(move |sort_key: String| {
        if state.try_update(|s| s.set_sort(&sort_key)).unwrap_or(false) {
            load_orders();
        }
    });

    let on_row_click = Callback::new(move |order: Order| {
        navigate(&order_path(&order.id), Default::default());
    });

    let order_list = Signal::derive(move || state.with(|s| s.orders.clone()));
    let subtitle = Signal::derive(move || {
        state.with(|s| {
            s.orders
                .as_ref()
                .map(|orders| format!("{} of {} orders", orders.len(), s.total_count))
        })
    });
    let error = Signal::derive(move || state.with(|s| s.error.clone()));

    view! {
        <PageFrame page_id="a001_order--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <PageHeader title="Orders" subtitle=subtitle error=error>
                    {()}
                </PageHeader>
            </div>
            <div class="page__content">
                <OrderListResults
                    order_list=order_list
                    on_sort_by_column=on_sort
                    on_row_click=on_row_click
                />
            </div>
        </PageFrame>
    }
}
