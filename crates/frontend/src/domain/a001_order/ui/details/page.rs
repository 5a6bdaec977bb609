use super::model;
use crate::domain::a001_order::ui::line_items::OrderLineItemsCard;
use crate::domain::a001_order::ui::list::state::status_color;
use crate::routes::paths::{customer_path, ORDERS};
use crate::shared::components::table::format_price;
use crate::shared::components::ui::SeverityPill;
use crate::shared::components::PageHeader;
use crate::shared::date_utils::format_order_date;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::domain::a001_order::Order;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

#[component]
pub fn OrderDetails() -> impl IntoView {
    let params = use_params_map();
    let order = RwSignal::new(None::<Order>);
    let error = RwSignal::new(None::<String>);

    // Number of the latest load; a late response for a previous id is dropped
    let load_seq = StoredValue::new(0u64);

    // Reload whenever the route id changes
    Effect::new(move |_| {
        let id = params.read().get("id").unwrap_or_default();
        let seq = load_seq.get_value() + 1;
        load_seq.set_value(seq);
        order.set(None);
        error.set(None);
        wasm_bindgen_futures::spawn_local(async move {
            let result = model::fetch_order(&id).await;
            if load_seq.try_get_value() != Some(seq) {
                log::debug!("Dropped order {} of superseded load {}", id, seq);
                return;
            }
            match result {
                Ok(data) => {
                    log::info!("Loaded order {} with {} items", data.id, data.items.len());
                    order.set(Some(data));
                }
                Err(e) => {
                    log::warn!("Failed to load order {}: {}", id, e);
                    error.set(Some(e));
                }
            }
        });
    });

    let title = move || {
        order.with(|o| match o {
            Some(o) if !o.name.is_empty() => format!("Order of {}", o.name),
            _ => "Order".to_string(),
        })
    };

    let summary = move || {
        order.get().map(|o| {
            let pill_color = status_color(&o.tracking_state());
            let customer_name = o.name.clone();
            let status_label = o.status_label().to_string();
            view! {
                <dl class="order-summary">
                    <dt>"Customer"</dt>
                    <dd><A href=customer_path(&o.user_id)>{customer_name}</A></dd>
                    <dt>"Ordered Date"</dt>
                    <dd>{format_order_date(&o.created_at)}</dd>
                    <dt>"Payment"</dt>
                    <dd>{o.payment_label().to_string()}</dd>
                    <dt>"Status"</dt>
                    <dd>
                        <SeverityPill color=pill_color>
                            {status_label}
                        </SeverityPill>
                    </dd>
                    <dt>"Total"</dt>
                    <dd>{format_price(o.total_price)}</dd>
                </dl>
            }
        })
    };

    view! {
        <PageFrame page_id="a001_order--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                {move || view! {
                    <PageHeader title=title() error=error.get()>
                        <A href=ORDERS attr:class="button button--ghost">"Back to orders"</A>
                    </PageHeader>
                }}
            </div>
            <div class="page__content">
                {summary}
                <OrderLineItemsCard order=order />
            </div>
        </PageFrame>
    }
}
