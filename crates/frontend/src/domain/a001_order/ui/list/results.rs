//! Order table
//!
//! Pure presentation: rows come from the caller, sorting is requested from the
//! caller through `on_sort_by_column`. The table only remembers which header
//! was clicked last to draw the indicator.

use super::state::{column_aligns, preview_items, status_color, LIST_SKELETON_ROWS, ORDER_HEAD_CELLS};
use crate::routes::paths::{customer_path, order_edit_path, order_path};
use crate::shared::components::table::{SkeletonRows, SortableHeaderCell, TableCellPrice};
use crate::shared::components::ui::{Avatar, SeverityPill};
use crate::shared::date_utils::format_order_date;
use crate::shared::icons::icon;
use contracts::domain::a001_order::Order;
use contracts::shared::sorting::ColumnSortState;
use contracts::shared::table::CellAlign;
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use thaw::*;
use wasm_bindgen::JsCast;

/// Table of orders.
///
/// - `order_list`: `None` renders placeholder rows
/// - `on_sort_by_column`: receives keys like `createdAt-desc`; without it the
///   sortable headers are plain text
/// - `on_row_click`: invoked for clicks outside the row's links
#[component]
pub fn OrderListResults(
    #[prop(into)]
    order_list: Signal<Option<Vec<Order>>>,
    #[prop(optional)]
    on_sort_by_column: Option<Callback<String>>,
    #[prop(optional)]
    on_row_click: Option<Callback<Order>>,
) -> impl IntoView {
    let sort_state = RwSignal::new(ColumnSortState::default());

    let handle_sort = on_sort_by_column.map(|on_sort_by_column| {
        Callback::new(move |column: String| {
            if let Some(key) = sort_state.try_update(|s| s.request_sort(&column)) {
                log::debug!("order list: sort requested {}", key);
                on_sort_by_column.run(key.to_string());
            }
        })
    });

    view! {
        <div class="order-list">
            <Table>
                <TableHeader>
                    <TableRow>
                        {ORDER_HEAD_CELLS
                            .into_iter()
                            .map(|cell| {
                                view! {
                                    <SortableHeaderCell
                                        cell=cell
                                        sort_state=sort_state
                                        on_sort=handle_sort
                                    />
                                }
                            })
                            .collect_view()}
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <Show
                        when=move || order_list.with(|list| list.is_some())
                        fallback=|| view! {
                            <SkeletonRows rows=LIST_SKELETON_ROWS columns=column_aligns() />
                        }
                    >
                        <For
                            each=move || order_list.get().unwrap_or_default()
                            key=|order| order.id.clone()
                            children=move |order| view! {
                                <OrderRow order=order on_row_click=on_row_click />
                            }
                        />
                    </Show>
                </TableBody>
            </Table>
        </div>
    }
}

#[component]
fn OrderRow(order: Order, on_row_click: Option<Callback<Order>>) -> impl IntoView {
    let customer_href = customer_path(&order.user_id);
    let edit_href = order_edit_path(&order.id);
    let details_href = order_path(&order.id);

    let (preview, has_more) = preview_items(&order.items);
    let avatars = preview
        .iter()
        .map(|item| {
            let name = item.product_name().to_string();
            let src = item.image_url().map(str::to_string);
            view! { <Avatar src=src rounded=true title=name /> }
        })
        .collect_view();

    let pill_color = status_color(&order.tracking_state());
    let status_label = order.status_label().to_string();
    let created = format_order_date(&order.created_at);
    let payment = order.payment_label().to_string();
    let customer = order.name.clone();
    let total = order.total_price;

    let clickable = on_row_click.is_some();
    let handle_click = move |ev: MouseEvent| {
        let Some(on_row_click) = on_row_click else {
            return;
        };
        if is_link_click(&ev) {
            return;
        }
        on_row_click.run(order.clone());
    };

    view! {
        <TableRow
            class:table__row--hover=true
            class:table__row--clickable=clickable
            on:click=handle_click
        >
            <TableCell class="text-left order-list__cell--wide">
                <A href=customer_href attr:class="order-list__customer">
                    {customer}
                </A>
            </TableCell>
            <TableCell class="text-left">
                <div class="order-list__products">
                    {avatars}
                    {has_more.then(|| view! {
                        <span class="order-list__more" title="and more...">"..."</span>
                    })}
                </div>
            </TableCell>
            <TableCell class="text-center order-list__cell--padded">{created}</TableCell>
            <TableCellPrice value=total align=CellAlign::Center />
            <TableCell class="text-center">{payment}</TableCell>
            <TableCell class="text-center order-list__cell--wide">
                <SeverityPill color=pill_color>{status_label}</SeverityPill>
            </TableCell>
            <TableCell class="text-center">
                <div class="order-list__actions">
                    <A
                        href=edit_href
                        attr:class="icon-button icon-button--small"
                        attr:title="Edit Order"
                    >
                        {icon("pencil")}
                    </A>
                    <A
                        href=details_href
                        attr:class="icon-button icon-button--small"
                        attr:title="View Details"
                    >
                        {icon("arrow-right")}
                    </A>
                </div>
            </TableCell>
        </TableRow>
    }
}

/// Whether the click landed on a link or button inside the row
fn is_link_click(ev: &MouseEvent) -> bool {
    ev.target()
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        .and_then(|el| el.closest("a, button").ok().flatten())
        .is_some()
}
