//! Line items of a single order

use crate::shared::components::table::{SkeletonRows, TableCellPrice};
use crate::shared::components::ui::Avatar;
use crate::shared::components::CardAnimated;
use contracts::domain::a001_order::{Order, ProductOrder};
use contracts::shared::table::CellAlign;
use leptos::prelude::*;
use thaw::*;

/// Placeholder rows while the order is loading
pub const LINE_ITEMS_SKELETON_ROWS: usize = 3;

/// Card listing the products of an order.
///
/// `None` means the order is still loading.
#[component]
pub fn OrderLineItemsCard(
    #[prop(into)]
    order: Signal<Option<Order>>,
) -> impl IntoView {
    view! {
        <CardAnimated>
            <div class="card__header">
                <h3 class="card__title">"Line items"</h3>
            </div>
            <hr class="divider" />
            <div class="card__content card__content--flush">
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"PRODUCT"</TableHeaderCell>
                            <TableHeaderCell class="text-center">"QUANTITY"</TableHeaderCell>
                            <TableHeaderCell class="text-center">"AMOUNT"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <Show
                            when=move || order.with(|o| o.is_some())
                            fallback=|| view! {
                                <SkeletonRows
                                    rows=LINE_ITEMS_SKELETON_ROWS
                                    columns=vec![CellAlign::Left; 3]
                                />
                            }
                        >
                            <For
                                each=move || order.get().map(|o| o.items).unwrap_or_default()
                                key=|item| item.id.clone()
                                children=|item| view! { <LineItemRow item=item /> }
                            />
                        </Show>
                    </TableBody>
                </Table>
            </div>
        </CardAnimated>
    }
}

#[component]
fn LineItemRow(item: ProductOrder) -> impl IntoView {
    let name = item.product_name().to_string();
    let image = item.image_url().map(str::to_string);

    view! {
        <TableRow class:table__row--hover=true>
            <TableCell>
                <div class="line-item__product">
                    <Avatar src=image rounded=true />
                    <span class="text-body2">{name}</span>
                </div>
            </TableCell>
            <TableCell class="text-center">{item.quantity}</TableCell>
            <TableCellPrice value=item.price align=CellAlign::Center />
        </TableRow>
    }
}
