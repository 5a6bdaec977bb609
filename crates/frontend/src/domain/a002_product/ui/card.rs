//! Product card for the catalogue grid

use crate::shared::components::ui::{IconButton, SkeletonBlock, SkeletonText};
use crate::shared::components::{CardAnimated, ConfirmDialog};
use crate::shared::icons::icon;
use contracts::domain::a002_product::Product;
use leptos::prelude::*;

/// Height of the product image and of its placeholder
pub const IMAGE_HEIGHT: u32 = 220;

pub const DELETE_DIALOG_TITLE: &str = "Are you sure?";
pub const DELETE_DIALOG_BODY: &str = "Are you sure to delete this order?";

/// Card of one product, or a placeholder card while `product` is `None`.
///
/// Delete asks for confirmation first; `on_delete_click` receives the
/// product id only after the user confirms.
#[component]
pub fn ProductCard(
    #[prop(into)]
    product: Signal<Option<Product>>,
    #[prop(optional)]
    on_edit_click: Option<Callback<Product>>,
    #[prop(optional)]
    on_delete_click: Option<Callback<String>>,
    /// Appear animation delay, for staggered grids
    #[prop(optional)]
    delay_ms: u32,
) -> impl IntoView {
    move || match product.get() {
        Some(product) => view! {
            <LoadedProductCard
                product=product
                on_edit_click=on_edit_click
                on_delete_click=on_delete_click
                delay_ms=delay_ms
            />
        }
        .into_any(),
        None => view! { <ProductCardSkeleton delay_ms=delay_ms /> }.into_any(),
    }
}

#[component]
fn LoadedProductCard(
    product: Product,
    on_edit_click: Option<Callback<Product>>,
    on_delete_click: Option<Callback<String>>,
    delay_ms: u32,
) -> impl IntoView {
    let is_delete_dialog_open = RwSignal::new(false);

    let price = product.price_label();
    let stock = product.stock_label();
    let name = product.name.clone();
    let description = product.description.clone();
    let image_url = product.images.url.clone();
    let product_id = product.id.clone();

    let handle_edit = Callback::new(move |_| {
        if let Some(on_edit_click) = on_edit_click {
            on_edit_click.run(product.clone());
        }
    });
    let handle_delete = Callback::new(move |_| is_delete_dialog_open.set(true));

    let close_dialog = Callback::new(move |_| is_delete_dialog_open.set(false));
    let confirm_delete = Callback::new(move |_| {
        if let Some(on_delete_click) = on_delete_click {
            log::info!("Deleting product {}", product_id);
            on_delete_click.run(product_id.clone());
        }
        is_delete_dialog_open.set(false);
    });

    // No tooltip for empty text
    let name_title = (!name.is_empty()).then(|| name.clone());
    let description_title = (!description.is_empty()).then(|| description.clone());

    view! {
        <div class="product-card">
            <CardAnimated delay_ms=delay_ms style="display: flex; flex-direction: column; height: 100%;">
                <span class="product-card__price">{price}</span>
                <img
                    class="product-card__media"
                    height=IMAGE_HEIGHT.to_string()
                    src=image_url
                    alt=name.clone()
                />
                <div class="product-card__content">
                    <h6 class="product-card__name text-nowrap" title=name_title>
                        {name}
                    </h6>
                    <p class="product-card__description text-nowrap" title=description_title>
                        {description}
                    </p>
                </div>
                <div class="product-card__spacer"></div>
                <hr class="divider" />
                <div class="product-card__footer">
                    <div class="product-card__stock">
                        {icon("inventory")}
                        <span class="text-secondary text-body2">{stock}</span>
                    </div>
                    <div class="product-card__actions">
                        <IconButton title="Edit" tone="primary" on_click=handle_edit>
                            {icon("edit")}
                        </IconButton>
                        <IconButton title="Delete" tone="error" on_click=handle_delete>
                            {icon("delete")}
                        </IconButton>
                    </div>
                </div>
            </CardAnimated>
            <ConfirmDialog
                open=is_delete_dialog_open
                title=DELETE_DIALOG_TITLE
                body=DELETE_DIALOG_BODY
                icon_name="warning"
                on_close=close_dialog
                on_submit=confirm_delete
            />
        </div>
    }
}

#[component]
fn ProductCardSkeleton(delay_ms: u32) -> impl IntoView {
    view! {
        <div class="product-card product-card--loading">
            <CardAnimated delay_ms=delay_ms style="display: flex; flex-direction: column; height: 100%;">
                <SkeletonBlock height=IMAGE_HEIGHT />
                <div class="product-card__content">
                    <h6 class="product-card__name"><SkeletonText /></h6>
                    <p class="product-card__description"><SkeletonText /></p>
                </div>
                <div class="product-card__spacer"></div>
                <hr class="divider" />
                <div class="product-card__footer">
                    <SkeletonText />
                </div>
            </CardAnimated>
        </div>
    }
}
