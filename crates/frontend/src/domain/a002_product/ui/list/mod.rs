mod model;

use super::card::ProductCard;
use crate::routes::paths::product_edit_path;
use crate::shared::components::card_animated::stagger_delay;
use crate::shared::components::PageHeader;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a002_product::Product;
use contracts::shared::pagination::PaginationParams;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

/// Placeholder cards while the catalogue is loading
pub const GRID_SKELETON_CARDS: usize = 8;

const PAGE_SIZE: u32 = 48;

/// Product catalogue as a grid of cards
#[component]
pub fn ProductList() -> impl IntoView {
    let products = RwSignal::new(None::<Vec<Product>>);
    let error = RwSignal::new(None::<String>);
    let navigate = use_navigate();
    let load_seq = StoredValue::new(0u64);

    let load_products = move || {
        let seq = load_seq.get_value() + 1;
        load_seq.set_value(seq);
        products.set(None);
        error.set(None);
        wasm_bindgen_futures::spawn_local(async move {
            let result = model::fetch_products(&PaginationParams::first_page(PAGE_SIZE)).await;
            if load_seq.try_get_value() != Some(seq) {
                log::debug!("Dropped products of superseded load {}", seq);
                return;
            }
            match result {
                Ok(data) => {
                    log::info!("Loaded {} products (total: {})", data.items.len(), data.total);
                    products.set(Some(data.items));
                }
                Err(e) => {
                    log::warn!("Failed to load products: {}", e);
                    products.set(Some(Vec::new()));
                    error.set(Some(e));
                }
            }
        });
    };

    load_products();

    let on_edit = Callback::new(move |product: Product| {
        navigate(&product_edit_path(&product.id), Default::default());
    });

    let on_delete = Callback::new(move |id: String| {
        wasm_bindgen_futures::spawn_local(async move {
            match model::delete_product(&id).await {
                Ok(()) => {
                    log::info!("Deleted product {}", id);
                    load_products();
                }
                Err(e) => {
                    log::warn!("Failed to delete product {}: {}", id, e);
                    error.set(Some(e));
                }
            }
        });
    });

    let cards = move || match products.get() {
        Some(items) => items
            .into_iter()
            .enumerate()
            .map(|(index, product)| {
                view! {
                    <ProductCard
                        product=Some(product)
                        on_edit_click=on_edit
                        on_delete_click=on_delete
                        delay_ms=stagger_delay(index)
                    />
                }
            })
            .collect_view()
            .into_any(),
        None => (0..GRID_SKELETON_CARDS)
            .map(|index| {
                view! { <ProductCard product={None::<Product>} delay_ms=stagger_delay(index) /> }
            })
            .collect_view()
            .into_any(),
    };

    let subtitle = Signal::derive(move || {
        products.with(|p| p.as_ref().map(|items| format!("{} products", items.len())))
    });
    let error_text = Signal::derive(move || error.get());

    view! {
        <PageFrame page_id="a002_product--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <PageHeader title="Products" subtitle=subtitle error=error_text>
                    {()}
                </PageHeader>
            </div>
            <div class="page__content">
                <div class="product-grid">{cards}</div>
            </div>
        </PageFrame>
    }
}
