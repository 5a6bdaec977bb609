use crate::domain::a001_order::ui::details::OrderDetails;
use crate::domain::a001_order::ui::list::OrderList;
use crate::domain::a002_product::ui::list::ProductList;
use crate::layout::Shell;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_CUSTOM;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=OrderList />
                    <Route path=path!("/orders") view=OrderList />
                    <Route path=path!("/orders/:id") view=OrderDetails />
                    <Route path=path!("/products") view=ProductList />
                </Routes>
            </Shell>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <PageFrame page_id="app--not-found" category=PAGE_CAT_CUSTOM>
            <h1 class="page-header__title">"Page not found"</h1>
        </PageFrame>
    }
}
