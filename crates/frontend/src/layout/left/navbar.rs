use crate::routes::paths::{ORDERS, PRODUCTS};
use crate::shared::icons;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Navbar() -> impl IntoView {
    let sections = [("orders", "Orders", ORDERS), ("products", "Products", PRODUCTS)];

    view! {
        <nav class="main-nav-bar">
            <ul>
                {sections
                    .into_iter()
                    .map(|(key, title, href)| {
                        view! {
                            <li>
                                <A href=href>
                                    {icons::icon(key)}
                                    <span>{title}</span>
                                </A>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}
