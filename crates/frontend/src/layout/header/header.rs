use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <span class="header__title">"Storefront Admin"</span>
            </div>
        </header>
    }
}
