use leptos::prelude::*;

/// One line of placeholder text
#[component]
pub fn SkeletonText() -> impl IntoView {
    view! { <span class="skeleton skeleton--text" aria-hidden="true"></span> }
}

/// Rectangular placeholder of fixed height
#[component]
pub fn SkeletonBlock(
    /// Height in pixels
    height: u32,
) -> impl IntoView {
    view! {
        <div
            class="skeleton skeleton--rect"
            style=format!("height: {}px;", height)
            aria-hidden="true"
        ></div>
    }
}
