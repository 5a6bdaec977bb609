use leptos::prelude::*;

/// Small image avatar; renders a neutral placeholder when there is no image
#[component]
pub fn Avatar(
    /// Image url
    #[prop(optional, into)]
    src: MaybeProp<String>,
    /// Rounded square instead of a circle
    #[prop(optional)]
    rounded: bool,
    /// Tooltip
    #[prop(optional, into)]
    title: MaybeProp<String>,
) -> impl IntoView {
    let shape_class = if rounded { "avatar avatar--rounded" } else { "avatar" };

    move || match src.get().filter(|s| !s.is_empty()) {
        Some(url) => view! {
            <img class=shape_class src=url alt="" title=move || title.get() />
        }
        .into_any(),
        None => view! {
            <span class=format!("{shape_class} avatar--empty") title=move || title.get()></span>
        }
        .into_any(),
    }
}
