use leptos::prelude::*;

/// Round icon-only button. `title` doubles as the tooltip.
#[component]
pub fn IconButton(
    /// Tooltip and accessible label
    #[prop(into)]
    title: String,
    /// Colour tone: "primary", "error" or "default"
    #[prop(optional, into)]
    tone: MaybeProp<String>,
    /// Click event handler
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    /// Icon
    children: Children,
) -> impl IntoView {
    let tone_class = move || match tone.get().as_deref().unwrap_or("default") {
        "primary" => "icon-button--primary",
        "error" => "icon-button--error",
        _ => "icon-button--default",
    };

    view! {
        <button
            type="button"
            title=title.clone()
            aria-label=title
            class=move || format!("icon-button {}", tone_class())
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
