use leptos::prelude::*;

/// Header of a routed page: title, optional subtitle, actions and an error line
#[component]
pub fn PageHeader(
    #[prop(into)]
    title: String,

    #[prop(optional, into)]
    subtitle: MaybeProp<String>,

    /// Last load error, shown under the title
    #[prop(optional, into)]
    error: MaybeProp<String>,

    /// Action buttons (pass an empty fragment if not needed)
    children: Children,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div class="page-header__content">
                <div class="page-header__text">
                    <h1 class="page-header__title">{title}</h1>
                    {move || subtitle.get().map(|s| view! {
                        <div class="page-header__subtitle">{s}</div>
                    })}
                </div>
                <div class="page-header__actions">
                    {children()}
                </div>
            </div>
            {move || error.get().map(|e| view! {
                <div class="page-header__error" role="alert">{e}</div>
            })}
        </div>
    }
}
