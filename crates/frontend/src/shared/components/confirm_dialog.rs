//! Confirmation dialog for destructive actions
//!
//! ```rust,ignore
//! <ConfirmDialog
//!     open=is_open
//!     title="Are you sure?"
//!     body="This cannot be undone."
//!     on_close=Callback::new(move |_| is_open.set(false))
//!     on_submit=Callback::new(move |_| remove())
//! />
//! ```

use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

/// Dialog with Cancel / Confirm actions.
///
/// Mask click and Escape hide the dialog through `open`. Confirm does not:
/// `on_submit` closes it once the caller is done.
#[component]
pub fn ConfirmDialog(
    /// Visibility, shared with the caller
    open: RwSignal<bool>,
    #[prop(into)]
    title: String,
    #[prop(into)]
    body: String,
    /// Name of an [`icon`] shown in a danger-tinted avatar next to the body
    #[prop(optional)]
    icon_name: Option<&'static str>,
    /// Cancel button
    on_close: Callback<()>,
    /// Confirm button
    on_submit: Callback<()>,
) -> impl IntoView {
    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>{move || title.clone()}</DialogTitle>
                    <DialogContent>
                        <div class="confirm-dialog__content">
                            {move || {
                                icon_name.map(|name| {
                                    view! {
                                        <span class="confirm-dialog__avatar confirm-dialog__avatar--danger">
                                            {icon(name)}
                                        </span>
                                    }
                                })
                            }}
                            <p class="confirm-dialog__body">{move || body.clone()}</p>
                        </div>
                    </DialogContent>
                    <DialogActions>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| on_close.run(())
                        >
                            "Cancel"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| on_submit.run(())
                        >
                            "Confirm"
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
