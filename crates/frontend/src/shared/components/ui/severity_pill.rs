use leptos::prelude::*;

/// Colour of a [`SeverityPill`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeverityColor {
    Primary,
    Secondary,
    Info,
    Warning,
    Error,
    Success,
    #[default]
    Neutral,
}

impl SeverityColor {
    pub fn class(&self) -> &'static str {
        match self {
            Self::Primary => "severity-pill--primary",
            Self::Secondary => "severity-pill--secondary",
            Self::Info => "severity-pill--info",
            Self::Warning => "severity-pill--warning",
            Self::Error => "severity-pill--error",
            Self::Success => "severity-pill--success",
            Self::Neutral => "severity-pill--neutral",
        }
    }
}

/// Rounded, upper-cased status label
#[component]
pub fn SeverityPill(
    /// Pill colour
    #[prop(optional)]
    color: SeverityColor,
    /// Pill content
    children: Children,
) -> impl IntoView {
    view! {
        <span class=format!("severity-pill {}", color.class())>
            {children()}
        </span>
    }
}
