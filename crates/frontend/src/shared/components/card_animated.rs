//! CardAnimated: Thaw Card with an appear animation.
//!
//! Drop-in replacement for `<Card attr:style="...">`; the animation lives in
//! `styles/app.css` (`@keyframes card-appear`).
//!
//! ```rust,ignore
//! // Staggered grid
//! <CardAnimated delay_ms=0>   // card 1
//! <CardAnimated delay_ms=40>  // card 2
//!
//! // Extra inline styles
//! <CardAnimated style="height: 100%;" delay_ms=0>
//! ```

use leptos::prelude::*;
use thaw::Card;

/// Delay step between neighbouring cards of a grid
pub const STAGGER_STEP_MS: u32 = 40;

/// Delay for the card at `index`, capped so long grids do not lag behind
pub fn stagger_delay(index: usize) -> u32 {
    (index.min(12) as u32) * STAGGER_STEP_MS
}

/// Thaw [`Card`] with the `card-appear` animation.
#[component]
pub fn CardAnimated(
    /// Animation delay in ms.
    #[prop(optional)]
    delay_ms: u32,
    /// Extra inline styles, appended after the animation.
    #[prop(optional, into)]
    style: String,
    children: Children,
) -> impl IntoView {
    let full_style = if style.is_empty() {
        format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms)
    } else {
        format!(
            "animation: card-appear 0.28s ease-out {}ms both; {}",
            delay_ms, style
        )
    };

    view! {
        <Card attr:style=full_style>
            {children()}
        </Card>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stagger_delay_is_capped() {
        assert_eq!(stagger_delay(0), 0);
        assert_eq!(stagger_delay(2), 80);
        assert_eq!(stagger_delay(100), stagger_delay(12));
    }
}
