//! Small one-off effects: the hero intro fade and service-card hover shadows.

#[cfg(test)]
#[path = "effects_test.rs"]
mod effects_test;

use crate::consts::{CARD_SHADOW_HOVERED, CARD_SHADOW_RESTING};

/// The two steps of the hero intro on window load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeroIntroPhase {
    /// Hidden and shifted down, before the transition is attached.
    Start,
    /// Transition attached, fading into place.
    Finish,
}

impl HeroIntroPhase {
    /// `(property, value)` pairs to set on the hero, in order.
    #[must_use]
    pub fn styles(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::Start => &[("opacity", "0"), ("transform", "translateY(20px)")],
            Self::Finish => &[("transition", "all 1s ease-out"), ("opacity", "1"), ("transform", "translateY(0)")],
        }
    }
}

#[must_use]
pub fn card_shadow(hovered: bool) -> &'static str {
    if hovered { CARD_SHADOW_HOVERED } else { CARD_SHADOW_RESTING }
}
