use super::*;

#[test]
fn hero_intro_starts_hidden_and_finishes_visible() {
    assert!(HeroIntroPhase::Start.styles().contains(&("opacity", "0")));
    let finish = HeroIntroPhase::Finish.styles();
    assert_eq!(finish[0], ("transition", "all 1s ease-out"));
    assert!(finish.contains(&("opacity", "1")));
    assert!(finish.contains(&("transform", "translateY(0)")));
}

#[test]
fn card_shadow_depends_on_hover() {
    assert_eq!(card_shadow(true), CARD_SHADOW_HOVERED);
    assert_eq!(card_shadow(false), CARD_SHADOW_RESTING);
}
