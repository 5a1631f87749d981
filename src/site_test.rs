#![allow(clippy::float_cmp)]

use rand::SeedableRng;
use rand::rngs::StdRng;

use super::*;
use crate::consts::PARTICLE_STYLES_ID;
use crate::timer::delay_until;

// =============================================================
// Helpers
// =============================================================

fn full_layout() -> PageLayout {
    PageLayout {
        has_petal_container: true,
        has_hero: true,
        has_hamburger: true,
        has_nav_menu: true,
        has_gallery: true,
        gallery_item_count: 8,
        gallery_viewport_width: 1000.0,
        window_width: 1280.0,
        animated_count: 4,
        scroll_y: 0.0,
    }
}

fn started(layout: &PageLayout) -> SiteCore {
    let mut site = SiteCore::new(SiteConfig::default());
    site.start(0.0, layout);
    site
}

fn count_live_petals(actions: &[Action], live: &mut i64) {
    for action in actions {
        match action {
            Action::AppendPetal { .. } => *live += 1,
            Action::RemovePetal { .. } => *live -= 1,
            _ => {}
        }
    }
}

// =============================================================
// Lifecycle
// =============================================================

#[test]
fn start_emits_particle_styles_and_navbar_theme() {
    let mut site = SiteCore::new(SiteConfig::default());
    let actions = site.start(0.0, &full_layout());
    assert!(actions.iter().any(|a| matches!(a, Action::InjectStyles { id, .. } if *id == PARTICLE_STYLES_ID)));
    assert!(actions.contains(&Action::SetNavbar(NavbarTheme::Resting)));
    assert!(site.is_started());
    assert!(site.petals().is_running());
    assert!(site.gallery().is_running());
    assert!(site.menu().is_enabled());
}

#[test]
fn start_twice_is_a_noop() {
    let mut site = started(&full_layout());
    let timers = site.pending_timers();
    assert!(site.start(0.0, &full_layout()).is_empty());
    assert_eq!(site.pending_timers(), timers);
}

#[test]
fn empty_page_starts_nothing() {
    let mut site = SiteCore::new(SiteConfig::default());
    let actions = site.start(0.0, &PageLayout::default());
    assert_eq!(actions, vec![Action::SetNavbar(NavbarTheme::Resting)]);
    assert_eq!(site.pending_timers(), 0);
    assert!(site.on_menu_toggle().is_empty());
    assert!(site.on_gallery_next().is_empty());
    assert!(site.on_load().is_empty());
}

#[test]
fn slow_gallery_wakeup_fits_set_timeout() {
    let config = SiteConfig { gallery_auto_advance_ms: 3e9, ..SiteConfig::default() };
    let mut site = SiteCore::new(config);
    let layout = PageLayout {
        has_gallery: true,
        gallery_item_count: 8,
        gallery_viewport_width: 1000.0,
        window_width: 1280.0,
        ..PageLayout::default()
    };
    site.start(0.0, &layout);
    let Some(deadline) = site.next_deadline() else {
        panic!("gallery timer not armed");
    };
    assert_eq!(deadline, 3e9);
    assert!(i32::try_from(delay_until(deadline, 0.0)).is_ok());
}

#[test]
fn stop_cancels_timers_and_cleans_up() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut site = started(&full_layout());
    site.on_menu_toggle();
    site.advance_to(4_500.0, &mut rng);

    let actions = site.stop();
    assert!(actions.contains(&Action::SetMenuOpen(false)));
    assert!(actions.iter().any(|a| matches!(a, Action::RemovePetal { .. })));
    assert!(actions.iter().any(|a| matches!(a, Action::RemoveParticle { .. })));
    assert_eq!(site.pending_timers(), 0);
    assert_eq!(site.next_deadline(), None);
    assert!(site.advance_to(60_000.0, &mut rng).is_empty());
    assert!(site.stop().is_empty());
}

// =============================================================
// Timers
// =============================================================

#[test]
fn petal_count_never_exceeds_five() {
    let config = SiteConfig { petal_interval_ms: 250.0, petal_lifetime_ms: 10_000.0, ..SiteConfig::default() };
    let mut site = SiteCore::new(config);
    site.start(0.0, &full_layout());
    let mut rng = StdRng::seed_from_u64(99);
    let mut live = 0;
    let mut now = 0.0;
    while now < 60_000.0 {
        now += 137.0;
        let actions = site.advance_to(now, &mut rng);
        count_live_petals(&actions, &mut live);
        assert!(live <= 5, "live petals {live} at {now}ms");
        assert_eq!(usize::try_from(live).unwrap(), site.petals().live_count());
    }
    assert!(live >= 4);
}

#[test]
fn petals_use_window_width_for_position() {
    let mut rng = StdRng::seed_from_u64(4);
    let mut site = started(&full_layout());
    site.on_resize(300.0, 1000.0);
    for action in site.advance_to(20_000.0, &mut rng) {
        if let Action::AppendPetal { left_px, .. } = action {
            assert!((0.0..300.0).contains(&left_px));
        }
    }
}

#[test]
fn late_wakeup_times_petal_expiry_from_spawn() {
    let mut rng = StdRng::seed_from_u64(8);
    let layout = PageLayout { has_petal_container: true, window_width: 800.0, ..PageLayout::default() };
    let mut site = started(&layout);
    let actions = site.advance_to(4_000.0, &mut rng);
    let appended = actions.iter().filter(|a| matches!(a, Action::AppendPetal { .. })).count();
    let removed = actions.iter().filter(|a| matches!(a, Action::RemovePetal { .. })).count();
    assert_eq!(appended, 3);
    assert_eq!(removed, 1);
}

#[test]
fn gallery_auto_advances_every_four_seconds() {
    let mut rng = StdRng::seed_from_u64(0);
    let layout = PageLayout { has_gallery: true, gallery_item_count: 5, gallery_viewport_width: 1000.0, ..PageLayout::default() };
    let mut site = started(&layout);
    assert!(site.advance_to(3_999.0, &mut rng).is_empty());
    assert_eq!(site.advance_to(4_000.0, &mut rng), vec![Action::ScrollGallery { left_px: 320.0 }]);
    assert_eq!(site.advance_to(12_000.0, &mut rng), vec![
        Action::ScrollGallery { left_px: 640.0 },
        Action::ScrollGallery { left_px: 0.0 },
    ]);
}

#[test]
fn gallery_resize_after_scrolling_clamps_index() {
    let layout = PageLayout { has_gallery: true, gallery_item_count: 10, gallery_viewport_width: 640.0, ..PageLayout::default() };
    let mut site = started(&layout);
    for _ in 0..7 {
        site.on_gallery_next();
    }
    assert_eq!(site.gallery().index(), 7);
    assert_eq!(site.on_resize(1600.0, 1600.0), vec![Action::ScrollGallery { left_px: 1600.0 }]);
    assert_eq!(site.gallery().index(), 5);
    assert!(site.gallery().index() <= site.gallery().max_index());
}

#[test]
fn hero_intro_finishes_after_delay() {
    let mut rng = StdRng::seed_from_u64(0);
    let layout = PageLayout { has_hero: true, ..PageLayout::default() };
    let mut site = started(&layout);
    assert_eq!(site.on_load(), vec![Action::HeroIntro(HeroIntroPhase::Start)]);
    assert!(site.on_load().is_empty());
    let actions = site.advance_to(100.0, &mut rng);
    assert_eq!(actions, vec![Action::HeroIntro(HeroIntroPhase::Finish)]);
}

// =============================================================
// Events
// =============================================================

#[test]
fn menu_double_toggle_restores_state() {
    let mut site = started(&full_layout());
    assert_eq!(site.on_menu_toggle(), vec![Action::SetMenuOpen(true)]);
    assert_eq!(site.on_menu_toggle(), vec![Action::SetMenuOpen(false)]);
    assert!(!site.menu().is_open());
}

#[test]
fn nav_link_and_escape_close_menu() {
    let mut site = started(&full_layout());
    site.on_menu_toggle();
    assert_eq!(site.on_nav_link_click(), vec![Action::SetMenuOpen(false)]);
    site.on_menu_toggle();
    assert_eq!(site.on_key_down("Escape"), vec![Action::SetMenuOpen(false)]);
    site.on_menu_toggle();
    assert_eq!(site.on_document_click(ClickTarget::Outside), vec![Action::SetMenuOpen(false)]);
}

#[test]
fn anchor_click_aligns_section_below_navbar() {
    let mut site = started(&full_layout());
    assert_eq!(site.on_anchor_click(Some(1_200.0), 80.0), vec![Action::ScrollWindowTo { top: 1_100.0 }]);
    assert!(site.on_anchor_click(None, 80.0).is_empty());
    assert_eq!(site.scroll_to_section(Some(500.0), 60.0), vec![Action::ScrollWindowTo { top: 420.0 }]);
}

#[test]
fn phone_contact_click_confirms_then_dials() {
    let mut site = started(&full_layout());
    let actions = site.on_contact_click("fas fa-phone", "+1 555 123 4567");
    assert_eq!(actions, vec![Action::ConfirmCall {
        prompt: "Call +1 555 123 4567?".to_owned(),
        href: "tel:+15551234567".to_owned(),
    }]);
}

#[test]
fn instagram_contact_uses_configured_base() {
    let config = SiteConfig { instagram_base_url: "https://ig.example".to_owned(), ..SiteConfig::default() };
    let mut site = SiteCore::new(config);
    site.start(0.0, &full_layout());
    assert_eq!(site.on_contact_click("fab fa-instagram", "@rose"), vec![Action::OpenTab {
        url: "https://ig.example/rose".to_owned()
    }]);
}

#[test]
fn scroll_is_throttled_to_one_frame() {
    let mut site = started(&full_layout());
    assert!(site.on_scroll());
    assert!(!site.on_scroll());
    assert_eq!(site.on_animation_frame(250.0), vec![Action::SetNavbar(NavbarTheme::Scrolled)]);
    assert!(site.on_scroll());
    assert!(site.on_animation_frame(260.0).is_empty());
}

#[test]
fn scroll_reveal_fires_once_per_element() {
    let mut site = started(&full_layout());
    assert_eq!(site.on_intersection(2, true), vec![Action::Reveal { index: 2 }]);
    assert!(site.on_intersection(2, true).is_empty());
    assert_eq!(site.reveal().revealed_count(), 1);
}
