use super::*;

fn enabled() -> MobileMenu {
    let mut menu = MobileMenu::new();
    assert!(menu.start(true, true));
    menu
}

#[test]
fn toggle_twice_restores_closed_state() {
    let mut menu = enabled();
    assert_eq!(menu.toggle(), Some(Action::SetMenuOpen(true)));
    assert_eq!(body_overflow(menu.is_open()), "hidden");
    assert_eq!(menu.toggle(), Some(Action::SetMenuOpen(false)));
    assert!(!menu.is_open());
    assert_eq!(body_overflow(menu.is_open()), "");
}

#[test]
fn missing_elements_disable_menu() {
    let mut menu = MobileMenu::new();
    assert!(!menu.start(true, false));
    assert_eq!(menu.toggle(), None);
    assert!(!menu.is_open());
}

#[test]
fn outside_click_closes_open_menu() {
    let mut menu = enabled();
    menu.toggle();
    assert_eq!(menu.on_document_click(ClickTarget::Menu), None);
    assert_eq!(menu.on_document_click(ClickTarget::Hamburger), None);
    assert_eq!(menu.on_document_click(ClickTarget::Outside), Some(Action::SetMenuOpen(false)));
}

#[test]
fn outside_click_on_closed_menu_is_silent() {
    let mut menu = enabled();
    assert_eq!(menu.on_document_click(ClickTarget::Outside), None);
}

#[test]
fn escape_closes_only_when_open() {
    let mut menu = enabled();
    assert_eq!(menu.on_key_down("Escape"), None);
    menu.toggle();
    assert_eq!(menu.on_key_down("Enter"), None);
    assert_eq!(menu.on_key_down("Escape"), Some(Action::SetMenuOpen(false)));
}
