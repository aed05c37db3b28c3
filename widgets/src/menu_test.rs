use super::*;

#[test]
fn default_is_closed() {
    assert!(!MobileMenu::default().is_open());
}

#[test]
fn toggle_opens_closed_menu() {
    let mut menu = MobileMenu::from_markup(false);
    let view = menu.toggle();
    assert!(menu.is_open());
    assert_eq!(view.panel_classes, [("hidden", false), ("open", true)]);
    assert_eq!(view.icon_class, ICON_CLOSE);
}

#[test]
fn toggle_twice_returns_to_closed() {
    let mut menu = MobileMenu::from_markup(false);
    menu.toggle();
    let view = menu.toggle();
    assert!(!menu.is_open());
    assert_eq!(view.panel_classes, [("hidden", true), ("open", false)]);
    assert_eq!(view.icon_class, ICON_OPEN);
}

#[test]
fn markup_open_class_seeds_state() {
    let mut menu = MobileMenu::from_markup(true);
    assert!(menu.is_open());
    assert_eq!(menu.toggle().icon_class, ICON_OPEN);
}
