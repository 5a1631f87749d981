use super::*;

#[test]
fn animated_class_detection() {
    assert!(is_animated("section animate-fade-up"));
    assert!(is_animated("animate-slide"));
    assert!(!is_animated("animate"));
    assert!(!is_animated("card"));
}

#[test]
fn each_element_reveals_once() {
    let mut reveal = ScrollReveal::default();
    reveal.start(3);
    assert_eq!(reveal.on_intersection(1, true), Some(Action::Reveal { index: 1 }));
    assert_eq!(reveal.on_intersection(1, true), None);
    assert_eq!(reveal.revealed_count(), 1);
}

#[test]
fn non_intersecting_and_unknown_entries_are_ignored() {
    let mut reveal = ScrollReveal::default();
    reveal.start(2);
    assert_eq!(reveal.on_intersection(0, false), None);
    assert_eq!(reveal.on_intersection(5, true), None);
    assert_eq!(reveal.revealed_count(), 0);
}

#[test]
fn complete_once_all_revealed() {
    let mut reveal = ScrollReveal::default();
    reveal.start(2);
    reveal.on_intersection(0, true);
    assert!(!reveal.is_complete());
    reveal.on_intersection(1, true);
    assert!(reveal.is_complete());
}
