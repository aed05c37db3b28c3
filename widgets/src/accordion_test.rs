use super::*;

fn open_flags(acc: &Accordion) -> Vec<bool> {
    acc.views().iter().map(|v| v.open).collect()
}

#[test]
fn starts_closed_without_open_markup() {
    let acc = Accordion::from_markup(&[false, false, false]);
    assert_eq!(acc.len(), 3);
    assert_eq!(acc.open_index(), None);
}

#[test]
fn click_opens_item() {
    let mut acc = Accordion::from_markup(&[false, false, false]);
    let views = acc.toggle(1);
    assert_eq!(open_flags(&acc), vec![false, true, false]);
    assert_eq!(views[1].icon_transform, ROTATE_OPEN);
    assert_eq!(views[0].icon_transform, ROTATE_CLOSED);
}

#[test]
fn opening_b_closes_a() {
    let mut acc = Accordion::from_markup(&[false, false]);
    acc.toggle(0);
    assert!(acc.is_open(0));
    acc.toggle(1);
    assert!(!acc.is_open(0));
    assert!(acc.is_open(1));
}

#[test]
fn clicking_open_item_closes_it() {
    let mut acc = Accordion::from_markup(&[false, false]);
    acc.toggle(0);
    acc.toggle(0);
    assert_eq!(acc.open_index(), None);
    assert_eq!(open_flags(&acc), vec![false, false]);
}

#[test]
fn at_most_one_open_after_any_click() {
    let mut acc = Accordion::from_markup(&[true, false, true, false]);
    for index in [2, 2, 0, 3, 1, 1, 3] {
        acc.toggle(index);
        assert!(open_flags(&acc).iter().filter(|open| **open).count() <= 1);
    }
}

#[test]
fn first_open_in_markup_wins() {
    let acc = Accordion::from_markup(&[false, true, true]);
    assert_eq!(acc.open_index(), Some(1));
}

#[test]
fn out_of_range_click_is_ignored() {
    let mut acc = Accordion::from_markup(&[true, false]);
    let views = acc.toggle(7);
    assert_eq!(acc.open_index(), Some(0));
    assert_eq!(views.len(), 2);
}

#[test]
fn empty_accordion() {
    let mut acc = Accordion::from_markup(&[]);
    assert!(acc.is_empty());
    assert!(acc.toggle(0).is_empty());
}
