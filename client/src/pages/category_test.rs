use super::*;

#[test]
fn title_from_slug_capitalizes_words() {
    assert_eq!(title_from_slug("fruits-vegetables"), "Fruits Vegetables");
    assert_eq!(title_from_slug("meat_fish"), "Meat Fish");
}

#[test]
fn title_from_slug_skips_empty_segments() {
    assert_eq!(title_from_slug("--bakery--"), "Bakery");
    assert_eq!(title_from_slug(""), "");
}
