use super::*;

// =============================================================================
// placeholders
// =============================================================================

#[test]
fn skeleton_count_defaults_to_page_size() {
    assert_eq!(skeleton_count(None), 10);
}

#[test]
fn skeleton_count_uses_rounded_item_count() {
    assert_eq!(skeleton_count(Some(4)), 4);
    assert_eq!(skeleton_count(Some(0)), 0);
}

#[test]
fn placeholder_keys_follow_circle_variant() {
    assert_eq!(placeholder_keys(CardVariant::Circle, 3), vec!["card-circle-0", "card-circle-1", "card-circle-2"]);
}

#[test]
fn placeholder_keys_follow_rounded_variant() {
    let keys = placeholder_keys(CardVariant::Rounded, skeleton_count(Some(2)));
    assert_eq!(keys, vec!["card-rounded-0", "card-rounded-1"]);
}

#[test]
fn default_variant_is_circle() {
    assert_eq!(CardVariant::default(), CardVariant::Circle);
}

// =============================================================================
// cards
// =============================================================================

#[test]
fn category_href_points_at_category_route() {
    assert_eq!(category_href("fruits-vegetables"), "/category/fruits-vegetables");
}

#[test]
fn card_size_follows_variant() {
    use super::super::category_card::CardSize;

    assert_eq!(CardSize::for_variant(CardVariant::Rounded), CardSize::Medium);
    assert_eq!(CardSize::for_variant(CardVariant::Circle), CardSize::Small);
}
