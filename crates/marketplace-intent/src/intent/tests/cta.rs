use crate::intent::{generate_cta, ActionId, Intent};

#[test]
fn valuation_page_offers_free_valuation() {
    let pair = generate_cta(Intent::Seller, "/valuation");
    assert_eq!(pair.primary.text, "Get Free Valuation");
    assert_eq!(pair.primary.action, ActionId::BusinessValuation);
    assert_eq!(pair.secondary.action, ActionId::SignupSeller);
}

#[test]
fn seller_landing_page_also_points_to_valuation() {
    let pair = generate_cta(Intent::Seller, "/for-sellers");
    assert_eq!(pair.primary.action, ActionId::BusinessValuation);
    assert_ne!(pair.primary.text, "Get Free Valuation");
}

#[test]
fn valuation_refinement_wins_over_seller_landing() {
    let pair = generate_cta(Intent::Seller, "/for-sellers/valuation");
    assert_eq!(pair.primary.text, "Get Free Valuation");
}

#[test]
fn other_seller_pages_offer_listing() {
    let pair = generate_cta(Intent::Seller, "/business/123");
    assert_eq!(pair.primary.text, "List Your Business");
    assert_eq!(pair.primary.action, ActionId::BusinessListing);
}

#[test]
fn buyer_and_neutral_pairs_ignore_the_path() {
    assert_eq!(
        generate_cta(Intent::Buyer, "/valuation"),
        generate_cta(Intent::Buyer, "/search")
    );
    assert_eq!(
        generate_cta(Intent::Neutral, "/valuation"),
        generate_cta(Intent::Neutral, "/")
    );

    let buyer = generate_cta(Intent::Buyer, "/");
    assert_eq!(buyer.primary.action, ActionId::SignupBuyer);
    assert_eq!(buyer.secondary.action, ActionId::ExploreAlternative);

    let neutral = generate_cta(Intent::Neutral, "/");
    assert_eq!(neutral.primary.action, ActionId::SignupNeutral);
    assert_eq!(neutral.secondary.action, ActionId::Login);
}

#[test]
fn every_pair_carries_a_style_token() {
    for intent in [Intent::Buyer, Intent::Seller, Intent::Neutral] {
        let pair = generate_cta(intent, "/");
        assert!(!pair.primary.style_token.is_empty());
        assert!(!pair.secondary.style_token.is_empty());
        assert_ne!(pair.primary.style_token, pair.secondary.style_token);
    }
}
