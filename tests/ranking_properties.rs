//! Property-based tests for the ranking engine against a naive full sort.
//!
//! Scores and publish times are drawn from small ranges so ties are common.

mod support;

use proptest::prelude::*;

use storefront::{
    count_compatible, rank, retain_top_k, total_pages, Item, ListingRequest, Platform,
    PlatformFilter, SortOrder, Storefront, MAX_PAGES, PAGE_SIZE,
};
use support::catalog::{app, naive_ranking, store_with, COLLECTION_ID};

// =============================================================================
// Strategies
// =============================================================================

fn arb_platforms() -> impl Strategy<Value = Vec<Platform>> {
    proptest::sample::subsequence(Platform::ALL.to_vec(), 0..=4)
}

fn arb_apps(max: usize) -> impl Strategy<Value = Vec<Item>> {
    proptest::collection::vec((0u64..8, 0i64..6, arb_platforms()), 0..max).prop_map(|rows| {
        rows
            .into_iter()
            .enumerate()
            .map(|(n, (thumbs_up, published, platforms))| {
                app(&format!("app-{:04}", n), thumbs_up, published, &platforms)
            })
            .collect()
    })
}

fn arb_order() -> impl Strategy<Value = SortOrder> {
    prop_oneof![Just(SortOrder::Popular), Just(SortOrder::New)]
}

fn arb_filter() -> impl Strategy<Value = PlatformFilter> {
    prop_oneof![
        Just(PlatformFilter::All),
        proptest::sample::select(Platform::ALL.to_vec()).prop_map(PlatformFilter::Only),
    ]
}

fn ids(items: &[&Item]) -> Vec<String> {
    items.iter().map(|item| item.id.clone()).collect()
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn retained_top_k_matches_naive_prefix(
        apps in arb_apps(120),
        order in arb_order(),
        filter in arb_filter(),
        k in 1usize..60,
    ) {
        let expected = naive_ranking(&apps, filter, order);
        let ranked = rank(retain_top_k(&apps, filter, order, k), order);

        prop_assert_eq!(ranked.len(), k.min(expected.len()));
        let expected_ids: Vec<String> =
            expected.iter().take(k).map(|app| app.id.clone()).collect();
        prop_assert_eq!(ids(&ranked), expected_ids);
    }

    #[test]
    fn retained_set_ignores_input_order(
        apps in arb_apps(80),
        order in arb_order(),
        k in 1usize..30,
    ) {
        let mut reversed = apps.clone();
        reversed.reverse();

        let forward = rank(retain_top_k(&apps, PlatformFilter::All, order, k), order);
        let backward = rank(retain_top_k(&reversed, PlatformFilter::All, order, k), order);
        prop_assert_eq!(ids(&forward), ids(&backward));
    }

    #[test]
    fn every_page_matches_the_naive_window(
        apps in arb_apps(300),
        order in arb_order(),
        filter in arb_filter(),
    ) {
        let expected = naive_ranking(&apps, filter, order);
        let compatible = count_compatible(&apps, filter);
        prop_assert_eq!(compatible, expected.len());

        let pages = total_pages(compatible);
        prop_assert_eq!(pages, compatible.div_ceil(PAGE_SIZE).min(MAX_PAGES));

        let storefront = Storefront::new(store_with(apps));
        for page in 1..=pages {
            let request = ListingRequest::new(COLLECTION_ID)
                .order(order)
                .platform(filter)
                .page(page);
            let result = storefront.collection_page(&request).unwrap();
            prop_assert_eq!(result.pages, pages);

            let start = (page - 1) * PAGE_SIZE;
            let end = (page * PAGE_SIZE).min(expected.len());
            let expected_ids: Vec<&str> =
                expected[start..end].iter().map(|app| app.id.as_str()).collect();
            let got: Vec<&str> = result.cards.iter().map(|card| card.id.as_str()).collect();
            prop_assert_eq!(got, expected_ids);

            if page < pages || compatible > MAX_PAGES * PAGE_SIZE {
                prop_assert_eq!(result.cards.len(), PAGE_SIZE);
            } else {
                prop_assert_eq!(result.cards.len(), compatible - PAGE_SIZE * (pages - 1));
            }
        }

        let past_end = ListingRequest::new(COLLECTION_ID)
            .order(order)
            .platform(filter)
            .page(pages + 1);
        prop_assert!(storefront.collection_page(&past_end).is_err());
    }
}
