//! End-to-end behaviour of query descriptors, from building to translation.

use prism_query::{
    Direction, Order, PageRequest, QueryDescriptor, QueryError, RequestTranslator, Sort,
    DEFAULT_PAGE,
};
use serde_json::json;

// ---------------------------------------------------------------------------
// Paging
// ---------------------------------------------------------------------------

#[test]
fn test_default_page_when_unset() {
    let query = QueryDescriptor::new();
    let page = query.page();
    assert_eq!((page.offset(), page.size()), (0, 10));
}

#[test]
fn test_fresh_descriptor_rejects_negative_size() {
    let mut query = QueryDescriptor::new();
    let err = query.set_page(0, -1).unwrap_err();
    assert!(matches!(err, QueryError::InvalidArgument(_)));
    assert_eq!(err.error_type(), "illegal_argument_exception");
    assert_eq!(query.page(), DEFAULT_PAGE);
}

#[test]
fn test_set_pageable_replaces_page() {
    let mut query = QueryDescriptor::new();
    query.set_page(10, 10).unwrap();
    let next = query.page().next();
    query.set_pageable(next);
    assert_eq!(query.page(), PageRequest::new(20, 10).unwrap());
}

// ---------------------------------------------------------------------------
// Scenario from a typical product listing
// ---------------------------------------------------------------------------

#[test]
fn test_product_listing_scenario() {
    let mut query = QueryDescriptor::new();
    query.add_indices(["products"]);
    query.add_fields(["name", "price"]);
    query.set_page(20, 5).unwrap();
    query.add_sort(Sort::new(vec![Order::from(("price", Direction::Desc))]));

    assert_eq!(query.indices(), ["products"]);
    assert_eq!(query.fields(), ["name", "price"]);
    assert_eq!((query.page().offset(), query.page().size()), (20, 5));
    assert_eq!(query.sort().unwrap().orders(), &[Order::desc("price")]);

    let request = RequestTranslator::default().translate(&query).unwrap();
    assert_eq!(request.path, "/products/_search");
    assert_eq!(
        serde_json::to_value(&request.body).unwrap(),
        json!({
            "from": 20,
            "size": 5,
            "sort": [{"price": {"order": "desc"}}],
            "_source": ["name", "price"]
        })
    );
}

// ---------------------------------------------------------------------------
// Lists and sort accumulation
// ---------------------------------------------------------------------------

#[test]
fn test_lists_are_independent() {
    let mut query = QueryDescriptor::new();
    query.add_indices(["i"]);
    query.add_types(["t"]);
    query.add_fields(["f"]);
    assert_eq!(query.indices(), ["i"]);
    assert_eq!(query.types(), ["t"]);
    assert_eq!(query.fields(), ["f"]);
}

#[test]
fn test_sort_accumulates_across_calls() {
    let mut query = QueryDescriptor::new();
    assert!(query.sort().is_none());

    query.add_sort(Sort::by(["category"]));
    query.add_sort(Order::desc("price"));
    query.add_sort(Order::asc("category"));

    let fields: Vec<String> = query.sort().unwrap().iter().map(Order::to_string).collect();
    assert_eq!(fields, ["category:asc", "price:desc", "category:asc"]);
}

#[test]
fn test_empty_sort_is_still_present() {
    let mut query = QueryDescriptor::new();
    query.add_sort(Sort::default());
    let sort = query.sort().unwrap();
    assert!(sort.is_empty());

    let request = RequestTranslator::default().translate(&query).unwrap();
    assert_eq!(request.body.sort, Some(vec![]));
}

// ---------------------------------------------------------------------------
// Stored descriptors
// ---------------------------------------------------------------------------

#[test]
fn test_descriptor_from_json() {
    let query: QueryDescriptor = serde_json::from_value(json!({
        "page": {"offset": 40, "size": 20},
        "sort": [{"property": "ts", "direction": "desc"}],
        "indices": ["logs-*"],
        "types": ["event"]
    }))
    .unwrap();

    let request = RequestTranslator::default().translate(&query).unwrap();
    assert_eq!(request.path, "/logs-*/event/_search");
    assert_eq!(request.body.from, 40);
    assert_eq!(request.body.size, 20);
    assert!(request.body.source.is_none());
}
