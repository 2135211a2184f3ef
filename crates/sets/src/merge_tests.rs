// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use serde_json::json;
use sq_core::Order;
use yare::parameterized;

fn publics() -> Where {
    Where::eq("_visibility", "public")
}

fn roots() -> Where {
    Where::eq("_parentsCount", 0)
}

#[test]
fn single_without_caller_predicate_stands_alone() {
    let out = merge(Compiled::Single(publics()), None);
    assert_eq!(out.predicate, Some(publics()));
    assert_eq!(out, Filter::default().with_predicate(publics()));
}

#[test]
fn many_without_caller_predicate_is_anded() {
    let out = merge(Compiled::Many(vec![publics(), roots()]), None);
    assert_eq!(out.predicate, Some(Where::and(vec![publics(), roots()])));
}

#[test]
fn caller_predicate_comes_first() {
    let caller = Filter::default().with_predicate(Where::eq("kind", "article"));
    let out = merge(Compiled::Single(publics()), Some(&caller));
    assert_eq!(out.predicate, Some(Where::and(vec![Where::eq("kind", "article"), publics()])));
}

#[test]
fn caller_predicate_is_followed_by_every_sibling() {
    let caller = Filter::default().with_predicate(Where::eq("kind", "article"));
    let out = merge(Compiled::Many(vec![publics(), roots()]), Some(&caller));
    assert_eq!(
        out.predicate,
        Some(Where::and(vec![Where::eq("kind", "article"), publics(), roots()]))
    );
}

#[test]
fn other_properties_pass_through() {
    let caller = Filter::parse(
        r#"{"limit":10,"skip":20,"order":["name ASC","_createdDateTime DESC"],
            "fields":{"name":true},"include":[{"relation":"children"}],"deleted":false}"#,
    )
    .unwrap();
    let out = merge(Compiled::Single(publics()), Some(&caller));
    assert_eq!(out.limit, Some(10));
    assert_eq!(out.skip, Some(20));
    assert_eq!(
        out.order,
        Some(Order::Many(vec!["name ASC".into(), "_createdDateTime DESC".into()]))
    );
    assert_eq!(out.fields, Some(json!({"name": true})));
    assert_eq!(out.include, Some(json!([{"relation": "children"}])));
    assert_eq!(out.extra.get("deleted"), Some(&json!(false)));
    assert_eq!(out.predicate, Some(publics()));
}

#[test]
fn caller_filter_is_not_modified() {
    let caller = Filter::default().with_predicate(roots());
    let before = caller.clone();
    let _ = merge(Compiled::Single(publics()), Some(&caller));
    assert_eq!(caller, before);
}

#[test]
fn merged_filter_serializes_in_storage_form() {
    let caller = Filter::parse(r#"{"where":{"kind":"article"},"limit":5}"#).unwrap();
    let out = merge(Compiled::Single(publics()), Some(&caller));
    assert_eq!(
        serde_json::to_value(&out).unwrap(),
        json!({"where": {"and": [{"kind": "article"}, {"_visibility": "public"}]}, "limit": 5})
    );
}

#[parameterized(
    empty_operator_object = { json!({"meta": {}}) },
    fields_beside_and = { json!({"x": 1, "and": [{"y": 2}]}) },
    operand_shape_unchecked = { json!({"tags": {"inq": "a,b"}}) },
)]
fn caller_where_is_wrapped_verbatim(caller_where: serde_json::Value) {
    let caller = Filter::parse(&json!({"where": caller_where.clone()}).to_string()).unwrap();
    let out = merge(Compiled::Single(publics()), Some(&caller));
    assert_eq!(
        serde_json::to_value(&out).unwrap(),
        json!({"where": {"and": [caller_where, {"_visibility": "public"}]}})
    );
}
