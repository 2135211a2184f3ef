// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use serde_json::json;
use yare::parameterized;

#[test]
fn parse_full_filter() {
    let filter = Filter::parse(
        r#"{"where":{"_visibility":"public"},"fields":["name"],"order":["name ASC"],
            "limit":10,"skip":5,"include":[{"relation":"children"}]}"#,
    )
    .unwrap();
    assert_eq!(filter.predicate, Some(Where::Raw(json!({"_visibility": "public"}))));
    assert_eq!(filter.fields, Some(json!(["name"])));
    assert_eq!(filter.order, Some(Order::Many(vec!["name ASC".into()])));
    assert_eq!(filter.limit, Some(10));
    assert_eq!(filter.skip, Some(5));
    assert_eq!(filter.include, Some(json!([{"relation": "children"}])));
    assert!(filter.extra.is_empty());
}

#[test]
fn parse_single_order_clause() {
    let filter = Filter::parse(r#"{"order":"name DESC"}"#).unwrap();
    assert_eq!(filter.order, Some(Order::One("name DESC".into())));
}

#[test]
fn parse_null_where_is_absent() {
    let filter = Filter::parse(r#"{"where":null,"limit":1}"#).unwrap();
    assert!(filter.predicate.is_none());
}

#[test]
fn unknown_properties_pass_through() {
    let filter = Filter::parse(r#"{"limit":3,"deleted":true,"scope":{"x":1}}"#).unwrap();
    assert_eq!(filter.extra.get("deleted"), Some(&json!(true)));
    let out = serde_json::to_value(&filter).unwrap();
    assert_eq!(out, json!({"limit": 3, "deleted": true, "scope": {"x": 1}}));
}

#[test]
fn absent_properties_are_not_serialized() {
    let out = serde_json::to_value(Filter::default()).unwrap();
    assert_eq!(out, json!({}));
}

#[test]
fn parse_rejects_bad_limit() {
    let err = Filter::parse(r#"{"limit":"ten"}"#).unwrap_err();
    assert!(matches!(err, Error::InvalidFilter(_)));
}

#[parameterized(
    string = { r#"{"where":"a=1"}"# },
    array = { r#"{"where":[{"a":1}]}"# },
    number = { r#"{"where":1}"# },
)]
fn parse_rejects_non_object_where(text: &str) {
    let err = Filter::parse(text).unwrap_err();
    assert!(err.to_string().contains("'where' must be an object"));
}

#[parameterized(
    empty_operator_object = { json!({"meta": {}}) },
    fields_beside_and = { json!({"x": 1, "and": [{"y": 2}]}) },
    operand_shape_unchecked = { json!({"tags": {"inq": "a,b"}}) },
    and_not_an_array = { json!({"and": {}}) },
    repeated_operators = { json!({"n": {"gt": 1, "lt": 9, "custom": [1]}}) },
)]
fn caller_where_round_trips_unchanged(predicate: serde_json::Value) {
    let text = json!({"where": predicate.clone(), "limit": 1}).to_string();
    let filter = Filter::parse(&text).unwrap();
    assert_eq!(filter.predicate, Some(Where::Raw(predicate.clone())));
    let out = serde_json::to_value(&filter).unwrap();
    assert_eq!(out["where"], predicate);
}

#[test]
fn with_predicate_keeps_other_properties() {
    let filter = Filter {
        limit: Some(10),
        order: Some(Order::One("name ASC".into())),
        ..Filter::default()
    };
    let out = filter.clone().with_predicate(Where::eq("a", 1));
    assert_eq!(out.limit, filter.limit);
    assert_eq!(out.order, filter.order);
    assert_eq!(out.predicate, Some(Where::eq("a", 1)));
}
