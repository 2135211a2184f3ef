// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON form of predicates.
//!
//! Serialization groups operators on the same field into one operator object
//! and writes plain equality as `field: value`. Parsing accepts any object
//! mixing field keys with `and` / `or` keys; mixed objects become a
//! conjunction with the field comparisons first.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::{Error, Result};

use super::expr::{Cond, Where};

impl From<&Where> for Value {
    fn from(predicate: &Where) -> Self {
        match predicate {
            Where::Fields(fields) => fields_to_value(fields),
            Where::And(parts) => combinator("and", parts),
            Where::Or(parts) => combinator("or", parts),
            Where::Raw(value) => value.clone(),
        }
    }
}

impl From<Where> for Value {
    fn from(predicate: Where) -> Self {
        Value::from(&predicate)
    }
}

fn combinator(key: &str, parts: &[Where]) -> Value {
    let mut map = Map::new();
    map.insert(key.to_string(), Value::Array(parts.iter().map(Value::from).collect()));
    Value::Object(map)
}

fn fields_to_value(fields: &[(String, Cond)]) -> Value {
    // The same operator twice on one field can't share an operator object.
    let repeated = fields.iter().enumerate().any(|(i, (name, cond))| {
        fields[..i].iter().any(|(n, c)| n == name && c.op() == cond.op())
    });
    if repeated {
        let parts: Vec<Where> = fields
            .iter()
            .map(|(name, cond)| Where::field(name.clone(), cond.clone()))
            .collect();
        return combinator("and", &parts);
    }

    let mut grouped: Vec<(&str, Vec<&Cond>)> = Vec::new();
    for (name, cond) in fields {
        match grouped.iter_mut().find(|(n, _)| *n == name.as_str()) {
            Some((_, conds)) => conds.push(cond),
            None => grouped.push((name.as_str(), vec![cond])),
        }
    }

    let mut map = Map::new();
    for (name, conds) in grouped {
        let value = match conds.as_slice() {
            [Cond::Eq(v)] if !v.is_object() => v.clone(),
            _ => {
                let mut ops = Map::new();
                for cond in conds {
                    ops.insert(cond.op().to_string(), cond_operand(cond));
                }
                Value::Object(ops)
            }
        };
        map.insert(name.to_string(), value);
    }
    Value::Object(map)
}

fn cond_operand(cond: &Cond) -> Value {
    match cond {
        Cond::Eq(v)
        | Cond::Neq(v)
        | Cond::Gt(v)
        | Cond::Gte(v)
        | Cond::Lt(v)
        | Cond::Lte(v)
        | Cond::Other(_, v) => v.clone(),
        Cond::Between(lo, hi) => Value::Array(vec![lo.clone(), hi.clone()]),
        Cond::Inq(items) | Cond::Nin(items) => Value::Array(items.clone()),
        Cond::Like(s) | Cond::Nlike(s) | Cond::Regexp(s) => Value::String(s.clone()),
        Cond::Exists(b) => Value::Bool(*b),
    }
}

impl TryFrom<&Value> for Where {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self> {
        let map = match value {
            Value::Object(map) => map,
            other => {
                return Err(Error::InvalidWhere(format!(
                    "expected an object, got {}",
                    kind(other)
                )))
            }
        };

        let mut fields = Vec::new();
        let mut parts = Vec::new();
        for (key, val) in map {
            match key.as_str() {
                "and" | "or" => {
                    let items = val.as_array().ok_or_else(|| {
                        Error::InvalidWhere(format!("'{key}' must be an array, got {}", kind(val)))
                    })?;
                    let branches = items.iter().map(Where::try_from).collect::<Result<Vec<_>>>()?;
                    parts.push(if key == "and" { Where::And(branches) } else { Where::Or(branches) });
                }
                _ => parse_field(key, val, &mut fields)?,
            }
        }

        if !fields.is_empty() || parts.is_empty() {
            parts.insert(0, Where::Fields(fields));
        }
        if parts.len() == 1 {
            Ok(parts.remove(0))
        } else {
            Ok(Where::And(parts))
        }
    }
}

impl TryFrom<Value> for Where {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        Where::try_from(&value)
    }
}

fn parse_field(name: &str, value: &Value, fields: &mut Vec<(String, Cond)>) -> Result<()> {
    match value {
        Value::Object(ops) if !ops.is_empty() => {
            for (op, operand) in ops {
                fields.push((name.to_string(), parse_cond(name, op, operand)?));
            }
        }
        _ => fields.push((name.to_string(), Cond::Eq(value.clone()))),
    }
    Ok(())
}

fn parse_cond(field: &str, op: &str, operand: &Value) -> Result<Cond> {
    let cond = match op {
        "eq" => Cond::Eq(operand.clone()),
        "neq" => Cond::Neq(operand.clone()),
        "gt" => Cond::Gt(operand.clone()),
        "gte" => Cond::Gte(operand.clone()),
        "lt" => Cond::Lt(operand.clone()),
        "lte" => Cond::Lte(operand.clone()),
        "between" => match operand.as_array().map(Vec::as_slice) {
            Some([lo, hi]) => Cond::Between(lo.clone(), hi.clone()),
            _ => {
                return Err(Error::InvalidWhere(format!(
                    "'{field}.between' must be a two-element array"
                )))
            }
        },
        "inq" | "nin" => {
            let items = operand.as_array().cloned().ok_or_else(|| {
                Error::InvalidWhere(format!("'{field}.{op}' must be an array, got {}", kind(operand)))
            })?;
            if op == "inq" {
                Cond::Inq(items)
            } else {
                Cond::Nin(items)
            }
        }
        "like" | "nlike" | "regexp" => match operand.as_str() {
            Some(pattern) if op == "like" => Cond::Like(pattern.to_string()),
            Some(pattern) if op == "nlike" => Cond::Nlike(pattern.to_string()),
            Some(pattern) => Cond::Regexp(pattern.to_string()),
            None => Cond::Other(op.to_string(), operand.clone()),
        },
        "exists" => match operand.as_bool() {
            Some(b) => Cond::Exists(b),
            None => Cond::Other(op.to_string(), operand.clone()),
        },
        _ => Cond::Other(op.to_string(), operand.clone()),
    };
    Ok(cond)
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl Serialize for Where {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        Value::from(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Where {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Where::try_from(&value).map_err(de::Error::custom)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
