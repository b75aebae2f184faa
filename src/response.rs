//! Response envelope helpers. Every body is a single-key object: the resource
//! name (`article`, `comments`, ...) or `msg`.

use axum::{http::StatusCode, Json};
use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

#[derive(Serialize, Debug)]
pub struct Msg {
    pub msg: String,
}

pub type Keyed<T> = (StatusCode, Json<BTreeMap<&'static str, T>>);

fn keyed<T: Serialize>(status: StatusCode, key: &'static str, data: T) -> Keyed<T> {
    (status, Json(BTreeMap::from([(key, data)])))
}

pub fn ok<T: Serialize>(key: &'static str, data: T) -> Keyed<T> {
    keyed(StatusCode::OK, key, data)
}

pub fn created<T: Serialize>(key: &'static str, data: T) -> Keyed<T> {
    keyed(StatusCode::CREATED, key, data)
}

pub fn message(status: StatusCode, msg: &str) -> (StatusCode, Json<Msg>) {
    (status, Json(Msg { msg: msg.to_string() }))
}

/// Serialize a timestamp as ISO-8601 UTC with millisecond precision.
pub fn iso_millis<S: Serializer>(ts: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(&ts.format("%Y-%m-%dT%H:%M:%S%.3fZ"))
}
