//! Paginated list envelope decoding.
//!
//! List endpoints answer with
//! `{data, total, page, limit, totalPages, hasNext, hasPrev}`. The envelope
//! fields are passed through as received; consistency between them
//! (`data.len() <= limit`, `hasNext == page < totalPages`) is the server's
//! responsibility and is not checked here.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::Display;

/// One decoded page of a list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResult<T> {
    pub data: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub limit: u64,
    pub total_pages: u64,
    pub has_next: bool,
    pub has_prev: bool,
}

impl<T> PaginatedResult<T> {
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Same envelope, items transformed.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PaginatedResult<U> {
        PaginatedResult {
            data: self.data.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            limit: self.limit,
            total_pages: self.total_pages,
            has_next: self.has_next,
            has_prev: self.has_prev,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("page envelope is not a JSON object")]
    NotAnObject,
    #[error("page envelope field `data` is not an array")]
    DataNotSequence,
    #[error("page envelope field `{0}` is missing")]
    MissingField(&'static str),
    #[error("page envelope field `{field}` is not {expected}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
    },
    #[error("page item {index} could not be decoded: {message}")]
    Item { index: usize, message: String },
}

fn count_field(
    obj: &serde_json::Map<String, Value>,
    field: &'static str,
) -> Result<u64, DecodeError> {
    obj.get(field)
        .ok_or(DecodeError::MissingField(field))?
        .as_u64()
        .ok_or(DecodeError::WrongType {
            field,
            expected: "a non-negative integer",
        })
}

fn flag_field(
    obj: &serde_json::Map<String, Value>,
    field: &'static str,
) -> Result<bool, DecodeError> {
    obj.get(field)
        .ok_or(DecodeError::MissingField(field))?
        .as_bool()
        .ok_or(DecodeError::WrongType {
            field,
            expected: "a boolean",
        })
}

/// Decode a paginated envelope, mapping each `data` element through `item`.
pub fn decode_page<T, E, F>(raw: &Value, mut item: F) -> Result<PaginatedResult<T>, DecodeError>
where
    F: FnMut(&Value) -> Result<T, E>,
    E: Display,
{
    let obj = raw.as_object().ok_or(DecodeError::NotAnObject)?;
    let items = obj
        .get("data")
        .ok_or(DecodeError::MissingField("data"))?
        .as_array()
        .ok_or(DecodeError::DataNotSequence)?;

    let data = items
        .iter()
        .enumerate()
        .map(|(index, v)| {
            item(v).map_err(|e| DecodeError::Item {
                index,
                message: e.to_string(),
            })
        })
        .collect::<Result<Vec<T>, DecodeError>>()?;

    Ok(PaginatedResult {
        data,
        total: count_field(obj, "total")?,
        page: count_field(obj, "page")?,
        limit: count_field(obj, "limit")?,
        total_pages: count_field(obj, "totalPages")?,
        has_next: flag_field(obj, "hasNext")?,
        has_prev: flag_field(obj, "hasPrev")?,
    })
}

/// `decode_page` with serde deserialization of each item.
pub fn decode_page_as<T: DeserializeOwned>(raw: &Value) -> Result<PaginatedResult<T>, DecodeError> {
    decode_page(raw, |v| T::deserialize(v))
}
