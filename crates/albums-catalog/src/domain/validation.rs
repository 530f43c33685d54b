//! Validation of client-supplied album identifiers and fields.
//!
//! Error messages are part of the public HTTP contract and must not change.

use albums_core::album::{AlbumPatch, NewAlbum};
use albums_core::error::DomainError;
use serde_json::{Map, Value};

/// Returned when a path identifier is not a positive integer.
pub const INVALID_ALBUM_ID: &str = "Invalid album ID";
/// Returned when a create request omits a field.
pub const MISSING_REQUIRED_FIELDS: &str = "Missing required fields: title, artist, price, image_url";
/// Returned when a create request has a non-string text field.
pub const TEXT_FIELDS_MUST_BE_STRINGS: &str = "title, artist, and image_url must be strings";
/// Returned when a price is not a number or is negative. Zero is accepted.
pub const INVALID_PRICE: &str = "price must be a positive number";

/// Parses an album identifier taken from a request path.
///
/// The whole segment must be a base-10 integer of at least 1.
///
/// # Errors
///
/// Returns `DomainError::InvalidInput` if `raw` is not a positive integer.
pub fn parse_album_id(raw: &str) -> Result<i64, DomainError> {
    match raw.parse::<i64>() {
        Ok(id) if id >= 1 => Ok(id),
        _ => Err(DomainError::invalid(INVALID_ALBUM_ID)),
    }
}

/// Absent, `null`, `false`, zero and the empty string all count as missing.
fn is_missing(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null | Value::Bool(false)) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Number(n)) => n.as_f64() == Some(0.0),
        Some(_) => false,
    }
}

fn price_from(value: &Value) -> Result<f64, DomainError> {
    match value.as_f64() {
        Some(price) if price >= 0.0 => Ok(price),
        _ => Err(DomainError::invalid(INVALID_PRICE)),
    }
}

fn string_field(
    fields: &Map<String, Value>,
    name: &str,
    message: &str,
) -> Result<Option<String>, DomainError> {
    match fields.get(name) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(DomainError::invalid(message)),
    }
}

/// Validates the body of a create request.
///
/// Checks run in a fixed order and the first failure wins: presence of all
/// four fields, then string types, then the price.
///
/// # Errors
///
/// Returns `DomainError::InvalidInput` describing the first violation.
pub fn new_album_from_json(body: &Value) -> Result<NewAlbum, DomainError> {
    let Some(fields) = body.as_object() else {
        return Err(DomainError::invalid(MISSING_REQUIRED_FIELDS));
    };

    let missing = ["title", "artist", "image_url"]
        .iter()
        .any(|name| is_missing(fields.get(*name)))
        || !fields.contains_key("price");
    if missing {
        return Err(DomainError::invalid(MISSING_REQUIRED_FIELDS));
    }

    let (Some(title), Some(artist), Some(image_url)) = (
        fields.get("title").and_then(Value::as_str),
        fields.get("artist").and_then(Value::as_str),
        fields.get("image_url").and_then(Value::as_str),
    ) else {
        return Err(DomainError::invalid(TEXT_FIELDS_MUST_BE_STRINGS));
    };

    let price = fields
        .get("price")
        .ok_or_else(|| DomainError::invalid(MISSING_REQUIRED_FIELDS))
        .and_then(price_from)?;

    Ok(NewAlbum {
        title: title.to_owned(),
        artist: artist.to_owned(),
        price,
        image_url: image_url.to_owned(),
    })
}

/// Validates the body of a partial update.
///
/// Only supplied fields are checked, in the order title, artist, price,
/// image_url. An explicit `null` counts as supplied. A body that is not a
/// JSON object is treated as an empty update.
///
/// # Errors
///
/// Returns `DomainError::InvalidInput` naming the first offending field.
pub fn album_patch_from_json(body: &Value) -> Result<AlbumPatch, DomainError> {
    let Some(fields) = body.as_object() else {
        return Ok(AlbumPatch::default());
    };

    let title = string_field(fields, "title", "title must be a string")?;
    let artist = string_field(fields, "artist", "artist must be a string")?;
    let price = fields.get("price").map(price_from).transpose()?;
    let image_url = string_field(fields, "image_url", "image_url must be a string")?;

    Ok(AlbumPatch {
        title,
        artist,
        price,
        image_url,
    })
}
