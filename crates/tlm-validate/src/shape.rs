//! # Structural Shape Check
//!
//! A submission is accepted in exactly two shapes:
//!
//! ```text
//! {"events": [ {...}, {...} ]}               flat form
//! {"request": {"events": [ {...}, {...} ]}}  wrapped form
//! ```
//!
//! A non-empty `request` object is always the container, even when it lacks
//! `events` and the outer object has them. The top level is the container
//! only when `request` is absent, empty, or not an object.
//!
//! Only presence and type of `events` are checked. Event contents are never
//! inspected.

use serde_json::{Map, Value};

/// Key of the optional wrapper object.
pub const REQUEST_KEY: &str = "request";

/// Key of the events array.
pub const EVENTS_KEY: &str = "events";

/// Which object was chosen as the `events` container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Container {
    /// The top-level object.
    Flat,
    /// The object under `request`.
    Wrapped,
}

/// Select the object that must hold `events`.
pub fn events_container(payload: &Map<String, Value>) -> (&Map<String, Value>, Container) {
    match payload.get(REQUEST_KEY) {
        Some(Value::Object(inner)) if !inner.is_empty() => (inner, Container::Wrapped),
        _ => (payload, Container::Flat),
    }
}

/// Number of events in the submission, or `None` if the shape is invalid.
///
/// Returns `Some(n)` with `n > 0` only when the selected container holds a
/// non-empty `events` array.
pub fn count_events(payload: &Map<String, Value>) -> Option<usize> {
    let (container, _) = events_container(payload);
    match container.get(EVENTS_KEY) {
        Some(Value::Array(events)) if !events.is_empty() => Some(events.len()),
        _ => None,
    }
}
