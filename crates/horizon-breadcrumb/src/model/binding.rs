//! Display-path binding.
//!
//! Item buttons without an item template show text taken from the item
//! through a *display path*: a dot-separated list of member names evaluated
//! against the item's serde data model. Numeric segments index into
//! sequences.
//!
//! ```
//! use horizon_breadcrumb::model::bind_display_text;
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Folder { name: String, owner: Owner }
//! #[derive(Serialize)]
//! struct Owner { login: String }
//!
//! let folder = Folder { name: "Folder 1".into(), owner: Owner { login: "ada".into() } };
//! assert_eq!(bind_display_text(&folder, Some("name")), "Folder 1");
//! assert_eq!(bind_display_text(&folder, Some("owner.login")), "ada");
//! ```

use horizon_breadcrumb_core::logging::targets;
use serde::Serialize;
use serde_json::Value;

/// Evaluates `path` against `item` and returns the text to display.
///
/// Without a path (or with an empty one) the item itself is displayed. A
/// path that does not resolve displays as an empty string, like a failed
/// binding in any other control.
pub fn bind_display_text<T: Serialize + ?Sized>(item: &T, path: Option<&str>) -> String {
    let value = match serde_json::to_value(item) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(target: targets::LAYOUT, error = %err, "item could not be bound");
            return String::new();
        }
    };

    let path = path.map(str::trim).filter(|p| !p.is_empty());
    let Some(path) = path else {
        return value_text(&value);
    };

    match resolve(&value, path) {
        Some(found) => value_text(found),
        None => {
            tracing::debug!(target: targets::LAYOUT, path, "display path did not resolve");
            String::new()
        }
    }
}

fn resolve<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(value, |current, segment| match current {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}

fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}
