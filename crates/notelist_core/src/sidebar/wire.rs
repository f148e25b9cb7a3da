//! Sidebar JSON wire format.
//!
//! Accepts either a bare item array or an object with an `items` array, the
//! two shapes a docs sidebar is exposed in.

use crate::model::navigation::NavigationNode;
use crate::sidebar::source::{SidebarError, SidebarResult};
use log::debug;
use serde::Deserialize;
use serde_json::Value;

/// One raw sidebar item, tagged by `type`.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum SidebarItem {
    Link {
        label: String,
        href: String,
        #[serde(rename = "docId", default)]
        doc_id: Option<String>,
    },
    Category {
        label: String,
        #[serde(default)]
        items: Vec<SidebarItem>,
    },
    /// `html`, `doc`, `ref` and future kinds.
    #[serde(other)]
    Unsupported,
}

/// Decodes sidebar JSON text.
///
/// Returns `Ok(None)` when the document is `null` or an object without
/// `items`, meaning no sidebar is bound.
///
/// # Errors
/// - Returns `SidebarError::Malformed` for invalid JSON or item shapes.
pub fn parse_sidebar(json: &str) -> SidebarResult<Option<Vec<NavigationNode>>> {
    let document: Value =
        serde_json::from_str(json).map_err(|err| SidebarError::Malformed(err.to_string()))?;
    parse_sidebar_value(document)
}

/// Decodes an already-parsed sidebar JSON value.
///
/// # Errors
/// - Returns `SidebarError::Malformed` when the value or its items have the
///   wrong shape.
pub fn parse_sidebar_value(document: Value) -> SidebarResult<Option<Vec<NavigationNode>>> {
    let items = match document {
        Value::Null => return Ok(None),
        Value::Object(mut map) => match map.remove("items") {
            None | Some(Value::Null) => return Ok(None),
            Some(items) => items,
        },
        array @ Value::Array(_) => array,
        other => {
            return Err(SidebarError::Malformed(format!(
                "expected an item array or an object with `items`, got {}",
                json_kind(&other)
            )))
        }
    };

    let items: Vec<SidebarItem> =
        serde_json::from_value(items).map_err(|err| SidebarError::Malformed(err.to_string()))?;
    Ok(Some(convert_items(items)))
}

fn convert_items(items: Vec<SidebarItem>) -> Vec<NavigationNode> {
    items.into_iter().filter_map(convert_item).collect()
}

fn convert_item(item: SidebarItem) -> Option<NavigationNode> {
    match item {
        SidebarItem::Link {
            label,
            href,
            doc_id,
        } => Some(NavigationNode::Link {
            label,
            href,
            document_id: doc_id,
        }),
        SidebarItem::Category { label, items } => Some(NavigationNode::Category {
            label,
            children: convert_items(items),
        }),
        SidebarItem::Unsupported => {
            debug!("event=sidebar_item_skipped module=sidebar reason=unsupported_type");
            None
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
