//! JSON schemas for MCP tool inputs.

use crate::content::Variant;
use crate::tools::SearchRequest;
use rmcp::model::JsonObject;
use rmcp::schemars::{self, JsonSchema, generate::SchemaSettings};
use serde_json::Value;
use std::sync::Arc;

/// Generate an inline JSON schema for MCP tools
///
/// Unlike rmcp's default `schema_for_type()`, this function sets `inline_subschemas = true`
/// to generate inline enum definitions instead of $ref patterns. This ensures MCP Inspector
/// displays enums as dropdown widgets rather than raw JSON input fields.
pub fn inline_schema_for_type<T: JsonSchema>() -> Arc<JsonObject> {
    Arc::new(inline_schema_object::<T>())
}

/// Schema for the search tool, with `filter` restricted to the known filter ids.
pub fn search_request_schema() -> Arc<JsonObject> {
    let mut object = inline_schema_object::<SearchRequest>();

    let filter_ids: Vec<Value> = std::iter::once("all")
        .chain(Variant::ALL.iter().map(|variant| variant.filter_id()))
        .map(|id| Value::String(id.to_string()))
        .collect();

    if let Some(Value::Object(filter)) = object
        .get_mut("properties")
        .and_then(|properties| properties.get_mut("filter"))
    {
        filter.insert("enum".to_string(), Value::Array(filter_ids));
    }

    Arc::new(object)
}

fn inline_schema_object<T: JsonSchema>() -> JsonObject {
    let mut settings = SchemaSettings::draft07();
    settings.transforms = vec![Box::new(schemars::transform::AddNullable::default())];
    settings.inline_subschemas = true;

    let generator = settings.into_generator();
    let schema = generator.into_root_schema_for::<T>();
    let object = serde_json::to_value(schema).expect("failed to serialize schema");

    match object {
        Value::Object(object) => object,
        _ => panic!("Schema serialization produced non-object value"),
    }
}
