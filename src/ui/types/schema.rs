use anyhow::{Context, Result};
use schemars::{Schema, schema_for};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Integer,
    Number,
    Boolean,
    /// One of a fixed list of string labels (`enum` or `oneOf` of `const`s).
    Choice,
}

#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub name: String,
    pub title: String,
    pub description: Option<String>,
    pub required: bool,
    pub kind: FieldKind,
    pub default: Option<Value>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    /// Only filled for `FieldKind::Choice`, in declaration order.
    pub options: Vec<String>,
}

pub fn schema_for<T: schemars::JsonSchema>() -> Schema {
    schema_for!(T)
}

/// Flattens the top-level properties of a struct schema into prompt specs,
/// keeping declaration order. Fields of unsupported types are skipped.
pub fn form_specs(root: &Schema) -> Result<Vec<FieldSpec>> {
    let root_obj = root.as_object().context("root schema is not an object")?;
    let props = root_obj
        .get("properties")
        .and_then(|v| v.as_object())
        .context("root schema has no properties")?;

    let required: Vec<String> = root_obj
        .get("required")
        .and_then(|v| v.as_array())
        .map(|a| {
            a.iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default();

    let mut out = Vec::new();
    for (name, field_schema) in props {
        let fs_obj = field_schema
            .as_object()
            .context("field schema not object")?;

        // Metadata lives next to a `$ref`; the type lives behind it.
        let target = resolve_ref_obj(root_obj, fs_obj)
            .with_context(|| format!("failed to resolve field $ref for '{name}'"))?;

        let title = fs_obj
            .get("title")
            .or_else(|| target.get("title"))
            .and_then(|v| v.as_str())
            .unwrap_or(name)
            .to_string();

        let description = fs_obj
            .get("description")
            .or_else(|| target.get("description"))
            .and_then(|v| v.as_str())
            .map(str::to_string);

        let default = fs_obj.get("default").cloned();

        let options = choice_options(target);
        let kind = if options.is_empty() {
            match detect_field_kind(target.get("type")) {
                Some(kind) => kind,
                None => continue,
            }
        } else {
            FieldKind::Choice
        };

        let min = fs_obj
            .get("minimum")
            .or_else(|| fs_obj.get("exclusiveMinimum"))
            .and_then(|v| v.as_f64());

        let max = fs_obj
            .get("maximum")
            .or_else(|| fs_obj.get("exclusiveMaximum"))
            .and_then(|v| v.as_f64());

        out.push(FieldSpec {
            name: name.clone(),
            title,
            description,
            required: required.iter().any(|r| r == name),
            kind,
            default,
            min,
            max,
            options,
        });
    }

    Ok(out)
}

/// Labels of a unit-only enum, whether emitted as `enum: [..]` or as
/// `oneOf: [{const: ..}, ..]`.
fn choice_options(obj: &Map<String, Value>) -> Vec<String> {
    if let Some(arr) = obj.get("enum").and_then(|v| v.as_array()) {
        return arr
            .iter()
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect();
    }
    if let Some(alts) = obj.get("oneOf").and_then(|v| v.as_array()) {
        let consts: Vec<String> = alts
            .iter()
            .filter_map(|alt| alt.get("const").and_then(|c| c.as_str()))
            .map(str::to_string)
            .collect();
        if consts.len() == alts.len() {
            return consts;
        }
    }
    Vec::new()
}

/// Resolve a local $ref like "#/$defs/Department" against the root object.
/// Returns `obj` itself when it has no `$ref`.
fn resolve_ref_obj<'a>(
    root_obj: &'a Map<String, Value>,
    obj: &'a Map<String, Value>,
) -> Option<&'a Map<String, Value>> {
    match obj.get("$ref") {
        Some(Value::String(r)) => {
            let path = r.strip_prefix("#/")?;
            let mut cur: &Map<String, Value> = root_obj;
            for raw_seg in path.split('/') {
                // JSON Pointer unescape (~1 => /, ~0 => ~)
                let seg = raw_seg.replace("~1", "/").replace("~0", "~");
                cur = cur.get(&seg)?.as_object()?;
            }
            Some(cur)
        }
        _ => Some(obj),
    }
}

fn detect_field_kind(ty: Option<&Value>) -> Option<FieldKind> {
    let from_str = |s: &str| match s {
        "string" => Some(FieldKind::String),
        "integer" => Some(FieldKind::Integer),
        "number" => Some(FieldKind::Number),
        "boolean" => Some(FieldKind::Boolean),
        _ => None,
    };
    match ty {
        Some(Value::String(s)) => from_str(s),
        // unions like ["null","integer"] for Option<T>
        Some(Value::Array(arr)) => arr.iter().filter_map(|v| v.as_str()).find_map(from_str),
        _ => None,
    }
}
