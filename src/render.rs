//! Text projections of resolved field types.
//!
//! [`render_field_type`] produces the type column of a field table, with DTOs
//! and enums linked to their own pages. [`render_field_type_as_json_value`]
//! sketches what a JSON value of the type looks like.
//!
//! Both recurse only through `Result`/`Array`/`Map`/`Nullable`. Types built by
//! the resolver nest at most [`crate::resolver::MAX_TYPE_DEPTH`] of those.
//! DTOs and enums are never expanded beyond their own name and members, which
//! keeps self-referencing DTOs finite.

use crate::ast::{ServiceDtoInfo, ServiceEnumInfo, ServiceTypeInfo};
use crate::obsolete::where_not_obsolete;
use crate::utils::page_file_name;
use std::fmt::{self, Display};

/// Enum examples list at most this many values.
const MAX_ENUM_EXAMPLE_VALUES: usize = 3;

/// Renders a type for a Markdown table cell, e.g. `nullable<int32>[]` or `[Widget](Widget.md)`.
#[must_use]
pub fn render_field_type(type_info: &ServiceTypeInfo<'_>) -> String {
    let mut out = String::new();
    write_field_type(type_info, &mut out);
    out
}

/// Renders an example JSON value for a type, e.g. `[ (integer) | null, ... ]`.
#[must_use]
pub fn render_field_type_as_json_value(type_info: &ServiceTypeInfo<'_>) -> String {
    let mut out = String::new();
    write_json_value(type_info, &mut out);
    out
}

fn write_field_type(type_info: &ServiceTypeInfo<'_>, out: &mut String) {
    match type_info {
        ServiceTypeInfo::String => out.push_str("string"),
        ServiceTypeInfo::Boolean => out.push_str("boolean"),
        ServiceTypeInfo::Float => out.push_str("float"),
        ServiceTypeInfo::Double => out.push_str("double"),
        ServiceTypeInfo::Int32 => out.push_str("int32"),
        ServiceTypeInfo::Int64 => out.push_str("int64"),
        ServiceTypeInfo::Decimal => out.push_str("decimal"),
        ServiceTypeInfo::Bytes => out.push_str("bytes"),
        ServiceTypeInfo::DateTime => out.push_str("datetime"),
        ServiceTypeInfo::Object => out.push_str("object"),
        ServiceTypeInfo::Error => out.push_str("error"),
        ServiceTypeInfo::Dto(dto) => write_link(&dto.name, out),
        ServiceTypeInfo::Enum(enum_info) => write_link(&enum_info.name, out),
        ServiceTypeInfo::Result(inner) => {
            out.push_str("result<");
            write_field_type(inner, out);
            out.push('>');
        }
        ServiceTypeInfo::Array(inner) => {
            write_field_type(inner, out);
            out.push_str("[]");
        }
        ServiceTypeInfo::Map(inner) => {
            out.push_str("map<");
            write_field_type(inner, out);
            out.push('>');
        }
        ServiceTypeInfo::Nullable(inner) => {
            out.push_str("nullable<");
            write_field_type(inner, out);
            out.push('>');
        }
        ServiceTypeInfo::ExternalDto(external) => out.push_str(&external.name),
        ServiceTypeInfo::ExternalEnum(external) => out.push_str(&external.name),
    }
}

fn write_link(name: &str, out: &mut String) {
    out.push('[');
    out.push_str(name);
    out.push_str("](");
    out.push_str(&page_file_name(name));
    out.push(')');
}

fn write_json_value(type_info: &ServiceTypeInfo<'_>, out: &mut String) {
    match type_info {
        ServiceTypeInfo::String => out.push_str("\"(string)\""),
        ServiceTypeInfo::Boolean => out.push_str("(true|false)"),
        ServiceTypeInfo::Float | ServiceTypeInfo::Double | ServiceTypeInfo::Decimal => {
            out.push_str("(number)");
        }
        ServiceTypeInfo::Int32 | ServiceTypeInfo::Int64 => out.push_str("(integer)"),
        ServiceTypeInfo::Bytes => out.push_str("\"(base64)\""),
        ServiceTypeInfo::DateTime => out.push_str("\"(date/time)\""),
        ServiceTypeInfo::Object => out.push_str("{ ... }"),
        ServiceTypeInfo::Error => out.push_str("{ \"code\": ... }"),
        ServiceTypeInfo::Dto(dto) => write_dto_json_value(dto, out),
        ServiceTypeInfo::Enum(enum_info) => write_enum_json_value(enum_info, out),
        ServiceTypeInfo::Result(inner) => {
            out.push_str("{ \"value\": ");
            write_json_value(inner, out);
            out.push_str(" | \"error\": { \"code\": ... } }");
        }
        ServiceTypeInfo::Array(inner) => {
            out.push_str("[ ");
            write_json_value(inner, out);
            out.push_str(", ... ]");
        }
        ServiceTypeInfo::Map(inner) => {
            out.push_str("{ \"...\": ");
            write_json_value(inner, out);
            out.push_str(", ... }");
        }
        ServiceTypeInfo::Nullable(inner) => {
            write_json_value(inner, out);
            out.push_str(" | null");
        }
        ServiceTypeInfo::ExternalDto(external) => write_parenthesized(&external.name, out),
        ServiceTypeInfo::ExternalEnum(external) => write_parenthesized(&external.name, out),
    }
}

fn write_parenthesized(name: &str, out: &mut String) {
    out.push('(');
    out.push_str(name);
    out.push(')');
}

// Only the first visible field is shown, and never its value.
fn write_dto_json_value(dto: &ServiceDtoInfo, out: &mut String) {
    match where_not_obsolete(&dto.fields).next() {
        None => out.push_str("{}"),
        Some(field) => {
            out.push_str("{ \"");
            out.push_str(&field.name);
            out.push_str("\": ... }");
        }
    }
}

// No visible values renders `"()"`.
fn write_enum_json_value(enum_info: &ServiceEnumInfo, out: &mut String) {
    let values: Vec<&str> = where_not_obsolete(&enum_info.values)
        .map(|value| value.name.as_str())
        .collect();

    if let [only] = values.as_slice() {
        out.push('"');
        out.push_str(only);
        out.push('"');
        return;
    }

    out.push_str("\"(");
    for (i, name) in values.iter().take(MAX_ENUM_EXAMPLE_VALUES).enumerate() {
        if i > 0 {
            out.push('|');
        }
        out.push_str(name);
    }
    if values.len() > MAX_ENUM_EXAMPLE_VALUES {
        out.push_str("|...");
    }
    out.push_str(")\"");
}

impl Display for ServiceTypeInfo<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_field_type(self))
    }
}

impl ServiceTypeInfo<'_> {
    /// See [`render_field_type_as_json_value`].
    #[must_use]
    pub fn to_json_value_example(&self) -> String {
        render_field_type_as_json_value(self)
    }
}
