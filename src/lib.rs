pub mod api;
pub mod ast;
pub mod error;
pub mod http;
pub mod obsolete;
pub mod render;
pub mod resolver;
pub mod settings;
pub mod utils;

pub use api::{is_event, Globals};
pub use http::status_code_phrase;
pub use obsolete::{where_not_obsolete, where_not_obsolete_dyn, Obsolete, TemplateValue};
pub use render::{render_field_type, render_field_type_as_json_value};
