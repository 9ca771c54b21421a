use crate::ast::{ServiceFieldInfo, ServiceInfo, ServiceTypeInfo};
use crate::error::DocError;

/// Wrapper types (`[]`, `map<>`, `nullable<>`, `result<>`) nest at most this deep.
pub const MAX_TYPE_DEPTH: usize = 64;

/// Resolves field type names against the members of one service.
///
/// Type names follow the definition language: a built-in keyword, the name of
/// a DTO, enum or external type, `T[]`, or one of `map<T>`, `nullable<T>` and
/// `result<T>`, nested up to [`MAX_TYPE_DEPTH`] wrappers deep.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    service: &'a ServiceInfo,
}

impl<'a> Resolver<'a> {
    pub fn new(service: &'a ServiceInfo) -> Self {
        Resolver { service }
    }

    /// Resolves the declared type of `field`.
    ///
    /// # Errors
    /// Returns `DocError::UnsupportedTypeKind` if the type name (or any part of
    /// it) is unknown, malformed or nested too deeply.
    pub fn resolve_field(
        &self,
        field: &ServiceFieldInfo,
    ) -> Result<ServiceTypeInfo<'a>, DocError> {
        self.resolve(&field.type_name)
    }

    /// Resolves a type name.
    ///
    /// # Errors
    /// Returns `DocError::UnsupportedTypeKind` if the type name (or any part of
    /// it) is unknown, malformed or nested too deeply. The error always names
    /// the whole type.
    pub fn resolve(&self, type_name: &str) -> Result<ServiceTypeInfo<'a>, DocError> {
        log::trace!("resolving type name `{type_name}`");
        self.resolve_nested(type_name, 0)
            .ok_or_else(|| DocError::UnsupportedTypeKind {
                type_name: type_name.to_string(),
            })
    }

    fn resolve_nested(&self, type_name: &str, depth: usize) -> Option<ServiceTypeInfo<'a>> {
        let name = type_name.trim();

        if let Some(element) = name.strip_suffix("[]") {
            return Some(ServiceTypeInfo::array(self.resolve_inner(element, depth)?));
        }
        if let Some(inner) = generic_argument(name, "map") {
            return Some(ServiceTypeInfo::map(self.resolve_inner(inner, depth)?));
        }
        if let Some(inner) = generic_argument(name, "nullable") {
            return Some(ServiceTypeInfo::nullable(self.resolve_inner(inner, depth)?));
        }
        if let Some(inner) = generic_argument(name, "result") {
            return Some(ServiceTypeInfo::result(self.resolve_inner(inner, depth)?));
        }

        let resolved = match name {
            "string" => ServiceTypeInfo::String,
            "boolean" => ServiceTypeInfo::Boolean,
            "float" => ServiceTypeInfo::Float,
            "double" => ServiceTypeInfo::Double,
            "int32" => ServiceTypeInfo::Int32,
            "int64" => ServiceTypeInfo::Int64,
            "decimal" => ServiceTypeInfo::Decimal,
            "bytes" => ServiceTypeInfo::Bytes,
            "datetime" => ServiceTypeInfo::DateTime,
            "object" => ServiceTypeInfo::Object,
            "error" => ServiceTypeInfo::Error,
            _ => return self.resolve_member(name),
        };
        Some(resolved)
    }

    fn resolve_inner(&self, inner: &str, depth: usize) -> Option<ServiceTypeInfo<'a>> {
        if depth >= MAX_TYPE_DEPTH {
            log::warn!("type name nests more than {MAX_TYPE_DEPTH} wrappers");
            return None;
        }
        if inner.trim().is_empty() {
            return None;
        }
        self.resolve_nested(inner, depth + 1)
    }

    // DTOs shadow enums, which shadow externals; a valid service never reuses a name.
    fn resolve_member(&self, name: &str) -> Option<ServiceTypeInfo<'a>> {
        let service = self.service;
        if let Some(dto) = service.find_dto(name) {
            return Some(ServiceTypeInfo::Dto(dto));
        }
        if let Some(enum_info) = service.find_enum(name) {
            return Some(ServiceTypeInfo::Enum(enum_info));
        }
        if let Some(external) = service.external_dtos.iter().find(|x| x.name == name) {
            return Some(ServiceTypeInfo::ExternalDto(external));
        }
        service
            .external_enums
            .iter()
            .find(|x| x.name == name)
            .map(ServiceTypeInfo::ExternalEnum)
    }
}

impl ServiceInfo {
    /// Resolves the declared type of one of this service's fields.
    ///
    /// # Errors
    /// Returns `DocError::UnsupportedTypeKind` if the field's type name cannot be resolved.
    pub fn get_field_type(
        &self,
        field: &ServiceFieldInfo,
    ) -> Result<ServiceTypeInfo<'_>, DocError> {
        Resolver::new(self).resolve_field(field)
    }
}

/// Returns `T` for `keyword<T>`.
fn generic_argument<'n>(name: &'n str, keyword: &str) -> Option<&'n str> {
    name.strip_prefix(keyword)?
        .trim_start()
        .strip_prefix('<')?
        .strip_suffix('>')
}
