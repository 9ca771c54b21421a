use serde::{Deserialize, Serialize};

// --- Service Definition ---

/// A fully parsed service definition. Every element is immutable once loaded;
/// renderers only ever borrow from it.
#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub name: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub attributes: Vec<ServiceAttributeInfo>,
    #[serde(default)]
    pub methods: Vec<ServiceMethodInfo>,
    #[serde(default)]
    pub dtos: Vec<ServiceDtoInfo>,
    #[serde(default)]
    pub enums: Vec<ServiceEnumInfo>,
    #[serde(default)]
    pub error_sets: Vec<ServiceErrorSetInfo>,
    #[serde(default)]
    pub external_dtos: Vec<ServiceExternalDtoInfo>,
    #[serde(default)]
    pub external_enums: Vec<ServiceExternalEnumInfo>,
}

impl ServiceInfo {
    pub fn find_method(&self, name: &str) -> Option<&ServiceMethodInfo> {
        self.methods.iter().find(|m| m.name == name)
    }

    pub fn find_dto(&self, name: &str) -> Option<&ServiceDtoInfo> {
        self.dtos.iter().find(|d| d.name == name)
    }

    pub fn find_enum(&self, name: &str) -> Option<&ServiceEnumInfo> {
        self.enums.iter().find(|e| e.name == name)
    }
}

#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceMethodKind {
    #[default]
    Normal,
    Event,
}

#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
pub struct ServiceMethodInfo {
    pub name: String,
    #[serde(default)]
    pub kind: ServiceMethodKind,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub attributes: Vec<ServiceAttributeInfo>,
    #[serde(default)]
    pub request_fields: Vec<ServiceFieldInfo>,
    #[serde(default)]
    pub response_fields: Vec<ServiceFieldInfo>,
}

impl ServiceMethodInfo {
    #[must_use]
    pub fn is_event(&self) -> bool {
        self.kind == ServiceMethodKind::Event
    }
}

/// A record-like structure. Names are unique within a service.
#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
pub struct ServiceDtoInfo {
    pub name: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub attributes: Vec<ServiceAttributeInfo>,
    #[serde(default)]
    pub fields: Vec<ServiceFieldInfo>,
}

/// A DTO or method field. The type is kept as its source name and resolved
/// on demand through `ServiceInfo::get_field_type`.
#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
pub struct ServiceFieldInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub attributes: Vec<ServiceAttributeInfo>,
}

#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
pub struct ServiceEnumInfo {
    pub name: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub attributes: Vec<ServiceAttributeInfo>,
    #[serde(default)]
    pub values: Vec<ServiceEnumValueInfo>,
}

#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
pub struct ServiceEnumValueInfo {
    pub name: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub attributes: Vec<ServiceAttributeInfo>,
}

#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
pub struct ServiceErrorSetInfo {
    pub name: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub attributes: Vec<ServiceAttributeInfo>,
    #[serde(default)]
    pub errors: Vec<ServiceErrorInfo>,
}

#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
pub struct ServiceErrorInfo {
    pub name: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub attributes: Vec<ServiceAttributeInfo>,
}

/// A DTO declared outside the service; only its name is known.
#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
pub struct ServiceExternalDtoInfo {
    pub name: String,
    #[serde(default)]
    pub attributes: Vec<ServiceAttributeInfo>,
}

/// An enum declared outside the service; only its name is known.
#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
pub struct ServiceExternalEnumInfo {
    pub name: String,
    #[serde(default)]
    pub attributes: Vec<ServiceAttributeInfo>,
}

// --- Attributes ---

#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
pub struct ServiceAttributeInfo {
    pub name: String,
    #[serde(default)]
    pub parameters: Vec<ServiceAttributeParameterInfo>,
}

#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
pub struct ServiceAttributeParameterInfo {
    pub name: String,
    pub value: String,
}

impl ServiceAttributeInfo {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.push(ServiceAttributeParameterInfo {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    pub fn parameter(&self, name: &str) -> Option<&str> {
        self.parameters
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.value.as_str())
    }
}

// --- Resolved Types ---

/// The resolved type of a field. Definitions are borrowed from the owning
/// `ServiceInfo`, so a DTO that refers to itself never forms an ownership cycle.
#[derive(Debug, PartialEq, Clone)]
pub enum ServiceTypeInfo<'a> {
    String,
    Boolean,
    Float,
    Double,
    Int32,
    Int64,
    Decimal,
    Bytes,
    DateTime,
    Object,
    Error,
    Dto(&'a ServiceDtoInfo),
    Enum(&'a ServiceEnumInfo),
    Result(Box<ServiceTypeInfo<'a>>),
    Array(Box<ServiceTypeInfo<'a>>),
    Map(Box<ServiceTypeInfo<'a>>),
    Nullable(Box<ServiceTypeInfo<'a>>),
    ExternalDto(&'a ServiceExternalDtoInfo),
    ExternalEnum(&'a ServiceExternalEnumInfo),
}

impl<'a> ServiceTypeInfo<'a> {
    pub fn result(value_type: ServiceTypeInfo<'a>) -> Self {
        ServiceTypeInfo::Result(Box::new(value_type))
    }

    pub fn array(value_type: ServiceTypeInfo<'a>) -> Self {
        ServiceTypeInfo::Array(Box::new(value_type))
    }

    pub fn map(value_type: ServiceTypeInfo<'a>) -> Self {
        ServiceTypeInfo::Map(Box::new(value_type))
    }

    pub fn nullable(value_type: ServiceTypeInfo<'a>) -> Self {
        ServiceTypeInfo::Nullable(Box::new(value_type))
    }
}
