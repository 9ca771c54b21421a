use crate::ast::{ServiceFieldInfo, ServiceMethodInfo};
use crate::obsolete::Obsolete;
use serde::{Deserialize, Serialize};

// --- HTTP Binding Overlay ---

/// HTTP metadata layered over a service. Bound elements own a copy of the
/// service element they describe.
#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
pub struct HttpServiceInfo {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub methods: Vec<HttpMethodInfo>,
}

impl HttpServiceInfo {
    pub fn all_methods(&self) -> impl Iterator<Item = &HttpMethodInfo> {
        self.methods.iter()
    }
}

#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
pub struct HttpMethodInfo {
    pub service_method: ServiceMethodInfo,
    pub verb: String,
    pub path: String,
    #[serde(default)]
    pub path_fields: Vec<HttpFieldInfo>,
    #[serde(default)]
    pub query_fields: Vec<HttpFieldInfo>,
    #[serde(default)]
    pub request_body_fields: Vec<HttpFieldInfo>,
    #[serde(default)]
    pub responses: Vec<HttpResponseInfo>,
}

#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
pub struct HttpFieldInfo {
    pub service_field: ServiceFieldInfo,
    /// The name on the wire (path segment or query parameter).
    pub name: String,
}

#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
pub struct HttpResponseInfo {
    pub status_code: u16,
    #[serde(default)]
    pub body_fields: Vec<HttpFieldInfo>,
}

impl Obsolete for HttpMethodInfo {
    fn is_obsolete(&self) -> bool {
        self.service_method.is_obsolete()
    }
}

impl Obsolete for HttpFieldInfo {
    fn is_obsolete(&self) -> bool {
        self.service_field.is_obsolete()
    }
}

// --- Status Codes ---

/// Returns the standard reason phrase for an HTTP status code, or `""` if the
/// code is not in the table.
#[must_use]
pub fn status_code_phrase(status_code: u16) -> &'static str {
    match status_code {
        100 => "Continue",
        101 => "Switching Protocols",
        200 => "OK",
        201 => "Created",
        202 => "Accepted",
        203 => "Non-Authoritative Information",
        204 => "No Content",
        205 => "Reset Content",
        206 => "Partial Content",
        300 => "Multiple Choices",
        301 => "Moved Permanently",
        302 => "Found",
        303 => "See Other",
        304 => "Not Modified",
        305 => "Use Proxy",
        307 => "Temporary Redirect",
        400 => "Bad Request",
        401 => "Unauthorized",
        402 => "Payment Required",
        403 => "Forbidden",
        404 => "Not Found",
        405 => "Method Not Allowed",
        406 => "Not Acceptable",
        407 => "Proxy Authentication Required",
        408 => "Request Timeout",
        409 => "Conflict",
        410 => "Gone",
        411 => "Length Required",
        412 => "Precondition Failed",
        413 => "Request Entity Too Large",
        414 => "Request-Uri Too Long",
        415 => "Unsupported Media Type",
        416 => "Requested Range Not Satisfiable",
        417 => "Expectation Failed",
        426 => "Upgrade Required",
        500 => "Internal Server Error",
        501 => "Not Implemented",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        504 => "Gateway Timeout",
        505 => "Http Version Not Supported",
        _ => "",
    }
}
