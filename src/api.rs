use crate::ast::{ServiceFieldInfo, ServiceInfo, ServiceMethodInfo, ServiceTypeInfo};
use crate::error::DocError;
use crate::http::{HttpMethodInfo, HttpServiceInfo};
use crate::settings::GeneratorSettings;
use crate::utils::code_gen_comment;
use std::any::Any;

/// The context handed to the page templates while documenting one service.
///
/// It owns nothing but the generated comment text; the service and its HTTP
/// overlay are borrowed, so one service can be documented from several threads
/// at once.
#[derive(Debug, Clone)]
pub struct Globals<'a> {
    service: &'a ServiceInfo,
    http_service: Option<&'a HttpServiceInfo>,
    code_gen_comment_text: String,
}

impl<'a> Globals<'a> {
    pub fn new(
        settings: &GeneratorSettings,
        service: &'a ServiceInfo,
        http_service: Option<&'a HttpServiceInfo>,
    ) -> Self {
        let http_service = if settings.no_http {
            if http_service.is_some() {
                log::debug!("ignoring HTTP overlay of service `{}`", service.name);
            }
            None
        } else {
            http_service
        };
        log::debug!(
            "documenting service `{}` ({} methods, {} DTOs, {} enums)",
            service.name,
            service.methods.len(),
            service.dtos.len(),
            service.enums.len()
        );

        Globals {
            service,
            http_service,
            code_gen_comment_text: code_gen_comment(&settings.generator_name),
        }
    }

    #[must_use]
    pub fn service(&self) -> &'a ServiceInfo {
        self.service
    }

    #[must_use]
    pub fn http_service(&self) -> Option<&'a HttpServiceInfo> {
        self.http_service
    }

    #[must_use]
    pub fn code_gen_comment_text(&self) -> &str {
        &self.code_gen_comment_text
    }

    /// Finds the HTTP binding of a service method, if there is an overlay.
    #[must_use]
    pub fn get_http(&self, method: &ServiceMethodInfo) -> Option<&'a HttpMethodInfo> {
        self.http_service?
            .all_methods()
            .find(|http_method| http_method.service_method.name == method.name)
    }

    /// # Errors
    /// Returns `DocError::UnsupportedTypeKind` if the field's type cannot be resolved.
    pub fn get_field_type(
        &self,
        field: &ServiceFieldInfo,
    ) -> Result<ServiceTypeInfo<'a>, DocError> {
        self.service.get_field_type(field)
    }

    /// See [`is_event`].
    #[must_use]
    pub fn is_event(&self, method: &dyn Any) -> bool {
        is_event(method)
    }
}

/// True for an event method, either plain or HTTP-bound. Anything else,
/// including values that are not methods at all, is not an event.
#[must_use]
pub fn is_event(method: &dyn Any) -> bool {
    if let Some(service_method) = method.downcast_ref::<ServiceMethodInfo>() {
        service_method.is_event()
    } else if let Some(http_method) = method.downcast_ref::<HttpMethodInfo>() {
        http_method.service_method.is_event()
    } else {
        false
    }
}

/// Loads a parsed service definition from its JSON interchange form.
///
/// # Errors
/// Returns `DocError::Json` if the text is not a valid service definition.
pub fn load_service_json(source: &str) -> Result<ServiceInfo, DocError> {
    Ok(serde_json::from_str(source)?)
}

/// Loads a parsed service definition from its YAML interchange form.
///
/// # Errors
/// Returns `DocError::Yaml` if the text is not a valid service definition.
pub fn load_service_yaml(source: &str) -> Result<ServiceInfo, DocError> {
    Ok(serde_yaml::from_str(source)?)
}

/// # Errors
/// Returns `DocError::Json` if the text is not a valid HTTP overlay.
pub fn load_http_service_json(source: &str) -> Result<HttpServiceInfo, DocError> {
    Ok(serde_json::from_str(source)?)
}
