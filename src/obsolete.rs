//! Filtering of obsolete elements.
//!
//! Every element that can be marked obsolete implements [`Obsolete`]. HTTP
//! bindings forward the flag of the service element they wrap. Template code
//! that only holds type-erased values can use [`where_not_obsolete_dyn`],
//! which recognizes the same element kinds at runtime.

use crate::ast::{
    ServiceAttributeInfo, ServiceDtoInfo, ServiceEnumInfo, ServiceEnumValueInfo,
    ServiceErrorInfo, ServiceErrorSetInfo, ServiceExternalDtoInfo, ServiceExternalEnumInfo,
    ServiceFieldInfo, ServiceInfo, ServiceMethodInfo,
};
use crate::error::DocError;
use crate::http::{HttpFieldInfo, HttpMethodInfo};
use std::any::Any;
use std::fmt;

const OBSOLETE_ATTRIBUTE: &str = "obsolete";

pub trait Obsolete {
    fn is_obsolete(&self) -> bool;
}

impl<T: Obsolete + ?Sized> Obsolete for &T {
    fn is_obsolete(&self) -> bool {
        (**self).is_obsolete()
    }
}

/// A service element decorated with `[name(param: value)]` attributes.
pub trait ServiceElementWithAttributes {
    fn attributes(&self) -> &[ServiceAttributeInfo];

    fn attribute(&self, name: &str) -> Option<&ServiceAttributeInfo> {
        self.attributes().iter().find(|a| a.name == name)
    }

    /// The `message` parameter of the `obsolete` attribute, if any.
    fn obsolete_message(&self) -> Option<&str> {
        self.attribute(OBSOLETE_ATTRIBUTE)?.parameter("message")
    }
}

macro_rules! element_with_attributes {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ServiceElementWithAttributes for $ty {
                fn attributes(&self) -> &[ServiceAttributeInfo] {
                    &self.attributes
                }
            }

            impl Obsolete for $ty {
                fn is_obsolete(&self) -> bool {
                    self.attribute(OBSOLETE_ATTRIBUTE).is_some()
                }
            }
        )*
    };
}

element_with_attributes!(
    ServiceInfo,
    ServiceMethodInfo,
    ServiceDtoInfo,
    ServiceFieldInfo,
    ServiceEnumInfo,
    ServiceEnumValueInfo,
    ServiceErrorSetInfo,
    ServiceErrorInfo,
    ServiceExternalDtoInfo,
    ServiceExternalEnumInfo,
);

/// Lazily yields the elements of `items` that are not obsolete, in order.
///
/// Nothing is cached: iterating a fresh call re-reads the source.
pub fn where_not_obsolete<I>(items: I) -> impl Iterator<Item = I::Item>
where
    I: IntoIterator,
    I::Item: Obsolete,
{
    items.into_iter().filter(|item| !item.is_obsolete())
}

/// A type-erased value as the page templates hold it.
pub trait TemplateValue: Any {
    fn as_any(&self) -> &dyn Any;

    /// The Rust type name, used in error messages.
    fn type_name(&self) -> &'static str;
}

impl<T: Any> TemplateValue for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }
}

impl fmt::Debug for dyn TemplateValue + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TemplateValue({})", self.type_name())
    }
}

/// Type-erased variant of [`where_not_obsolete`].
///
/// # Errors
/// Returns `DocError::InvalidInput` if `items` is `None`. The returned iterator
/// yields `DocError::UnsupportedElementKind` for the first element that is not
/// a known service element or HTTP binding, and nothing after it.
pub fn where_not_obsolete_dyn<'a, I>(
    items: Option<I>,
) -> Result<DynWhereNotObsolete<I::IntoIter>, DocError>
where
    I: IntoIterator<Item = &'a dyn TemplateValue>,
{
    let items = items.ok_or(DocError::InvalidInput { argument: "items" })?;
    Ok(DynWhereNotObsolete {
        items: items.into_iter(),
        failed: false,
    })
}

pub struct DynWhereNotObsolete<I> {
    items: I,
    failed: bool,
}

impl<I> fmt::Debug for DynWhereNotObsolete<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynWhereNotObsolete")
            .field("failed", &self.failed)
            .finish_non_exhaustive()
    }
}

impl<'a, I> Iterator for DynWhereNotObsolete<I>
where
    I: Iterator<Item = &'a dyn TemplateValue>,
{
    type Item = Result<&'a dyn TemplateValue, DocError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        for item in self.items.by_ref() {
            match obsolete_flag((*item).as_any()) {
                Some(true) => continue,
                Some(false) => return Some(Ok(item)),
                None => {
                    self.failed = true;
                    let kind = (*item).type_name().to_string();
                    log::warn!("where_not_obsolete: unsupported element kind `{kind}`");
                    return Some(Err(DocError::UnsupportedElementKind { kind }));
                }
            }
        }
        None
    }
}

fn flag<T: Obsolete + 'static>(item: &dyn Any) -> Option<bool> {
    item.downcast_ref::<T>().map(Obsolete::is_obsolete)
}

fn obsolete_flag(item: &dyn Any) -> Option<bool> {
    flag::<ServiceFieldInfo>(item)
        .or_else(|| flag::<ServiceEnumValueInfo>(item))
        .or_else(|| flag::<ServiceMethodInfo>(item))
        .or_else(|| flag::<ServiceDtoInfo>(item))
        .or_else(|| flag::<ServiceEnumInfo>(item))
        .or_else(|| flag::<ServiceErrorSetInfo>(item))
        .or_else(|| flag::<ServiceErrorInfo>(item))
        .or_else(|| flag::<ServiceExternalDtoInfo>(item))
        .or_else(|| flag::<ServiceExternalEnumInfo>(item))
        .or_else(|| flag::<ServiceInfo>(item))
        .or_else(|| flag::<HttpMethodInfo>(item))
        .or_else(|| flag::<HttpFieldInfo>(item))
}
