//! Read-only view over an already-populated descriptor pool.
//!
//! The pool mirrors compiled-in protocol definitions and is always injected
//! by the caller, either as a built [`DescriptorPool`] shared with generated
//! code or as encoded `FileDescriptorSet` bytes. This crate never owns a
//! global pool, so every component stays testable against a fabricated one.
use prost_reflect::{DescriptorPool, ExtensionDescriptor, FileDescriptor, ServiceDescriptor};

use crate::error::{Error, Result};

#[derive(Clone)]
pub struct DescriptorRegistry {
    pool: DescriptorPool,
}

impl DescriptorRegistry {
    pub fn new(pool: DescriptorPool) -> Self {
        Self { pool }
    }

    /// Build a registry from encoded `FileDescriptorSet` bytes.
    pub fn decode(descriptor_set: impl bytes::Buf) -> Result<Self> {
        Ok(Self {
            pool: DescriptorPool::decode(descriptor_set)?,
        })
    }

    pub fn pool(&self) -> &DescriptorPool {
        &self.pool
    }

    /// Files declaring exactly the given package. Sub-packages are not
    /// included. An unknown package yields an empty iterator, not an error.
    pub fn files_of_package<'a>(
        &'a self,
        package: &'a str,
    ) -> impl Iterator<Item = FileDescriptor> + 'a {
        self.pool.files().filter(move |f| f.package_name() == package)
    }

    pub fn services_of_package<'a>(
        &'a self,
        package: &'a str,
    ) -> impl Iterator<Item = ServiceDescriptor> + 'a {
        self.files_of_package(package)
            .flat_map(|f| f.services().collect::<Vec<_>>())
    }

    /// Resolve one extension by its full name.
    pub fn extension(&self, full_name: &str) -> Result<ExtensionDescriptor> {
        self.pool
            .get_extension_by_name(full_name)
            .ok_or_else(|| Error::UnknownExtension(full_name.to_string()))
    }

    /// Resolve both halves of an extension catalog, preserving caller order.
    pub fn catalog(
        &self,
        qualifier_names: &[&str],
        scenario_names: &[&str],
    ) -> Result<ExtensionCatalog> {
        Ok(ExtensionCatalog {
            qualifiers: qualifier_names
                .iter()
                .map(|name| self.extension(name))
                .collect::<Result<_>>()?,
            scenarios: scenario_names
                .iter()
                .map(|name| self.extension(name))
                .collect::<Result<_>>()?,
        })
    }
}

/// Caller-supplied, per-invocation sets of extension identifiers.
///
/// There is no built-in catalog; which extensions exist is entirely the
/// caller's business.
#[derive(Clone, Debug, Default)]
pub struct ExtensionCatalog {
    /// Qualifier extensions, declared on `google.protobuf.EnumValueOptions`.
    pub qualifiers: Vec<ExtensionDescriptor>,
    /// Scenario extensions, declared on `google.protobuf.MethodOptions`.
    pub scenarios: Vec<ExtensionDescriptor>,
}
