//! Fresh message allocation for resolved method descriptors.
use prost_reflect::{DynamicMessage, MessageDescriptor, MethodDescriptor};

use crate::error::{Error, Result};
use crate::registry::DescriptorRegistry;

/// Allocate fresh, zero-valued request and response instances for a method.
///
/// Both type names are resolved against `registry`, not against the pool the
/// method descriptor came from; a descriptor parsed from a source whose
/// types were never loaded into the registry is the one case where this
/// crate surfaces a hard error, since a transport cannot decode into a type
/// it cannot resolve. Instances from separate calls are independent.
pub fn new_request_response(
    registry: &DescriptorRegistry,
    method: &MethodDescriptor,
) -> Result<(DynamicMessage, DynamicMessage)> {
    let declared_input = method.input();
    let declared_output = method.output();
    let input = resolve(registry, method, declared_input.full_name())?;
    let output = resolve(registry, method, declared_output.full_name())?;
    Ok((DynamicMessage::new(input), DynamicMessage::new(output)))
}

fn resolve(
    registry: &DescriptorRegistry,
    method: &MethodDescriptor,
    type_name: &str,
) -> Result<MessageDescriptor> {
    registry
        .pool()
        .get_message_by_name(type_name)
        .ok_or_else(|| Error::TypeNotRegistered {
            type_name: type_name.to_string(),
            method: method.full_name().to_string(),
        })
}
