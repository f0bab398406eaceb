//! Discovery of protocol-method implementations on runtime service objects.
//!
//! Rust has no runtime method-set reflection, so a service object declares
//! its operation surface explicitly through [`ServiceSurface`]; the binder
//! then keeps exactly the operations matching the canonical
//! `(context, request) -> (response, error)` shape. Everything else on the
//! surface is skipped silently, since most objects legitimately expose
//! operations unrelated to protocol dispatch.
use std::collections::BTreeMap;
use std::marker::PhantomData;
use std::sync::Arc;

use futures::future::BoxFuture;
use prost_reflect::{DynamicMessage, MessageDescriptor};

use crate::codec;
use crate::context::CallContext;
use crate::error::Result;

/// An implementation of the canonical handler shape.
///
/// This can be an actual implementation of a method, or something that will
/// forward the request elsewhere to fulfill it.
#[async_trait::async_trait]
pub trait UnaryHandler: Send + Sync + 'static {
    type Context: CallContext;

    async fn call(&self, ctx: Self::Context, input: DynamicMessage) -> Result<DynamicMessage>;
}

/// Shape of one operation exposed by a runtime service object.
pub enum MethodShape<C: CallContext> {
    /// Matches the canonical handler shape and is dispatchable.
    Unary {
        input: MessageDescriptor,
        handler: Arc<dyn UnaryHandler<Context = C>>,
    },
    /// Any other arity or parameter/return shape. Never bound.
    Opaque,
}

/// One named operation on a service object's surface.
pub struct ExposedMethod<C: CallContext> {
    pub name: String,
    pub shape: MethodShape<C>,
}

impl<C: CallContext> ExposedMethod<C> {
    /// Expose a canonical-shape operation backed by a closure.
    pub fn unary<F>(name: impl Into<String>, input: MessageDescriptor, f: F) -> Self
    where
        F: Fn(C, DynamicMessage) -> BoxFuture<'static, Result<DynamicMessage>>
            + Send
            + Sync
            + 'static,
    {
        Self {
            name: name.into(),
            shape: MethodShape::Unary {
                input,
                handler: Arc::new(FnHandler {
                    f,
                    _ctx: PhantomData,
                }),
            },
        }
    }

    /// Expose an operation that does not match the canonical shape.
    pub fn opaque(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            shape: MethodShape::Opaque,
        }
    }
}

/// A runtime object offering its operations for discovery.
///
/// Implementations may expose any mix of shapes, including none at all;
/// only canonical ones are picked up by [`bind_implementations`].
pub trait ServiceSurface: Send + Sync {
    type Context: CallContext;

    fn exposed_methods(&self) -> Vec<ExposedMethod<Self::Context>>;
}

/// A discovered operation: the bound callable plus its declared request type.
pub struct ImplementationEntry<C: CallContext> {
    pub handler: Arc<dyn UnaryHandler<Context = C>>,
    pub input_type: MessageDescriptor,
}

impl<C: CallContext> Clone for ImplementationEntry<C> {
    fn clone(&self) -> Self {
        Self {
            handler: self.handler.clone(),
            input_type: self.input_type.clone(),
        }
    }
}

impl<C: CallContext> ImplementationEntry<C> {
    /// Decode an inbound payload into the entry's declared request type.
    pub fn decode_request(&self, buf: bytes::Bytes) -> Result<DynamicMessage> {
        codec::decode(self.input_type.clone(), buf)
    }
}

/// Scan the supplied `{serviceName: object}` map and publish every
/// canonical-shape operation under `{serviceName}.{operationName}`.
///
/// The service name is the caller-supplied key, used verbatim; matching it to
/// a protocol full name is the caller's burden. `None` entries are skipped
/// without error. The scan is read-only and returns a fresh map per call, so
/// binding two disjoint input maps equals the union of binding each alone.
pub fn bind_implementations<C, I>(services: I) -> BTreeMap<String, ImplementationEntry<C>>
where
    C: CallContext,
    I: IntoIterator<Item = (String, Option<Arc<dyn ServiceSurface<Context = C>>>)>,
{
    let mut table = BTreeMap::new();

    for (service_name, surface) in services {
        let Some(surface) = surface else {
            // nothing behind the name, skip
            continue;
        };

        for method in surface.exposed_methods() {
            match method.shape {
                MethodShape::Unary { input, handler } => {
                    let full_name = format!("{}.{}", service_name, method.name);
                    tracing::debug!(
                        name = full_name.as_str(),
                        input = input.full_name(),
                        "bound method"
                    );
                    table.insert(
                        full_name,
                        ImplementationEntry {
                            handler,
                            input_type: input,
                        },
                    );
                }
                MethodShape::Opaque => {
                    // not a protocol method, skip
                }
            }
        }
    }

    table
}

struct FnHandler<C, F> {
    f: F,
    _ctx: PhantomData<fn(C)>,
}

#[async_trait::async_trait]
impl<C, F> UnaryHandler for FnHandler<C, F>
where
    C: CallContext,
    F: Fn(C, DynamicMessage) -> BoxFuture<'static, Result<DynamicMessage>>
        + Send
        + Sync
        + 'static,
{
    type Context = C;

    async fn call(&self, ctx: C, input: DynamicMessage) -> Result<DynamicMessage> {
        (self.f)(ctx, input).await
    }
}
