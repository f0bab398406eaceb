//! Routing metadata extraction and implementation binding for
//! protobuf-described services.
//!
//! Three engines cooperate so a transport layer can route inbound calls
//! without hand-written registration tables:
//!
//! - [`scenario::extract_scenarios`] walks an injected descriptor registry
//!   and pulls caller-defined "scenario" annotations (enum-valued method
//!   option extensions) together with their qualifier options (extensions on
//!   the chosen enum value's declaration).
//! - [`binder::bind_implementations`] scans caller-supplied runtime objects
//!   and keeps exactly the operations matching the canonical
//!   `(context, request) -> (response, error)` handler shape.
//! - [`factory::new_request_response`] allocates fresh decode targets for a
//!   resolved method descriptor.
//!
//! All operations are pure reads over immutable inputs; results are freshly
//! allocated, caller-owned, and safe to derive concurrently.
pub mod binder;
pub mod codec;
pub mod context;
pub mod error;
pub mod factory;
pub mod registry;
pub mod scenario;


pub use binder::{
    bind_implementations, ExposedMethod, ImplementationEntry, MethodShape, ServiceSurface,
    UnaryHandler,
};
pub use context::{BaseContext, CallContext};
pub use error::{Error, Result};
pub use factory::new_request_response;
pub use registry::{DescriptorRegistry, ExtensionCatalog};
pub use scenario::{extract_scenarios, MethodScenarios, ScenarioMap, ScenarioOptions};
