//! Scenario extraction from method and enum-value option extensions.
//!
//! A scenario is a method-level enum-valued extension marking the method for
//! a particular transport pattern; the chosen enum value's own options carry
//! the qualifier extensions (subject names and the like) that parameterize
//! the scenario.
use std::collections::BTreeMap;

use prost_reflect::{Kind, MethodDescriptor, ServiceDescriptor, Value};

use crate::registry::{DescriptorRegistry, ExtensionCatalog};

/// Qualifier extension name to its extracted value.
pub type ScenarioOptions = BTreeMap<String, Value>;

/// Method full name to its extracted scenarios.
pub type ScenarioMap = BTreeMap<String, MethodScenarios>;

#[derive(Clone, Debug)]
pub struct MethodScenarios {
    pub service: ServiceDescriptor,
    pub method: MethodDescriptor,

    /// Scenario extension name to that scenario's qualifier options.
    pub scenarios: BTreeMap<String, ScenarioOptions>,
}

/// Walk every method declared under `package` and collect the scenarios
/// present in `catalog`.
///
/// Methods carrying none of the catalog's scenario extensions are absent
/// from the result. A scenario whose enum value declares none of the
/// qualifier extensions is recorded with an empty option map. Malformed
/// annotations (a scenario extension whose value is not an enum value) are
/// skipped, never an error: absence of annotations is a legitimate state.
///
/// The result is a pure function of the registry contents and the catalog;
/// each call returns a freshly allocated map owned by the caller.
pub fn extract_scenarios(
    registry: &DescriptorRegistry,
    package: &str,
    catalog: &ExtensionCatalog,
) -> ScenarioMap {
    let mut result = ScenarioMap::new();

    for service in registry.services_of_package(package) {
        for method in service.methods() {
            let method_options = method.options();
            let mut scenarios = BTreeMap::new();

            for scenario in &catalog.scenarios {
                if !method_options.has_extension(scenario) {
                    continue;
                }

                let value = method_options.get_extension(scenario);
                let (Kind::Enum(enum_desc), Some(number)) =
                    (scenario.kind(), value.as_enum_number())
                else {
                    tracing::debug!(
                        method = method.full_name(),
                        scenario = scenario.full_name(),
                        "scenario extension does not hold an enum value, skipping"
                    );
                    continue;
                };

                let mut options = ScenarioOptions::new();
                // qualifiers live on the declaration of the chosen enum
                // value, not on the value itself
                if let Some(enum_value) = enum_desc.get_value(number) {
                    let value_options = enum_value.options();
                    for qualifier in &catalog.qualifiers {
                        if !value_options.has_extension(qualifier) {
                            continue;
                        }
                        options.insert(
                            qualifier.name().to_string(),
                            value_options.get_extension(qualifier).into_owned(),
                        );
                    }
                }

                scenarios.insert(scenario.name().to_string(), options);
            }

            if scenarios.is_empty() {
                continue;
            }

            tracing::debug!(
                method = method.full_name(),
                count = scenarios.len(),
                "extracted scenarios"
            );
            result.insert(
                method.full_name().to_string(),
                MethodScenarios {
                    service: service.clone(),
                    method,
                    scenarios,
                },
            );
        }
    }

    result
}
