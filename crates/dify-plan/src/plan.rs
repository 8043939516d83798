use crate::error::Result;
use crate::normalize::ResolvedProps;
use crate::topology::Topology;
use crate::validate::{Advisory, validate};
use dify_config::{DifyProps, EnvValue, Target};
use dify_naming::{NameBuilder, ResourceNames, Segment};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{info, warn};

/// Account and region the plan is evaluated for. Either may be deferred to
/// the provisioning collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanContext {
    pub account: Segment,
    pub region: Segment,
}

impl PlanContext {
    pub fn new(account: Option<String>, region: Option<String>) -> Self {
        Self {
            account: Segment::from_option(account),
            region: Segment::from_option(region),
        }
    }

    pub fn deferred() -> Self {
        Self {
            account: Segment::Deferred,
            region: Segment::Deferred,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContainerVariable {
    pub key: String,
    pub value: EnvValue,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeploymentPlan {
    pub environment: String,
    pub props: ResolvedProps,
    pub topology: Topology,
    pub names: ResourceNames,
    pub environment_variables: BTreeMap<Target, Vec<ContainerVariable>>,
    pub advisories: Vec<Advisory>,
}

/// Normalizes, validates, and derives everything the provisioning
/// collaborator needs. Any conflict aborts before names are derived.
pub fn evaluate(props: DifyProps, context: &PlanContext) -> Result<DeploymentPlan> {
    let props = ResolvedProps::from_props(props);
    let advisories = validate(&props)?;

    for advisory in &advisories {
        warn!("{}", advisory);
    }

    let topology = Topology::select(&props);
    let builder = NameBuilder::new(&props.environment);
    let names = ResourceNames::derive(&builder, &context.account, &context.region);
    let environment_variables = container_variables(&props);

    info!(
        "Evaluated deployment plan for environment {} (cluster {})",
        builder.environment(),
        names.cluster
    );

    Ok(DeploymentPlan {
        environment: builder.environment().to_string(),
        props,
        topology,
        names,
        environment_variables,
        advisories,
    })
}

fn container_variables(props: &ResolvedProps) -> BTreeMap<Target, Vec<ContainerVariable>> {
    Target::ALL
        .into_iter()
        .map(|target| {
            let vars = props
                .additional_environment_variables
                .iter()
                .filter(|var| var.applies_to(target))
                .map(|var| ContainerVariable {
                    key: var.key.clone(),
                    value: var.value.clone(),
                })
                .collect();
            (target, vars)
        })
        .collect()
}
