mod error;
mod normalize;
mod plan;
mod topology;
mod validate;

pub use error::{Conflict, Result, ValidationError};
pub use normalize::ResolvedProps;
pub use plan::{ContainerVariable, DeploymentPlan, PlanContext, evaluate};
pub use topology::{Cache, Capacity, Certificate, Database, Egress, Email, Ingress, Network, Registry, Topology};
pub use validate::{Advisory, validate};
