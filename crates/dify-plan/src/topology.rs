use crate::normalize::ResolvedProps;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Ingress {
    CloudFront { custom_domain: Option<String> },
    PublicAlb { custom_domain: Option<String> },
    InternalAlb { custom_domain: Option<String> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Certificate {
    None,
    Managed {
        fqdn: String,
        hosted_zone_id: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Egress {
    NatGateway,
    NatInstance,
    Isolated,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Network {
    Imported { vpc_id: String },
    Created { egress: Egress },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Email {
    Disabled,
    Enabled { domain: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Registry {
    Public,
    Custom { repository_name: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Capacity {
    OnDemand,
    Spot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Cache {
    SingleAz,
    MultiAz,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Database {
    Provisioned,
    ScalesToZero,
}

/// The optional subsystems wired into a deployment, one variant each.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Topology {
    pub ingress: Ingress,
    pub certificate: Certificate,
    pub network: Network,
    pub email: Email,
    pub registry: Registry,
    pub capacity: Capacity,
    pub cache: Cache,
    pub database: Database,
}

impl Topology {
    /// Expects props that already passed validation.
    pub fn select(props: &ResolvedProps) -> Self {
        let custom_domain = props.fqdn();

        let ingress = if props.use_cloud_front {
            Ingress::CloudFront {
                custom_domain: custom_domain.clone(),
            }
        } else if props.internal_alb {
            Ingress::InternalAlb {
                custom_domain: custom_domain.clone(),
            }
        } else {
            Ingress::PublicAlb {
                custom_domain: custom_domain.clone(),
            }
        };

        let certificate = match custom_domain {
            Some(fqdn) => Certificate::Managed {
                fqdn,
                hosted_zone_id: props.hosted_zone_id.clone(),
            },
            None => Certificate::None,
        };

        // Isolation wins over NAT: an isolated VPC has no egress at all.
        let network = match &props.vpc_id {
            Some(vpc_id) => Network::Imported {
                vpc_id: vpc_id.clone(),
            },
            None if props.vpc_isolated => Network::Created {
                egress: Egress::Isolated,
            },
            None if props.use_nat_instance => Network::Created {
                egress: Egress::NatInstance,
            },
            None => Network::Created {
                egress: Egress::NatGateway,
            },
        };

        let email = match (&props.domain_name, props.setup_email) {
            (Some(domain), true) => Email::Enabled {
                domain: domain.clone(),
            },
            _ => Email::Disabled,
        };

        let registry = match &props.custom_ecr_repository_name {
            Some(repository_name) => Registry::Custom {
                repository_name: repository_name.clone(),
            },
            None => Registry::Public,
        };

        Self {
            ingress,
            certificate,
            network,
            email,
            registry,
            capacity: if props.use_fargate_spot {
                Capacity::Spot
            } else {
                Capacity::OnDemand
            },
            cache: if props.is_redis_multi_az {
                Cache::MultiAz
            } else {
                Cache::SingleAz
            },
            database: if props.enable_aurora_scales_to_zero {
                Database::ScalesToZero
            } else {
                Database::Provisioned
            },
        }
    }
}
