mod builder;
mod names;
mod utils;

pub use builder::{NameBuilder, Segment};
pub use names::ResourceNames;
pub use utils::{
    bucket_base, build_bucket_name, build_parameter_path, build_resource_name, build_scoped_name,
    sanitize,
};
