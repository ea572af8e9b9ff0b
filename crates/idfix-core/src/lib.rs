pub mod error;
pub mod validate;

pub mod annotate;
pub mod config;
pub mod normalize;
pub mod registry;
pub mod run;

pub use crate::annotate::{annotate, AnnotationStyle};
pub use crate::config::Config;
pub use crate::error::{IdfixError, Result};
pub use crate::normalize::{normalize, Policy};
pub use crate::registry::ReasonRegistry;
pub use crate::run::{run, Outcome};
pub use crate::validate::{validate, Validation};
