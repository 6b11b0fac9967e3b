pub mod engine;
pub mod pipeline;
pub mod record;
pub mod registry;

pub use crate::domain::model::{FieldValue, Schema};
pub use pipeline::NormalizeResult;
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
