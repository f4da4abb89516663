pub mod dataset;
pub mod engine;
pub mod navigation;
pub mod render;

pub use crate::domain::model::{BuildResult, Dataset, NavEvent, NavOrigin, Section};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
