pub mod age;
pub mod etl;
pub mod parser;
pub mod pipeline;
pub mod reporter;
pub mod sorter;

pub use crate::domain::model::{Record, ReportRow, TransformResult};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
