//! Training pipeline
//!
//! This module provides the reference driver for online learners:
//! - [`Environment`]: the sampled-transition port learners train against
//! - [`TrainingPipeline`]: runs episodes, routes transitions into the learner
//!   and tracks the training budget
//! - observers that record or display progress during training

pub mod environment;
pub mod observers;
pub mod training;

pub use environment::{Environment, Step};
pub use observers::{MetricsObserver, MetricsSummary, ProgressObserver};
pub use training::{TrainingConfig, TrainingPipeline, TrainingResult};

pub use crate::ports::{Learner, Observer};
