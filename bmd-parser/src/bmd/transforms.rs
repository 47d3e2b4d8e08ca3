//! Transform pipeline
//!
//! Processing is split into stages that compose into pipelines. A stage implements
//! [`Runnable<I, O>`]; a [`Transform<I, O>`] wraps stages and chains them with
//! [`Transform::then`], the compiler checking that each output feeds the next input:
//!
//! ```rust,ignore
//! let pipeline = Transform::from_fn(Ok)
//!     .then(Normalize::new(4))   // String → String
//!     .then(ParseBlocks::new())  // String → Tree
//!     .then(RenderHtml::plain()); // Tree → String
//! ```
//!
//! The common pipelines exist as `once_cell` statics in [`standard`]; [`stages`] holds the
//! individual stages.
//!
//! Parsing itself cannot fail, so in practice only the serializing stages produce errors.
//! The error type is shared by all stages so that pipelines stay composable.

pub mod stages;
pub mod standard;

use thiserror::Error;

/// Error raised by a transform stage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    #[error("{0}")]
    Error(String),
    #[error("stage '{stage}' failed: {message}")]
    StageFailed { stage: String, message: String },
}

impl TransformError {
    pub fn stage(stage: impl Into<String>, message: impl ToString) -> Self {
        TransformError::StageFailed {
            stage: stage.into(),
            message: message.to_string(),
        }
    }
}

impl From<String> for TransformError {
    fn from(s: String) -> Self {
        TransformError::Error(s)
    }
}

impl From<&str> for TransformError {
    fn from(s: &str) -> Self {
        TransformError::Error(s.to_string())
    }
}

/// Something that turns an `I` into an `O`.
pub trait Runnable<I, O> {
    fn run(&self, input: I) -> Result<O, TransformError>;
}

/// A composable pipeline from `I` to `O`.
pub struct Transform<I, O> {
    run_fn: Box<dyn Fn(I) -> Result<O, TransformError> + Send + Sync>,
}

impl<I, O> Transform<I, O> {
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(I) -> Result<O, TransformError> + Send + Sync + 'static,
    {
        Transform {
            run_fn: Box::new(f),
        }
    }

    /// Append a stage, feeding it this transform's output.
    pub fn then<O2, S>(self, stage: S) -> Transform<I, O2>
    where
        S: Runnable<O, O2> + Send + Sync + 'static,
        I: 'static,
        O: 'static,
        O2: 'static,
    {
        let prev_run = self.run_fn;
        Transform {
            run_fn: Box::new(move |input| {
                let intermediate = prev_run(input)?;
                stage.run(intermediate)
            }),
        }
    }

    /// Append a pre-built static transform.
    pub fn then_transform<O2>(self, next: &'static Transform<O, O2>) -> Transform<I, O2>
    where
        I: 'static,
        O: 'static,
        O2: 'static,
    {
        let prev_run = self.run_fn;
        Transform {
            run_fn: Box::new(move |input| {
                let intermediate = prev_run(input)?;
                next.run(intermediate)
            }),
        }
    }

    pub fn run(&self, input: I) -> Result<O, TransformError> {
        (self.run_fn)(input)
    }
}

impl<I, O> Runnable<I, O> for Transform<I, O>
where
    I: 'static,
    O: 'static,
{
    fn run(&self, input: I) -> Result<O, TransformError> {
        Transform::run(self, input)
    }
}
