//! ML pipeline - fitted preprocessing stages and classifiers
//!
//! Applies artifacts that were fitted offline to a single feature record:
//! mean imputation, standard scaling, one-hot encoding, column alignment and
//! classification. Artifacts are plain serde documents so they can be loaded
//! from disk or embedded in tests.

pub mod artifact;
pub mod classifier;
pub mod encoder;
pub mod error;
pub mod frame;
pub mod imputer;
pub mod pipeline;
pub mod scaler;
pub mod testing;

pub use artifact::FittedArtifact;
pub use classifier::{Classifier, DecisionTree, LogisticRegression};
pub use encoder::{HandleUnknown, OneHotEncoder};
pub use error::PipelineError;
pub use frame::{CategoricalRow, LabeledRow, NumericRow};
pub use imputer::SimpleImputer;
pub use pipeline::PredictionPipeline;
pub use scaler::StandardScaler;
