//! Document generation pipeline orchestration.
//!
//! - [`PipelineBuilder`]: fluent builder that validates tokens and picks the
//!   resource provider
//! - [`DocumentPipeline`]: loads the logo, renders and serializes
//!
//! # Example
//!
//! ```ignore
//! use skyedoc::{brand, PipelineBuilder, Preset};
//!
//! let pipeline = PipelineBuilder::new()
//!     .with_preset(Preset::Book)
//!     .with_logo_path("assets/skyetrain-logo.png")
//!     .build()?;
//!
//! pipeline.generate_to_file(&brand::content(), "SkyeTrain_Guide_Mobile.docx").await?;
//! ```

mod builder;
mod orchestrator;

pub use builder::PipelineBuilder;
pub use orchestrator::DocumentPipeline;
