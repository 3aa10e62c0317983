//! Core rendering abstractions shared by document serializers.
//!
//! - `DocumentRenderer` trait: the begin/resources/body/finish protocol every
//!   backend implements
//! - `RenderError`: the error type of every serialization step
//! - `utils`: unit conversions from the points used in the IDF

mod error;
mod traits;
pub mod utils;

pub use error::RenderError;
pub use traits::{render_to_writer, DocumentRenderer};
