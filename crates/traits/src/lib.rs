pub mod resource;

pub use resource::{
    InMemoryResourceProvider, LoadedImage, ResourceError, ResourceProvider, SharedResourceData,
};
