#[cfg(feature = "api")]
pub mod api;

pub mod error;
pub mod version;

// Re-export some of our dependencies for QoL, implementing a custom transport needs both
#[cfg(feature = "api")]
pub use async_trait;
#[cfg(feature = "api")]
pub use reqwest;

pub mod prelude {
    #[cfg(feature = "api")]
    pub use crate::api::models::*;
    #[cfg(feature = "api")]
    pub use crate::api::*;

    pub use crate::error::*;
    pub use crate::version::*;
}
