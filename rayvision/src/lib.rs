#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub use rayvision_core::*;

/// Client of the render api.
pub mod render {
    pub use rayvision_render_api::*;
}

#[cfg(feature = "default-context")]
mod context;
#[cfg(feature = "default-context")]
pub use context::{default_client, DefaultContext};
