#[macro_use]
extern crate log;

pub mod artwork;
pub mod color;
pub mod consts;
pub mod document;
pub mod misc;
pub mod params;
pub mod pipeline;
pub mod style;

#[cfg(test)]
pub mod test_utils;

#[doc(inline)]
pub use artwork::{ArtworkItem, HandleType};
#[doc(inline)]
pub use color::Color;
#[doc(inline)]
pub use document::ArtworkDocument;
#[doc(inline)]
pub use misc::EditorError;
#[doc(inline)]
pub use params::TransformParams;
#[doc(inline)]
pub use pipeline::{apply_all, recompute_artwork};

pub use bevel_engine::{ArtworkId, BevelType, NodeId, NodeOverride, NodeOverrides, PathId};
pub use subpath_rs::{ManipulatorGroup, Subpath};
