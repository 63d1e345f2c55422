use bevel_engine::ArtworkId;

use thiserror::Error;

/// The error type used by the Facet editor.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum EditorError {
	#[error("The artwork item {0:?} does not exist")]
	UnknownArtwork(ArtworkId),

	#[error("The artwork item has no subpath at index {0}")]
	InvalidSubpath(usize),

	#[error("The subpath has no anchor at index {0}")]
	InvalidAnchor(usize),

	#[error("Failed to convert to or from JSON:\n{0}")]
	Serialization(String),
}

macro_rules! derive_from {
	($type:ty, $kind:ident) => {
		impl From<$type> for EditorError {
			fn from(error: $type) -> Self {
				EditorError::$kind(format!("{:?}", error))
			}
		}
	};
}

derive_from!(serde_json::Error, Serialization);
