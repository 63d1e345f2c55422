use serde::{Deserialize, Serialize};

/// Structure that represents a color.
/// Internally all components are stored as `f32` that range from `0.0` to `1.0`, alpha going from transparent to opaque.
/// Serialized as an RGBA hex string. An RGB hex string deserializes to an opaque color.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Color {
	red: f32,
	green: f32,
	blue: f32,
	alpha: f32,
}

impl Color {
	pub const BLACK: Color = Color::from_rgbf32_unchecked(0., 0., 0.);
	pub const WHITE: Color = Color::from_rgbf32_unchecked(1., 1., 1.);
	pub const RED: Color = Color::from_rgbf32_unchecked(1., 0., 0.);
	pub const TRANSPARENT: Color = Color::from_rgbaf32_unchecked(0., 0., 0., 0.);

	/// Return an opaque `Color` from given `f32` RGB channels, without validating them.
	pub const fn from_rgbf32_unchecked(red: f32, green: f32, blue: f32) -> Color {
		Color { red, green, blue, alpha: 1. }
	}

	pub const fn from_rgbaf32_unchecked(red: f32, green: f32, blue: f32, alpha: f32) -> Color {
		Color { red, green, blue, alpha }
	}

	/// Return an opaque `Color` given RGB channels from `0` to `255`.
	pub fn from_rgb8(red: u8, green: u8, blue: u8) -> Color {
		Color::from_rgba8(red, green, blue, 255)
	}

	pub fn from_rgba8(red: u8, green: u8, blue: u8, alpha: u8) -> Color {
		let map_range = |int_color| int_color as f32 / 255.;
		Color {
			red: map_range(red),
			green: map_range(green),
			blue: map_range(blue),
			alpha: map_range(alpha),
		}
	}

	/// Creates a color from an 8-character RGBA hex string (without a # prefix).
	///
	/// # Examples
	/// ```
	/// use facet_editor::Color;
	/// let color = Color::from_rgba_str("7C67FA61").unwrap();
	/// assert_eq!(color.to_rgba_hex(), "7c67fa61");
	/// ```
	pub fn from_rgba_str(color_str: &str) -> Option<Color> {
		if color_str.len() != 8 {
			return None;
		}
		let r = u8::from_str_radix(color_str.get(0..2)?, 16).ok()?;
		let g = u8::from_str_radix(color_str.get(2..4)?, 16).ok()?;
		let b = u8::from_str_radix(color_str.get(4..6)?, 16).ok()?;
		let a = u8::from_str_radix(color_str.get(6..8)?, 16).ok()?;

		Some(Color::from_rgba8(r, g, b, a))
	}

	/// Creates a color from a 6-character RGB hex string (without a # prefix).
	pub fn from_rgb_str(color_str: &str) -> Option<Color> {
		if color_str.len() != 6 {
			return None;
		}
		let r = u8::from_str_radix(color_str.get(0..2)?, 16).ok()?;
		let g = u8::from_str_radix(color_str.get(2..4)?, 16).ok()?;
		let b = u8::from_str_radix(color_str.get(4..6)?, 16).ok()?;

		Some(Color::from_rgb8(r, g, b))
	}

	/// Return an 8-character RGBA hex string (without a # prefix).
	pub fn to_rgba_hex(&self) -> String {
		let [r, g, b, a] = [self.red, self.green, self.blue, self.alpha].map(|channel| (channel * 255.).round() as u8);
		format!("{r:02x}{g:02x}{b:02x}{a:02x}")
	}
}

impl From<Color> for String {
	fn from(color: Color) -> Self {
		color.to_rgba_hex()
	}
}

impl TryFrom<String> for Color {
	type Error = String;

	fn try_from(hex: String) -> Result<Self, Self::Error> {
		Color::from_rgba_str(&hex).or_else(|| Color::from_rgb_str(&hex)).ok_or_else(|| format!("`{hex}` is not an RGB or RGBA hex color"))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn hex_strings_round_trip() {
		let color = Color::from_rgb_str("ff8000").unwrap();
		assert_eq!(color, Color::from_rgba8(255, 128, 0, 255));
		assert_eq!(color.to_rgba_hex(), "ff8000ff");
		assert_eq!(Color::from_rgba_str("00000000"), Some(Color::TRANSPARENT));
	}

	#[test]
	fn malformed_hex_strings_are_rejected() {
		assert_eq!(Color::from_rgb_str("ff80"), None);
		assert_eq!(Color::from_rgb_str("gg8000"), None);
		assert_eq!(Color::from_rgba_str("ff8000"), None);
		assert_eq!(Color::from_rgb_str("ÿÿ00"), None);
	}

	#[test]
	fn serialized_as_hex() {
		assert_eq!(serde_json::to_string(&Color::RED).unwrap(), r#""ff0000ff""#);
		assert_eq!(serde_json::from_str::<Color>(r#""ffffff""#).unwrap(), Color::WHITE);
		assert_eq!(serde_json::from_str::<Color>(r#""00000000""#).unwrap(), Color::TRANSPARENT);
		assert!(serde_json::from_str::<Color>(r#""red""#).is_err());
	}
}
