//! Injection targets and their qualifier tags

use std::fmt;

/// Key reserved for the named qualifier of a target.
pub const NAMED_TAG: &str = "named";

/// Qualifier attached to an injection point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
	key: String,
	value: String,
}

impl Tag {
	pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
		Self {
			key: key.into(),
			value: value.into(),
		}
	}

	/// Creates the named qualifier of a target.
	pub fn named(value: impl Into<String>) -> Self {
		Self::new(NAMED_TAG, value)
	}

	pub fn key(&self) -> &str {
		&self.key
	}

	pub fn value(&self) -> &str {
		&self.value
	}

	pub fn is_named_tag(&self) -> bool {
		self.key == NAMED_TAG
	}
}

/// A named tag displays as its value, any other tag as `key: value`.
impl fmt::Display for Tag {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.is_named_tag() {
			f.write_str(&self.value)
		} else {
			write!(f, "{}: {}", self.key, self.value)
		}
	}
}

/// Capability surface of an injection point.
///
/// The resolution engine owns the concrete target type; diagnostics only need
/// to know whether it carries qualifiers and what they are.
pub trait InjectionTarget {
	/// Whether the target carries at least one custom tag.
	fn is_tagged(&self) -> bool;

	/// Whether the target carries a named tag.
	fn is_named(&self) -> bool;

	fn named_tag(&self) -> Option<&Tag>;

	/// Custom tags in insertion order, or `None` when there are none.
	fn custom_tags(&self) -> Option<&[Tag]>;
}

/// Injection point, such as a constructor parameter.
///
/// # Examples
///
/// ```rust
/// use tether_di::{InjectionTarget, Target};
///
/// let target = Target::new("weapon")
/// 	.with_named_tag("throwable")
/// 	.with_custom_tag("range", "short");
///
/// assert!(target.is_named());
/// assert!(target.is_tagged());
/// assert_eq!(target.named_tag().unwrap().to_string(), "throwable");
/// assert_eq!(target.custom_tags().unwrap()[0].to_string(), "range: short");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Target {
	name: Option<String>,
	named_tag: Option<Tag>,
	custom_tags: Vec<Tag>,
}

impl Target {
	/// Creates a target for the given parameter name.
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: Some(name.into()),
			..Self::default()
		}
	}

	/// Sets the named qualifier, replacing any previous one.
	pub fn with_named_tag(mut self, value: impl Into<String>) -> Self {
		self.named_tag = Some(Tag::named(value));
		self
	}

	/// Appends a custom tag.
	///
	/// A tag whose key is [`NAMED_TAG`] sets the named qualifier instead.
	pub fn with_custom_tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		let tag = Tag::new(key, value);
		if tag.is_named_tag() {
			self.named_tag = Some(tag);
		} else {
			self.custom_tags.push(tag);
		}
		self
	}

	pub fn name(&self) -> Option<&str> {
		self.name.as_deref()
	}
}

impl InjectionTarget for Target {
	fn is_tagged(&self) -> bool {
		!self.custom_tags.is_empty()
	}

	fn is_named(&self) -> bool {
		self.named_tag.is_some()
	}

	fn named_tag(&self) -> Option<&Tag> {
		self.named_tag.as_ref()
	}

	fn custom_tags(&self) -> Option<&[Tag]> {
		if self.custom_tags.is_empty() {
			None
		} else {
			Some(&self.custom_tags)
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_plain_target_has_no_qualifiers() {
		// Arrange
		let target = Target::new("katana");

		// Assert
		assert!(!target.is_named());
		assert!(!target.is_tagged());
		assert!(target.named_tag().is_none());
		assert!(target.custom_tags().is_none());
		assert_eq!(target.name(), Some("katana"));
	}

	#[rstest]
	fn test_named_key_routes_to_named_tag() {
		// Act
		let target = Target::default().with_custom_tag(NAMED_TAG, "throwable");

		// Assert
		assert!(target.is_named());
		assert!(!target.is_tagged());
		assert_eq!(target.named_tag().map(Tag::value), Some("throwable"));
	}

	#[rstest]
	fn test_custom_tags_keep_insertion_order() {
		// Act
		let target = Target::default()
			.with_custom_tag("side", "left")
			.with_custom_tag("range", "short");

		// Assert
		let keys: Vec<&str> = target
			.custom_tags()
			.unwrap_or_default()
			.iter()
			.map(Tag::key)
			.collect();
		assert_eq!(keys, vec!["side", "range"]);
	}

	#[rstest]
	#[case::named(Tag::named("throwable"), "throwable")]
	#[case::custom(Tag::new("side", "left"), "side: left")]
	fn test_tag_display(#[case] tag: Tag, #[case] expected: &str) {
		assert_eq!(tag.to_string(), expected);
	}
}
