//! Service identifiers and their display form
//!
//! A [`ServiceIdentifier`] is the key under which a dependency is registered and
//! requested. The kind of key is fixed when the identifier is built, and each kind
//! carries its own equality rule:
//!
//! - [`ServiceIdentifier::TextKey`] compares by string content
//! - [`ServiceIdentifier::Token`] compares by token identity
//! - [`ServiceIdentifier::NamedConstructible`] compares by entity identity, never by name
//!
//! ## Example
//!
//! ```rust
//! use tether_di::{Constructible, ServiceIdentifier, Token};
//!
//! let warrior = Constructible::new("Warrior");
//! let id = ServiceIdentifier::from(warrior.clone());
//!
//! assert_eq!(id, ServiceIdentifier::from(warrior));
//! assert_ne!(id, ServiceIdentifier::from(Constructible::new("Warrior")));
//! assert_eq!(id.to_string(), "Warrior");
//!
//! let token = Token::new("Weapon");
//! assert_eq!(ServiceIdentifier::from(token).to_string(), "Symbol(Weapon)");
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Unique symbolic token.
///
/// Every call to [`Token::new`] or [`Token::anonymous`] produces a distinct identity,
/// even when the descriptions match. Clones share the identity of the original.
#[derive(Clone)]
pub struct Token {
	inner: Arc<TokenInner>,
}

struct TokenInner {
	description: Option<String>,
}

impl Token {
	/// Creates a token carrying a description used only for display.
	///
	/// # Examples
	///
	/// ```rust
	/// use tether_di::Token;
	///
	/// let a = Token::new("Weapon");
	/// let b = Token::new("Weapon");
	/// assert_ne!(a, b);
	/// assert_eq!(a, a.clone());
	/// ```
	pub fn new(description: impl Into<String>) -> Self {
		Self {
			inner: Arc::new(TokenInner {
				description: Some(description.into()),
			}),
		}
	}

	/// Creates a token without a description.
	pub fn anonymous() -> Self {
		Self {
			inner: Arc::new(TokenInner { description: None }),
		}
	}

	pub fn description(&self) -> Option<&str> {
		self.inner.description.as_deref()
	}
}

impl PartialEq for Token {
	fn eq(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.inner, &other.inner)
	}
}

impl Eq for Token {}

impl Hash for Token {
	fn hash<H: Hasher>(&self, state: &mut H) {
		Arc::as_ptr(&self.inner).hash(state);
	}
}

impl fmt::Display for Token {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Symbol({})", self.description().unwrap_or_default())
	}
}

impl fmt::Debug for Token {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("Token").field(&self.description()).finish()
	}
}

/// Descriptor of a registrable implementation.
///
/// The display name is mandatory and given at registration time. Two descriptors
/// with the same name are still different entities.
#[derive(Clone)]
pub struct Constructible {
	inner: Arc<ConstructibleInner>,
}

struct ConstructibleInner {
	name: String,
}

impl Constructible {
	/// Creates a new implementation descriptor with its display name.
	///
	/// # Examples
	///
	/// ```rust
	/// use tether_di::Constructible;
	///
	/// let katana = Constructible::new("Katana");
	/// assert_eq!(katana.name(), "Katana");
	/// ```
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			inner: Arc::new(ConstructibleInner { name: name.into() }),
		}
	}

	pub fn name(&self) -> &str {
		&self.inner.name
	}
}

impl PartialEq for Constructible {
	fn eq(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.inner, &other.inner)
	}
}

impl Eq for Constructible {}

impl Hash for Constructible {
	fn hash<H: Hasher>(&self, state: &mut H) {
		Arc::as_ptr(&self.inner).hash(state);
	}
}

impl fmt::Display for Constructible {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl fmt::Debug for Constructible {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("Constructible").field(&self.name()).finish()
	}
}

/// Key under which a dependency is registered and requested.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ServiceIdentifier {
	/// Plain textual key
	TextKey(String),
	/// Unique symbolic token
	Token(Token),
	/// Named constructible entity
	NamedConstructible(Constructible),
}

impl fmt::Display for ServiceIdentifier {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::TextKey(key) => f.write_str(key),
			Self::Token(token) => token.fmt(f),
			Self::NamedConstructible(constructible) => constructible.fmt(f),
		}
	}
}

impl From<&str> for ServiceIdentifier {
	fn from(key: &str) -> Self {
		Self::TextKey(key.to_string())
	}
}

impl From<String> for ServiceIdentifier {
	fn from(key: String) -> Self {
		Self::TextKey(key)
	}
}

impl From<Token> for ServiceIdentifier {
	fn from(token: Token) -> Self {
		Self::Token(token)
	}
}

impl From<Constructible> for ServiceIdentifier {
	fn from(constructible: Constructible) -> Self {
		Self::NamedConstructible(constructible)
	}
}

/// Returns the display string of a service identifier.
///
/// The constructible's own name, the token's symbol form, or the raw text key.
pub fn service_identifier_as_string(service_identifier: &ServiceIdentifier) -> String {
	service_identifier.to_string()
}
