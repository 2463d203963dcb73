//! Registered bindings and the container lookup capability

use crate::identifier::{Constructible, ServiceIdentifier};
use crate::messages::CONSTANT_VALUE_BINDING_NAME;
use indexmap::IndexMap;

/// Disambiguating constraint attached to a binding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BindingConstraint {
	/// Human-readable description of the constraint, if any
	pub meta_data: Option<String>,
}

/// Registered mapping from a service identifier to an implementation or constant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
	implementation_type: Option<Constructible>,
	constraint: BindingConstraint,
}

impl Binding {
	/// Binds to a constructible implementation.
	pub fn to(implementation_type: Constructible) -> Self {
		Self {
			implementation_type: Some(implementation_type),
			constraint: BindingConstraint::default(),
		}
	}

	/// Binds to a constant value.
	pub fn to_constant() -> Self {
		Self {
			implementation_type: None,
			constraint: BindingConstraint::default(),
		}
	}

	pub fn with_meta_data(mut self, meta_data: impl Into<String>) -> Self {
		self.constraint.meta_data = Some(meta_data.into());
		self
	}

	/// `None` for constant-value bindings.
	pub fn implementation_type(&self) -> Option<&Constructible> {
		self.implementation_type.as_ref()
	}

	pub fn constraint(&self) -> &BindingConstraint {
		&self.constraint
	}

	/// Implementation name, or the placeholder used for constant-value bindings.
	pub fn display_name(&self) -> &str {
		self.implementation_type
			.as_ref()
			.map_or(CONSTANT_VALUE_BINDING_NAME, Constructible::name)
	}
}

/// Container capability used by the binding listings.
pub trait BindingLookup {
	/// Bindings registered for `service_identifier`, in registration order.
	fn get_bindings(&self, service_identifier: &ServiceIdentifier) -> Vec<Binding>;
}

/// In-memory binding table keeping registration order.
///
/// # Examples
///
/// ```rust
/// use tether_di::{Binding, BindingLookup, BindingRegistry, Constructible};
///
/// let mut registry = BindingRegistry::new();
/// registry.register("Weapon", Binding::to(Constructible::new("Katana")));
/// registry.register("Weapon", Binding::to_constant());
///
/// assert_eq!(registry.get_bindings(&"Weapon".into()).len(), 2);
/// assert!(registry.get_bindings(&"Shield".into()).is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct BindingRegistry {
	bindings: IndexMap<ServiceIdentifier, Vec<Binding>>,
}

impl BindingRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn register(
		&mut self,
		service_identifier: impl Into<ServiceIdentifier>,
		binding: Binding,
	) -> &mut Self {
		self.bindings
			.entry(service_identifier.into())
			.or_default()
			.push(binding);
		self
	}

	/// Number of identifiers with at least one binding.
	pub fn len(&self) -> usize {
		self.bindings.len()
	}

	pub fn is_empty(&self) -> bool {
		self.bindings.is_empty()
	}
}

impl BindingLookup for BindingRegistry {
	fn get_bindings(&self, service_identifier: &ServiceIdentifier) -> Vec<Binding> {
		self.bindings
			.get(service_identifier)
			.cloned()
			.unwrap_or_default()
	}
}
