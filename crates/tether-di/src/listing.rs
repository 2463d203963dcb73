//! Binding and target listings for resolution error messages

use crate::binding::{Binding, BindingLookup};
use crate::identifier::ServiceIdentifier;
use crate::messages::REGISTERED_BINDINGS_HEADER;
use crate::target::InjectionTarget;

/// Lists the bindings `get_bindings` returns for `service_identifier`.
///
/// Returns an empty string when nothing is registered. Otherwise the listing starts
/// with a newline and a header, followed by one line per binding in lookup order:
/// the implementation name (or `Object` for constant values) and, when the binding
/// constraint carries metadata, ` - <metadata>`.
///
/// # Examples
///
/// ```rust
/// use tether_di::{Binding, BindingLookup, BindingRegistry, Constructible};
/// use tether_di::list_registered_bindings;
///
/// let mut registry = BindingRegistry::new();
/// registry
/// 	.register("Weapon", Binding::to(Constructible::new("Katana")).with_meta_data("primary"))
/// 	.register("Weapon", Binding::to_constant());
///
/// let listing = list_registered_bindings(&registry, &"Weapon".into(), BindingRegistry::get_bindings);
/// assert_eq!(listing, "\nRegistered bindings:\n Katana - primary\n Object");
/// ```
pub fn list_registered_bindings<C, F>(
	container: &C,
	service_identifier: &ServiceIdentifier,
	get_bindings: F,
) -> String
where
	C: ?Sized,
	F: FnOnce(&C, &ServiceIdentifier) -> Vec<Binding>,
{
	let registered_bindings = get_bindings(container, service_identifier);
	if registered_bindings.is_empty() {
		return String::new();
	}

	let mut listing = format!("\n{REGISTERED_BINDINGS_HEADER}");
	for binding in &registered_bindings {
		listing.push_str("\n ");
		listing.push_str(binding.display_name());

		// Empty metadata is treated like no metadata
		if let Some(meta_data) = binding
			.constraint()
			.meta_data
			.as_deref()
			.filter(|m| !m.is_empty())
		{
			listing.push_str(" - ");
			listing.push_str(meta_data);
		}
	}
	listing
}

/// [`list_registered_bindings`] using the container's own [`BindingLookup`].
pub fn list_registered_bindings_in<C>(container: &C, service_identifier: &ServiceIdentifier) -> String
where
	C: BindingLookup + ?Sized,
{
	list_registered_bindings(container, service_identifier, C::get_bindings)
}

/// Lists the qualifiers of `target` for a missing or ambiguous binding report.
///
/// An unqualified target yields `" <identifier>"`. Otherwise the result repeats the
/// identifier on a second line followed by ` - ` and every qualifier, each ending in
/// a newline: the named tag first, then custom tags in insertion order.
///
/// # Examples
///
/// ```rust
/// use tether_di::{Target, list_metadata_for_target};
///
/// let target = Target::new("weapon").with_named_tag("throwable");
/// assert_eq!(
/// 	list_metadata_for_target("Weapon", &target),
/// 	" Weapon\n Weapon - throwable\n"
/// );
/// ```
pub fn list_metadata_for_target<T>(service_identifier: &str, target: &T) -> String
where
	T: InjectionTarget + ?Sized,
{
	if !(target.is_tagged() || target.is_named()) {
		return format!(" {service_identifier}");
	}

	let mut qualifiers = String::new();
	if let Some(named_tag) = target.named_tag() {
		qualifiers.push_str(&format!("{named_tag}\n"));
	}
	for tag in target.custom_tags().unwrap_or_default() {
		qualifiers.push_str(&format!("{tag}\n"));
	}

	format!(" {service_identifier}\n {service_identifier} - {qualifiers}")
}
