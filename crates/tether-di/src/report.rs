//! Resolution error reports
//!
//! Composes the messages the resolution engine raises when a request matches no
//! binding or more than one binding.

use crate::binding::BindingLookup;
use crate::error::ResolutionError;
use crate::identifier::ServiceIdentifier;
use crate::listing::{list_metadata_for_target, list_registered_bindings_in};
use crate::messages::{AMBIGUOUS_MATCH, NOT_REGISTERED};
use crate::target::InjectionTarget;

/// Builds the error for a request that matched no binding.
///
/// The message lists the target qualifiers, then whatever is registered under the
/// identifier (bindings may exist but fail the target's constraints).
///
/// # Examples
///
/// ```rust
/// use tether_di::{BindingRegistry, Target, report};
///
/// let registry = BindingRegistry::new();
/// let error = report::not_registered(&registry, &"Shield".into(), &Target::new("shield"));
/// assert_eq!(
/// 	error.to_string(),
/// 	"No matching bindings found for serviceIdentifier: Shield"
/// );
/// ```
pub fn not_registered<C, T>(
	container: &C,
	service_identifier: &ServiceIdentifier,
	target: &T,
) -> ResolutionError
where
	C: BindingLookup + ?Sized,
	T: InjectionTarget + ?Sized,
{
	let identifier = service_identifier.to_string();
	let message = format!(
		"{NOT_REGISTERED}{}{}",
		list_metadata_for_target(&identifier, target),
		list_registered_bindings_in(container, service_identifier)
	);
	tracing::debug!(service_identifier = %identifier, "No matching bindings");
	ResolutionError::NotRegistered { message }
}

/// Builds the error for a single-valued request that matched several bindings.
pub fn ambiguous_match<C>(container: &C, service_identifier: &ServiceIdentifier) -> ResolutionError
where
	C: BindingLookup + ?Sized,
{
	let identifier = service_identifier.to_string();
	let message = format!(
		"{AMBIGUOUS_MATCH} {identifier}{}",
		list_registered_bindings_in(container, service_identifier)
	);
	tracing::debug!(service_identifier = %identifier, "Ambiguous bindings");
	ResolutionError::AmbiguousMatch { message }
}
