//! Dependency chain rendering

use crate::messages::DEPENDENCY_CHAIN_SEPARATOR;
use crate::plan::Request;

/// Renders the chain of identifiers from the plan root down to `request`.
///
/// A request at depth `k` yields `k + 1` display strings joined by `" --> "`,
/// root first.
///
/// # Examples
///
/// ```rust
/// use tether_di::{ResolutionPlan, dependency_chain_to_string};
///
/// let mut plan = ResolutionPlan::new("A");
/// let b = plan.add_child(plan.root_id(), "B", None).unwrap();
/// let c = plan.add_child(b, "C", None).unwrap();
///
/// let chain = dependency_chain_to_string(plan.request(c).unwrap());
/// assert_eq!(chain, "A --> B --> C");
/// ```
pub fn dependency_chain_to_string(request: Request<'_>) -> String {
	let mut chain: Vec<String> = std::iter::once(request)
		.chain(request.ancestors())
		.map(|r| r.service_identifier().to_string())
		.collect();
	chain.reverse();
	chain.join(DEPENDENCY_CHAIN_SEPARATOR)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::identifier::{Constructible, Token};
	use crate::plan::ResolutionPlan;
	use rstest::rstest;

	#[rstest]
	fn test_root_renders_alone() {
		// Arrange
		let plan = ResolutionPlan::new("Ninja");

		// Act
		let chain = dependency_chain_to_string(plan.root());

		// Assert
		assert_eq!(chain, "Ninja");
	}

	#[rstest]
	fn test_mixed_identifier_kinds() {
		// Arrange
		let mut plan = ResolutionPlan::new(Constructible::new("Ninja"));
		let weapon = plan
			.add_child(plan.root_id(), Token::new("Weapon"), None)
			.unwrap();
		let blade = plan.add_child(weapon, "Blade", None).unwrap();

		// Act
		let chain = dependency_chain_to_string(plan.request(blade).unwrap());

		// Assert
		assert_eq!(chain, "Ninja --> Symbol(Weapon) --> Blade");
	}

	#[rstest]
	fn test_repeated_calls_are_independent() {
		// Arrange
		let mut plan = ResolutionPlan::new("A");
		let b = plan.add_child(plan.root_id(), "B", None).unwrap();
		let request = plan.request(b).unwrap();

		// Act
		let first = dependency_chain_to_string(request);
		let second = dependency_chain_to_string(request);

		// Assert
		assert_eq!(first, "A --> B");
		assert_eq!(first, second);
	}
}
