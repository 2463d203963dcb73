//! # Tether
//!
//! Diagnostics for a dependency injection container's resolution plans.
//!
//! The resolution engine builds a [`ResolutionPlan`] per resolution call. Before
//! instantiating anything it asks this crate whether the plan is circular, and when
//! a request cannot be satisfied it uses the listings here to explain why.
//!
//! ## Feature Flags
//!
//! - `di` (default) - plan diagnostics from `tether-di`
//!
//! ## Quick Example
//!
//! ```rust
//! use tether::prelude::*;
//!
//! let mut registry = BindingRegistry::new();
//! registry.register("Weapon", Binding::to(Constructible::new("Katana")));
//! registry.register("Weapon", Binding::to(Constructible::new("Shuriken")));
//!
//! let mut plan = ResolutionPlan::new("Ninja");
//! plan.add_child(plan.root_id(), "Weapon", Some(Target::new("weapon"))).unwrap();
//! assert!(detect_cycles(plan.root()).is_ok());
//!
//! let error = tether::di::report::ambiguous_match(&registry, &"Weapon".into());
//! assert!(error.to_string().ends_with("\n Katana\n Shuriken"));
//! ```

#[cfg(feature = "di")]
pub use tether_di as di;

#[cfg(feature = "di")]
pub use tether_di::{
	Binding, BindingLookup, BindingRegistry, Constructible, CycleDetector, DetectorConfig,
	DiResult, DiagnosticError, InjectionTarget, Request, RequestId, ResolutionError,
	ResolutionPlan, ServiceIdentifier, Tag, Target, Token,
};

/// Common imports for working with resolution plans
#[cfg(feature = "di")]
pub mod prelude {
	pub use tether_di::{
		Binding, BindingLookup, BindingRegistry, Constructible, CycleDetector, DetectorConfig,
		DiagnosticError, InjectionTarget, ResolutionError, ResolutionPlan, ServiceIdentifier,
		Target, Token, dependency_chain_to_string, detect_cycles, list_metadata_for_target,
		list_registered_bindings_in,
	};
}

#[cfg(all(test, feature = "di"))]
mod tests {
	use super::prelude::*;
	use rstest::rstest;

	#[rstest]
	fn test_prelude_covers_cycle_detection() {
		// Arrange
		let mut plan = ResolutionPlan::new(Token::new("Logger"));
		let config = plan
			.add_child(plan.root_id(), "Config", None)
			.unwrap();
		plan.add_child(config, "Config", None).unwrap();

		// Act
		let result = CycleDetector::new(DetectorConfig::default()).detect(plan.root());

		// Assert
		assert_eq!(
			result.unwrap_err().to_string(),
			"Circular dependency found: Symbol(Logger) --> Config --> Config"
		);
	}
}
