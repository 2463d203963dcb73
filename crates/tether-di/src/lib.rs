//! # Tether Dependency Injection Diagnostics
//!
//! Diagnostics for the resolution plans of the Tether dependency injection container.
//!
//! ## Features
//!
//! - **Cycle detection**: finds the first request whose identifier recurs among its
//!   own ancestors and reports the chain that leads to it
//! - **Dependency chains**: `A --> B --> C` renderings of a request's ancestry
//! - **Binding listings**: what is registered under an identifier, with constraint
//!   metadata, for "no matching binding" and "ambiguous binding" errors
//! - **Target listings**: the named and custom tags of an injection point
//!
//! Everything here reads a plan built by the resolution engine and produces strings
//! or errors. Nothing is instantiated and the plan is never mutated.
//!
//! ## Example
//!
//! ```rust
//! use tether_di::{Constructible, ResolutionPlan, Target, detect_cycles};
//!
//! let ninja = Constructible::new("Ninja");
//! let mut plan = ResolutionPlan::new(ninja.clone());
//! let katana = plan
//! 	.add_child(plan.root_id(), "Katana", Some(Target::new("katana")))
//! 	.unwrap();
//! plan.add_child(katana, ninja, Some(Target::new("owner"))).unwrap();
//!
//! let err = detect_cycles(plan.root()).unwrap_err();
//! assert_eq!(
//! 	err.to_string(),
//! 	"Circular dependency found: Ninja --> Katana --> Ninja"
//! );
//! ```

pub mod binding;
pub mod chain;
pub mod config;
pub mod cycle_detection;
pub mod error;
pub mod identifier;
pub mod listing;
pub mod messages;
pub mod plan;
pub mod report;
pub mod target;

pub use binding::{Binding, BindingConstraint, BindingLookup, BindingRegistry};
pub use chain::dependency_chain_to_string;
pub use config::{ConfigError, DetectorConfig};
pub use cycle_detection::{CycleDetector, detect_cycles, is_identifier_in_ancestry};
pub use error::{DiResult, DiagnosticError, PlanError, ResolutionError};
pub use identifier::{Constructible, ServiceIdentifier, Token, service_identifier_as_string};
pub use listing::{list_metadata_for_target, list_registered_bindings, list_registered_bindings_in};
pub use plan::{Ancestors, Request, RequestId, ResolutionPlan};
pub use target::{InjectionTarget, NAMED_TAG, Tag, Target};
