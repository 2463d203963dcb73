//! Circular dependency detection over resolution plans
//!
//! A request is circular when its own identifier already appears among its strict
//! ancestors: the plan is about to build `X` again while still in the middle of
//! building `X`, however many hops lie in between.
//!
//! ## Features
//!
//! - **Pre-order**: children are visited depth-first, left to right, and the first
//!   circular request found is the one reported
//! - **Iterative**: the walk uses an explicit stack, so deep plans do not grow the
//!   call stack
//! - **Depth Limiting**: an optional maximum from [`DetectorConfig`]
//!
//! Detection is scoped to strict ancestors. Cycles formed between sibling subtrees
//! through resources outside the plan are not reported.

use crate::chain::dependency_chain_to_string;
use crate::config::DetectorConfig;
use crate::error::{DiResult, DiagnosticError};
use crate::identifier::ServiceIdentifier;
use crate::plan::Request;

/// Whether some strict ancestor of `request` carries `identifier`.
///
/// The request itself is never compared, only its parent chain.
pub fn is_identifier_in_ancestry(request: Request<'_>, identifier: &ServiceIdentifier) -> bool {
	request
		.ancestors()
		.any(|ancestor| ancestor.service_identifier() == identifier)
}

/// Walks a plan looking for circular requests.
#[derive(Debug, Clone, Default)]
pub struct CycleDetector {
	config: DetectorConfig,
}

impl CycleDetector {
	pub fn new(config: DetectorConfig) -> Self {
		Self { config }
	}

	pub fn config(&self) -> &DetectorConfig {
		&self.config
	}

	/// Checks every descendant of `root`.
	///
	/// Fails with [`DiagnosticError::CircularDependency`] at the first circular
	/// request in pre-order. A request deeper than the configured maximum fails
	/// with [`DiagnosticError::MaxDepthExceeded`] once it is reached without an
	/// earlier cycle. Depths are measured from the plan root.
	pub fn detect(&self, root: Request<'_>) -> DiResult<()> {
		let mut pending: Vec<Request<'_>> = root.child_requests().rev().collect();

		while let Some(request) = pending.pop() {
			tracing::trace!(
				service_identifier = %request.service_identifier(),
				depth = request.depth(),
				"Checking request for circular dependency"
			);

			if is_identifier_in_ancestry(request, request.service_identifier()) {
				let chain = dependency_chain_to_string(request);
				tracing::debug!(chain = %chain, "Circular dependency detected");
				return Err(DiagnosticError::CircularDependency { chain });
			}

			if let Some(limit) = self.config.max_depth {
				if request.depth() > limit {
					tracing::debug!(
						depth = request.depth(),
						limit,
						"Resolution plan depth exceeded"
					);
					return Err(DiagnosticError::MaxDepthExceeded {
						depth: request.depth(),
						limit,
					});
				}
			}

			pending.extend(request.child_requests().rev());
		}

		Ok(())
	}
}

/// Checks a plan with the default configuration.
///
/// # Examples
///
/// ```rust
/// use tether_di::{DiagnosticError, ResolutionPlan, detect_cycles};
///
/// let mut plan = ResolutionPlan::new("A");
/// let b = plan.add_child(plan.root_id(), "B", None).unwrap();
/// plan.add_child(b, "A", None).unwrap();
///
/// let err = detect_cycles(plan.root()).unwrap_err();
/// assert_eq!(err.to_string(), "Circular dependency found: A --> B --> A");
/// ```
pub fn detect_cycles(root: Request<'_>) -> DiResult<()> {
	CycleDetector::default().detect(root)
}
