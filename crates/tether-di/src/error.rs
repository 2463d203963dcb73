//! Error types for plan diagnostics

use crate::messages::CIRCULAR_DEPENDENCY;
use crate::plan::RequestId;

/// Result alias for diagnostic operations
pub type DiResult<T> = Result<T, DiagnosticError>;

/// Failure raised while inspecting a resolution plan.
///
/// A plan that produces one of these is unusable and the whole resolution
/// attempt must be aborted.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiagnosticError {
	/// A request re-asks for an identifier already being resolved by one of its ancestors
	#[error("{prefix} {chain}", prefix = CIRCULAR_DEPENDENCY)]
	CircularDependency {
		/// Root-to-request chain (format: A --> B --> A)
		chain: String,
	},

	/// The plan is deeper than the configured maximum
	#[error(
		"Maximum resolution plan depth exceeded: {depth} (limit {limit})\nThis likely indicates an extremely deep dependency chain."
	)]
	MaxDepthExceeded {
		/// Depth of the offending request
		depth: usize,
		/// Configured maximum depth
		limit: usize,
	},
}

/// Failure while building a resolution plan
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
	#[error("Request {0} does not belong to this resolution plan")]
	UnknownRequest(RequestId),
}

/// Errors the resolution engine reports to its caller.
///
/// The message of each variant is fully composed, including binding and target
/// listings, see [`crate::report`].
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolutionError {
	/// No binding matches the requested identifier
	#[error("{message}")]
	NotRegistered { message: String },

	/// More than one binding matches a request that expects exactly one
	#[error("{message}")]
	AmbiguousMatch { message: String },

	#[error(transparent)]
	Diagnostic(#[from] DiagnosticError),
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_circular_dependency_message() {
		// Arrange
		let error = DiagnosticError::CircularDependency {
			chain: "A --> B --> A".to_string(),
		};

		// Assert
		assert_eq!(error.to_string(), "Circular dependency found: A --> B --> A");
	}

	#[rstest]
	fn test_diagnostic_errors_convert_transparently() {
		// Arrange
		let error = DiagnosticError::CircularDependency {
			chain: "A --> A".to_string(),
		};

		// Act
		let resolution_error = ResolutionError::from(error.clone());

		// Assert
		assert_eq!(resolution_error.to_string(), error.to_string());
	}
}
