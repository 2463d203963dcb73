//! Resolution plans
//!
//! A [`ResolutionPlan`] is the tree of pending service requests built by the
//! resolution engine for a single resolution call. Nodes live in an arena owned by
//! the plan and are addressed by [`RequestId`]. The parent link of a node is a plain
//! index: it is only used for lookup and never keeps the parent alive.
//!
//! Nodes can only be attached under a node that already exists, so the chain of
//! parent links from any node is a simple path ending at the root.
//!
//! ## Example
//!
//! ```rust
//! use tether_di::{ResolutionPlan, Target};
//!
//! let mut plan = ResolutionPlan::new("Ninja");
//! let katana = plan
//! 	.add_child(plan.root_id(), "Katana", Some(Target::new("katana")))
//! 	.unwrap();
//! plan.add_child(katana, "Blade", None).unwrap();
//!
//! let root = plan.root();
//! assert_eq!(root.child_requests().len(), 1);
//! assert_eq!(plan.request(katana).unwrap().depth(), 1);
//! ```

use crate::error::PlanError;
use crate::identifier::ServiceIdentifier;
use crate::target::Target;
use std::fmt;

/// Index of a request inside its [`ResolutionPlan`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(usize);

impl RequestId {
	pub fn index(self) -> usize {
		self.0
	}
}

impl fmt::Display for RequestId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{}", self.0)
	}
}

#[derive(Debug)]
struct RequestNode {
	service_identifier: ServiceIdentifier,
	parent: Option<RequestId>,
	children: Vec<RequestId>,
	target: Option<Target>,
	depth: usize,
}

/// Arena-backed tree of service requests rooted at the entry-point identifier.
#[derive(Debug)]
pub struct ResolutionPlan {
	nodes: Vec<RequestNode>,
}

impl ResolutionPlan {
	/// Creates a plan holding only the root request.
	pub fn new(root_identifier: impl Into<ServiceIdentifier>) -> Self {
		Self {
			nodes: vec![RequestNode {
				service_identifier: root_identifier.into(),
				parent: None,
				children: Vec::new(),
				target: None,
				depth: 0,
			}],
		}
	}

	pub fn root_id(&self) -> RequestId {
		RequestId(0)
	}

	pub fn root(&self) -> Request<'_> {
		Request {
			plan: self,
			id: self.root_id(),
		}
	}

	/// Attaches a new request as the last child of `parent`.
	///
	/// Returns [`PlanError::UnknownRequest`] when `parent` does not belong to this plan.
	pub fn add_child(
		&mut self,
		parent: RequestId,
		service_identifier: impl Into<ServiceIdentifier>,
		target: Option<Target>,
	) -> Result<RequestId, PlanError> {
		let depth = self
			.nodes
			.get(parent.0)
			.map(|node| node.depth + 1)
			.ok_or(PlanError::UnknownRequest(parent))?;

		let id = RequestId(self.nodes.len());
		self.nodes.push(RequestNode {
			service_identifier: service_identifier.into(),
			parent: Some(parent),
			children: Vec::new(),
			target,
			depth,
		});
		self.nodes[parent.0].children.push(id);
		Ok(id)
	}

	pub fn request(&self, id: RequestId) -> Option<Request<'_>> {
		(id.0 < self.nodes.len()).then_some(Request { plan: self, id })
	}

	/// Iterates over every request in insertion order.
	pub fn requests(&self) -> impl ExactSizeIterator<Item = Request<'_>> {
		(0..self.nodes.len()).map(move |index| Request {
			plan: self,
			id: RequestId(index),
		})
	}

	/// Number of requests, root included.
	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	/// A plan always holds its root, so this is never true.
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}
}

/// Read-only view of one request of a plan.
#[derive(Clone, Copy)]
pub struct Request<'a> {
	plan: &'a ResolutionPlan,
	id: RequestId,
}

impl<'a> Request<'a> {
	// `id` is always in bounds: views are only handed out for existing nodes.
	fn node(&self) -> &'a RequestNode {
		&self.plan.nodes[self.id.0]
	}

	pub fn id(&self) -> RequestId {
		self.id
	}

	pub fn service_identifier(&self) -> &'a ServiceIdentifier {
		&self.node().service_identifier
	}

	pub fn parent_request(&self) -> Option<Request<'a>> {
		self.node().parent.map(|id| Request {
			plan: self.plan,
			id,
		})
	}

	/// Children in the order they were attached.
	pub fn child_requests(
		&self,
	) -> impl DoubleEndedIterator<Item = Request<'a>> + ExactSizeIterator + use<'a> {
		let plan = self.plan;
		self.node()
			.children
			.iter()
			.map(move |&id| Request { plan, id })
	}

	/// Injection point that produced this request; `None` for the root.
	pub fn target(&self) -> Option<&'a Target> {
		self.node().target.as_ref()
	}

	/// Number of parent links between this request and the root.
	pub fn depth(&self) -> usize {
		self.node().depth
	}

	/// Strict ancestors, nearest first.
	pub fn ancestors(&self) -> Ancestors<'a> {
		Ancestors {
			next: self.parent_request(),
		}
	}
}

impl fmt::Debug for Request<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Request")
			.field("id", &self.id)
			.field("service_identifier", self.service_identifier())
			.field("depth", &self.depth())
			.finish()
	}
}

/// Iterator over the strict ancestors of a request.
#[derive(Debug, Clone)]
pub struct Ancestors<'a> {
	next: Option<Request<'a>>,
}

impl<'a> Iterator for Ancestors<'a> {
	type Item = Request<'a>;

	fn next(&mut self) -> Option<Self::Item> {
		let current = self.next?;
		self.next = current.parent_request();
		Some(current)
	}
}
