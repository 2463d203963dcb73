//! Uses proptest to verify invariants of plan diagnostics:
//! 1. Acyclic plans pass whatever the order of children
//! 2. A planted cycle is reported with its root-to-request chain
//! 3. A chain at depth k holds k + 1 identifiers

use proptest::prelude::*;
use proptest::sample::Index;
use tether_di::{DiagnosticError, RequestId, ResolutionPlan, dependency_chain_to_string, detect_cycles};

const MAX_NODES: usize = 40;

// Tree shape with node 0 as root. Labels embed the depth, so no label repeats
// along a root-to-leaf path while cousins may share labels.
#[derive(Debug, Clone)]
struct Shape {
	parents: Vec<usize>,
	labels: Vec<String>,
}

impl Shape {
	fn len(&self) -> usize {
		self.parents.len()
	}

	fn path(&self, node: usize) -> Vec<usize> {
		let mut path = vec![node];
		let mut current = node;
		while current != 0 {
			current = self.parents[current];
			path.push(current);
		}
		path.reverse();
		path
	}
}

fn shape_strategy() -> impl Strategy<Value = Shape> {
	prop::collection::vec((any::<Index>(), 0u8..3), 0..MAX_NODES).prop_map(|specs| {
		let mut parents = vec![0];
		let mut depths = vec![0usize];
		let mut labels = vec!["L0-0".to_string()];
		for (offset, (index, variant)) in specs.into_iter().enumerate() {
			let parent = index.index(offset + 1);
			let depth = depths[parent] + 1;
			parents.push(parent);
			depths.push(depth);
			labels.push(format!("L{depth}-{variant}"));
		}
		Shape { parents, labels }
	})
}

// Builds the plan, attaching the children of node `n` in reverse when `reversed[n]`.
fn build_plan(shape: &Shape, reversed: &[bool]) -> (ResolutionPlan, Vec<RequestId>) {
	let mut children = vec![Vec::new(); shape.len()];
	for node in 1..shape.len() {
		children[shape.parents[node]].push(node);
	}

	let mut plan = ResolutionPlan::new(shape.labels[0].as_str());
	let mut ids = vec![plan.root_id(); shape.len()];
	let mut pending = vec![0];
	while let Some(node) = pending.pop() {
		let mut kids = children[node].clone();
		if reversed.get(node).copied().unwrap_or(false) {
			kids.reverse();
		}
		for kid in kids {
			ids[kid] = plan
				.add_child(ids[node], shape.labels[kid].as_str(), None)
				.unwrap();
			pending.push(kid);
		}
	}
	(plan, ids)
}

proptest! {
	#[test]
	fn prop_acyclic_plans_pass_for_any_child_order(
		shape in shape_strategy(),
		reversed in prop::collection::vec(any::<bool>(), MAX_NODES + 1),
	) {
		let (plan, _) = build_plan(&shape, &reversed);
		prop_assert!(detect_cycles(plan.root()).is_ok());
	}

	#[test]
	fn prop_planted_cycle_reports_root_to_request_chain(
		shape in shape_strategy(),
		reversed in prop::collection::vec(any::<bool>(), MAX_NODES + 1),
		node in any::<Index>(),
		ancestor in any::<Index>(),
	) {
		let (mut plan, ids) = build_plan(&shape, &reversed);
		let node = node.index(shape.len());
		let path = shape.path(node);
		let repeated = path[ancestor.index(path.len())];

		plan.add_child(ids[node], shape.labels[repeated].as_str(), None).unwrap();

		let mut expected: Vec<&str> = path.iter().map(|&n| shape.labels[n].as_str()).collect();
		expected.push(shape.labels[repeated].as_str());
		prop_assert_eq!(
			detect_cycles(plan.root()),
			Err(DiagnosticError::CircularDependency { chain: expected.join(" --> ") })
		);
	}

	#[test]
	fn prop_chain_length_matches_depth(shape in shape_strategy()) {
		let (plan, _) = build_plan(&shape, &[]);
		for request in plan.requests() {
			let chain = dependency_chain_to_string(request);
			prop_assert_eq!(chain.split(" --> ").count(), request.depth() + 1);
			prop_assert!(chain.starts_with("L0-0"));
		}
	}
}
