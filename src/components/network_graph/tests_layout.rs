//! Layout engine tests. Jitter is cosmetic, so everything here asserts
//! topology (ring membership, ordering, the focus anchor) rather than exact
//! coordinates; where exact distances matter a zero-spread jitter source is
//! used.

use super::layout::{
	ANCHOR, Jitter, Lcg, compute_layout, project_edges, ring_of, ring_radius,
};
use super::types::{Connection, ConnectionKind, Hcp, PositionedNode};

fn hcp(id: &str) -> Hcp {
	Hcp {
		id: id.into(),
		name: format!("Dr. {id}"),
		specialty: "Cardiology".into(),
		years_experience: 10,
		description: String::new(),
		avatar: None,
		peers_count: 0,
		following_count: 0,
		patients_served: 500,
		patients_growth: 0.0,
		success_rate: 90.0,
		success_rate_growth: 0.0,
		about: String::new(),
		education: Vec::new(),
		publications: Vec::new(),
		work_experience: Vec::new(),
	}
}

fn roster(n: usize) -> Vec<Hcp> {
	(1..=n).map(|i| hcp(&format!("p{i}"))).collect()
}

fn connection(id: &str, from: &str, to: &str, strength: i32) -> Connection {
	Connection {
		id: id.into(),
		from: from.into(),
		to: to.into(),
		kind: ConnectionKind::Colleague,
		description: String::new(),
		details: None,
		strength,
	}
}

/// Always lands mid-range, i.e. zero spread.
struct NoJitter;

impl Jitter for NoJitter {
	fn next_unit(&mut self) -> f64 {
		0.5
	}
}

#[test]
fn one_position_per_professional() {
	let hcps = roster(23);
	let nodes = compute_layout(&hcps, None, &mut Lcg::new(7));
	assert_eq!(nodes.len(), 23);
	let mut ids: Vec<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
	ids.sort();
	ids.dedup();
	assert_eq!(ids.len(), 23, "no duplicate placements");
}

#[test]
fn focus_sits_at_the_anchor() {
	let hcps = roster(9);
	let nodes = compute_layout(&hcps, Some("p7"), &mut Lcg::new(1));
	let focus = nodes.iter().find(|n| n.is_focus).unwrap();
	assert_eq!(focus.id, "p7");
	assert_eq!((focus.x, focus.y), (ANCHOR.x, ANCHOR.y));
}

#[test]
fn unknown_focus_falls_back_to_first() {
	let hcps = roster(4);
	for focus in [None, Some("p99")] {
		let nodes = compute_layout(&hcps, focus, &mut Lcg::new(1));
		let focus_node = nodes.iter().find(|n| n.is_focus).unwrap();
		assert_eq!(focus_node.id, "p1");
		assert_eq!((focus_node.x, focus_node.y), (ANCHOR.x, ANCHOR.y));
	}
}

#[test]
fn empty_roster_lays_out_nothing() {
	assert!(compute_layout(&[], Some("p1"), &mut Lcg::new(1)).is_empty());
}

#[test]
fn single_professional_anchors_alone() {
	let hcps = roster(1);
	let nodes = compute_layout(&hcps, None, &mut Lcg::new(3));
	assert_eq!(nodes.len(), 1);
	assert!(nodes[0].is_focus);
	assert_eq!((nodes[0].x, nodes[0].y), (ANCHOR.x, ANCHOR.y));
	assert!(project_edges(&[], &nodes).is_empty());
}

#[test]
fn ten_professionals_fill_two_rings() {
	let hcps = roster(10);
	let nodes = compute_layout(&hcps, Some("p5"), &mut NoJitter);
	assert_eq!(nodes[0].id, "p5");

	let others: Vec<&PositionedNode> = nodes[1..].iter().collect();
	assert_eq!(others.len(), 9);
	for (i, node) in others.iter().enumerate() {
		let dist = node.position().distance_to(ANCHOR);
		assert!(
			(dist - ring_radius(ring_of(i))).abs() < 1e-6,
			"{} sits on its ring radius",
			node.id
		);
	}
	// Eight in ring one, the ninth alone in ring two, farther out.
	assert_eq!(ring_of(7), 1);
	assert_eq!(ring_of(8), 2);
	assert!(ring_radius(2) > ring_radius(1));
	// A lone node fills its ring's full circle: angle zero, no offset on an
	// even ring.
	assert_eq!((others[8].x, others[8].y), (ANCHOR.x + ring_radius(2), ANCHOR.y));
}

#[test]
fn non_focus_nodes_keep_input_order() {
	let hcps = roster(10);
	let nodes = compute_layout(&hcps, Some("p5"), &mut Lcg::new(8));
	let order: Vec<&str> = nodes[1..].iter().map(|n| n.id.as_str()).collect();
	assert_eq!(order, ["p1", "p2", "p3", "p4", "p6", "p7", "p8", "p9", "p10"]);
}

#[test]
fn ring_radii_grow_monotonically() {
	for ring in 1..6 {
		assert!(ring_radius(ring) < ring_radius(ring + 1));
	}
}

#[test]
fn jitter_stays_bounded() {
	let hcps = roster(17);
	let nodes = compute_layout(&hcps, None, &mut Lcg::new(99));
	for (i, node) in nodes[1..].iter().enumerate() {
		let dist = node.position().distance_to(ANCHOR);
		// Radial jitter plus the diagonal of the coordinate jitter.
		assert!((dist - ring_radius(ring_of(i))).abs() <= 101.0);
	}
}

#[test]
fn same_seed_reproduces_the_layout() {
	let hcps = roster(12);
	let a = compute_layout(&hcps, Some("p4"), &mut Lcg::new(42));
	let b = compute_layout(&hcps, Some("p4"), &mut Lcg::new(42));
	for (left, right) in a.iter().zip(&b) {
		assert_eq!(left.id, right.id);
		assert_eq!((left.x, left.y), (right.x, right.y));
	}
}

#[test]
fn refocus_keeps_ring_membership() {
	let hcps = roster(12);
	let rings = |nodes: &[PositionedNode]| -> Vec<(String, usize)> {
		nodes[1..]
			.iter()
			.enumerate()
			.map(|(i, n)| (n.id.clone(), ring_of(i)))
			.collect()
	};
	// Different jitter streams move coordinates, never ring assignment.
	let a = compute_layout(&hcps, Some("p4"), &mut Lcg::new(1));
	let b = compute_layout(&hcps, Some("p4"), &mut Lcg::new(2));
	assert_eq!(rings(&a), rings(&b));
}

#[test]
fn edge_width_clamps_to_one() {
	let hcps = roster(9);
	let nodes = compute_layout(&hcps, None, &mut Lcg::new(5));
	let conns = vec![
		connection("c1", "p1", "p9", 0),
		connection("c2", "p2", "p3", -3),
		connection("c3", "p4", "p5", 5),
	];
	let edges = project_edges(&conns, &nodes);
	assert_eq!(edges.len(), 3);
	assert_eq!(edges[0].width, 1.0);
	assert_eq!(edges[1].width, 1.0);
	assert_eq!(edges[2].width, 5.0);
}

#[test]
fn edges_touching_the_focus_are_active() {
	let hcps = roster(5);
	let nodes = compute_layout(&hcps, Some("p2"), &mut Lcg::new(5));
	let conns = vec![
		connection("c1", "p1", "p2", 3),
		connection("c2", "p3", "p4", 3),
	];
	let edges = project_edges(&conns, &nodes);
	assert!(edges[0].active);
	assert!(!edges[1].active);
}

#[test]
fn unresolvable_connections_project_no_edge() {
	let hcps = roster(3);
	let nodes = compute_layout(&hcps, None, &mut Lcg::new(5));
	let conns = vec![
		connection("c1", "p1", "p99", 3),
		connection("c2", "p99", "p2", 3),
		connection("c3", "p1", "p3", 2),
	];
	let edges = project_edges(&conns, &nodes);
	assert_eq!(edges.len(), 1);
	assert_eq!(edges[0].connection, 2);
}
