//! Radial ring layout.
//!
//! The focus professional sits at a fixed anchor; everyone else is placed on
//! concentric rings around it, eight per ring, with bounded jitter so the
//! result reads as organic rather than mechanical. Jitter is cosmetic only:
//! ring membership and ordering are deterministic functions of input order.

use std::collections::HashMap;
use std::f64::consts::PI;

use super::types::{Connection, GraphEdge, Hcp, Point, PositionedNode};

/// World-space anchor the focus node is pinned to.
pub const ANCHOR: Point = Point { x: 500.0, y: 350.0 };
/// Nodes per ring.
pub const RING_CAPACITY: usize = 8;
/// Radius of the innermost ring before the per-ring increment.
pub const BASE_RADIUS: f64 = 180.0;
/// Radius added per ring.
pub const RADIUS_STEP: f64 = 140.0;
/// Bound on the radial jitter.
pub const RADIUS_JITTER: f64 = 30.0;
/// Bound on the jitter applied to each final coordinate.
pub const POSITION_JITTER: f64 = 50.0;

/// Source of cosmetic jitter. Injected so production can seed from the clock
/// while tests pin a seed and get a reproducible stream.
pub trait Jitter {
	/// Next value in `[0, 1)`.
	fn next_unit(&mut self) -> f64;

	/// Next value in `[-bound, bound)`.
	fn spread(&mut self, bound: f64) -> f64 {
		(self.next_unit() - 0.5) * 2.0 * bound
	}
}

/// Small linear congruential generator; plenty for visual jitter.
pub struct Lcg {
	state: u64,
}

impl Lcg {
	pub fn new(seed: u64) -> Self {
		Self { state: seed % 233_280 }
	}

	/// Time-seeded source for production layouts.
	pub fn from_clock() -> Self {
		Self::new(js_sys::Date::now() as u64)
	}
}

impl Jitter for Lcg {
	fn next_unit(&mut self) -> f64 {
		self.state = (self.state * 9301 + 49_297) % 233_280;
		self.state as f64 / 233_280.0
	}
}

/// Ring index (1-based) for the `i`th non-focus professional.
pub fn ring_of(non_focus_index: usize) -> usize {
	non_focus_index / RING_CAPACITY + 1
}

/// Ring radius before jitter.
pub fn ring_radius(ring: usize) -> f64 {
	BASE_RADIUS + ring as f64 * RADIUS_STEP
}

/// Place every professional. The focus (explicit id match, else the first
/// entry) goes to [`ANCHOR`]; the rest keep input order and fill rings
/// inside-out. Unknown focus ids fall back silently; empty input yields an
/// empty layout.
pub fn compute_layout(
	hcps: &[Hcp],
	focus_id: Option<&str>,
	jitter: &mut dyn Jitter,
) -> Vec<PositionedNode> {
	if hcps.is_empty() {
		return Vec::new();
	}
	let focus_index = focus_id
		.and_then(|id| hcps.iter().position(|h| h.id == id))
		.unwrap_or(0);

	let mut nodes = Vec::with_capacity(hcps.len());
	nodes.push(PositionedNode {
		id: hcps[focus_index].id.clone(),
		x: ANCHOR.x,
		y: ANCHOR.y,
		is_focus: true,
		is_emphasized: false,
	});

	let others = hcps.len() - 1;
	for (i, hcp) in hcps
		.iter()
		.enumerate()
		.filter(|(i, _)| *i != focus_index)
		.map(|(_, h)| h)
		.enumerate()
	{
		let ring = ring_of(i);
		let in_ring = i % RING_CAPACITY;
		let radius = ring_radius(ring) + jitter.spread(RADIUS_JITTER);

		// Rings may be partially filled; spread whoever lands in one evenly,
		// with a half-step offset on odd rings so spokes don't line up.
		let in_this_ring = RING_CAPACITY.min(others - (ring - 1) * RING_CAPACITY);
		let step = 2.0 * PI / in_this_ring as f64;
		let angle = in_ring as f64 * step + (ring % 2) as f64 * (step / 2.0);

		nodes.push(PositionedNode {
			id: hcp.id.clone(),
			x: ANCHOR.x + radius * angle.cos() + jitter.spread(POSITION_JITTER),
			y: ANCHOR.y + radius * angle.sin() + jitter.spread(POSITION_JITTER),
			is_focus: false,
			is_emphasized: false,
		});
	}

	nodes
}

/// Project connections onto a layout. Edges touching the focus are flagged
/// active; connections referencing an unplaced id are dropped.
pub fn project_edges(connections: &[Connection], nodes: &[PositionedNode]) -> Vec<GraphEdge> {
	let positions: HashMap<&str, Point> = nodes
		.iter()
		.map(|n| (n.id.as_str(), n.position()))
		.collect();
	let focus = nodes.iter().find(|n| n.is_focus).map(|n| n.id.as_str());

	connections
		.iter()
		.enumerate()
		.filter_map(|(i, conn)| {
			let (from, to) = (
				positions.get(conn.from.as_str())?,
				positions.get(conn.to.as_str())?,
			);
			Some(GraphEdge {
				connection: i,
				from: *from,
				to: *to,
				active: focus == Some(conn.from.as_str()) || focus == Some(conn.to.as_str()),
				width: (conn.strength as f64).max(1.0),
			})
		})
		.collect()
}
