//! Interaction state for the network canvas.
//!
//! Owns the positioned layout, the hover/modal phase machine, the camera
//! transform, and hit testing. Everything the rest of the UI learns about
//! pointer activity arrives through an [`InteractionSink`]; the controller
//! never mutates the professional or connection records it is handed.

use std::mem;

use log::debug;

use super::layout::{self, Jitter};
use super::types::{Connection, GraphEdge, Hcp, NetworkData, Point, PositionedNode};

pub const ZOOM_MIN: f64 = 0.3;
pub const ZOOM_MAX: f64 = 1.5;
/// Zoom the camera settles at when recentering on a focus change.
pub const FOCUS_ZOOM: f64 = 0.8;
/// Recenter animation length, seconds.
pub const RECENTER_SECS: f64 = 0.8;
/// World-space tolerance for edge hits.
pub const EDGE_HIT_TOLERANCE: f64 = 8.0;
/// Max screen-space drift between press and release for a click.
pub const CLICK_SLOP: f64 = 4.0;
/// Focus disc radius; non-focus discs size themselves from metrics.
pub const FOCUS_RADIUS: f64 = 48.0;

/// Outward channel for pointer activity. All methods are fire-and-forget.
pub trait InteractionSink {
	fn node_hovered(&self, hcp: &Hcp, anchor: Point);
	fn node_hover_ended(&self);
	fn edge_hovered(&self, connection: &Connection, anchor: Point);
	fn edge_hover_ended(&self);
	fn edge_activated(&self, connection: &Connection, from: &Hcp, to: &Hcp);
	fn node_activated(&self, id: &str);
}

/// Camera: `screen = world * k + (x, y)`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

impl ViewTransform {
	fn approx_eq(&self, other: ViewTransform) -> bool {
		(self.x - other.x).abs() < 0.5
			&& (self.y - other.y).abs() < 0.5
			&& (self.k - other.k).abs() < 1e-3
	}
}

#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

/// What was under the pointer when a press began.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PressTarget {
	/// Index into the positioned node list.
	Node(usize),
	/// Index into the connection list.
	Edge(usize),
}

#[derive(Clone, Copy, Debug)]
struct Press {
	x: f64,
	y: f64,
	target: Option<PressTarget>,
}

/// Hover/modal phase machine. Node clicks are orthogonal: they change focus
/// without touching the phase.
#[derive(Clone, Debug, PartialEq)]
pub enum Phase {
	Idle,
	HoveringNode { id: String, anchor: Point },
	HoveringEdge { connection: usize, anchor: Point },
	ModalOpen { connection: usize },
}

struct Recenter {
	from: ViewTransform,
	to: ViewTransform,
	elapsed: f64,
}

fn ease_out_cubic(t: f64) -> f64 {
	1.0 - (1.0 - t).powi(3)
}

pub struct NetworkGraphState {
	data: NetworkData,
	pub nodes: Vec<PositionedNode>,
	pub edges: Vec<GraphEdge>,
	focus_id: Option<String>,
	emphasized_id: Option<String>,
	pub phase: Phase,
	pub transform: ViewTransform,
	pub pan: PanState,
	press: Option<Press>,
	recenter: Option<Recenter>,
	jitter: Box<dyn Jitter>,
	sink: Box<dyn InteractionSink>,
	pub width: f64,
	pub height: f64,
	pub flow_time: f64,
}

impl NetworkGraphState {
	pub fn new(
		data: NetworkData,
		focus_id: Option<String>,
		width: f64,
		height: f64,
		jitter: Box<dyn Jitter>,
		sink: Box<dyn InteractionSink>,
	) -> Self {
		debug!(
			"graph state: {} professionals, {} connections",
			data.hcps.len(),
			data.connections.len()
		);
		let mut state = Self {
			data,
			nodes: Vec::new(),
			edges: Vec::new(),
			focus_id,
			emphasized_id: None,
			phase: Phase::Idle,
			transform: ViewTransform { x: 0.0, y: 0.0, k: 1.0 },
			pan: PanState::default(),
			press: None,
			recenter: None,
			jitter,
			sink,
			width,
			height,
			flow_time: 0.0,
		};
		state.relayout();
		// First frame opens already centered on the focus, no animation.
		if let Some(t) = state.focus_transform() {
			state.transform = t;
		}
		state
	}

	pub fn hcp(&self, id: &str) -> Option<&Hcp> {
		self.data.hcps.iter().find(|h| h.id == id)
	}

	pub fn connection(&self, index: usize) -> Option<&Connection> {
		self.data.connections.get(index)
	}

	pub fn focus_id(&self) -> Option<&str> {
		self.focus_id.as_deref()
	}

	pub fn modal_open(&self) -> bool {
		matches!(self.phase, Phase::ModalOpen { .. })
	}

	pub fn is_recentering(&self) -> bool {
		self.recenter.is_some()
	}

	/// Connection index of the hovered edge, if any.
	pub fn hovered_connection(&self) -> Option<usize> {
		match self.phase {
			Phase::HoveringEdge { connection, .. } => Some(connection),
			_ => None,
		}
	}

	pub fn is_hovered_node(&self, id: &str) -> bool {
		matches!(&self.phase, Phase::HoveringNode { id: current, .. } if current == id)
	}

	/// Drawn (and hit-tested) radius of a positioned node.
	pub fn node_radius(&self, node: &PositionedNode) -> f64 {
		if node.is_focus {
			FOCUS_RADIUS
		} else {
			self.hcp(&node.id).map(|h| h.metric_radius()).unwrap_or(24.0)
		}
	}

	// --- coordinate mapping -------------------------------------------------

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> Point {
		Point::new(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	pub fn graph_to_screen(&self, p: Point) -> Point {
		Point::new(
			p.x * self.transform.k + self.transform.x,
			p.y * self.transform.k + self.transform.y,
		)
	}

	/// Viewport-space anchor for a node tooltip: top center of the disc, so
	/// the tooltip stays pinned under pan and zoom.
	fn node_anchor(&self, index: usize) -> Point {
		let node = &self.nodes[index];
		let mut anchor = self.graph_to_screen(node.position());
		anchor.y -= self.node_radius(node) * self.transform.k;
		anchor
	}

	// --- hit testing --------------------------------------------------------

	/// Topmost node under a screen position. Later nodes draw on top, so the
	/// last hit wins.
	pub fn node_at(&self, sx: f64, sy: f64) -> Option<usize> {
		let p = self.screen_to_graph(sx, sy);
		let mut found = None;
		for (i, node) in self.nodes.iter().enumerate() {
			if p.distance_to(node.position()) < self.node_radius(node) {
				found = Some(i);
			}
		}
		found
	}

	/// Connection index of the edge under a screen position.
	pub fn edge_at(&self, sx: f64, sy: f64) -> Option<usize> {
		let p = self.screen_to_graph(sx, sy);
		self.edges
			.iter()
			.find(|e| segment_distance(p, e.from, e.to) < EDGE_HIT_TOLERANCE)
			.map(|e| e.connection)
	}

	fn target_at(&self, sx: f64, sy: f64) -> Option<PressTarget> {
		if let Some(i) = self.node_at(sx, sy) {
			return Some(PressTarget::Node(i));
		}
		self.edge_at(sx, sy).map(PressTarget::Edge)
	}

	// --- pointer gestures ---------------------------------------------------

	pub fn pointer_down(&mut self, sx: f64, sy: f64) {
		if self.modal_open() {
			return;
		}
		let target = self.target_at(sx, sy);
		if target.is_none() {
			self.pan = PanState {
				active: true,
				start_x: sx,
				start_y: sy,
				transform_start_x: self.transform.x,
				transform_start_y: self.transform.y,
			};
		}
		self.press = Some(Press { x: sx, y: sy, target });
	}

	pub fn pointer_moved(&mut self, sx: f64, sy: f64) {
		if self.modal_open() {
			return;
		}
		if self.pan.active {
			// A manual gesture supersedes any in-flight recenter.
			self.recenter = None;
			self.transform.x = self.pan.transform_start_x + (sx - self.pan.start_x);
			self.transform.y = self.pan.transform_start_y + (sy - self.pan.start_y);
			return;
		}
		match self.target_at(sx, sy) {
			Some(PressTarget::Node(i)) => self.hover_node(i),
			Some(PressTarget::Edge(c)) => self.hover_edge(c, Point::new(sx, sy)),
			None => self.end_hover(),
		}
	}

	pub fn pointer_up(&mut self, sx: f64, sy: f64) {
		self.pan.active = false;
		let Some(press) = self.press.take() else {
			return;
		};
		if Point::new(press.x, press.y).distance_to(Point::new(sx, sy)) > CLICK_SLOP {
			return;
		}
		match press.target {
			Some(PressTarget::Node(i)) => {
				if let Some(id) = self.nodes.get(i).map(|n| n.id.clone()) {
					self.activate_node(&id);
				}
			}
			Some(PressTarget::Edge(c)) => self.open_connection(c),
			None => {}
		}
	}

	pub fn pointer_left(&mut self) {
		self.pan.active = false;
		self.press = None;
		self.end_hover();
	}

	/// Wheel zoom about the cursor, clamped to the zoom bounds.
	pub fn zoom_at(&mut self, sx: f64, sy: f64, delta_y: f64) {
		if self.modal_open() {
			return;
		}
		self.recenter = None;
		let factor = if delta_y > 0.0 { 0.9 } else { 1.1 };
		let new_k = (self.transform.k * factor).clamp(ZOOM_MIN, ZOOM_MAX);
		let ratio = new_k / self.transform.k;
		self.transform.x = sx - (sx - self.transform.x) * ratio;
		self.transform.y = sy - (sy - self.transform.y) * ratio;
		self.transform.k = new_k;
	}

	// --- hover machine ------------------------------------------------------

	pub fn hover_node(&mut self, index: usize) {
		if self.modal_open() || index >= self.nodes.len() {
			return;
		}
		let id = self.nodes[index].id.clone();
		if self.is_hovered_node(&id) {
			return;
		}
		let Some(hcp_index) = self.data.hcps.iter().position(|h| h.id == id) else {
			return;
		};
		self.end_hover();
		let anchor = self.node_anchor(index);
		self.phase = Phase::HoveringNode { id, anchor };
		self.sink.node_hovered(&self.data.hcps[hcp_index], anchor);
	}

	/// Hover a connection, anchoring the tooltip at the pointer (edges are
	/// long; the cursor is the useful anchor). Connections whose endpoints do
	/// not both resolve emit nothing.
	pub fn hover_edge(&mut self, connection: usize, pointer: Point) {
		if self.modal_open() {
			return;
		}
		if self.hovered_connection() == Some(connection) {
			return;
		}
		if self.resolve_connection(connection).is_none() {
			return;
		}
		self.end_hover();
		self.phase = Phase::HoveringEdge { connection, anchor: pointer };
		self.sink.edge_hovered(&self.data.connections[connection], pointer);
	}

	/// Leave whichever hover is live. Keeps an open modal untouched.
	pub fn end_hover(&mut self) {
		match mem::replace(&mut self.phase, Phase::Idle) {
			Phase::HoveringNode { .. } => self.sink.node_hover_ended(),
			Phase::HoveringEdge { .. } => self.sink.edge_hover_ended(),
			modal @ Phase::ModalOpen { .. } => self.phase = modal,
			Phase::Idle => {}
		}
	}

	/// Edge click: open the connection detail. A connection that does not
	/// resolve both endpoints is a no-op and the modal stays closed.
	pub fn open_connection(&mut self, connection: usize) {
		let Some((from, to)) = self.resolve_connection(connection) else {
			return;
		};
		self.end_hover();
		self.phase = Phase::ModalOpen { connection };
		self.sink.edge_activated(
			&self.data.connections[connection],
			&self.data.hcps[from],
			&self.data.hcps[to],
		);
	}

	pub fn close_modal(&mut self) {
		if self.modal_open() {
			self.phase = Phase::Idle;
		}
	}

	/// Indices of both endpoint professionals, when the connection and both
	/// endpoints exist.
	fn resolve_connection(&self, connection: usize) -> Option<(usize, usize)> {
		let conn = self.data.connections.get(connection)?;
		let from = self.data.hcps.iter().position(|h| h.id == conn.from)?;
		let to = self.data.hcps.iter().position(|h| h.id == conn.to)?;
		Some((from, to))
	}

	// --- focus & emphasis ---------------------------------------------------

	/// Node click path: report the selection outward, then take it as the new
	/// focus. Unknown ids are ignored.
	pub fn activate_node(&mut self, id: &str) {
		if self.hcp(id).is_none() {
			return;
		}
		self.sink.node_activated(id);
		self.set_focus(id);
	}

	/// Change the focused professional: full relayout, then a smooth recenter.
	/// Re-focusing the current focus relayouts nothing and animates nothing.
	pub fn set_focus(&mut self, id: &str) {
		if self.focus_id.as_deref() == Some(id) {
			self.recenter_on_focus();
			return;
		}
		debug!("focus -> {id}");
		self.focus_id = Some(id.to_string());
		self.relayout();
		self.recenter_on_focus();
	}

	/// Search highlight. Pure visual emphasis; no relayout.
	pub fn set_emphasis(&mut self, id: Option<&str>) {
		self.emphasized_id = id.map(str::to_string);
		for node in &mut self.nodes {
			node.is_emphasized = Some(node.id.as_str()) == id;
		}
	}

	/// Recompute the whole layout and edge projection. Positions are replaced
	/// wholesale; nothing is repositioned incrementally.
	fn relayout(&mut self) {
		self.nodes =
			layout::compute_layout(&self.data.hcps, self.focus_id.as_deref(), self.jitter.as_mut());
		self.focus_id = self.nodes.iter().find(|n| n.is_focus).map(|n| n.id.clone());
		let emphasized = self.emphasized_id.clone();
		for node in &mut self.nodes {
			node.is_emphasized = Some(node.id.as_str()) == emphasized.as_deref();
		}
		self.edges = layout::project_edges(&self.data.connections, &self.nodes);
	}

	// --- camera -------------------------------------------------------------

	fn focus_transform(&self) -> Option<ViewTransform> {
		let target = self.nodes.iter().find(|n| n.is_focus)?.position();
		Some(ViewTransform {
			x: self.width / 2.0 - target.x * FOCUS_ZOOM,
			y: self.height / 2.0 - target.y * FOCUS_ZOOM,
			k: FOCUS_ZOOM,
		})
	}

	fn recenter_on_focus(&mut self) {
		let Some(to) = self.focus_transform() else {
			return;
		};
		if self.transform.approx_eq(to) {
			self.recenter = None;
			return;
		}
		self.recenter = Some(Recenter { from: self.transform, to, elapsed: 0.0 });
	}

	/// Advance time-based visuals: edge flow and the recenter animation. Never
	/// blocks interaction; a new recenter simply replaces the old one.
	pub fn tick(&mut self, dt: f64) {
		self.flow_time += dt;
		if let Some(anim) = &mut self.recenter {
			anim.elapsed += dt;
			let t = (anim.elapsed / RECENTER_SECS).min(1.0);
			let e = ease_out_cubic(t);
			self.transform = ViewTransform {
				x: anim.from.x + (anim.to.x - anim.from.x) * e,
				y: anim.from.y + (anim.to.y - anim.from.y) * e,
				k: anim.from.k + (anim.to.k - anim.from.k) * e,
			};
			if t >= 1.0 {
				self.recenter = None;
			}
		}
	}
}

fn segment_distance(p: Point, a: Point, b: Point) -> f64 {
	let (abx, aby) = (b.x - a.x, b.y - a.y);
	let len2 = abx * abx + aby * aby;
	if len2 < f64::EPSILON {
		return p.distance_to(a);
	}
	let t = (((p.x - a.x) * abx + (p.y - a.y) * aby) / len2).clamp(0.0, 1.0);
	p.distance_to(Point::new(a.x + abx * t, a.y + aby * t))
}
