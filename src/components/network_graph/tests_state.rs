//! Interaction controller tests: the hover/modal phase machine, hit testing
//! through the camera transform, focus changes, and recentering.

use std::cell::RefCell;
use std::rc::Rc;

use super::layout::{ANCHOR, Lcg};
use super::state::{
	CLICK_SLOP, FOCUS_ZOOM, InteractionSink, NetworkGraphState, Phase, ZOOM_MAX, ZOOM_MIN,
};
use super::types::{Connection, ConnectionKind, Hcp, NetworkData, Point};

#[derive(Clone, Debug, PartialEq)]
enum Event {
	NodeHover(String),
	NodeHoverEnd,
	EdgeHover(String),
	EdgeHoverEnd,
	EdgeOpen(String),
	Selected(String),
}

#[derive(Clone, Default)]
struct Recorder(Rc<RefCell<Vec<Event>>>);

impl Recorder {
	fn events(&self) -> Vec<Event> {
		self.0.borrow().clone()
	}
}

impl InteractionSink for Recorder {
	fn node_hovered(&self, hcp: &Hcp, _anchor: Point) {
		self.0.borrow_mut().push(Event::NodeHover(hcp.id.clone()));
	}

	fn node_hover_ended(&self) {
		self.0.borrow_mut().push(Event::NodeHoverEnd);
	}

	fn edge_hovered(&self, connection: &Connection, _anchor: Point) {
		self.0.borrow_mut().push(Event::EdgeHover(connection.id.clone()));
	}

	fn edge_hover_ended(&self) {
		self.0.borrow_mut().push(Event::EdgeHoverEnd);
	}

	fn edge_activated(&self, connection: &Connection, _from: &Hcp, _to: &Hcp) {
		self.0.borrow_mut().push(Event::EdgeOpen(connection.id.clone()));
	}

	fn node_activated(&self, id: &str) {
		self.0.borrow_mut().push(Event::Selected(id.to_string()));
	}
}

fn hcp(id: &str) -> Hcp {
	Hcp {
		id: id.into(),
		name: format!("Dr. {id}"),
		specialty: "Neurology".into(),
		years_experience: 8,
		description: String::new(),
		avatar: None,
		peers_count: 0,
		following_count: 0,
		patients_served: 400,
		patients_growth: 0.0,
		success_rate: 88.0,
		success_rate_growth: 0.0,
		about: String::new(),
		education: Vec::new(),
		publications: Vec::new(),
		work_experience: Vec::new(),
	}
}

fn connection(id: &str, from: &str, to: &str, strength: i32) -> Connection {
	Connection {
		id: id.into(),
		from: from.into(),
		to: to.into(),
		kind: ConnectionKind::Referral,
		description: String::new(),
		details: None,
		strength,
	}
}

fn harness(n: usize, connections: Vec<Connection>) -> (NetworkGraphState, Recorder) {
	let recorder = Recorder::default();
	let data = NetworkData {
		hcps: (1..=n).map(|i| hcp(&format!("p{i}"))).collect(),
		connections,
	};
	let state = NetworkGraphState::new(
		data,
		Some("p1".into()),
		1000.0,
		700.0,
		Box::new(Lcg::new(11)),
		Box::new(recorder.clone()),
	);
	(state, recorder)
}

#[test]
fn empty_directory_is_inert() {
	let recorder = Recorder::default();
	let mut state = NetworkGraphState::new(
		NetworkData::default(),
		None,
		800.0,
		600.0,
		Box::new(Lcg::new(1)),
		Box::new(recorder.clone()),
	);
	assert!(state.nodes.is_empty());
	assert!(state.edges.is_empty());
	assert_eq!(state.focus_id(), None);

	state.pointer_moved(400.0, 300.0);
	state.pointer_down(400.0, 300.0);
	state.pointer_up(400.0, 300.0);
	state.tick(0.016);
	assert_eq!(state.phase, Phase::Idle);
	assert!(recorder.events().is_empty());
}

#[test]
fn opens_centered_on_the_focus() {
	let (state, _) = harness(5, vec![]);
	assert_eq!(state.transform.k, FOCUS_ZOOM);
	assert!((state.transform.x - (500.0 - ANCHOR.x * FOCUS_ZOOM)).abs() < 1e-9);
	assert!((state.transform.y - (350.0 - ANCHOR.y * FOCUS_ZOOM)).abs() < 1e-9);
	assert!(!state.is_recentering());
}

#[test]
fn node_hover_enters_and_leaves() {
	let (mut state, rec) = harness(5, vec![]);
	state.hover_node(2);
	let id = state.nodes[2].id.clone();
	assert!(matches!(state.phase, Phase::HoveringNode { .. }));
	state.hover_node(2); // re-entering the same node emits nothing new
	state.end_hover();
	assert_eq!(state.phase, Phase::Idle);
	assert_eq!(rec.events(), vec![Event::NodeHover(id), Event::NodeHoverEnd]);
}

#[test]
fn node_tooltip_anchors_above_the_disc() {
	let (mut state, _) = harness(4, vec![]);
	state.hover_node(1);
	let Phase::HoveringNode { ref id, anchor } = state.phase else {
		panic!("expected a node hover");
	};
	let node = state.nodes.iter().find(|n| n.id == *id).unwrap();
	let center = state.graph_to_screen(node.position());
	assert!(anchor.y < center.y);
	assert!((anchor.x - center.x).abs() < 1e-9);
}

#[test]
fn edge_hover_yields_to_node_hover() {
	let conns = vec![connection("c1", "p1", "p2", 3)];
	let (mut state, rec) = harness(5, conns);
	state.hover_edge(0, Point::new(10.0, 10.0));
	assert!(matches!(state.phase, Phase::HoveringEdge { .. }));
	state.hover_node(0);
	assert!(matches!(state.phase, Phase::HoveringNode { .. }));
	assert_eq!(
		rec.events(),
		vec![
			Event::EdgeHover("c1".into()),
			Event::EdgeHoverEnd,
			Event::NodeHover("p1".into()),
		]
	);
}

#[test]
fn pointer_over_an_edge_raises_its_tooltip() {
	let conns = vec![connection("c1", "p1", "p2", 4)];
	let (mut state, rec) = harness(2, conns);
	let edge = state.edges[0];
	let mid = Point::new((edge.from.x + edge.to.x) / 2.0, (edge.from.y + edge.to.y) / 2.0);
	let p = state.graph_to_screen(mid);
	state.pointer_moved(p.x, p.y);
	assert_eq!(state.hovered_connection(), Some(0));
	assert_eq!(rec.events(), vec![Event::EdgeHover("c1".into())]);
	// The anchor is the pointer itself, not the edge midpoint in world space.
	let Phase::HoveringEdge { anchor, .. } = state.phase else {
		panic!("expected an edge hover");
	};
	assert_eq!((anchor.x, anchor.y), (p.x, p.y));
}

#[test]
fn hovering_a_dangling_connection_emits_nothing() {
	let conns = vec![connection("c1", "p1", "p99", 2)];
	let (mut state, rec) = harness(3, conns);
	assert!(state.edges.is_empty(), "dangling connections are never projected");
	state.hover_edge(0, Point::new(0.0, 0.0));
	assert_eq!(state.phase, Phase::Idle);
	assert!(rec.events().is_empty());
}

#[test]
fn edge_click_opens_the_modal() {
	let conns = vec![connection("c1", "p1", "p2", 3)];
	let (mut state, rec) = harness(4, conns);
	state.open_connection(0);
	assert!(state.modal_open());
	assert_eq!(rec.events(), vec![Event::EdgeOpen("c1".into())]);

	// Pointer traffic does not disturb an open modal.
	state.pointer_moved(500.0, 350.0);
	state.pointer_down(500.0, 350.0);
	assert!(state.modal_open());
	assert!(!state.pan.active);

	state.close_modal();
	assert_eq!(state.phase, Phase::Idle);
}

#[test]
fn opening_the_modal_ends_a_live_hover() {
	let conns = vec![connection("c1", "p1", "p2", 3)];
	let (mut state, rec) = harness(4, conns);
	state.hover_edge(0, Point::new(5.0, 5.0));
	state.open_connection(0);
	assert_eq!(
		rec.events(),
		vec![
			Event::EdgeHover("c1".into()),
			Event::EdgeHoverEnd,
			Event::EdgeOpen("c1".into()),
		]
	);
}

#[test]
fn dangling_connection_never_opens_the_modal() {
	let conns = vec![connection("c1", "p9", "p1", 3)];
	let (mut state, rec) = harness(4, conns);
	state.open_connection(0);
	assert!(!state.modal_open());
	state.open_connection(5); // out of range: same silent no-op
	assert!(!state.modal_open());
	assert!(rec.events().is_empty());
}

#[test]
fn node_click_changes_focus_and_recenters() {
	let (mut state, rec) = harness(10, vec![]);
	// Wander away so the recenter has somewhere to come back from.
	state.zoom_at(0.0, 0.0, 1.0);
	state.activate_node("p3");

	assert_eq!(rec.events(), vec![Event::Selected("p3".into())]);
	assert_eq!(state.focus_id(), Some("p3"));
	let focus = state.nodes.iter().find(|n| n.is_focus).unwrap();
	assert_eq!(focus.id, "p3");
	let target = focus.position();
	assert!(state.is_recentering());

	state.tick(1.0); // run the 800 ms animation out
	assert!(!state.is_recentering());
	assert!((state.transform.k - FOCUS_ZOOM).abs() < 1e-9);
	assert!((state.transform.x - (500.0 - target.x * FOCUS_ZOOM)).abs() < 1e-6);
	assert!((state.transform.y - (350.0 - target.y * FOCUS_ZOOM)).abs() < 1e-6);
}

#[test]
fn refocusing_the_focus_is_a_noop_animation() {
	let (mut state, rec) = harness(6, vec![]);
	state.activate_node("p1");
	assert_eq!(rec.events(), vec![Event::Selected("p1".into())]);
	assert!(!state.is_recentering());
}

#[test]
fn activating_an_unknown_id_is_ignored() {
	let (mut state, rec) = harness(3, vec![]);
	state.activate_node("p99");
	assert!(rec.events().is_empty());
	assert_eq!(state.focus_id(), Some("p1"));
}

#[test]
fn wheel_zoom_clamps_to_bounds() {
	let (mut state, _) = harness(3, vec![]);
	for _ in 0..60 {
		state.zoom_at(500.0, 350.0, 1.0);
	}
	assert!((state.transform.k - ZOOM_MIN).abs() < 1e-9);
	for _ in 0..120 {
		state.zoom_at(500.0, 350.0, -1.0);
	}
	assert!((state.transform.k - ZOOM_MAX).abs() < 1e-9);
}

#[test]
fn background_drag_pans_the_camera() {
	let (mut state, rec) = harness(2, vec![]);
	let start = state.transform;
	state.pointer_down(5.0, 5.0);
	assert!(state.pan.active);
	state.pointer_moved(45.0, 30.0);
	assert!((state.transform.x - (start.x + 40.0)).abs() < 1e-9);
	assert!((state.transform.y - (start.y + 25.0)).abs() < 1e-9);
	state.pointer_up(45.0, 30.0);
	assert!(!state.pan.active);
	assert!(rec.events().is_empty(), "a drag is not a click");
}

#[test]
fn press_and_release_on_a_node_selects_it() {
	let (mut state, rec) = harness(9, vec![]);
	let p = state.graph_to_screen(state.nodes[3].position());
	let id = state.nodes[state.node_at(p.x, p.y).unwrap()].id.clone();
	state.pointer_down(p.x, p.y);
	assert!(!state.pan.active, "node presses never start a pan");
	state.pointer_up(p.x + 1.0, p.y);
	assert_eq!(rec.events(), vec![Event::Selected(id.clone())]);
	assert_eq!(state.focus_id(), Some(id.as_str()));
}

#[test]
fn a_dragged_press_is_not_a_click() {
	let (mut state, rec) = harness(9, vec![]);
	let p = state.graph_to_screen(state.nodes[2].position());
	state.pointer_down(p.x, p.y);
	state.pointer_up(p.x + CLICK_SLOP + 2.0, p.y);
	assert!(rec.events().is_empty());
}

#[test]
fn emphasis_marks_exactly_one_node() {
	let (mut state, _) = harness(5, vec![]);
	state.set_emphasis(Some("p4"));
	assert!(state.nodes.iter().all(|n| n.is_emphasized == (n.id == "p4")));

	// Emphasis survives the relayout a focus change causes.
	state.set_focus("p2");
	assert!(state.nodes.iter().any(|n| n.is_emphasized && n.id == "p4"));

	state.set_emphasis(None);
	assert!(state.nodes.iter().all(|n| !n.is_emphasized));
}
