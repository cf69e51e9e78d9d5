//! Domain records and the transient shapes derived from them for drawing.

/// A point in graph (world) or viewport (screen) space, depending on context.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

impl Point {
	pub fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	pub fn distance_to(&self, other: Point) -> f64 {
		let (dx, dy) = (other.x - self.x, other.y - self.y);
		(dx * dx + dy * dy).sqrt()
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct Education {
	pub institution: String,
	pub degree: String,
	pub specialization: String,
	pub period: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Publication {
	pub title: String,
	pub journal: String,
	pub year: u32,
	pub co_authors: Vec<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct WorkExperience {
	pub institution: String,
	pub position: String,
	pub period: String,
	pub description: String,
}

/// A healthcare professional. Immutable for the lifetime of a session; the
/// graph refers to these by `id` only.
#[derive(Clone, Debug, PartialEq)]
pub struct Hcp {
	pub id: String,
	pub name: String,
	pub specialty: String,
	pub years_experience: u32,
	pub description: String,
	pub avatar: Option<String>,
	pub peers_count: u32,
	pub following_count: u32,
	pub patients_served: u32,
	pub patients_growth: f64,
	pub success_rate: f64,
	pub success_rate_growth: f64,
	pub about: String,
	pub education: Vec<Education>,
	pub publications: Vec<Publication>,
	pub work_experience: Vec<WorkExperience>,
}

impl Hcp {
	/// Drawn disc radius, scaled by a combined experience/volume/outcome
	/// score. Capped inputs: 20 years, 1500 patients.
	pub fn metric_radius(&self) -> f64 {
		let experience = (self.years_experience as f64 / 20.0).min(1.0);
		let patients = (self.patients_served as f64 / 1500.0).min(1.0);
		let success = self.success_rate / 100.0;
		let score = (experience + patients + success) / 3.0;

		if score > 0.8 {
			40.0
		} else if score > 0.6 {
			32.0
		} else if score > 0.4 {
			28.0
		} else {
			24.0
		}
	}

	/// Up-to-two-letter monogram for the canvas disc.
	pub fn initials(&self) -> String {
		self.name
			.split_whitespace()
			.filter(|w| !w.ends_with('.'))
			.filter_map(|w| w.chars().next())
			.take(2)
			.collect()
	}
}

/// The closed set of relationship kinds between professionals.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConnectionKind {
	CoAuthored,
	Colleague,
	MentorMentee,
	Referral,
	ResearchCollaboration,
}

impl ConnectionKind {
	pub fn label(&self) -> &'static str {
		match self {
			Self::CoAuthored => "Co-authored",
			Self::Colleague => "Colleague",
			Self::MentorMentee => "Mentor-Mentee",
			Self::Referral => "Referral",
			Self::ResearchCollaboration => "Research Collaboration",
		}
	}
}

/// A typed, weighted edge between two professionals. Undirected for display;
/// `from`/`to` order is kept stable for label text.
#[derive(Clone, Debug)]
pub struct Connection {
	pub id: String,
	pub from: String,
	pub to: String,
	pub kind: ConnectionKind,
	pub description: String,
	pub details: Option<String>,
	/// 1-5 scale.
	pub strength: i32,
}

/// Everything the canvas needs from the data source.
#[derive(Clone, Debug, Default)]
pub struct NetworkData {
	pub hcps: Vec<Hcp>,
	pub connections: Vec<Connection>,
}

/// One professional placed in world space for the current render generation.
#[derive(Clone, Debug)]
pub struct PositionedNode {
	pub id: String,
	pub x: f64,
	pub y: f64,
	pub is_focus: bool,
	pub is_emphasized: bool,
}

impl PositionedNode {
	pub fn position(&self) -> Point {
		Point::new(self.x, self.y)
	}
}

/// A connection projected onto the current layout. Connections whose
/// endpoints do not both resolve produce no edge.
#[derive(Clone, Copy, Debug)]
pub struct GraphEdge {
	/// Index into [`NetworkData::connections`].
	pub connection: usize,
	pub from: Point,
	pub to: Point,
	/// One endpoint is the current focus; drawn animated.
	pub active: bool,
	/// Stroke width, strength-derived and clamped to at least 1.
	pub width: f64,
}
