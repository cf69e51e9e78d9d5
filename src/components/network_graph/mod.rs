//! Interactive network graph of healthcare professionals: radial layout,
//! canvas rendering, and the hover/selection interaction machine.

mod component;
mod layout;
mod render;
mod state;
mod types;

#[cfg(test)]
mod tests_layout;
#[cfg(test)]
mod tests_state;

pub use component::NetworkGraphCanvas;
pub use layout::{Jitter, Lcg, compute_layout, project_edges};
pub use state::{InteractionSink, NetworkGraphState, Phase, ViewTransform};
pub use types::{
	Connection, ConnectionKind, Education, GraphEdge, Hcp, NetworkData, Point, PositionedNode,
	Publication, WorkExperience,
};
