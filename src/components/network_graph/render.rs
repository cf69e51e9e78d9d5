//! Canvas drawing for the network graph.

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::state::NetworkGraphState;
use super::types::PositionedNode;

const BACKGROUND: &str = "#f9fafb";
const EDGE_ACTIVE: &str = "#3b82f6";
const EDGE_IDLE: &str = "#94a3b8";
const RING_FOCUS: &str = "#3b82f6";
const RING_EMPHASIS: &str = "#fbbf24";

fn specialty_color(specialty: &str) -> &'static str {
	match specialty.to_lowercase().as_str() {
		"cardiology" => "#f87171",
		"neurology" => "#c084fc",
		"oncology" => "#4ade80",
		"pediatrics" => "#f472b6",
		"psychiatry" => "#818cf8",
		"emergency medicine" => "#fb923c",
		"dermatology" => "#22d3ee",
		"orthopedics" => "#facc15",
		"radiology" => "#2dd4bf",
		"anesthesiology" => "#fb7185",
		"obstetrics & gynecology" => "#a78bfa",
		"gastroenterology" => "#34d399",
		_ => "#d1d5db",
	}
}

pub fn render(state: &NetworkGraphState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);
	draw_edges(state, ctx);
	draw_nodes(state, ctx);
	ctx.restore();
}

fn draw_edges(state: &NetworkGraphState, ctx: &CanvasRenderingContext2d) {
	let (dash, gap) = (8.0, 4.0);
	let dash_offset = -(state.flow_time * 30.0) % (dash + gap);
	let hovered = state.hovered_connection();

	for edge in &state.edges {
		let is_hovered = hovered == Some(edge.connection);
		ctx.set_stroke_style_str(if edge.active { EDGE_ACTIVE } else { EDGE_IDLE });
		ctx.set_line_width(if is_hovered { edge.width + 1.5 } else { edge.width });

		if edge.active {
			let _ = ctx.set_line_dash(&js_sys::Array::of2(
				&JsValue::from_f64(dash),
				&JsValue::from_f64(gap),
			));
			ctx.set_line_dash_offset(dash_offset);
		}
		ctx.begin_path();
		ctx.move_to(edge.from.x, edge.from.y);
		ctx.line_to(edge.to.x, edge.to.y);
		ctx.stroke();
		if edge.active {
			let _ = ctx.set_line_dash(&js_sys::Array::new());
		}
	}
}

fn draw_nodes(state: &NetworkGraphState, ctx: &CanvasRenderingContext2d) {
	let k = state.transform.k;

	for node in &state.nodes {
		let Some(hcp) = state.hcp(&node.id) else {
			continue;
		};
		let radius = state.node_radius(node);
		let (x, y) = (node.x, node.y);

		if state.is_hovered_node(&node.id) {
			draw_halo(ctx, x, y, radius);
		}

		ctx.begin_path();
		let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str("#ffffff");
		ctx.fill();

		let (ring, ring_width) = if node.is_emphasized {
			(RING_EMPHASIS, 4.0)
		} else if node.is_focus {
			(RING_FOCUS, 4.0)
		} else {
			(specialty_color(&hcp.specialty), 2.5)
		};
		ctx.set_stroke_style_str(ring);
		ctx.set_line_width(ring_width);
		ctx.stroke();

		ctx.set_fill_style_str("#374151");
		ctx.set_font(&format!("600 {}px sans-serif", (radius * 0.7).round()));
		ctx.set_text_align("center");
		ctx.set_text_baseline("middle");
		let _ = ctx.fill_text(&hcp.initials(), x, y);

		draw_label(ctx, node, hcp.name.as_str(), radius, k);
	}
}

fn draw_label(
	ctx: &CanvasRenderingContext2d,
	node: &PositionedNode,
	name: &str,
	radius: f64,
	k: f64,
) {
	ctx.set_fill_style_str("#475569");
	ctx.set_font(&format!("{}px sans-serif", 12.0 / k.max(0.5)));
	ctx.set_text_align("center");
	ctx.set_text_baseline("top");
	let _ = ctx.fill_text(name, node.x, node.y + radius + 6.0);
}

fn draw_halo(ctx: &CanvasRenderingContext2d, x: f64, y: f64, radius: f64) {
	let glow = radius * 1.6;
	let Ok(gradient) = ctx.create_radial_gradient(x, y, radius * 0.3, x, y, glow) else {
		return;
	};
	let _ = gradient.add_color_stop(0.0, "rgba(59, 130, 246, 0.25)");
	let _ = gradient.add_color_stop(1.0, "rgba(59, 130, 246, 0)");
	ctx.begin_path();
	let _ = ctx.arc(x, y, glow, 0.0, 2.0 * PI);
	#[allow(deprecated)]
	ctx.set_fill_style(&gradient);
	ctx.fill();
}
