//! The interactive network canvas and its overlay widgets.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, WheelEvent};

use super::layout::Lcg;
use super::render;
use super::state::{InteractionSink, NetworkGraphState};
use super::types::{Connection, Hcp, NetworkData, Point};
use crate::components::connection_modal::ConnectionModal;
use crate::components::connection_tooltip::ConnectionTooltip;
use crate::components::node_tooltip::NodeTooltip;

/// Bridges the interaction sink onto reactive signals the overlay widgets
/// read. Every method is fire-and-forget.
struct SignalSink {
	hovered_node: RwSignal<Option<(Hcp, Point)>>,
	hovered_edge: RwSignal<Option<(Connection, Point)>>,
	modal: RwSignal<Option<(Connection, Hcp, Hcp)>>,
	on_select: Callback<String>,
}

impl InteractionSink for SignalSink {
	fn node_hovered(&self, hcp: &Hcp, anchor: Point) {
		self.hovered_node.set(Some((hcp.clone(), anchor)));
	}

	fn node_hover_ended(&self) {
		self.hovered_node.set(None);
	}

	fn edge_hovered(&self, connection: &Connection, anchor: Point) {
		self.hovered_edge.set(Some((connection.clone(), anchor)));
	}

	fn edge_hover_ended(&self) {
		self.hovered_edge.set(None);
	}

	fn edge_activated(&self, connection: &Connection, from: &Hcp, to: &Hcp) {
		self.modal.set(Some((connection.clone(), from.clone(), to.clone())));
	}

	fn node_activated(&self, id: &str) {
		self.on_select.run(id.to_string());
	}
}

fn pointer_position(ev: &MouseEvent, canvas: &HtmlCanvasElement) -> (f64, f64) {
	let rect = canvas.get_bounding_client_rect();
	(
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	)
}

#[component]
pub fn NetworkGraphCanvas(
	#[prop(into)] data: Signal<NetworkData>,
	#[prop(into)] selected_id: Signal<Option<String>>,
	#[prop(into)] highlighted_id: Signal<Option<String>>,
	#[prop(into)] on_select: Callback<String>,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: Rc<RefCell<Option<NetworkGraphState>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

	let hovered_node: RwSignal<Option<(Hcp, Point)>> = RwSignal::new(None);
	let hovered_edge: RwSignal<Option<(Connection, Point)>> = RwSignal::new(None);
	let modal: RwSignal<Option<(Connection, Hcp, Hcp)>> = RwSignal::new(None);

	let (state_init, animate_init) = (state.clone(), animate.clone());
	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();

		let (w, h) = (
			width.unwrap_or_else(|| {
				canvas
					.parent_element()
					.map(|p| p.client_width() as f64)
					.unwrap_or(1000.0)
			}),
			height.unwrap_or_else(|| {
				canvas
					.parent_element()
					.map(|p| p.client_height() as f64)
					.unwrap_or(700.0)
			}),
		);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")
			.unwrap()
			.unwrap()
			.dyn_into()
			.unwrap();

		*state_init.borrow_mut() = Some(NetworkGraphState::new(
			data.get(),
			selected_id.get_untracked(),
			w,
			h,
			Box::new(Lcg::from_clock()),
			Box::new(SignalSink { hovered_node, hovered_edge, modal, on_select }),
		));

		let (state_anim, animate_inner) = (state_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut s) = *state_anim.borrow_mut() {
				s.tick(0.016);
				render::render(s, &ctx);
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				let _ = web_sys::window()
					.unwrap()
					.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = web_sys::window()
				.unwrap()
				.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	// External selection (search or a node click round-tripped through the
	// page) becomes the focus.
	let state_focus = state.clone();
	Effect::new(move |_| {
		let Some(id) = selected_id.get() else {
			return;
		};
		if let Some(ref mut s) = *state_focus.borrow_mut() {
			s.set_focus(&id);
		}
	});

	let state_emphasis = state.clone();
	Effect::new(move |_| {
		let id = highlighted_id.get();
		if let Some(ref mut s) = *state_emphasis.borrow_mut() {
			s.set_emphasis(id.as_deref());
		}
	});

	let state_md = state.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let (x, y) = pointer_position(&ev, &canvas);
		if let Some(ref mut s) = *state_md.borrow_mut() {
			s.pointer_down(x, y);
		}
	};

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let (x, y) = pointer_position(&ev, &canvas);
		if let Some(ref mut s) = *state_mm.borrow_mut() {
			s.pointer_moved(x, y);
		}
	};

	let state_mu = state.clone();
	let on_mouseup = move |ev: MouseEvent| {
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let (x, y) = pointer_position(&ev, &canvas);
		if let Some(ref mut s) = *state_mu.borrow_mut() {
			s.pointer_up(x, y);
		}
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_ml.borrow_mut() {
			s.pointer_left();
		}
	};

	let state_wh = state.clone();
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let (x, y) = pointer_position(&ev, &canvas);
		if let Some(ref mut s) = *state_wh.borrow_mut() {
			s.zoom_at(x, y, ev.delta_y());
		}
	};

	// Closing goes through the signal; this effect folds it back into the
	// interaction state.
	let close_modal = Callback::new(move |_: ()| modal.set(None));
	let modal_detail: Signal<Option<(Connection, Hcp, Hcp)>> = modal.into();
	let state_modal = state.clone();
	Effect::new(move |_| {
		if modal.get().is_none() {
			if let Some(ref mut s) = *state_modal.borrow_mut() {
				s.close_modal();
			}
		}
	});

	view! {
		<div
			class="network-graph"
			style="position: relative; width: 100%; height: 100%; overflow: hidden;"
		>
			<canvas
				node_ref=canvas_ref
				class="network-graph-canvas"
				on:mousedown=on_mousedown
				on:mousemove=on_mousemove
				on:mouseup=on_mouseup
				on:mouseleave=on_mouseleave
				on:wheel=on_wheel
				style="display: block; cursor: grab;"
			/>

			{move || {
				hovered_node.get().map(|(hcp, anchor)| {
					view! {
						<div
							class="graph-tooltip"
							style=format!(
								"position: absolute; z-index: 50; pointer-events: none; left: {}px; top: {}px; transform: translate(-50%, -100%);",
								anchor.x,
								anchor.y,
							)
						>
							<NodeTooltip hcp=hcp />
						</div>
					}
				})
			}}

			{move || {
				hovered_edge.get().and_then(|(connection, anchor)| {
					let data = data.get();
					let from = data.hcps.iter().find(|h| h.id == connection.from)?.name.clone();
					let to = data.hcps.iter().find(|h| h.id == connection.to)?.name.clone();
					Some(view! {
						<div
							class="graph-tooltip"
							style=format!(
								"position: absolute; z-index: 50; pointer-events: none; left: {}px; top: {}px; transform: translate(-50%, -100%);",
								anchor.x,
								anchor.y,
							)
						>
							<ConnectionTooltip connection=connection from_name=from to_name=to />
						</div>
					})
				})
			}}

			<ConnectionModal detail=modal_detail on_close=close_modal />
		</div>
	}
}
