use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::error;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

use super::render;
use super::state::ForceGraphState;
use super::types::Highlights;
use crate::config::LayoutConfig;
use crate::graph::Graph;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

fn pointer_position(
	canvas_ref: NodeRef<leptos::html::Canvas>,
	ev: &MouseEvent,
) -> Option<(f64, f64)> {
	let canvas: HtmlCanvasElement = canvas_ref.get()?.into();
	let rect = canvas.get_bounding_client_rect();
	Some((
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	))
}

/// Canvas drawing `graph` under a force layout, with traversal `highlights`.
///
/// The layout restarts from scratch whenever `graph` changes.
#[component]
pub fn ForceGraphCanvas(
	#[prop(into)] graph: Signal<Graph>,
	#[prop(into)] highlights: Signal<Highlights>,
	#[prop(optional)] layout: LayoutConfig,
	#[prop(default = 800.0)] width: f64,
	#[prop(default = 600.0)] height: f64,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: Rc<RefCell<Option<ForceGraphState>>> = Rc::new(RefCell::new(None));
	let animate: FrameCallback = Rc::new(RefCell::new(None));

	let state_graph = state.clone();
	Effect::new(move |_| {
		let data = graph.get();
		let mut next = ForceGraphState::new(&data, &layout, width, height);
		next.set_highlights(highlights.get_untracked());
		*state_graph.borrow_mut() = Some(next);
	});

	let state_hl = state.clone();
	Effect::new(move |_| {
		let current = highlights.get();
		if let Some(ref mut s) = *state_hl.borrow_mut() {
			s.set_highlights(current);
		}
	});

	let (state_init, animate_init) = (state.clone(), animate.clone());
	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if animate_init.borrow().is_some() {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();
		canvas.set_width(width as u32);
		canvas.set_height(height as u32);

		let Some(ctx) = canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
		else {
			error!("Canvas has no 2d context");
			return;
		};

		let (state_anim, animate_inner) = (state_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut s) = *state_anim.borrow_mut() {
				s.tick(0.016);
				render::render(s, &ctx);
			}
			if let (Some(cb), Some(window)) = (&*animate_inner.borrow(), web_sys::window()) {
				let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let (Some(cb), Some(window)) = (&*animate_init.borrow(), web_sys::window()) {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let state_md = state.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some((x, y)) = pointer_position(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut s) = *state_md.borrow_mut() {
			s.start_drag(x, y);
		}
	};

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some((x, y)) = pointer_position(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut s) = *state_mm.borrow_mut() {
			s.drag_to(x, y);
		}
	};

	let state_mu = state.clone();
	let on_mouseup = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_mu.borrow_mut() {
			s.end_drag();
		}
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_ml.borrow_mut() {
			s.end_drag();
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="force-graph-canvas"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			style="display: block; cursor: grab;"
		/>
	}
}
