use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::state::{ForceGraphState, NODE_RADIUS};

const BACKGROUND: &str = "#1a1a2e";
const NODE_RGB: (f64, f64, f64) = (100.0, 180.0, 255.0);
const VISITED_RGB: (f64, f64, f64) = (255.0, 127.0, 14.0);

fn ease_out_cubic(t: f64) -> f64 {
	1.0 - (1.0 - t).powi(3)
}

fn mix(t: f64) -> String {
	let channel = |a: f64, b: f64| (a + (b - a) * t).round();
	format!(
		"rgb({}, {}, {})",
		channel(NODE_RGB.0, VISITED_RGB.0),
		channel(NODE_RGB.1, VISITED_RGB.1),
		channel(NODE_RGB.2, VISITED_RGB.2)
	)
}

pub fn render(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	draw_edges(state, ctx);
	draw_nodes(state, ctx);
	ctx.restore();
}

fn draw_edges(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	let (dash, gap) = (10.0, 6.0);
	let dash_offset = -(state.flow_time * 30.0) % (dash + gap);

	state.graph.visit_edges(|n1, n2, _| {
		let (x1, y1, x2, y2) = (n1.x() as f64, n1.y() as f64, n2.x() as f64, n2.y() as f64);
		let (dx, dy) = (x2 - x1, y2 - y1);
		let dist = (dx * dx + dy * dy).sqrt();
		if dist < 0.001 {
			return;
		}

		let t = ease_out_cubic(state.link_highlight(n1.index(), n2.index()));
		let (ux, uy) = (dx / dist, dy / dist);
		let (from, to) = (
			(x1 + ux * NODE_RADIUS, y1 + uy * NODE_RADIUS),
			(x2 - ux * NODE_RADIUS, y2 - uy * NODE_RADIUS),
		);

		ctx.set_stroke_style_str(&format!("rgba(153, 153, 153, {})", 0.6 * (1.0 - t)));
		ctx.set_line_width(1.5);
		ctx.begin_path();
		ctx.move_to(from.0, from.1);
		ctx.line_to(to.0, to.1);
		ctx.stroke();

		if t <= 0.0 {
			return;
		}

		// traversed: a flowing dash in the visited color on top
		ctx.set_stroke_style_str(&format!(
			"rgba({}, {}, {}, {})",
			VISITED_RGB.0, VISITED_RGB.1, VISITED_RGB.2, t
		));
		ctx.set_line_width(1.5 + 1.5 * t);
		let _ = ctx.set_line_dash(&js_sys::Array::of2(
			&JsValue::from_f64(dash),
			&JsValue::from_f64(gap),
		));
		ctx.set_line_dash_offset(dash_offset);
		ctx.begin_path();
		ctx.move_to(from.0, from.1);
		ctx.line_to(to.0, to.1);
		ctx.stroke();
		let _ = ctx.set_line_dash(&js_sys::Array::new());
	});
}

fn draw_nodes(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	let current = state.highlights().current();

	state.graph.visit_nodes(|node| {
		let (x, y) = (node.x() as f64, node.y() as f64);
		let t = ease_out_cubic(state.node_highlight(node.index()));
		let id = node.data.user_data.id.as_str();

		if current == Some(id) && t > 0.01 {
			let glow_radius = NODE_RADIUS * (1.4 + 0.6 * t);
			let gradient =
				ctx.create_radial_gradient(x, y, NODE_RADIUS * 0.3, x, y, glow_radius);
			if let Ok(gradient) = gradient {
				let _ =
					gradient.add_color_stop(0.0, &format!("rgba(255, 200, 120, {})", 0.45 * t));
				let _ = gradient.add_color_stop(1.0, "rgba(255, 200, 120, 0)");
				ctx.begin_path();
				let _ = ctx.arc(x, y, glow_radius, 0.0, 2.0 * PI);
				#[allow(deprecated)]
				ctx.set_fill_style(&gradient);
				ctx.fill();
			}
		}

		ctx.begin_path();
		let _ = ctx.arc(x, y, NODE_RADIUS, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(&mix(t));
		ctx.fill();
		ctx.set_stroke_style_str("#ffffff");
		ctx.set_line_width(1.5);
		ctx.stroke();

		ctx.set_fill_style_str("white");
		ctx.set_font("12px sans-serif");
		ctx.set_text_align("center");
		ctx.set_text_baseline("middle");
		let _ = ctx.fill_text(id, x, y);
	});
}
