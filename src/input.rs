use glam::Vec2;
use web_sys as web;

/// Convert viewport (client) coordinates into coordinates relative to the
/// top-left corner of an element's bounding box.
#[inline]
pub fn to_local(client: Vec2, origin: Vec2) -> Vec2 {
    client - origin
}

#[inline]
fn canvas_origin(canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    Vec2::new(rect.left() as f32, rect.top() as f32)
}

// ---------------- Event adapters ----------------
#[inline]
pub fn mouse_canvas_px(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let client = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
    to_local(client, canvas_origin(canvas))
}

/// Position of the first active touch, if any.
#[inline]
pub fn touch_canvas_px(ev: &web::TouchEvent, canvas: &web::HtmlCanvasElement) -> Option<Vec2> {
    let touch = ev.touches().get(0)?;
    let client = Vec2::new(touch.client_x() as f32, touch.client_y() as f32);
    Some(to_local(client, canvas_origin(canvas)))
}

