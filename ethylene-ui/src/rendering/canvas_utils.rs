use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Yield to browser event loop via requestAnimationFrame.
///
/// Lets the browser paint pending DOM updates (e.g. a busy button label)
/// before a long synchronous computation starts.
pub async fn yield_to_browser() {
    let (sender, receiver) = futures::channel::oneshot::channel::<()>();

    let closure = Closure::once(move || {
        let _ = sender.send(());
    });

    let Some(window) = web_sys::window() else {
        return;
    };
    if window
        .request_animation_frame(closure.as_ref().unchecked_ref())
        .is_err()
    {
        return;
    }

    closure.forget();
    let _ = receiver.await;
}

/// Current time in milliseconds, for timing runs.
pub fn performance_now() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_default()
}

/// Get 2D rendering context from canvas.
pub fn get_2d_context(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
    canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("No 2d context"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(JsValue::from)
}

/// Device pixel ratio, for crisp lines on high-DPI screens.
pub fn device_pixel_ratio() -> f64 {
    web_sys::window()
        .map(|w| w.device_pixel_ratio())
        .filter(|r| *r > 0.0)
        .unwrap_or(1.0)
}
