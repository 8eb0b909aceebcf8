use wasm_bindgen::JsCast;
use web_sys as web;

/// Look up the animation canvas and grab its 2D context.
pub fn canvas_2d(
    document: &web::Document,
    element_id: &str,
) -> anyhow::Result<(web::HtmlCanvasElement, web::CanvasRenderingContext2d)> {
    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(element_id)
        .ok_or_else(|| anyhow::anyhow!("missing #{element_id}"))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let ctx: web::CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    Ok((canvas, ctx))
}

/// Match the canvas backing size to the window's inner size.
pub fn fit_canvas_to_window(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        canvas.set_width((width as u32).max(1));
        canvas.set_height((height as u32).max(1));
    }
}
