//! Pointer input handling

#[cfg(target_arch = "wasm32")]
use web_sys::{HtmlCanvasElement, MouseEvent};

/// Convert a pointer's viewport Y into surface coordinates
pub fn pointer_to_surface_y(client_y: f64, rect_top: f64) -> f32 {
    (client_y - rect_top) as f32
}

/// Extract the surface Y from a mouse event over `canvas`
#[cfg(target_arch = "wasm32")]
pub fn surface_y_from_event(event: &MouseEvent, canvas: &HtmlCanvasElement) -> f32 {
    let rect = canvas.get_bounding_client_rect();
    pointer_to_surface_y(event.client_y() as f64, rect.top())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_relative_to_canvas_top() {
        assert_eq!(pointer_to_surface_y(350.0, 50.0), 300.0);
    }

    #[test]
    fn test_pointer_above_canvas_is_negative() {
        // Clamping is the game's job
        assert_eq!(pointer_to_surface_y(10.0, 40.0), -30.0);
    }
}
