use eframe::egui::{Color32, Context, Rect, Vec2, Visuals, pos2};

use crate::ui::config::UI_CONFIG;

/// Sets up custom visuals for the entire application
pub fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();

    // Panels stay see-through so the background shows behind the overlays
    visuals.panel_fill = Color32::TRANSPARENT;
    visuals.window_fill = UI_CONFIG.colors.overlay;
    visuals.override_text_color = Some(UI_CONFIG.colors.text);

    ctx.set_visuals(visuals);
}

/// UV rectangle that scales an image to cover `target` without distortion,
/// cropping the overflow equally on both sides (CSS `background-size: cover`).
pub fn cover_uv(image_size: [usize; 2], target: Vec2) -> Rect {
    let full = Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0));
    let (iw, ih) = (image_size[0] as f32, image_size[1] as f32);
    if iw <= 0.0 || ih <= 0.0 || target.x <= 0.0 || target.y <= 0.0 {
        return full;
    }

    let image_aspect = iw / ih;
    let target_aspect = target.x / target.y;

    if image_aspect > target_aspect {
        // Wider than the window: crop left and right
        let margin = (1.0 - target_aspect / image_aspect) / 2.0;
        Rect::from_min_max(pos2(margin, 0.0), pos2(1.0 - margin, 1.0))
    } else {
        // Taller than the window: crop top and bottom
        let margin = (1.0 - image_aspect / target_aspect) / 2.0;
        Rect::from_min_max(pos2(0.0, margin), pos2(1.0, 1.0 - margin))
    }
}
