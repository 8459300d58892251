// Host page contract and front-end tuning constants.

// Elements expected in the host page
pub const SVG_SELECTOR: &str = "svg";
pub const PATH_SELECTOR: &str = "path";
pub const FILL_SELECTOR: &str = "#outer, #shape2"; // shapes recolored with pressure
pub const PROGRESS_SELECTOR: &str = ".progress-top";
pub const HINT_ID: &str = "scroll-hint";
pub const HINT_ICON_SELECTOR: &str = ".scroll-icon";
pub const HINT_ARROW_SELECTOR: &str = ".scroll-arrow";

// Logo artboard and zoom applied to the SVG viewBox
pub const LOGO_SIZE: f32 = 1417.32;
pub const LOGO_ZOOM: f32 = 3.0;

// Where the fade hands off once it completes
pub const EXIT_URL: &str = "/next-page.html";

/// Zoomed viewBox as `(offset, size)`; the square stays centered on the artboard.
#[inline]
pub fn zoomed_view_box() -> (f32, f32) {
    let size = LOGO_SIZE / LOGO_ZOOM;
    ((LOGO_SIZE - size) / 2.0, size)
}

/// Center of the zoomed viewBox, shared by every contour as its collapse center.
#[inline]
pub fn view_box_center() -> [f32; 2] {
    let (offset, size) = zoomed_view_box();
    [offset + size / 2.0, offset + size / 2.0]
}
