// UI tuning shared by the page sections.

// Vertical scroll distance after which the navbar switches to its dark
// glass treatment.
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

// Widest viewport that still gets the touch layout and interactions.
pub const MOBILE_BREAKPOINT_PX: f64 = 991.0;

// The amenities scroll range ends when the container bottom reaches this
// fraction of the viewport height.
pub const AMENITIES_END_OFFSET: f64 = 0.6;

// A reveal block animates in once its top enters this fraction of the
// viewport.
pub const REVEAL_VIEWPORT_FRACTION: f64 = 0.9;
