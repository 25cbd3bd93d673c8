pub const WINDOW_WIDTH: i32 = 700;            // Window width (pixels)
pub const WINDOW_HEIGHT: i32 = 300;           // Window height (pixels)
pub const FPS: u32 = 60;                      // Frames per second

pub const TICK_INTERVAL_MS: u64 = 10;         // Milliseconds between animation ticks
pub const TICK_STEP: i32 = 1;                 // Horizontal advance per tick (pixels)
pub const TRACK_MIN_CX: i32 = 50;             // Left end of the track / wraparound target
pub const TRACK_MAX_CX: i32 = 600;            // Right end of the track
pub const TRACK_CY: i32 = 120;                // Vertical position of the track
pub const CIRCLE_RADIUS: f32 = 20.0;          // Radius of the animated circle

pub const CIRCLE_ID: &str = "circle4";                // Animated element identifier
pub const START_CONTROL_ID: &str = "startAnimation";  // Start control identifier
pub const STOP_CONTROL_ID: &str = "stopAnimation";    // Stop control identifier
