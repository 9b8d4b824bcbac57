//! Paw Chase - a tile-grid arcade chase game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (grid geometry, collisions, event queue, tick engine)
//! - `scene`: Render-facing view model (what to draw; blitting lives outside the crate)
//! - `input`: Translation tables from raw devices to game events
//! - `audio`: Sound-effect seam (playback lives outside the crate)
//! - `settings`: Player preferences
//! - `app`: Per-frame event-queue orchestration

pub mod app;
pub mod audio;
pub mod input;
pub mod scene;
pub mod settings;
pub mod sim;

pub use app::App;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Tile width, in pixels
    pub const TILE_WIDTH: f32 = 32.0;
    /// Tile height, in pixels
    pub const TILE_HEIGHT: f32 = 32.0;

    /// Character sprite width, in pixels
    pub const CHARACTER_WIDTH: f32 = 32.0;
    /// Character sprite height, in pixels
    pub const CHARACTER_HEIGHT: f32 = 32.0;

    /// Level width, in tiles
    pub const LEVEL_WIDTH: i32 = 20;
    /// Level height, in tiles
    pub const LEVEL_HEIGHT: i32 = 14;

    /// Logical canvas width for the letterboxed scene, in pixels
    pub const CANVAS_WIDTH: u32 = 640;
    /// Logical canvas height for the letterboxed scene, in pixels
    pub const CANVAS_HEIGHT: u32 = 480;

    /// Walk duration of all characters, in seconds
    pub const WALK_DURATION: f64 = 0.25;

    /// Frame cadence enforced by the frame driver, in Hz
    pub const FRAME_RATE: u32 = 30;
}
