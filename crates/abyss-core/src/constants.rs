//! Simulation constants and tuning parameters.

/// Nominal frame rate (Hz) used by the real-time loop and headless driver.
pub const FRAME_RATE: u32 = 60;

/// Seconds per nominal frame.
pub const DT: f64 = 1.0 / FRAME_RATE as f64;

// --- Depth ---

/// Deepest reachable point in meters (Challenger Deep).
pub const MAX_DEPTH: f64 = 11_000.0;

/// Current depth beyond which an active run is won.
pub const VICTORY_DEPTH: f64 = 10_900.0;

/// Gap (meters) above which the fast easing coefficient applies.
pub const DEPTH_FAST_GAP: f64 = 500.0;

/// Easing coefficient per frame for large gaps.
pub const DEPTH_EASE_FAST: f64 = 0.15;

/// Easing coefficient per frame for small gaps.
pub const DEPTH_EASE_SLOW: f64 = 0.08;

/// Gap below which the depth is considered settled.
pub const DEPTH_SETTLE_EPSILON: f64 = 0.05;

/// Wheel delta multiplier.
pub const WHEEL_SENSITIVITY: f64 = 0.15;

/// Vertical touch drag multiplier.
pub const TOUCH_SENSITIVITY: f64 = 1.5;

// --- Visibility ---

/// Depth window for the rendered entity set.
pub const RENDER_RANGE: f64 = 150.0;

/// Depth window for proximity damage.
pub const SURVIVAL_RANGE: f64 = 50.0;

// --- Placement ---

/// Inner edge of the lateral band (units from center).
pub const PLACEMENT_X_MIN: f32 = 6.0;

/// Width of the lateral band.
pub const PLACEMENT_X_SPAN: f32 = 12.0;

/// Half-width of the depth-axis band.
pub const PLACEMENT_Z_HALF_SPAN: f32 = 5.0;

// --- Creature motion ---

/// Vertical bob amplitude.
pub const BOB_AMPLITUDE: f32 = 0.3;

/// Phase offset per meter of catalog depth.
pub const BOB_DEPTH_PHASE: f32 = 0.1;

/// Idle roll amplitude (radians).
pub const ROLL_AMPLITUDE: f32 = 0.05;

/// Hostile drift rate toward the player axis (per second).
pub const HOSTILE_DRIFT_RATE: f32 = 0.5;

/// Aggro pulse frequency (radians per second).
pub const AGGRO_PULSE_FREQUENCY: f32 = 10.0;

/// Aggro pulse amplitude (fraction of base scale).
pub const AGGRO_PULSE_AMPLITUDE: f32 = 0.1;

/// Spin rate of a dying creature (radians per second).
pub const DYING_SPIN_RATE: f32 = 10.0;

/// Per-frame scale multiplier of a dying creature.
pub const DYING_SHRINK_FACTOR: f32 = 0.9;

/// Fraction of base scale below which a dying creature is removed.
pub const DYING_MIN_SCALE_RATIO: f32 = 0.01;

/// Seconds a dying creature lingers before removal.
pub const DYING_DURATION_SECS: f64 = 1.0;

// --- Player / camera ---

/// Player vessel offset along the depth axis (toward the camera).
pub const PLAYER_Z: f32 = 5.0;

/// Camera distance along +Z from the depth plane.
pub const CAMERA_Z: f32 = 30.0;

/// Vertical field of view in degrees.
pub const CAMERA_FOV_DEGREES: f32 = 45.0;

/// Near clip distance.
pub const CAMERA_NEAR: f32 = 0.1;

/// Far clip distance.
pub const CAMERA_FAR: f32 = 1000.0;

/// Probe side length in pixels per unit of entity scale.
pub const PROBE_PIXELS_PER_SCALE: f32 = 100.0;

/// Side length of the reticle's own probe in pixels.
pub const RETICLE_PROBE_PIXELS: f32 = 48.0;

// --- Targeting ---

/// Reticle travel per frame at full joystick deflection (percent of screen).
pub const RETICLE_SENSITIVITY: f32 = 0.8;

/// Reticle safety margin from each screen edge (percent).
pub const RETICLE_MARGIN: f32 = 5.0;

/// Seconds between accepted shots.
pub const FIRE_COOLDOWN_SECS: f64 = 1.5;

/// Seconds the trigger flag stays raised after a shot.
pub const TRIGGER_RESET_SECS: f64 = 0.1;

// --- Projectiles ---

/// Projectile speed (units per second).
pub const PROJECTILE_SPEED: f32 = 25.0;

/// Distance at which a projectile strikes its target.
pub const PROJECTILE_HIT_RADIUS: f32 = 1.5;

/// Per-frame scale growth of an impact burst.
pub const BURST_GROWTH_FACTOR: f32 = 1.1;

/// Opacity lost per second by an impact burst.
pub const BURST_FADE_RATE: f32 = 2.0;

// --- Survival ---

/// Seconds between proximity damage ticks.
pub const SURVIVAL_TICK_SECS: f64 = 1.0;

/// Health lost per nearby hostile per tick.
pub const DAMAGE_PER_HOSTILE: f64 = 0.5;

// --- Economy ---

/// Coins granted for reaching the bottom.
pub const WIN_REWARD: u64 = 1000;

/// Coins granted for recovering a treasure.
pub const TREASURE_REWARD: u64 = 500;

/// Coins granted for destroying a hostile.
pub const HOSTILE_KILL_REWARD: u64 = 10;

/// Coins lost for destroying a harmless creature.
pub const PEACEFUL_KILL_PENALTY: u64 = 5;

/// Daily missions offered per calendar day.
pub const DAILY_MISSION_COUNT: usize = 3;

// --- Front end timing ---

/// Number of intro comic panels.
pub const INTRO_PANEL_COUNT: u8 = 4;

/// Splash screen duration (seconds).
pub const SPLASH_DURATION_SECS: f64 = 3.0;

/// Sleep cutscene duration at the home base (seconds).
pub const SLEEP_DURATION_SECS: f64 = 6.0;

/// Upper bound on the simulation speed multiplier.
pub const MAX_TIME_SCALE: f64 = 4.0;
