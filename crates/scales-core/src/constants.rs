/// Scene, animation and layout tuning constants.
///
/// These express intended behavior (rates, amplitudes, layout tables) and keep
/// magic numbers out of the code.

// Camera
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_START: [f32; 3] = [0.0, 0.0, 15.0];
pub const CAMERA_EASE_PER_TICK: f32 = 0.05; // fraction of remaining distance per tick
pub const CAMERA_PARALLAX: f32 = 0.5; // pointer -> camera target gain

// Group sway
pub const SWAY_FREQUENCY: f32 = 0.1; // rad/s
pub const SWAY_AMPLITUDE: f32 = 0.2; // radians
pub const POINTER_YAW_GAIN: f32 = 0.5;

// Pan bob and beam tilt
pub const PAN_REST_Y: f32 = 1.5;
pub const PAN_BOB_FREQUENCY: f32 = 1.5; // rad/s
pub const PAN_BOB_AMPLITUDE: f32 = 0.2;
pub const BEAM_TILT_AMPLITUDE: f32 = 0.05; // radians around the resting roll

// Particles
pub const PARTICLE_COUNT: usize = 200;
pub const PARTICLE_SPREAD: f32 = 25.0; // side of the bounding cube
pub const PARTICLE_SIZE: f32 = 0.05; // world units
pub const PARTICLE_OPACITY: f32 = 0.7;
pub const PARTICLE_SPIN_RATE: f32 = 0.05; // rad/s
pub const PARTICLE_SEED: u64 = 42;

// Viewport
pub const MOBILE_BREAKPOINT: f32 = 992.0; // widths strictly below are Mobile
pub const MAX_PIXEL_RATIO: f32 = 2.0;

// Palette (sRGB hex)
pub const GOLD_HEX: u32 = 0xd4af37;
pub const SILVER_HEX: u32 = 0xaaaaaa;
pub const BASE_DARK_HEX: u32 = 0x1a202c;
pub const BASE_LIGHT_HEX: u32 = 0x8d99ae; // cool grey for light mode

// Theme transition
pub const THEME_TRANSITION_SEC: f32 = 0.5;

// Lights
pub const AMBIENT_INTENSITY: f32 = 0.5;
pub const KEY_LIGHT_POSITION: [f32; 3] = [5.0, 10.0, 7.0];
pub const KEY_LIGHT_INTENSITY: f32 = 1.0;
pub const RIM_LIGHT_POSITION: [f32; 3] = [-5.0, 5.0, -5.0];
pub const RIM_LIGHT_INTENSITY: f32 = 2.0;
pub const RIM_LIGHT_ANGLE: f32 = std::f32::consts::FRAC_PI_3;
