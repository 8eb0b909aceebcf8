// Shared visual tuning constants used by the frame controller and frontends.

// Responsive layout
pub const REFERENCE_SIZE: f32 = 600.0; // design-space size the viewport scale is relative to
pub const CURVE_SCALE: f32 = 15.0; // multiplies the responsive scale into curve units

// Motion
pub const ANGULAR_STEP: f32 = 0.10; // radians advanced per tick
pub const PHASE_OFFSET: f32 = std::f32::consts::PI; // second light starts opposite the first

// Trails
pub const TRAIL_CAPACITY: usize = 20; // positions of history kept per light
pub const TRAIL_MAX_ALPHA: f32 = 0.8; // opacity ramp ceiling at the newest segment
pub const TRAIL_BASE_WIDTH: f32 = 1.0; // stroke width of the oldest segment
pub const TRAIL_WIDTH_SPAN: f32 = 4.0; // extra width gained toward the newest segment
pub const TRAIL_GLOW_BLUR: f32 = 20.0;

// Particles
pub const SPAWN_PROBABILITY: f32 = 0.3; // per light, per tick
pub const PARTICLE_DECAY: f32 = 0.01; // life lost per tick (~100-tick lifetime)
pub const VELOCITY_DAMPING: f32 = 0.98; // per-tick velocity multiplier
pub const PARTICLE_SPEED_RANGE: f32 = 1.0; // velocity components uniform in +-range
pub const PARTICLE_MIN_RADIUS: f32 = 1.0;
pub const PARTICLE_RADIUS_SPAN: f32 = 3.0; // radius uniform in [min, min + span)
pub const PARTICLE_GLOW_BLUR: f32 = 10.0;

// Leading light markers
pub const LIGHT_RADIUS: f32 = 9.0;
pub const LIGHT_HALO_FACTOR: f32 = 3.0; // halo radius relative to LIGHT_RADIUS
pub const LIGHT_HALO_MID_STOP: f32 = 0.5; // where the quarter-alpha stop sits in the halo
pub const LIGHT_CORE_FACTOR: f32 = 0.3; // white core radius relative to LIGHT_RADIUS
pub const LIGHT_RING_FACTOR: f32 = 0.6; // colored ring radius relative to LIGHT_RADIUS
pub const LIGHT_RING_ALPHA: f32 = 0.8;
pub const LIGHT_GLOW_BLUR: f32 = 20.0;
pub const LIGHT_CORE_COLOR: &str = "#ffffff";

// Translucent overlay applied each tick instead of a clear. Prior frames
// must stay visible underneath; that ghosting is the motion-blur look.
pub const FADE_FILL: &str = "rgba(10, 10, 10, 0.1)";

/// Fixed colors for one tracked light: the bright head, the trail gradient
/// tail, and the head at quarter alpha for the marker halo.
#[derive(Clone, Copy, Debug)]
pub struct LightPalette {
    pub head: &'static str,
    pub tail: &'static str,
    pub halo: &'static str,
}

pub const CYAN_LIGHT: LightPalette = LightPalette {
    head: "#00d4ff",
    tail: "#0080ff",
    halo: "#00d4ff40",
};

pub const MAGENTA_LIGHT: LightPalette = LightPalette {
    head: "#ff0080",
    tail: "#ff00ff",
    halo: "#ff008040",
};
