use super::color::Rgb;
use super::constants::*;

/// Immutable per-field settings. `Default` matches the page's stock look.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub particle_count: usize,
    pub particle_size: f32,
    pub particle_color: Rgb,
    pub line_color: Rgb,
    pub particle_opacity: f32,
    pub line_opacity: f32,
    pub speed: f32,
    pub connect_distance: f32,
    pub interactive: bool,
    pub responsive_breakpoint: f32,
    pub pointer_radius: f32,
}

/// The stock accent `#6366f1`.
pub const ACCENT: Rgb = Rgb::new(0x63, 0x66, 0xf1);

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            particle_count: DEFAULT_PARTICLE_COUNT,
            particle_size: DEFAULT_PARTICLE_SIZE,
            particle_color: ACCENT,
            line_color: ACCENT,
            particle_opacity: DEFAULT_PARTICLE_OPACITY,
            line_opacity: DEFAULT_LINE_OPACITY,
            speed: DEFAULT_SPEED,
            connect_distance: DEFAULT_CONNECT_DISTANCE,
            interactive: true,
            responsive_breakpoint: DEFAULT_RESPONSIVE_BREAKPOINT,
            pointer_radius: DEFAULT_POINTER_RADIUS,
        }
    }
}

impl FieldConfig {
    /// Number of particles to create for a viewport of the given width.
    /// Narrow viewports get half the baseline, rounded down.
    #[inline]
    pub fn population(&self, viewport_width: f32) -> usize {
        if viewport_width < self.responsive_breakpoint {
            self.particle_count / 2
        } else {
            self.particle_count
        }
    }
}

/// Loosely typed options as they arrive from a page script. Zero, NaN and
/// empty values fall back to the defaults; only an explicit `false` turns
/// interaction off.
#[derive(Clone, Debug, Default)]
pub struct FieldOptions {
    pub particle_count: Option<f64>,
    pub particle_size: Option<f64>,
    pub particle_color: Option<String>,
    pub line_color: Option<String>,
    pub particle_opacity: Option<f64>,
    pub line_opacity: Option<f64>,
    pub speed: Option<f64>,
    pub connect_distance: Option<f64>,
    pub interactive: Option<bool>,
    pub responsive_breakpoint: Option<f64>,
}

impl FieldOptions {
    pub fn resolve(&self) -> FieldConfig {
        let d = FieldConfig::default();
        FieldConfig {
            particle_count: given(self.particle_count)
                .map(|c| c as usize)
                .unwrap_or(d.particle_count),
            particle_size: given_f32(self.particle_size, d.particle_size),
            particle_color: color_or(self.particle_color.as_deref(), d.particle_color),
            line_color: color_or(self.line_color.as_deref(), d.line_color),
            particle_opacity: given_f32(self.particle_opacity, d.particle_opacity),
            line_opacity: given_f32(self.line_opacity, d.line_opacity),
            speed: given_f32(self.speed, d.speed),
            connect_distance: given_f32(self.connect_distance, d.connect_distance),
            interactive: self.interactive != Some(false),
            responsive_breakpoint: given_f32(self.responsive_breakpoint, d.responsive_breakpoint),
            pointer_radius: d.pointer_radius,
        }
    }
}

#[inline]
fn given(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0 && !v.is_nan())
}

#[inline]
fn given_f32(value: Option<f64>, default: f32) -> f32 {
    given(value).map(|v| v as f32).unwrap_or(default)
}

fn color_or(value: Option<&str>, default: Rgb) -> Rgb {
    match value.map(str::trim).filter(|s| !s.is_empty()) {
        None => default,
        Some(hex) => Rgb::from_hex(hex).unwrap_or_else(|e| {
            log::warn!("[particles] {}; using default", e);
            default
        }),
    }
}
