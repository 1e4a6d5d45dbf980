use crate::geometry::Segment;

/// Default angular sampling resolution: rays per full turn.
pub const DEFAULT_DENSITY: usize = 60;

/// Angular restriction of a sweep.
///
/// The sweep frame follows the light-emission convention: `rotation` is in
/// degrees and `rotation = 0` points due south, a quarter turn off the
/// template frame where `direction = 0` points due east. The two offsets
/// cancel exactly, so a sector built with [`Sector::from_direction`] is
/// centred on that direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sector {
    /// Center of the sweep in the light frame, degrees.
    pub rotation: f64,
    /// Total angular width, degrees, in `(0, 360]`.
    pub width: f64,
}

impl Sector {
    /// Builds a sector centred on a template-frame direction (radians,
    /// 0 = due east) with the given width in degrees.
    #[must_use]
    pub fn from_direction(direction: f64, width: f64) -> Self {
        Self {
            rotation: direction.to_degrees() - 90.0,
            width,
        }
    }

    /// Center direction back in the template frame, radians.
    #[must_use]
    pub fn center(&self) -> f64 {
        (self.rotation + 90.0).to_radians()
    }

    /// Total width in radians.
    #[must_use]
    pub fn width_radians(&self) -> f64 {
        self.width.to_radians()
    }

    /// Number of evenly spaced sample steps across the sector for a given
    /// full-turn density. Always at least 2 so both boundary rays and at
    /// least one interior ray are cast.
    #[must_use]
    pub fn sample_count(&self, density: usize) -> usize {
        let fraction = (self.width / 360.0).clamp(0.0, 1.0);
        let steps = (density as f64 * fraction).ceil() as usize;
        steps.max(2)
    }
}

/// Input contract of the visibility sweep engine.
///
/// `boundary` holds synthetic segments the configuration builders inject to
/// close non-round shapes; the engine treats them exactly like real walls.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepConfig {
    /// Angular restriction; `None` sweeps the full turn.
    pub sector: Option<Sector>,
    /// Maximum ray length. Non-negative.
    pub radius: f64,
    /// Rays per full turn used for the evenly spaced base samples.
    pub density: usize,
    /// Synthetic boundary segments.
    pub boundary: Vec<Segment>,
    /// Emit a trace event describing the sweep.
    pub trace: bool,
}

impl SweepConfig {
    /// Full-circle sweep of the given radius.
    #[must_use]
    pub fn full(radius: f64) -> Self {
        Self {
            sector: None,
            radius,
            density: DEFAULT_DENSITY,
            boundary: Vec::new(),
            trace: false,
        }
    }

    /// Sweep restricted to a sector.
    #[must_use]
    pub fn within(sector: Sector, radius: f64) -> Self {
        Self {
            sector: Some(sector),
            ..Self::full(radius)
        }
    }

    /// Replaces the synthetic boundary segments.
    #[must_use]
    pub fn with_boundary(mut self, boundary: Vec<Segment>) -> Self {
        self.boundary = boundary;
        self
    }

    /// Overrides the sampling density.
    #[must_use]
    pub fn with_density(mut self, density: usize) -> Self {
        self.density = density;
        self
    }

    /// Enables the sweep trace event.
    #[must_use]
    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }
}
