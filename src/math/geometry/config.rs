// src/math/geometry/config.rs
use crate::math::error::{MathError, MathResult};
use crate::math::geometry::polygon::operations::triangulation::TriangulationAlgorithm;
use crate::math::utils::constants;
use bevy::log::warn;
use std::borrow::Cow;

const MIN_BUFFER_QUALITY: usize = 4;
const MIN_CURVE_SEGMENTS: usize = 8;

/// Einstellungen für Buffer-/Offset-Operationen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BufferConfig {
    /// Segmente pro Vollkreis für runde Ecken.
    pub quality: usize,
    /// Maximales Verhältnis Miter-Länge / Distanz, darüber wird abgeschrägt.
    pub miter_limit: f64,
}

impl BufferConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quality(mut self, quality: usize) -> Self {
        self.quality = quality;
        self
    }

    pub fn with_miter_limit(mut self, miter_limit: f64) -> Self {
        self.miter_limit = miter_limit;
        self
    }

    pub fn validate(&self) -> MathResult<()> {
        if self.quality < MIN_BUFFER_QUALITY {
            return Err(MathError::InvalidConfiguration {
                message: format!("Buffer quality must be at least 4, got {}", self.quality),
            });
        }

        if !(self.miter_limit >= 1.0) {
            return Err(MathError::InvalidConfiguration {
                message: format!("Miter limit must be >= 1.0, got {}", self.miter_limit),
            });
        }

        Ok(())
    }

    /// Ungültige Werte werden durch die Standardwerte ersetzt.
    pub fn validated(&self) -> BufferConfig {
        if self.validate().is_ok() {
            return *self;
        }
        let defaults = Self::default();
        let fixed = Self {
            quality: if self.quality < MIN_BUFFER_QUALITY { defaults.quality } else { self.quality },
            miter_limit: if self.miter_limit >= 1.0 { self.miter_limit } else { defaults.miter_limit },
        };
        warn!("BufferConfig {:?} rejected, using {:?}", self, fixed);
        fixed
    }
}

impl Default for BufferConfig {
    fn default() -> Self {
        Self {
            quality: 24,
            miter_limit: 5.0,
        }
    }
}

/// Konfiguration des Geometrie-Kerns.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryConfig {
    /// Toleranz für Randberührungen in Prädikaten.
    pub tolerance: f64,
    /// Segmente zur Approximation von Kreisen/Ellipsen, wo keine exakte Formel greift.
    pub curve_segments: usize,
    pub buffer: BufferConfig,
    pub triangulation: TriangulationAlgorithm,
}

impl GeometryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_curve_segments(mut self, segments: usize) -> Self {
        self.curve_segments = segments;
        self
    }

    pub fn with_buffer(mut self, buffer: BufferConfig) -> Self {
        self.buffer = buffer;
        self
    }

    pub fn with_triangulation(mut self, algorithm: TriangulationAlgorithm) -> Self {
        self.triangulation = algorithm;
        self
    }

    pub fn validate(&self) -> MathResult<()> {
        if !(self.tolerance >= 0.0) || !self.tolerance.is_finite() {
            warn!("GeometryConfig: tolerance must be finite and non-negative.");
            return Err(MathError::InvalidConfiguration {
                message: format!("Tolerance must be finite and >= 0, got {}", self.tolerance),
            });
        }

        if self.curve_segments < MIN_CURVE_SEGMENTS {
            warn!("GeometryConfig: curve_segments should be at least 8.");
            return Err(MathError::InvalidConfiguration {
                message: format!(
                    "Curve segments must be at least 8, got {}",
                    self.curve_segments
                ),
            });
        }

        self.buffer.validate()
    }

    /// Die Konfiguration, wie sie die `*_with`-Funktionen verwenden:
    /// ungültige Werte fallen auf die Standardwerte zurück.
    pub fn validated(&self) -> Cow<'_, GeometryConfig> {
        if self.validate().is_ok() {
            return Cow::Borrowed(self);
        }
        let defaults = Self::default();
        let mut fixed = self.clone();
        if !(self.tolerance >= 0.0) || !self.tolerance.is_finite() {
            fixed.tolerance = defaults.tolerance;
        }
        if self.curve_segments < MIN_CURVE_SEGMENTS {
            fixed.curve_segments = defaults.curve_segments;
        }
        fixed.buffer = self.buffer.validated();
        Cow::Owned(fixed)
    }
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            tolerance: constants::EPSILON,
            curve_segments: 96,
            buffer: BufferConfig::default(),
            triangulation: TriangulationAlgorithm::ConstrainedDelaunay,
        }
    }
}
