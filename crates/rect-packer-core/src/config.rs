use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{PackerError, Result};

/// MaxRects placement heuristics.
///
/// Each heuristic scores every candidate position with one or two integers;
/// lower wins and the second score breaks ties.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Heuristic {
    /// Minimize the shorter leftover side of the chosen free rectangle.
    BestShortSideFit,
    /// Minimize the longer leftover side of the chosen free rectangle.
    BestLongSideFit,
    /// Minimize the unused area of the chosen free rectangle.
    BestAreaFit,
    /// Tetris-like: lowest resulting bottom edge, then leftmost.
    BottomLeft,
    /// Maximize the perimeter shared with the bin border and placed rectangles.
    ContactPoint,
}

impl Heuristic {
    pub const ALL: [Heuristic; 5] = [
        Heuristic::BestShortSideFit,
        Heuristic::BestLongSideFit,
        Heuristic::BestAreaFit,
        Heuristic::BottomLeft,
        Heuristic::ContactPoint,
    ];

    /// Short alias, as accepted by `FromStr`.
    pub fn short_name(self) -> &'static str {
        match self {
            Heuristic::BestShortSideFit => "bssf",
            Heuristic::BestLongSideFit => "blsf",
            Heuristic::BestAreaFit => "baf",
            Heuristic::BottomLeft => "bl",
            Heuristic::ContactPoint => "cp",
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

impl FromStr for Heuristic {
    type Err = PackerError;
    fn from_str(s: &str) -> Result<Self> {
        let norm: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_ascii_lowercase();
        match norm.as_str() {
            "bssf" | "bestshortsidefit" => Ok(Self::BestShortSideFit),
            "blsf" | "bestlongsidefit" => Ok(Self::BestLongSideFit),
            "baf" | "bestareafit" => Ok(Self::BestAreaFit),
            "bl" | "bottomleft" | "bottomleftrule" => Ok(Self::BottomLeft),
            "cp" | "contactpoint" | "contactpointrule" => Ok(Self::ContactPoint),
            _ => Err(PackerError::UnknownHeuristic(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PackerConfig {
    /// Bin width in pixels.
    pub max_width: u32,
    /// Bin height in pixels.
    pub max_height: u32,
    /// Allow 90° rotations for placements where beneficial.
    #[serde(default = "default_allow_rotation")]
    pub allow_rotation: bool,
    /// Heuristic used by the `Packer` trait methods.
    #[serde(default = "default_heuristic")]
    pub heuristic: Heuristic,
    /// Score batch candidates in parallel when feature "parallel" is on.
    #[serde(default = "default_parallel")]
    pub parallel: bool,
}

impl Default for PackerConfig {
    fn default() -> Self {
        Self {
            max_width: 1024,
            max_height: 1024,
            allow_rotation: default_allow_rotation(),
            heuristic: default_heuristic(),
            parallel: default_parallel(),
        }
    }
}

impl PackerConfig {
    /// Validates the configuration parameters.
    ///
    /// Returns `InvalidDimensions` if either bin dimension is zero, and
    /// `InvalidConfig` if the bin area does not fit the scoring range.
    pub fn validate(&self) -> Result<()> {
        if self.max_width == 0 || self.max_height == 0 {
            return Err(PackerError::InvalidDimensions {
                width: self.max_width,
                height: self.max_height,
            });
        }
        // Scores are i64 and the area-fit score is a difference of areas.
        if self.max_width > i32::MAX as u32 || self.max_height > i32::MAX as u32 {
            return Err(PackerError::InvalidConfig(format!(
                "bin dimensions {}x{} exceed {}",
                self.max_width,
                self.max_height,
                i32::MAX
            )));
        }
        Ok(())
    }

    /// Parses a JSON config; missing optional fields take their defaults.
    pub fn from_json(s: &str) -> Result<Self> {
        let cfg: PackerConfig = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Create a fluent builder for `PackerConfig`.
    pub fn builder() -> PackerConfigBuilder {
        PackerConfigBuilder::new()
    }
}

fn default_allow_rotation() -> bool {
    true
}
fn default_heuristic() -> Heuristic {
    Heuristic::BestAreaFit
}
fn default_parallel() -> bool {
    false
}

/// Builder for `PackerConfig` for ergonomic construction.
#[derive(Debug, Default, Clone)]
pub struct PackerConfigBuilder {
    cfg: PackerConfig,
}

impl PackerConfigBuilder {
    pub fn new() -> Self {
        Self {
            cfg: PackerConfig::default(),
        }
    }
    pub fn with_max_dimensions(mut self, w: u32, h: u32) -> Self {
        self.cfg.max_width = w;
        self.cfg.max_height = h;
        self
    }
    pub fn allow_rotation(mut self, v: bool) -> Self {
        self.cfg.allow_rotation = v;
        self
    }
    pub fn heuristic(mut self, v: Heuristic) -> Self {
        self.cfg.heuristic = v;
        self
    }
    pub fn parallel(mut self, v: bool) -> Self {
        self.cfg.parallel = v;
        self
    }
    pub fn build(self) -> PackerConfig {
        self.cfg
    }
}
