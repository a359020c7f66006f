//! Table constants, ball layouts and the two tuning variants.
//!
//! Everything here is fixed for the lifetime of a rack. The defaults are the
//! classic table; hosts can pick a preset [`Variant`] or hand over a JSON
//! document, which is validated before use.

use baize_engine::VectorColor;
use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Canvas size in pixels.
pub const TABLE_W: f32 = 800.0;
pub const TABLE_H: f32 = 400.0;

pub const BALL_RADIUS: f32 = 10.0;
pub const POCKET_RADIUS: f32 = 18.0;

/// Shot velocity per pixel of drag.
pub const SHOT_SCALE: f32 = 0.1;

/// Per-frame velocity retention.
pub const CLASSIC_FRICTION: f32 = 0.98;
pub const TUNED_FRICTION: f32 = 0.985;

/// Speed below which the tuned variant snaps a ball to rest.
pub const TUNED_REST_THRESHOLD: f32 = 0.05;

pub const MAX_BALLS: usize = 8;

const CUE_START: Vec2 = Vec2::new(150.0, 200.0);

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Ball colors, named like their CSS counterparts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BallColor {
    White,
    Yellow,
    Red,
    Blue,
    Green,
    Purple,
    Orange,
    Black,
}

impl BallColor {
    pub fn to_vector_color(self) -> VectorColor {
        match self {
            BallColor::White => VectorColor::WHITE,
            BallColor::Yellow => VectorColor::YELLOW,
            BallColor::Red => VectorColor::RED,
            BallColor::Blue => VectorColor::BLUE,
            BallColor::Green => VectorColor::GREEN,
            BallColor::Purple => VectorColor::PURPLE,
            BallColor::Orange => VectorColor::ORANGE,
            BallColor::Black => VectorColor::BLACK,
        }
    }
}

/// Starting position and identity of one ball.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallSpec {
    pub x: f32,
    pub y: f32,
    pub color: BallColor,
    #[serde(default)]
    pub cue: bool,
}

impl BallSpec {
    pub fn new(pos: Vec2, color: BallColor) -> Self {
        Self { x: pos.x, y: pos.y, color, cue: false }
    }

    pub fn cue(pos: Vec2) -> Self {
        Self { x: pos.x, y: pos.y, color: BallColor::White, cue: true }
    }

    pub fn pos(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Physical constants of the table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Always the canvas size; not read from JSON.
    #[serde(skip)]
    pub width: f32,
    #[serde(skip)]
    pub height: f32,
    /// Velocity multiplier applied once per frame, in (0, 1).
    pub friction: f32,
    pub ball_radius: f32,
    pub pocket_radius: f32,
    /// Snap velocity to zero once speed drops below this. `None` lets balls
    /// decay forever.
    pub rest_threshold: Option<f32>,
    pub shot_scale: f32,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            width: TABLE_W,
            height: TABLE_H,
            friction: CLASSIC_FRICTION,
            ball_radius: BALL_RADIUS,
            pocket_radius: POCKET_RADIUS,
            rest_threshold: None,
            shot_scale: SHOT_SCALE,
        }
    }
}

/// How the cue stick is drawn while aiming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StickStyle {
    /// A single wood-colored line.
    #[default]
    Plain,
    /// Shaft, ferrule and chalked tip, pulled back with the drag.
    Tapered,
}

/// Preset tunings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Classic,
    Tuned,
}

impl Variant {
    /// Map a host-side selector (0 = classic, 1 = tuned).
    pub fn from_selector(value: f32) -> Option<Self> {
        if value == 0.0 {
            Some(Variant::Classic)
        } else if value == 1.0 {
            Some(Variant::Tuned)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BilliardsConfig {
    pub table: TableConfig,
    pub balls: Vec<BallSpec>,
    pub stick: StickStyle,
    /// Draw the predicted path of the cue ball while aiming.
    pub show_path_preview: bool,
}

impl Default for BilliardsConfig {
    fn default() -> Self {
        Self::classic()
    }
}

impl BilliardsConfig {
    /// Cue ball on the left, five object balls in a row on the right.
    pub fn classic() -> Self {
        let colors = [BallColor::Yellow, BallColor::Red, BallColor::Blue, BallColor::Green, BallColor::Purple];
        let mut balls = vec![BallSpec::cue(CUE_START)];
        balls.extend(
            colors
                .iter()
                .enumerate()
                .map(|(i, &color)| BallSpec::new(Vec2::new(600.0 + i as f32 * 22.0, 200.0), color)),
        );

        Self {
            table: TableConfig::default(),
            balls,
            stick: StickStyle::Plain,
            show_path_preview: true,
        }
    }

    /// Slower felt, rest snapping, and six balls racked in a triangle.
    pub fn tuned() -> Self {
        let colors = [
            BallColor::Yellow,
            BallColor::Red,
            BallColor::Blue,
            BallColor::Green,
            BallColor::Purple,
            BallColor::Orange,
        ];
        let rack = triangle_rack(Vec2::new(600.0, 200.0), BALL_RADIUS, colors.len());
        let mut balls = vec![BallSpec::cue(CUE_START)];
        balls.extend(rack.into_iter().zip(colors).map(|(pos, color)| BallSpec::new(pos, color)));

        Self {
            table: TableConfig {
                friction: TUNED_FRICTION,
                rest_threshold: Some(TUNED_REST_THRESHOLD),
                ..TableConfig::default()
            },
            balls,
            stick: StickStyle::Tapered,
            show_path_preview: true,
        }
    }

    pub fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::Classic => Self::classic(),
            Variant::Tuned => Self::tuned(),
        }
    }

    /// Parse and validate a JSON config. Missing fields take classic values.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let t = &self.table;
        if !(positive(t.friction) && t.friction < 1.0) {
            return Err(ConfigError::Invalid(format!("friction must be in (0, 1), got {}", t.friction)));
        }
        if t.width != TABLE_W || t.height != TABLE_H {
            return Err(ConfigError::Invalid(format!(
                "table must match the {}x{} canvas, got {}x{}",
                TABLE_W, TABLE_H, t.width, t.height
            )));
        }
        if !(positive(t.ball_radius) && positive(t.pocket_radius)) {
            return Err(ConfigError::Invalid("ball and pocket radii must be positive".into()));
        }
        if t.ball_radius * 2.0 >= t.width.min(t.height) {
            return Err(ConfigError::Invalid(format!("ball radius {} does not fit the table", t.ball_radius)));
        }
        if !positive(t.shot_scale) {
            return Err(ConfigError::Invalid(format!("shot scale must be positive, got {}", t.shot_scale)));
        }
        if let Some(eps) = t.rest_threshold {
            if eps.is_nan() || eps < 0.0 {
                return Err(ConfigError::Invalid(format!("rest threshold must be non-negative, got {}", eps)));
            }
        }
        if self.balls.is_empty() || self.balls.len() > MAX_BALLS {
            return Err(ConfigError::Invalid(format!(
                "expected 1 to {} balls, got {}",
                MAX_BALLS,
                self.balls.len()
            )));
        }
        let cues = self.balls.iter().filter(|b| b.cue).count();
        if cues != 1 {
            return Err(ConfigError::Invalid(format!("expected exactly one cue ball, got {}", cues)));
        }
        Ok(())
    }
}

/// Finite and `> 0`.
fn positive(x: f32) -> bool {
    x.is_finite() && x > 0.0
}

/// Rack `count` balls in a triangle whose apex points left at `apex`.
/// Rows grow to the right; each row is centered on `apex.y`.
pub fn triangle_rack(apex: Vec2, ball_radius: f32, count: usize) -> Vec<Vec2> {
    // One pixel of slack keeps a fresh rack from starting in contact
    let gap = ball_radius * 2.0 + 1.0;
    let row_offset = gap * 0.866;

    let mut positions = Vec::with_capacity(count);
    let mut row = 0;
    while positions.len() < count {
        let x = apex.x + row as f32 * row_offset;
        for k in 0..=row {
            if positions.len() == count {
                break;
            }
            let y = apex.y + (k as f32 - row as f32 / 2.0) * gap;
            positions.push(Vec2::new(x, y));
        }
        row += 1;
    }
    positions
}
