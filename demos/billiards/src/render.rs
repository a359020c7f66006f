//! Table and aim overlay drawing. Balls draw themselves (see [`Ball::draw`]).

use baize_engine::{Surface, VectorColor};
use glam::Vec2;

use crate::aim::{preview_path, Aim};
use crate::ball::Ball;
use crate::config::StickStyle;
use crate::table::Table;

/// Aim line / preview dash pattern.
const DASH: f32 = 5.0;
const DASH_GAP: f32 = 5.0;

const PREVIEW_LENGTH: f32 = 200.0;

// Plain stick
const PLAIN_STICK_LENGTH: f32 = 80.0;
const PLAIN_STICK_WIDTH: f32 = 4.0;

// Tapered stick
const TAPERED_STICK_LENGTH: f32 = 180.0;
const TAPERED_MAX_RETRACT: f32 = 60.0;
const TAPERED_RETRACT_PER_PX: f32 = 0.15;

fn felt() -> VectorColor {
    VectorColor::rgb8(0x06, 0x4f, 0x1c)
}

fn wood() -> VectorColor {
    VectorColor::rgb8(0xc4, 0x9a, 0x6c)
}

/// Felt background plus the four pockets.
pub fn draw_table<S: Surface + ?Sized>(surface: &mut S, table: &Table) {
    surface.fill_rect(Vec2::ZERO, table.width, table.height, felt());
    for pocket in table.pockets() {
        surface.fill_circle(pocket, table.pocket_radius, VectorColor::BLACK);
    }
}

/// Everything drawn on top of the balls while a drag is in progress.
///
/// The stick and the path preview need a live cue ball; the dashed drag line
/// is drawn regardless.
pub fn draw_aim_overlay<S: Surface + ?Sized>(
    surface: &mut S,
    aim: &Aim,
    cue: Option<&Ball>,
    table: &Table,
    stick: StickStyle,
    show_preview: bool,
) {
    surface.dashed_line(aim.start, aim.current, 1.0, DASH, DASH_GAP, VectorColor::WHITE);

    let cue = match cue.filter(|b| !b.potted) {
        Some(b) => b,
        None => return,
    };

    // Points from the ball toward the drag point; the shot goes the other way
    let back = (aim.current - cue.pos).normalize_or_zero();
    if back == Vec2::ZERO {
        return;
    }

    match stick {
        StickStyle::Plain => draw_plain_stick(surface, cue.pos, back),
        StickStyle::Tapered => {
            let pull = cue.pos.distance(aim.current);
            draw_tapered_stick(surface, cue.pos, back, pull, table.ball_radius);
        }
    }

    if show_preview {
        let path = preview_path(cue.pos, -back, table, PREVIEW_LENGTH);
        for leg in path.windows(2) {
            surface.dashed_line(leg[0], leg[1], 1.0, DASH, DASH_GAP, VectorColor::YELLOW);
        }
    }
}

fn draw_plain_stick<S: Surface + ?Sized>(surface: &mut S, cue_pos: Vec2, back: Vec2) {
    surface.line(cue_pos + back * PLAIN_STICK_LENGTH, cue_pos, PLAIN_STICK_WIDTH, wood());
}

/// Shaft, white ferrule and blue chalk tip. The tip starts just off the ball
/// and backs away as the drag gets longer.
fn draw_tapered_stick<S: Surface + ?Sized>(surface: &mut S, cue_pos: Vec2, back: Vec2, pull: f32, ball_radius: f32) {
    let retract = (pull * TAPERED_RETRACT_PER_PX).min(TAPERED_MAX_RETRACT);
    let tip = cue_pos + back * (ball_radius + 3.0 + retract);
    let butt = tip + back * TAPERED_STICK_LENGTH;
    let ferrule_start = tip + back * 2.0;
    let ferrule_end = tip + back * 10.0;

    surface.line(tip, butt, 5.0, VectorColor::rgb(0.55, 0.35, 0.15));
    surface.line(ferrule_start, ferrule_end, 4.0, VectorColor::rgb(0.9, 0.9, 0.85));
    surface.line(tip, ferrule_start, 3.5, VectorColor::rgb(0.2, 0.4, 0.6));
}
