//! Sensor rig geometry.
//!
//! Every enemy carries two forward wedges used for collision and boundary
//! avoidance, and two board lines used for targeting. All four are defined
//! in the hull's local frame and rotate with its heading. They are never
//! collided against by gameplay rules.

use glam::DVec2;

use broadside_core::constants::{BOARD_SENSOR_LENGTH, SENSOR_WEDGE_REACH, SENSOR_WEDGE_SPREAD};
use broadside_core::enums::BoardSide;
use broadside_core::geometry::{Frame, Obb, Segment, Triangle};
use broadside_core::types::Arena;

/// Sensor shapes in arena coordinates for one hull pose.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorRig {
    pub left_wedge: Triangle,
    pub right_wedge: Triangle,
    pub left_board: Segment,
    pub right_board: Segment,
}

impl SensorRig {
    /// Mount the rig on a hull centred at `center` facing `heading_deg`.
    pub fn mounted(center: DVec2, heading_deg: f64) -> Self {
        let frame = Frame::new(center, heading_deg);
        Self {
            left_wedge: wedge(&frame, -1.0),
            right_wedge: wedge(&frame, 1.0),
            left_board: board_line(&frame, -1.0),
            right_board: board_line(&frame, 1.0),
        }
    }

    pub fn wedge(&self, side: BoardSide) -> &Triangle {
        match side {
            BoardSide::Left => &self.left_wedge,
            BoardSide::Right => &self.right_wedge,
        }
    }

    pub fn board(&self, side: BoardSide) -> &Segment {
        match side {
            BoardSide::Left => &self.left_board,
            BoardSide::Right => &self.right_board,
        }
    }

    /// Whether the wedge on `side` touches a footprint.
    pub fn wedge_detects(&self, side: BoardSide, footprint: &Obb) -> bool {
        footprint.overlaps_shape(self.wedge(side).vertices())
    }

    /// Whether a footprint lies on the firing line of `side`.
    pub fn board_detects(&self, side: BoardSide, footprint: &Obb) -> bool {
        footprint.overlaps_shape(&self.board(side).vertices())
    }

    /// Whether the wedge on `side` pokes outside the arena.
    pub fn wedge_outside(&self, side: BoardSide, arena: &Arena) -> bool {
        !self.wedge(side).inside(arena)
    }
}

/// Right triangle with its apex at the hull centre, reaching forward and
/// opening towards one side (`side_sign` -1 = port, +1 = starboard).
fn wedge(frame: &Frame, side_sign: f64) -> Triangle {
    Triangle([
        frame.to_world(DVec2::ZERO),
        frame.to_world(DVec2::new(SENSOR_WEDGE_REACH, 0.0)),
        frame.to_world(DVec2::new(
            SENSOR_WEDGE_REACH,
            side_sign * SENSOR_WEDGE_SPREAD,
        )),
    ])
}

fn board_line(frame: &Frame, side_sign: f64) -> Segment {
    Segment::new(
        frame.to_world(DVec2::ZERO),
        frame.to_world(DVec2::new(0.0, side_sign * BOARD_SENSOR_LENGTH)),
    )
}
