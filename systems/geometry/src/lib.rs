#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Line-intersection kernel used to derive panorama screen anchors.
//!
//! Every anchor in the panorama tables is the point where a ray from the
//! centre vanishing point to a foot on the horizon baseline crosses a ray
//! from a side vanishing point to another foot. The kernel is pure and has
//! no dependency on game state.

use glam::DVec2;
use midnight_core::ScreenPoint;

/// Slope of a line through two points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Gradient {
    /// Rise over run of a non-vertical line.
    Sloped(f64),
    /// Both points share the same x coordinate.
    Vertical,
}

/// Computes the gradient of the line through `p1` and `p2`.
///
/// Vertical lines are reported as [`Gradient::Vertical`] without dividing.
#[must_use]
pub fn gradient(p1: DVec2, p2: DVec2) -> Gradient {
    if p1.x == p2.x {
        Gradient::Vertical
    } else {
        Gradient::Sloped((p1.y - p2.y) / (p1.x - p2.x))
    }
}

/// Height at which a line of slope `m` through `point` crosses the y axis.
#[must_use]
pub fn y_intercept(point: DVec2, m: f64) -> f64 {
    point.y - m * point.x
}

/// Point where the line through `p1`, `p2` crosses the line through `p3`, `p4`.
///
/// Returns `None` when the lines are parallel, which includes two vertical
/// lines.
#[must_use]
pub fn intersect(p1: DVec2, p2: DVec2, p3: DVec2, p4: DVec2) -> Option<DVec2> {
    match (gradient(p1, p2), gradient(p3, p4)) {
        (Gradient::Vertical, Gradient::Vertical) => None,
        (Gradient::Sloped(m1), Gradient::Sloped(m2)) => {
            if m1 == m2 {
                return None;
            }
            let b1 = y_intercept(p1, m1);
            let b2 = y_intercept(p3, m2);
            let x = (b2 - b1) / (m1 - m2);
            Some(DVec2::new(x, m1 * x + b1))
        }
        (Gradient::Vertical, Gradient::Sloped(m2)) => {
            let x = p1.x;
            Some(DVec2::new(x, m2 * x + y_intercept(p3, m2)))
        }
        (Gradient::Sloped(m1), Gradient::Vertical) => {
            let x = p3.x;
            Some(DVec2::new(x, m1 * x + y_intercept(p1, m1)))
        }
    }
}

/// Same as [`intersect`], truncated toward zero to whole pixels.
#[must_use]
pub fn intersect_pixel(p1: DVec2, p2: DVec2, p3: DVec2, p4: DVec2) -> Option<ScreenPoint> {
    intersect(p1, p2, p3, p4).map(|point| ScreenPoint::new(point.x as i32, point.y as i32))
}

/// Side vanishing point paired with the centre one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// Vanishing point left of centre.
    Left,
    /// Vanishing point right of centre.
    Right,
}

/// Pair of baseline feet whose rays meet at one anchor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AnchorSpec {
    centre_foot: i32,
    side: Side,
    side_foot: i32,
}

impl AnchorSpec {
    /// Creates a new anchor specification.
    #[must_use]
    pub const fn new(centre_foot: i32, side: Side, side_foot: i32) -> Self {
        Self {
            centre_foot,
            side,
            side_foot,
        }
    }

    /// Baseline x reached by the ray from the centre vanishing point.
    #[must_use]
    pub const fn centre_foot(&self) -> i32 {
        self.centre_foot
    }

    /// Side vanishing point used by the second ray.
    #[must_use]
    pub const fn side(&self) -> Side {
        self.side
    }

    /// Baseline x reached by the ray from the side vanishing point.
    #[must_use]
    pub const fn side_foot(&self) -> i32 {
        self.side_foot
    }
}

/// Horizon baseline and the three vanishing points above it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VanishingGrid {
    baseline_y: i32,
    centre: ScreenPoint,
    left: ScreenPoint,
    right: ScreenPoint,
}

impl VanishingGrid {
    /// Grid the panorama tables were derived from on the 1024x768 canvas.
    pub const PANORAMA: VanishingGrid = VanishingGrid::new(
        568,
        ScreenPoint::new(512, 466),
        ScreenPoint::new(128, 462),
        ScreenPoint::new(896, 462),
    );

    /// Creates a new vanishing grid.
    #[must_use]
    pub const fn new(
        baseline_y: i32,
        centre: ScreenPoint,
        left: ScreenPoint,
        right: ScreenPoint,
    ) -> Self {
        Self {
            baseline_y,
            centre,
            left,
            right,
        }
    }

    /// Vertical position of the horizon baseline.
    #[must_use]
    pub const fn baseline_y(&self) -> i32 {
        self.baseline_y
    }

    /// Vanishing point straight ahead.
    #[must_use]
    pub const fn centre(&self) -> ScreenPoint {
        self.centre
    }

    /// Vanishing point on the requested side.
    #[must_use]
    pub const fn side(&self, side: Side) -> ScreenPoint {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// Screen anchor where the two rays described by `spec` cross.
    #[must_use]
    pub fn anchor(&self, spec: AnchorSpec) -> Option<ScreenPoint> {
        intersect_pixel(
            to_dvec(self.centre),
            self.foot(spec.centre_foot),
            to_dvec(self.side(spec.side)),
            self.foot(spec.side_foot),
        )
    }

    /// Anchors for every row of specs, back row first.
    ///
    /// Specs whose rays are parallel are skipped.
    #[must_use]
    pub fn anchor_rows(&self, rows: &[&[AnchorSpec]]) -> Vec<Vec<ScreenPoint>> {
        rows.iter()
            .map(|row| row.iter().filter_map(|spec| self.anchor(*spec)).collect())
            .collect()
    }

    fn foot(&self, x: i32) -> DVec2 {
        DVec2::new(f64::from(x), f64::from(self.baseline_y))
    }
}

fn to_dvec(point: ScreenPoint) -> DVec2 {
    DVec2::new(f64::from(point.x()), f64::from(point.y()))
}

/// Family of panorama layouts sharing the same construction lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Perspective {
    /// Looking north, east, south or west.
    Cardinal,
    /// Looking along a diagonal.
    Intercardinal,
}

impl Perspective {
    /// Anchor specs for the perspective, back row first.
    #[must_use]
    pub const fn anchor_specs(self) -> &'static [&'static [AnchorSpec]] {
        match self {
            Self::Cardinal => &CARDINAL_ROWS,
            Self::Intercardinal => &INTERCARDINAL_ROWS,
        }
    }
}

const fn left(centre_foot: i32, side_foot: i32) -> AnchorSpec {
    AnchorSpec::new(centre_foot, Side::Left, side_foot)
}

const fn right(centre_foot: i32, side_foot: i32) -> AnchorSpec {
    AnchorSpec::new(centre_foot, Side::Right, side_foot)
}

const CARDINAL_ROWS: [&[AnchorSpec]; 6] = [
    &[
        left(-768, 2816),
        left(0, 4096),
        left(512, 5632),
        right(1024, -3072),
        right(1792, -1792),
    ],
    &[
        left(-3072, 512),
        left(-1792, 1024),
        left(-768, 1792),
        left(0, 2816),
        left(512, 4096),
        right(1024, -1792),
        right(1792, -768),
        right(2816, 0),
        right(4096, 512),
    ],
    &[
        left(-4608, -256),
        left(-3072, 128),
        left(-1792, 512),
        left(-768, 1024),
        left(0, 1792),
        left(512, 2816),
        right(1024, -768),
        right(1792, 0),
        right(2816, 512),
        right(4096, 896),
        right(5632, 1280),
    ],
    &[
        left(-4608, -768),
        left(-3072, -256),
        left(-1792, 128),
        left(-768, 512),
        left(0, 1024),
        left(512, 1792),
        right(1024, 0),
        right(1792, 512),
        right(2816, 896),
        right(4096, 1280),
        right(5632, 1792),
    ],
    &[
        left(-3072, -768),
        left(-1792, -256),
        left(-768, 128),
        left(0, 512),
        left(512, 1024),
        right(1024, 512),
        right(1792, 896),
        right(2816, 1280),
        right(4096, 1792),
    ],
    &[
        left(-1792, -768),
        left(-768, -256),
        left(0, 128),
        left(512, 512),
        right(1024, 896),
        right(1792, 1280),
        right(2816, 1792),
    ],
];

// Diagonal views only have construction lines for the far rows and the
// centre line.
const INTERCARDINAL_ROWS: [&[AnchorSpec]; 4] = [
    &[
        left(-4992, -384),
        left(-4992, 128),
        left(-4992, 640),
        left(-4992, 1408),
        right(6016, -384),
        right(6016, 384),
        right(6016, 896),
        right(6016, 1408),
    ],
    &[
        left(-3456, -384),
        left(-3456, 128),
        left(-3456, 640),
        left(-3456, 1408),
        left(-3456, 2432),
        left(-3456, 3712),
        right(4480, -2688),
        right(4480, -1408),
        right(4480, -384),
        right(4480, 384),
        right(4480, 896),
        right(4480, 1408),
    ],
    &[left(512, 1408)],
    &[left(512, 640)],
];
