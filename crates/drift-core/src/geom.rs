//! Planar geometry utilities: point/vector math, polygon containment,
//! and discrete line rasterization. All coordinate math uses f64.

/// A point or direction vector in the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Unit vector at the given heading in radians (0 = +x axis).
    pub fn from_angle(theta: f64) -> Self {
        Self { x: theta.cos(), y: theta.sin() }
    }

    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    pub fn length(self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn scale(self, k: f64) -> Self {
        Self { x: self.x * k, y: self.y * k }
    }
}

impl std::ops::Add for Vec2 {
    type Output = Vec2;
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// An axis-aligned rectangle given by its top-left corner and extent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Closed-interval AABB overlap test (touching edges count as overlap).
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x <= other.x + other.width
            && other.x <= self.x + self.width
            && self.y <= other.y + other.height
            && other.y <= self.y + self.height
    }

    /// True if `other` lies entirely inside `self` (strict on all sides).
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.x > self.x
            && other.y > self.y
            && other.x + other.width < self.x + self.width
            && other.y + other.height < self.y + self.height
    }
}

/// Winding-number point-in-polygon test.
///
/// Edges are treated half-open on the scanline through `point.y`
/// (`yi <= y < yj` counts upward, `yj <= y < yi` downward), so a crossing
/// through a vertex is counted exactly once. Points on the boundary follow
/// from that convention: the bottom/left edges of an axis-aligned box are
/// inside, the top/right edges are not.
pub fn point_in_polygon(point: Vec2, polygon: &[Vec2]) -> bool {
    let (x, y) = (point.x, point.y);
    let mut winding = 0i32;
    for i in 0..polygon.len() {
        let j = (i + 1) % polygon.len();
        let (xi, yi) = (polygon[i].x, polygon[i].y);
        let (xj, yj) = (polygon[j].x, polygon[j].y);
        if yi <= y {
            if yj > y && (xj - xi) * (y - yi) > (x - xi) * (yj - yi) {
                winding += 1;
            }
        } else if yj <= y && (xj - xi) * (y - yi) < (x - xi) * (yj - yi) {
            winding -= 1;
        }
    }
    winding != 0
}

/// Integer Bresenham line rasterization.
///
/// Returns the ordered 8-connected run of grid cells from `p1` to `p2`,
/// inclusive of both endpoints. A degenerate segment (`p1 == p2`) yields a
/// single cell rather than looping.
pub fn rasterize_line(p1: (i32, i32), p2: (i32, i32)) -> Vec<(i32, i32)> {
    let (mut x, mut y) = p1;
    let (x1, y1) = p2;

    let dx = (x1 - x).abs();
    let dy = -(y1 - y).abs();
    let sx = if x < x1 { 1 } else { -1 };
    let sy = if y < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    let mut cells = Vec::with_capacity((dx.max(-dy) + 1) as usize);
    loop {
        cells.push((x, y));
        if (x, y) == (x1, y1) {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
    cells
}
