use std::fmt::Display;

/// Integer pixel coordinate. Origin is the top-left corner, y grows downward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ZERO: Point = Point::new(0, 0);

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn with_x(self, x: i32) -> Self {
        Self { x, ..self }
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl std::ops::Add for Point {
    type Output = Point;
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets() {
        let mut pen = Point::new(4, 8) + Point::new(3, -2);
        assert_eq!(pen, Point::new(7, 6));
        pen += Point::new(0, 10);
        assert_eq!(pen.with_x(4), Point::new(4, 16));
        assert_eq!(pen.to_string(), "(7, 16)");
    }
}
