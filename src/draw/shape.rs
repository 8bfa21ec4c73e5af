//! Preset shape outlines that seed the canvas with points.

use super::points::Point;
use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

/// Radius in pixels used for every preset shape.
pub const SHAPE_RADIUS: f64 = 150.0;

/// Named preset shapes offered by the shape selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// 12 points on a circle, every 30°
    Circle,
    /// Apex-up equilateral triangle
    Triangle,
    /// Axis-aligned square with side `2 * radius`
    Square,
    /// 12 samples of the parametric heart curve
    Heart,
    /// Five-pointed star, outer and inner vertices alternating
    Star,
}

impl Shape {
    pub const ALL: [Shape; 5] = [
        Shape::Circle,
        Shape::Triangle,
        Shape::Square,
        Shape::Heart,
        Shape::Star,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Shape::Circle => "circle",
            Shape::Triangle => "triangle",
            Shape::Square => "square",
            Shape::Heart => "heart",
            Shape::Star => "star",
        }
    }

    /// Looks up a shape by its selector name. Unknown names map to `None`.
    pub fn from_name(name: &str) -> Option<Shape> {
        name.parse().ok()
    }

    /// Generates the outline points for a canvas of the given size.
    ///
    /// The shape is centered on the canvas and always uses [`SHAPE_RADIUS`].
    pub fn points(&self, canvas_width: f64, canvas_height: f64) -> Vec<Point> {
        let cx = canvas_width / 2.0;
        let cy = canvas_height / 2.0;
        let r = SHAPE_RADIUS;

        match self {
            Shape::Circle => every_30_degrees()
                .map(|t| Point::new(cx + r * t.cos(), cy + r * t.sin()))
                .collect(),
            Shape::Triangle => {
                let (sin30, cos30) = 30f64.to_radians().sin_cos();
                vec![
                    Point::new(cx, cy - r),
                    Point::new(cx - r * cos30, cy + r * sin30),
                    Point::new(cx + r * cos30, cy + r * sin30),
                ]
            }
            Shape::Square => vec![
                Point::new(cx - r, cy - r),
                Point::new(cx + r, cy - r),
                Point::new(cx + r, cy + r),
                Point::new(cx - r, cy + r),
            ],
            Shape::Heart => {
                let k = r / 16.0;
                every_30_degrees()
                    .map(|t| {
                        let x = 16.0 * t.sin().powi(3);
                        let y = 13.0 * t.cos()
                            - 5.0 * (2.0 * t).cos()
                            - 2.0 * (3.0 * t).cos()
                            - (4.0 * t).cos();
                        Point::new(cx + x * k, cy - y * k)
                    })
                    .collect()
            }
            Shape::Star => {
                const TIPS: usize = 5;
                let inner = r * 0.4;
                (0..TIPS * 2)
                    .map(|i| {
                        let angle = i as f64 * PI / TIPS as f64;
                        let rho = if i % 2 == 0 { r } else { inner };
                        Point::new(cx + rho * angle.sin(), cy - rho * angle.cos())
                    })
                    .collect()
            }
        }
    }
}

/// Generates points for a shape selected by name.
///
/// Unknown or empty names yield no points, which empties the canvas.
pub fn generate(name: &str, canvas_width: f64, canvas_height: f64) -> Vec<Point> {
    match Shape::from_name(name) {
        Some(shape) => shape.points(canvas_width, canvas_height),
        None => {
            if !name.trim().is_empty() {
                log::warn!("Unknown shape '{}', clearing canvas", name);
            }
            Vec::new()
        }
    }
}

fn every_30_degrees() -> impl Iterator<Item = f64> {
    (0..12).map(|step| (step as f64 * 30.0).to_radians())
}

impl FromStr for Shape {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "circle" => Ok(Shape::Circle),
            "triangle" => Ok(Shape::Triangle),
            "square" => Ok(Shape::Square),
            "heart" => Ok(Shape::Heart),
            "star" => Ok(Shape::Star),
            other => Err(format!("unknown shape '{}'", other)),
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn circle_has_twelve_points_and_is_deterministic() {
        let first = generate("circle", 500.0, 500.0);
        let second = generate("circle", 500.0, 500.0);
        assert_eq!(first.len(), 12);
        assert_eq!(first, second);

        // First sample sits on the positive X axis
        assert!(close(first[0].x, 400.0));
        assert!(close(first[0].y, 250.0));

        for p in &first {
            assert!(close(p.distance_to(Point::new(250.0, 250.0)), SHAPE_RADIUS));
        }
    }

    #[test]
    fn triangle_apex_points_up() {
        let pts = Shape::Triangle.points(500.0, 500.0);
        assert_eq!(pts.len(), 3);
        assert_eq!(pts[0], Point::new(250.0, 100.0));
        assert!(close(pts[1].y, 325.0));
        assert!(close(pts[1].x + pts[2].x, 500.0));
    }

    #[test]
    fn square_corners() {
        let pts = Shape::Square.points(400.0, 400.0);
        assert_eq!(
            pts,
            vec![
                Point::new(50.0, 50.0),
                Point::new(350.0, 50.0),
                Point::new(350.0, 350.0),
                Point::new(50.0, 350.0),
            ]
        );
    }

    #[test]
    fn heart_top_cusp_and_bottom_tip() {
        let pts = Shape::Heart.points(500.0, 500.0);
        assert_eq!(pts.len(), 12);
        // theta = 0: y = 13 - 5 - 2 - 1 = 5 units above the center
        assert!(close(pts[0].x, 250.0));
        assert!(close(pts[0].y, 250.0 - 5.0 * SHAPE_RADIUS / 16.0));
        // theta = 180°: y = -13 - 5 + 2 - 1 = -17 units, below the center
        assert!(close(pts[6].y, 250.0 + 17.0 * SHAPE_RADIUS / 16.0));
    }

    #[test]
    fn star_alternates_outer_and_inner_radius() {
        let center = Point::new(250.0, 250.0);
        let pts = Shape::Star.points(500.0, 500.0);
        assert_eq!(pts.len(), 10);
        for (i, p) in pts.iter().enumerate() {
            let expected = if i % 2 == 0 {
                SHAPE_RADIUS
            } else {
                SHAPE_RADIUS * 0.4
            };
            assert!(close(p.distance_to(center), expected));
        }
        // First tip is straight up
        assert!(close(pts[0].x, 250.0));
        assert!(close(pts[0].y, 100.0));
    }

    #[test]
    fn unknown_shape_yields_nothing() {
        assert!(generate("hexagon", 500.0, 500.0).is_empty());
        assert!(generate("", 500.0, 500.0).is_empty());
    }

    #[test]
    fn names_round_trip_through_parse() {
        for shape in Shape::ALL {
            assert_eq!(Shape::from_name(shape.name()), Some(shape));
        }
        assert_eq!(Shape::from_name(" Star "), Some(Shape::Star));
    }
}
