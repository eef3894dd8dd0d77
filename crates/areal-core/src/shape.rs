use std::{f64::consts::PI, fmt};

use crate::Measurement;

/// A geometric figure the application can compute the area of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// A circle, measured by its radius.
    Circle,
    /// A triangle, measured by its base and height.
    Triangle,
    /// A rectangle, measured by its base and height.
    Rectangle,
    /// A square, measured by its side.
    Square,
}

impl Shape {
    /// All shapes, in menu order.
    pub const ALL: [Self; 4] = [Self::Circle, Self::Triangle, Self::Rectangle, Self::Square];

    /// Capitalized name used for menu items.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Circle => "Circle",
            Self::Triangle => "Triangle",
            Self::Rectangle => "Rectangle",
            Self::Square => "Square",
        }
    }

    /// Lowercase name used in result messages.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Triangle => "triangle",
            Self::Rectangle => "rectangle",
            Self::Square => "square",
        }
    }

    /// Prompt text for each required measurement, in acquisition order
    /// (base before height for triangle and rectangle).
    #[must_use]
    pub fn measurement_prompts(self) -> &'static [&'static str] {
        match self {
            Self::Circle => &["Enter the radius of the circle:"],
            Self::Triangle => &[
                "Enter the base of the triangle:",
                "Enter the height of the triangle:",
            ],
            Self::Rectangle => &[
                "Enter the base of the rectangle:",
                "Enter the height of the rectangle:",
            ],
            Self::Square => &["Enter the side of the square:"],
        }
    }

    /// Number of measurements this shape requires.
    #[must_use]
    #[inline]
    pub fn measurement_count(self) -> usize {
        self.measurement_prompts().len()
    }
}

/// A shape together with the measurements required to compute its area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeRequest {
    /// Circle with its radius.
    Circle {
        /// The circle's radius.
        radius: Measurement,
    },
    /// Triangle with its base and height.
    Triangle {
        /// The triangle's base.
        base: Measurement,
        /// The triangle's height.
        height: Measurement,
    },
    /// Rectangle with its base and height.
    Rectangle {
        /// The rectangle's base.
        base: Measurement,
        /// The rectangle's height.
        height: Measurement,
    },
    /// Square with its side.
    Square {
        /// The square's side.
        side: Measurement,
    },
}

impl ShapeRequest {
    /// Builds a request from measurements in acquisition order.
    ///
    /// # Panics
    ///
    /// Panics if `measurements` does not contain exactly
    /// [`Shape::measurement_count`] values.
    #[must_use]
    pub fn new(shape: Shape, measurements: &[Measurement]) -> Self {
        assert_eq!(measurements.len(), shape.measurement_count());
        match shape {
            Shape::Circle => Self::Circle {
                radius: measurements[0],
            },
            Shape::Triangle => Self::Triangle {
                base: measurements[0],
                height: measurements[1],
            },
            Shape::Rectangle => Self::Rectangle {
                base: measurements[0],
                height: measurements[1],
            },
            Shape::Square => Self::Square {
                side: measurements[0],
            },
        }
    }

    /// Returns the requested shape.
    #[must_use]
    pub fn shape(&self) -> Shape {
        match self {
            Self::Circle { .. } => Shape::Circle,
            Self::Triangle { .. } => Shape::Triangle,
            Self::Rectangle { .. } => Shape::Rectangle,
            Self::Square { .. } => Shape::Square,
        }
    }

    /// Computes the area.
    ///
    /// # Examples
    ///
    /// ```
    /// use areal_core::{Measurement, Shape, ShapeRequest};
    ///
    /// let side = Measurement::new(7.0)?;
    /// let request = ShapeRequest::new(Shape::Square, &[side]);
    /// assert!((request.area() - 49.0).abs() < 1e-12);
    /// # Ok::<(), areal_core::MeasurementError>(())
    /// ```
    #[must_use]
    pub fn area(&self) -> f64 {
        match self {
            Self::Circle { radius } => PI * radius.value().powi(2),
            Self::Triangle { base, height } => 0.5 * base.value() * height.value(),
            Self::Rectangle { base, height } => base.value() * height.value(),
            Self::Square { side } => side.value().powi(2),
        }
    }
}

/// The computed area of a shape, ready for display.
///
/// The `Display` impl renders the message shown in the result dialog, with
/// the area rounded to two decimal places.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AreaResult {
    shape: Shape,
    area: f64,
}

impl AreaResult {
    /// Computes the area of `request`.
    #[must_use]
    pub fn new(request: &ShapeRequest) -> Self {
        Self {
            shape: request.shape(),
            area: request.area(),
        }
    }

    /// Returns the shape the area belongs to.
    #[must_use]
    #[inline]
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Returns the unrounded area.
    #[must_use]
    #[inline]
    pub fn area(&self) -> f64 {
        self.area
    }
}

impl fmt::Display for AreaResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "The area of the {} is: {:.2}",
            self.shape.display_name(),
            self.area
        )
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn measurement(value: f64) -> Measurement {
        Measurement::new(value).expect("positive value")
    }

    #[test]
    fn prompt_counts_match_arity() {
        assert_eq!(Shape::Circle.measurement_count(), 1);
        assert_eq!(Shape::Triangle.measurement_count(), 2);
        assert_eq!(Shape::Rectangle.measurement_count(), 2);
        assert_eq!(Shape::Square.measurement_count(), 1);
    }

    #[test]
    fn all_lists_shapes_in_menu_order() {
        assert_eq!(
            Shape::ALL,
            [
                Shape::Circle,
                Shape::Triangle,
                Shape::Rectangle,
                Shape::Square
            ]
        );
    }

    #[test]
    fn circle_area_is_pi_r_squared() {
        let request = ShapeRequest::new(Shape::Circle, &[measurement(2.0)]);
        assert!((request.area() - PI * 4.0).abs() < 1e-12);
    }

    #[test]
    fn triangle_area_is_half_base_times_height() {
        let request = ShapeRequest::new(Shape::Triangle, &[measurement(4.0), measurement(5.0)]);
        assert!((request.area() - 10.0).abs() < 1e-12);
    }

    #[test]
    fn rectangle_area_is_base_times_height() {
        let request = ShapeRequest::new(Shape::Rectangle, &[measurement(3.0), measurement(6.0)]);
        assert!((request.area() - 18.0).abs() < 1e-12);
    }

    #[test]
    fn square_area_is_side_squared() {
        let request = ShapeRequest::new(Shape::Square, &[measurement(7.0)]);
        assert!((request.area() - 49.0).abs() < 1e-12);
    }

    #[test]
    #[should_panic(expected = "assertion `left == right` failed")]
    fn request_panics_on_wrong_arity() {
        let _ = ShapeRequest::new(Shape::Triangle, &[measurement(1.0)]);
    }

    #[test]
    fn result_messages_round_to_two_decimals() {
        let cases = [
            (
                ShapeRequest::new(Shape::Circle, &[measurement(2.0)]),
                "The area of the circle is: 12.57",
            ),
            (
                ShapeRequest::new(Shape::Triangle, &[measurement(4.0), measurement(5.0)]),
                "The area of the triangle is: 10.00",
            ),
            (
                ShapeRequest::new(Shape::Rectangle, &[measurement(3.0), measurement(6.0)]),
                "The area of the rectangle is: 18.00",
            ),
            (
                ShapeRequest::new(Shape::Square, &[measurement(7.0)]),
                "The area of the square is: 49.00",
            ),
        ];
        for (request, expected) in cases {
            assert_eq!(AreaResult::new(&request).to_string(), expected);
        }
    }

    proptest! {
        #[test]
        fn circle_formula(r in 1.0e-3_f64..1.0e6) {
            let request = ShapeRequest::new(Shape::Circle, &[measurement(r)]);
            prop_assert!((request.area() - PI * r * r).abs() <= PI * r * r * 1e-12);
        }

        #[test]
        fn triangle_formula(b in 1.0e-3_f64..1.0e6, h in 1.0e-3_f64..1.0e6) {
            let request = ShapeRequest::new(Shape::Triangle, &[measurement(b), measurement(h)]);
            prop_assert!((request.area() - 0.5 * b * h).abs() <= 0.5 * b * h * 1e-12);
        }

        #[test]
        fn rectangle_formula(b in 1.0e-3_f64..1.0e6, h in 1.0e-3_f64..1.0e6) {
            let request = ShapeRequest::new(Shape::Rectangle, &[measurement(b), measurement(h)]);
            prop_assert!((request.area() - b * h).abs() <= b * h * 1e-12);
        }

        #[test]
        fn square_formula(s in 1.0e-3_f64..1.0e6) {
            let request = ShapeRequest::new(Shape::Square, &[measurement(s)]);
            prop_assert!((request.area() - s * s).abs() <= s * s * 1e-12);
        }

        #[test]
        fn areas_are_positive(
            shape in prop::sample::select(&Shape::ALL[..]),
            a in 1.0e-3_f64..1.0e6,
            b in 1.0e-3_f64..1.0e6,
        ) {
            let measurements = [measurement(a), measurement(b)];
            let request = ShapeRequest::new(shape, &measurements[..shape.measurement_count()]);
            prop_assert!(request.area() > 0.0);
        }
    }
}
