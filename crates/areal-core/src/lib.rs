//! Geometry domain for the Areal application.
//!
//! This crate contains the pure, GUI-independent half of the application:
//! validated [`Measurement`] values, the four supported [`Shape`]s, and
//! area computation and formatting via [`ShapeRequest`] and [`AreaResult`].
//!
//! # Examples
//!
//! ```
//! use areal_core::{AreaResult, Measurement, Shape, ShapeRequest};
//!
//! let radius: Measurement = "2".parse()?;
//! let request = ShapeRequest::new(Shape::Circle, &[radius]);
//! let result = AreaResult::new(&request);
//! assert_eq!(result.to_string(), "The area of the circle is: 12.57");
//! # Ok::<(), areal_core::MeasurementError>(())
//! ```

pub use self::{measurement::*, shape::*};

mod measurement;
mod shape;
