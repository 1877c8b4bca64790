//! Geographic primitives for walking guidance.
//!
//! Points are [`geo::Point`]s in the GeoRust convention, `x` holding the
//! longitude and `y` the latitude. Backend payloads are `[lat, lng]` ordered,
//! so construct points through [`coord::lat_lng`] rather than `point!` to
//! avoid swapping the axes.

/// Earth radius used by the guidance distance checks, in meters.
pub const EARTH_RADIUS: f64 = 6_371_000.0;

pub mod bounds;
pub mod coord;
pub mod distance;
#[doc(hidden)]
pub mod error;

#[cfg(test)]
mod test;

#[doc(inline)]
pub use bounds::BoundingBox;
#[doc(inline)]
pub use coord::{LatLng, lat_lng};
#[doc(inline)]
pub use distance::{distance_meters, haversine};
#[doc(inline)]
pub use error::GeoError;
