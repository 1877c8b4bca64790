#[doc(hidden)]
pub mod lenient;
#[doc(hidden)]
pub mod payload;
#[doc(hidden)]
pub mod request;

#[doc(inline)]
pub use payload::{RawInstruction, RouteData, RouteSummary};
#[doc(inline)]
pub use request::{AddressRouteRequest, AvoidanceRouteRequest};
