#[doc(hidden)]
pub mod machine;
#[doc(hidden)]
pub mod proximity;

#[doc(inline)]
pub use machine::{NavigationState, Navigator, NavigatorConfig, DEFAULT_ANNOUNCE_DELAY};
#[doc(inline)]
pub use proximity::{Guided, Proximity, ProximityTrigger};
