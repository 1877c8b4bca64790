pub mod builder;
#[doc(hidden)]
pub mod locale;
#[doc(hidden)]
pub mod step;
#[doc(hidden)]
pub mod summary;
#[doc(hidden)]
pub mod turn;

#[cfg(test)]
mod test;

#[doc(inline)]
pub use builder::build_guidance_steps;
#[doc(inline)]
pub use locale::Locale;
#[doc(inline)]
pub use step::{GuidanceStep, StepId};
#[doc(inline)]
pub use summary::build_summary_text;
#[doc(inline)]
pub use turn::Turn;
