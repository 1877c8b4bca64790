#[doc(hidden)]
pub mod err;
pub mod trace;
