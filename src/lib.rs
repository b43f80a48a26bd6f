#![cfg_attr(
    debug_assertions,
    allow(dead_code, unused_imports, unused_macros, unused_mut, unused_variables)
)]

pub mod email;
pub mod error;
pub mod language;
pub mod names;
pub mod parameter;
pub mod render;
pub mod values;

pub use error::{ParamError, ParamResult};
pub use parameter::*;
pub use render::{NamedValue, join_parameters};
pub use values::CalAddress;
