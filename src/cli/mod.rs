//! Command-line front end: the publish form and its non-interactive variant.

pub mod orchestration;

pub use orchestration::{run_form, run_unattended, FormArgs, FormResult, FormState};
