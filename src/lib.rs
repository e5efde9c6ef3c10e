//! GUI-free core of an IDE "new multiplatform project" wizard step.
//!
//! The host owns the widgets, layout, SDK enumeration and wizard lifecycle;
//! this crate owns the form: a root module name, optional JVM/JS target
//! modules whose names follow the root until the user edits one by hand,
//! fixed-order submission validation, and the builder hand-off to project
//! generation.

pub mod builder;
pub mod form;
pub mod names;

pub use builder::{MultiplatformProjectBuilder, ProjectId, SdkRef};
pub use form::{
    DependentField, FormEvent, FormState, HierarchyKind, MultiplatformWizardStep, SyncMode,
    ValidationError,
};
pub use names::{default_root_name, derive_names, find_nonconflicting_name, DerivedNames};
