/// Wizard form module
///
/// The GUI-free core of the "new multiplatform project" wizard step.
///
/// ## Architecture
///
/// ```text
/// MultiplatformWizardStep
///   ├── FormState  (names, toggles, SYNCED/DIVERGED sync machine)
///   ├── FormEvent  (host-forwarded user input, applied in order)
///   ├── validate   (fixed-order submission rules, first failure wins)
///   └── commit     (populates MultiplatformProjectBuilder)
/// ```
///
/// ## Usage
///
/// ```rust,ignore
/// use mpp_wizard::{FormEvent, MultiplatformProjectBuilder, MultiplatformWizardStep};
///
/// let mut step = MultiplatformWizardStep::for_project_dir(None, base_dir);
///
/// // Wire toolkit callbacks to events
/// step.handle(FormEvent::RootNameChanged("storefront".into()));
/// step.handle(FormEvent::JsToggled(false));
///
/// // On "Next"
/// let mut builder = MultiplatformProjectBuilder::default();
/// match step.commit(&mut builder) {
///     Ok(()) => { /* proceed with builder */ }
///     Err(err) => { /* show err.to_string() and stay on the step */ }
/// }
/// ```
pub mod events;
pub mod state;
pub mod step;
pub mod validation;

// Re-export commonly used types
pub use events::{DependentField, FormEvent};
pub use state::{FormState, HierarchyKind, SyncMode};
pub use step::MultiplatformWizardStep;
pub use validation::ValidationError;
