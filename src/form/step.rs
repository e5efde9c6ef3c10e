/// Wizard step controller.
///
/// Owns the single `FormState` for the session, applies host-forwarded
/// events, and populates the project builder when the user submits.
use std::path::Path;

use tracing::{debug, info, warn};

use crate::builder::{MultiplatformProjectBuilder, ProjectId};
use crate::names::default_root_name;

use super::events::FormEvent;
use super::state::FormState;
use super::validation::ValidationError;

/// "New multiplatform project" wizard step.
///
/// The host renders the widgets and forwards their input events through
/// [`handle`](Self::handle); on submission it calls
/// [`commit`](Self::commit) with the shared builder.
pub struct MultiplatformWizardStep {
    form: FormState,
}

impl MultiplatformWizardStep {
    /// Create a step with an explicit initial root name.
    pub fn new(initial_root: impl Into<String>) -> Self {
        Self {
            form: FormState::new(initial_root),
        }
    }

    /// Create a step for a project created under `base_dir`.
    ///
    /// Uses `project_name` when the host already knows it, otherwise picks a
    /// non-conflicting default ("untitled", "untitled1", …).
    pub fn for_project_dir(project_name: Option<&str>, base_dir: &Path) -> Self {
        let initial = match project_name {
            Some(name) => name.to_string(),
            None => default_root_name(base_dir),
        };

        Self::new(initial)
    }

    /// Create a step from existing form state.
    pub fn from_state(form: FormState) -> Self {
        Self { form }
    }

    /// Get the current form state
    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// Apply one user-input event to the form.
    pub fn handle(&mut self, event: FormEvent) {
        debug!("form event: {}", event.description());
        self.form.apply(event);
    }

    /// Check the form without submitting.
    ///
    /// Cheap and pure; hosts may call it on every keystroke or only when the
    /// user hits Next.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.form.validate()
    }

    /// Validate and, on success, write the choices into `builder`.
    ///
    /// On failure the builder is left untouched, submission is blocked, and
    /// the returned error's Display text is the message to show the user.
    pub fn commit(
        &self,
        builder: &mut MultiplatformProjectBuilder,
    ) -> Result<(), ValidationError> {
        if let Err(err) = self.form.validate() {
            warn!("submission blocked: {}", err);
            return Err(err);
        }

        let root = self.form.root_name();
        builder.project_id = Some(ProjectId::from_root_name(root));
        builder.project_name = Some(root.to_string());
        builder.common_module_name = self.form.common_module_name().to_string();
        builder.jvm_module_name = self.form.jvm_module_name().to_string();
        builder.jdk = self.form.jdk().cloned();
        builder.js_module_name = self.form.js_module_name().to_string();

        info!("committed wizard step for root module {:?}", root);
        Ok(())
    }
}
