/// Submission validation for the wizard form.
///
/// Rules run in a fixed order and the first failure wins, so the user sees
/// one actionable message at a time. All checks read *effective* module
/// names: a disabled target contributes "" and is exempt from the emptiness
/// rules, and the distinctness rules only ever compare a non-empty name, so
/// two disabled targets never collide with each other.
use thiserror::Error;

use super::state::FormState;

/// Why the form cannot be submitted yet.
///
/// The Display text is the user-facing message; the host shows it verbatim
/// next to the form.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("root module name required")]
    RootNameRequired,

    #[error("common module name required")]
    CommonNameRequired,

    #[error("JVM module name required")]
    JvmNameRequired,

    #[error("JS module name required")]
    JsNameRequired,

    #[error("common module name must be distinct")]
    CommonNameNotDistinct,

    #[error("JVM module name must be distinct")]
    JvmNameNotDistinct,

    #[error("JS module name must be distinct")]
    JsNameNotDistinct,
}

impl FormState {
    /// Check the form for submission.
    ///
    /// Ordered checks, first failure wins:
    /// 1. root name present
    /// 2. common module name present (when the common module is a separate child)
    /// 3. JVM module name present (when the JVM target is enabled)
    /// 4. JS module name present (when the JS target is enabled)
    /// 5. common module name distinct from root, JVM and JS names
    /// 6. JVM module name distinct from root and JS names
    /// 7. JS module name distinct from root
    pub fn validate(&self) -> Result<(), ValidationError> {
        let root = self.root_name();
        let common = self.common_module_name();
        let jvm = self.jvm_module_name();
        let js = self.js_module_name();

        if root.is_empty() {
            return Err(ValidationError::RootNameRequired);
        }
        if self.common_enabled() && common.is_empty() {
            return Err(ValidationError::CommonNameRequired);
        }
        if self.jvm_enabled() && jvm.is_empty() {
            return Err(ValidationError::JvmNameRequired);
        }
        if self.js_enabled() && js.is_empty() {
            return Err(ValidationError::JsNameRequired);
        }
        if !common.is_empty() && (common == root || common == jvm || common == js) {
            return Err(ValidationError::CommonNameNotDistinct);
        }
        if !jvm.is_empty() && (jvm == root || jvm == js) {
            return Err(ValidationError::JvmNameNotDistinct);
        }
        if !js.is_empty() && js == root {
            return Err(ValidationError::JsNameNotDistinct);
        }

        Ok(())
    }
}
