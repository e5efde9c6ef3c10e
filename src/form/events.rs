/// User-input events for the wizard form.
///
/// Events model things the user did to the widgets (text changed, checkbox
/// toggled, selector changed). The host wires its toolkit callbacks to these
/// and delivers them in order; the form applies them synchronously on the UI
/// thread.
use crate::builder::SdkRef;

use super::state::HierarchyKind;

/// A dependent (auto-filled) name field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DependentField {
    /// Shared-source module name field
    Common,

    /// JVM module name field
    Jvm,

    /// JS module name field
    Js,
}

impl DependentField {
    /// Field caption shown by hosts
    pub fn label(&self) -> &'static str {
        match self {
            DependentField::Common => "Common module name:",
            DependentField::Jvm => "JVM module name:",
            DependentField::Js => "JS module name:",
        }
    }
}

/// Form input events
#[derive(Debug, Clone)]
pub enum FormEvent {
    /// Root module name text changed
    RootNameChanged(String),

    /// One of the dependent name fields was edited directly by the user.
    /// System-originated auto-fill never produces this event.
    DependentNameEdited {
        field: DependentField,
        value: String,
    },

    /// Hierarchy kind selector changed
    HierarchyChanged(HierarchyKind),

    /// "Create JVM module" checkbox toggled
    JvmToggled(bool),

    /// "Create JS module" checkbox toggled
    JsToggled(bool),

    /// SDK selection changed (`None` when the host cleared it)
    SdkSelected(Option<SdkRef>),
}

impl FormEvent {
    /// Get a human-readable description of the event
    pub fn description(&self) -> String {
        match self {
            FormEvent::RootNameChanged(value) => {
                format!("Root name changed: {}", value)
            }
            FormEvent::DependentNameEdited { field, value } => {
                format!("{:?} module name edited: {}", field, value)
            }
            FormEvent::HierarchyChanged(kind) => {
                format!("Hierarchy changed: {}", kind.label())
            }
            FormEvent::JvmToggled(true) => "JVM module enabled".to_string(),
            FormEvent::JvmToggled(false) => "JVM module disabled".to_string(),
            FormEvent::JsToggled(true) => "JS module enabled".to_string(),
            FormEvent::JsToggled(false) => "JS module disabled".to_string(),
            FormEvent::SdkSelected(Some(sdk)) => {
                format!("SDK selected: {}", sdk.name())
            }
            FormEvent::SdkSelected(None) => "SDK selection cleared".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_description() {
        let event = FormEvent::RootNameChanged("shop".to_string());
        assert_eq!(event.description(), "Root name changed: shop");

        let event = FormEvent::JvmToggled(false);
        assert_eq!(event.description(), "JVM module disabled");

        let event = FormEvent::SdkSelected(Some(SdkRef::new("jdk-17")));
        assert_eq!(event.description(), "SDK selected: jdk-17");
    }

    #[test]
    fn test_dependent_field_labels() {
        assert_eq!(DependentField::Common.label(), "Common module name:");
        assert_eq!(DependentField::Jvm.label(), "JVM module name:");
        assert_eq!(DependentField::Js.label(), "JS module name:");
    }
}
