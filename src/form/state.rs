/// Form state for the wizard step.
///
/// Holds every value the step's widgets edit, plus the sync machine that
/// keeps dependent module names following the root name until the user
/// edits one of them by hand.
use crate::builder::SdkRef;
use crate::names::derive_names;

use super::events::{DependentField, FormEvent};

/// Caption for the root module name field
pub const ROOT_NAME_LABEL: &str = "Root module name:";

/// Caption for the hierarchy kind selector
pub const HIERARCHY_LABEL: &str = "Hierarchy kind";

/// Caption for the JVM target checkbox
pub const CREATE_JVM_LABEL: &str = "Create JVM module";

/// Caption for the JS target checkbox
pub const CREATE_JS_LABEL: &str = "Create JS module";

/// Whether dependent name fields still follow the root name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncMode {
    /// Dependent names are recomputed on every root name change
    Synced,

    /// The user edited a dependent name; auto-fill stays off for the session
    Diverged,
}

impl SyncMode {
    /// Check if dependent names still follow the root name
    pub fn is_synced(&self) -> bool {
        matches!(self, SyncMode::Synced)
    }

    /// Get a human-readable description of the mode
    pub fn description(&self) -> &'static str {
        match self {
            SyncMode::Synced => "following root name",
            SyncMode::Diverged => "edited by hand",
        }
    }
}

impl Default for SyncMode {
    fn default() -> Self {
        SyncMode::Synced
    }
}

/// How the root module relates to the common module
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HierarchyKind {
    /// Root is an empty container; common and platform modules are children
    RootEmpty,

    /// Root itself is the common module; platform modules are its children
    RootCommon,
}

impl HierarchyKind {
    /// Selector caption shown by hosts
    pub fn label(&self) -> &'static str {
        match self {
            HierarchyKind::RootEmpty => {
                "Root empty module with common and platform modules as children"
            }
            HierarchyKind::RootCommon => "Root common module with children platform modules",
        }
    }

    /// True when the root module itself acts as the common module
    pub fn common_is_root(&self) -> bool {
        matches!(self, HierarchyKind::RootCommon)
    }

    /// Get all selector choices in display order
    pub fn all() -> Vec<HierarchyKind> {
        vec![HierarchyKind::RootEmpty, HierarchyKind::RootCommon]
    }
}

impl Default for HierarchyKind {
    fn default() -> Self {
        HierarchyKind::RootEmpty
    }
}

/// All values the wizard step edits, exclusively owned by the step controller.
///
/// Raw field text survives disabling: unchecking a target or switching the
/// hierarchy keeps whatever the user typed, it only empties the *effective*
/// name that validation and submission read.
#[derive(Debug, Clone)]
pub struct FormState {
    /// Root module name
    root_name: String,

    /// Root/common hierarchy choice
    hierarchy: HierarchyKind,

    /// Raw common module name text
    common_name: String,

    /// Whether a JVM module is created
    jvm_enabled: bool,

    /// Raw JVM module name text
    jvm_name: String,

    /// Whether a JS module is created
    js_enabled: bool,

    /// Raw JS module name text
    js_name: String,

    /// Selected SDK for the JVM target, if the host reported one
    sdk: Option<SdkRef>,

    /// Sync machine state
    sync: SyncMode,
}

impl FormState {
    /// Create a form with an initial root name and derived dependent names.
    ///
    /// Both targets start enabled and the form starts synced, so the three
    /// dependent fields hold `<root>-common`, `<root>-jvm` and `<root>-js`.
    pub fn new(initial_root: impl Into<String>) -> Self {
        let root_name = initial_root.into();
        let derived = derive_names(&root_name);

        Self {
            root_name,
            hierarchy: HierarchyKind::default(),
            common_name: derived.common,
            jvm_enabled: true,
            jvm_name: derived.jvm,
            js_enabled: true,
            js_name: derived.js,
            sdk: None,
            sync: SyncMode::Synced,
        }
    }

    /// Get the root module name
    pub fn root_name(&self) -> &str {
        &self.root_name
    }

    /// Get the hierarchy choice
    pub fn hierarchy(&self) -> HierarchyKind {
        self.hierarchy
    }

    /// Get the sync machine state
    pub fn sync_mode(&self) -> SyncMode {
        self.sync
    }

    /// Check if the common module name field is editable.
    ///
    /// False while the root module itself acts as the common module.
    pub fn common_enabled(&self) -> bool {
        !self.hierarchy.common_is_root()
    }

    /// Check if the JVM target is enabled
    pub fn jvm_enabled(&self) -> bool {
        self.jvm_enabled
    }

    /// Check if the JS target is enabled
    pub fn js_enabled(&self) -> bool {
        self.js_enabled
    }

    /// Get the raw common module name text (shown even while disabled)
    pub fn common_name(&self) -> &str {
        &self.common_name
    }

    /// Get the raw JVM module name text
    pub fn jvm_name(&self) -> &str {
        &self.jvm_name
    }

    /// Get the raw JS module name text
    pub fn js_name(&self) -> &str {
        &self.js_name
    }

    /// Get the selected SDK as reported by the host
    pub fn sdk(&self) -> Option<&SdkRef> {
        self.sdk.as_ref()
    }

    /// Effective common module name: "" while the root acts as the common module
    pub fn common_module_name(&self) -> &str {
        if self.hierarchy.common_is_root() {
            ""
        } else {
            &self.common_name
        }
    }

    /// Effective JVM module name: "" while the JVM target is disabled
    pub fn jvm_module_name(&self) -> &str {
        if self.jvm_enabled {
            &self.jvm_name
        } else {
            ""
        }
    }

    /// Effective JS module name: "" while the JS target is disabled
    pub fn js_module_name(&self) -> &str {
        if self.js_enabled {
            &self.js_name
        } else {
            ""
        }
    }

    /// SDK handed to the builder; `None` while the JVM target is disabled
    pub fn jdk(&self) -> Option<&SdkRef> {
        if self.jvm_enabled {
            self.sdk.as_ref()
        } else {
            None
        }
    }

    /// Root name edit.
    ///
    /// While synced the three dependent names are recomputed to follow the
    /// new root. The recomputation is not a dependent-field edit, so it never
    /// diverges the form. Once diverged only the root name changes.
    pub fn on_root_name_changed(&mut self, value: impl Into<String>) {
        self.root_name = value.into();

        if self.sync.is_synced() {
            let derived = derive_names(&self.root_name);
            self.common_name = derived.common;
            self.jvm_name = derived.jvm;
            self.js_name = derived.js;
        }
    }

    /// Direct user edit of one dependent name field.
    ///
    /// Stores the text and turns auto-fill off for the rest of the session.
    /// One-way: nothing re-enables sync, not even typing the derived value
    /// back in.
    pub fn on_dependent_name_edited(&mut self, field: DependentField, value: impl Into<String>) {
        let value = value.into();
        match field {
            DependentField::Common => self.common_name = value,
            DependentField::Jvm => self.jvm_name = value,
            DependentField::Js => self.js_name = value,
        }

        self.sync = SyncMode::Diverged;
    }

    /// Hierarchy selector change. Does not touch the sync machine.
    pub fn on_hierarchy_changed(&mut self, kind: HierarchyKind) {
        self.hierarchy = kind;
    }

    /// JVM target checkbox toggle. Keeps the raw name text.
    pub fn on_jvm_toggled(&mut self, enabled: bool) {
        self.jvm_enabled = enabled;
    }

    /// JS target checkbox toggle. Keeps the raw name text.
    pub fn on_js_toggled(&mut self, enabled: bool) {
        self.js_enabled = enabled;
    }

    /// SDK selection change from the host's SDK widget.
    pub fn on_sdk_selected(&mut self, sdk: Option<SdkRef>) {
        self.sdk = sdk;
    }

    /// Apply one user-input event.
    ///
    /// Events are processed strictly in the order delivered; no two edits
    /// are ever concurrent.
    pub fn apply(&mut self, event: FormEvent) {
        match event {
            FormEvent::RootNameChanged(value) => self.on_root_name_changed(value),
            FormEvent::DependentNameEdited { field, value } => {
                self.on_dependent_name_edited(field, value)
            }
            FormEvent::HierarchyChanged(kind) => self.on_hierarchy_changed(kind),
            FormEvent::JvmToggled(enabled) => self.on_jvm_toggled(enabled),
            FormEvent::JsToggled(enabled) => self.on_js_toggled(enabled),
            FormEvent::SdkSelected(sdk) => self.on_sdk_selected(sdk),
        }
    }
}
