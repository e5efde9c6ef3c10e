use serde::{Deserialize, Serialize};

/// Generated identifier for the new project.
///
/// Seeded from the root module name; group and version are not decided at
/// the wizard stage and stay empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectId {
    pub group: String,
    pub name: String,
    pub version: String,
}

impl ProjectId {
    /// Identifier derived from a root module name.
    pub fn from_root_name(root: &str) -> Self {
        Self {
            group: String::new(),
            name: root.to_string(),
            version: String::new(),
        }
    }
}

/// Opaque reference to a host-enumerated SDK.
///
/// SDK discovery and selection belong to the host; only the selected value
/// crosses into this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SdkRef(String);

impl SdkRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Host-side identifier of the SDK (a name or home path).
    pub fn name(&self) -> &str {
        &self.0
    }
}

/// Builder object shared with the host's project generation.
///
/// The wizard step fills these fields on commit; writing build files and
/// creating the modules happens later and elsewhere. A disabled target
/// contributes an empty module name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiplatformProjectBuilder {
    /// Generated identifier; `None` until the step commits.
    pub project_id: Option<ProjectId>,

    /// Project name shown by the host; the root module name.
    pub project_name: Option<String>,

    /// Shared-source module name ("" when the root itself is the common module).
    pub common_module_name: String,

    /// JVM module name ("" when the JVM target is disabled).
    pub jvm_module_name: String,

    /// SDK for the JVM target; only set while the JVM target is enabled.
    pub jdk: Option<SdkRef>,

    /// JS module name ("" when the JS target is disabled).
    pub js_module_name: String,
}
