use std::path::Path;

/// Preferred root name when the host has no project name yet
const DEFAULT_PROJECT_NAME: &str = "untitled";

/// Module names derived from a root module name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedNames {
    pub common: String,
    pub jvm: String,
    pub js: String,
}

/// Compute the dependent module names for a root module name
/// - Common module: `<root>-common`
/// - JVM module: `<root>-jvm`
/// - JS module: `<root>-js`
///
/// Pure function: no side effects, no error cases. The root is taken
/// verbatim; any sanitizing is the host's concern.
pub fn derive_names(root: &str) -> DerivedNames {
    DerivedNames {
        common: format!("{}-common", root),
        jvm: format!("{}-jvm", root),
        js: format!("{}-js", root),
    }
}

/// Find a name with no existing entry under `base_dir`.
///
/// Probes `preferred`, then `preferred1`, `preferred2`, … and returns the
/// first candidate without a filesystem entry of that name. An unreadable
/// directory counts as free, so name generation never fails.
pub fn find_nonconflicting_name(base_dir: &Path, preferred: &str) -> String {
    let mut index: usize = 0;
    loop {
        let candidate = if index == 0 {
            preferred.to_string()
        } else {
            format!("{}{}", preferred, index)
        };

        if !base_dir.join(&candidate).exists() {
            return candidate;
        }

        index += 1;
    }
}

/// Default root module name for a project created under `base_dir`.
pub fn default_root_name(base_dir: &Path) -> String {
    find_nonconflicting_name(base_dir, DEFAULT_PROJECT_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    /// Fresh scratch directory per test, under the system temp dir
    fn scratch_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("mpp-wizard-{}-{}", tag, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_derive_names() {
        let names = derive_names("app");
        assert_eq!(names.common, "app-common");
        assert_eq!(names.jvm, "app-jvm");
        assert_eq!(names.js, "app-js");
    }

    #[test]
    fn test_derive_names_takes_root_verbatim() {
        let names = derive_names("My Shop");
        assert_eq!(names.common, "My Shop-common");
        assert_eq!(names.jvm, "My Shop-jvm");
        assert_eq!(names.js, "My Shop-js");
    }

    #[test]
    fn test_derive_names_empty_root() {
        let names = derive_names("");
        assert_eq!(names.common, "-common");
        assert_eq!(names.jvm, "-jvm");
        assert_eq!(names.js, "-js");
    }

    #[test]
    fn test_nonconflicting_name_in_empty_dir() {
        let dir = scratch_dir("free");
        assert_eq!(find_nonconflicting_name(&dir, "untitled"), "untitled");
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_nonconflicting_name_skips_existing_entries() {
        let dir = scratch_dir("taken");
        fs::create_dir_all(dir.join("untitled")).unwrap();
        fs::write(dir.join("untitled1"), b"").unwrap();

        assert_eq!(find_nonconflicting_name(&dir, "untitled"), "untitled2");
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_default_root_name_uses_untitled() {
        let dir = scratch_dir("default");
        assert_eq!(default_root_name(&dir), "untitled");
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_nonconflicting_name_in_missing_dir() {
        // A directory that does not exist has no entries to collide with
        let dir = std::env::temp_dir().join("mpp-wizard-does-not-exist");
        assert_eq!(find_nonconflicting_name(&dir, "untitled"), "untitled");
    }
}
