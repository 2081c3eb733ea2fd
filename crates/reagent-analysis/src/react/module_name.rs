//! Classifier for module specifiers that count as "the React library".

/// Module specifiers recognized as React, lowercase.
const REACT_MODULES: &[&str] = &[
    "react",
    "react/addons",
    "react-native",
    "proptypes",
    "prop-types",
];

/// Returns true if the module specifier names the React library (or one of
/// its companion packages), case-insensitively.
pub fn is_react_module_name(module_name: &str) -> bool {
    let normalized = module_name.to_lowercase();
    REACT_MODULES.iter().any(|m| *m == normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_known_react_modules() {
        for name in ["react", "react/addons", "react-native", "prop-types", "proptypes"] {
            assert!(is_react_module_name(name), "{name} should be accepted");
        }
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert!(is_react_module_name("React"));
        assert!(is_react_module_name("REACT-NATIVE"));
    }

    #[test]
    fn rejects_other_modules() {
        for name in ["preact", "vue", "some-other-lib", "reactish", "./react", ""] {
            assert!(!is_react_module_name(name), "{name} should be rejected");
        }
    }
}
