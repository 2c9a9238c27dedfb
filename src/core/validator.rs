use crate::domain::ports::ContentProvider;
use crate::utils::error::{PortfolioError, Result};
use crate::utils::validation::{
    all_non_empty, compile_pattern, contains_ignore_case, ends_with_handle, matches_url_pattern,
    validate_non_empty_string,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const LINKS_REQUIRED: &str = "links required";
pub const HANDLE_CONSISTENCY: &str = "secondary-handle consistency";
pub const REQUIRED_PROJECT: &str = "required project present";
pub const SKILLS_NON_EMPTY: &str = "skills non-empty";
pub const SOCIAL_URL_WELL_FORMED: &str = "social URL well-formed";
pub const PROJECTS_NON_EMPTY: &str = "projects non-empty";
pub const EXPERIENCE_BULLETS: &str = "experience bullets present";

pub const DEFAULT_REQUIRED_PROJECT: &str = "site auditor";
pub const DEFAULT_SOCIAL_URL_PATTERN: &str = r"^https://www\.instagram\.com/";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ValidationMode {
    /// Log failures and carry on.
    #[default]
    Permissive,
    /// Turn any failed check into an error.
    Strict,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationRules {
    #[serde(default = "default_required_project")]
    pub required_project: String,
    #[serde(default = "default_social_url_pattern")]
    pub social_url_pattern: String,
}

fn default_required_project() -> String {
    DEFAULT_REQUIRED_PROJECT.to_string()
}

fn default_social_url_pattern() -> String {
    DEFAULT_SOCIAL_URL_PATTERN.to_string()
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            required_project: default_required_project(),
            social_url_pattern: default_social_url_pattern(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    pub name: &'static str,
    pub passed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub checks: Vec<CheckResult>,
}

impl Report {
    pub fn passed(&self) -> bool {
        self.checks.iter().all(|c| c.passed)
    }

    pub fn failed(&self) -> Vec<&CheckResult> {
        self.checks.iter().filter(|c| !c.passed).collect()
    }

    pub fn failed_names(&self) -> Vec<&'static str> {
        self.failed().into_iter().map(|c| c.name).collect()
    }

    pub fn get(&self, name: &str) -> Option<bool> {
        self.checks.iter().find(|c| c.name == name).map(|c| c.passed)
    }

    /// One line on the log channel: info when clean, warn listing the failures otherwise.
    pub fn log(&self) {
        let failed = self.failed();
        if failed.is_empty() {
            tracing::info!(checks = self.checks.len(), "✅ Portfolio self-tests: all checks passed");
        } else {
            let detail = failed
                .iter()
                .map(|c| format!("{}={}", c.name, c.passed))
                .collect::<Vec<_>>()
                .join(", ");
            tracing::warn!(
                failed = failed.len(),
                checks = self.checks.len(),
                failed_checks = %detail,
                "⚠️ Portfolio self-tests: some checks failed: {}",
                detail
            );
        }
    }

    pub fn enforce(&self, mode: ValidationMode) -> Result<()> {
        match mode {
            ValidationMode::Permissive => Ok(()),
            ValidationMode::Strict if self.passed() => Ok(()),
            ValidationMode::Strict => Err(PortfolioError::ValidationFailure {
                failed: self.failed_names().into_iter().map(String::from).collect(),
            }),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Validator {
    required_project: String,
    social_url_pattern: Regex,
}

impl Validator {
    pub fn new(rules: &ValidationRules) -> Result<Self> {
        validate_non_empty_string("validation.required_project", &rules.required_project)?;
        Ok(Self {
            required_project: rules.required_project.clone(),
            social_url_pattern: compile_pattern(
                "validation.social_url_pattern",
                &rules.social_url_pattern,
            )?,
        })
    }

    /// Evaluate every check. Pure: no logging, no short-circuit.
    pub fn validate<C: ContentProvider + ?Sized>(&self, content: &C) -> Report {
        let links = content.links();
        let projects = content.projects();

        let checks = vec![
            CheckResult {
                name: LINKS_REQUIRED,
                passed: all_non_empty(&[
                    links.email.as_str(),
                    links.linkedin.as_str(),
                    links.youtube.as_str(),
                    links.resume.as_str(),
                ]),
            },
            CheckResult {
                name: HANDLE_CONSISTENCY,
                passed: ends_with_handle(&links.x_url, &links.x_handle),
            },
            CheckResult {
                name: REQUIRED_PROJECT,
                passed: projects
                    .iter()
                    .any(|p| contains_ignore_case(&p.title, &self.required_project)),
            },
            CheckResult {
                name: SKILLS_NON_EMPTY,
                passed: !content.skills().is_empty(),
            },
            CheckResult {
                name: SOCIAL_URL_WELL_FORMED,
                passed: matches_url_pattern(&links.instagram_url, &self.social_url_pattern),
            },
            CheckResult {
                name: PROJECTS_NON_EMPTY,
                passed: !projects.is_empty(),
            },
            CheckResult {
                name: EXPERIENCE_BULLETS,
                passed: content.experiences().iter().all(|e| !e.bullets.is_empty()),
            },
        ];

        Report { checks }
    }
}

/// Validate and log in one step.
pub fn run_validation<C: ContentProvider + ?Sized>(
    content: &C,
    rules: &ValidationRules,
) -> Result<Report> {
    let report = Validator::new(rules)?.validate(content);
    report.log();
    Ok(report)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    NotRun,
    Ran,
}

/// Runs the checks at most once for the lifetime of the value.
pub struct SelfTest<'a, C: ContentProvider + ?Sized> {
    content: &'a C,
    validator: Validator,
    report: OnceLock<Report>,
}

impl<'a, C: ContentProvider + ?Sized> SelfTest<'a, C> {
    pub fn new(content: &'a C, rules: &ValidationRules) -> Result<Self> {
        Ok(Self {
            content,
            validator: Validator::new(rules)?,
            report: OnceLock::new(),
        })
    }

    pub fn state(&self) -> RunState {
        if self.report.get().is_some() {
            RunState::Ran
        } else {
            RunState::NotRun
        }
    }

    pub fn run(&self) -> &Report {
        self.report.get_or_init(|| {
            let report = self.validator.validate(self.content);
            report.log();
            report
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::content::builtin;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_builtin_content_passes() {
        let store = builtin("/");
        let report = Validator::new(&ValidationRules::default())
            .unwrap()
            .validate(&store);
        assert!(report.passed(), "failed: {:?}", report.failed_names());
        assert_eq!(report.checks.len(), 7);
    }

    #[test]
    fn test_handle_consistency_is_suffix_test() {
        let validator = Validator::new(&ValidationRules::default()).unwrap();
        let mut store = builtin("/");
        store.links.x_handle = "abc".to_string();

        store.links.x_url = "https://twitter.com/abc".to_string();
        assert_eq!(validator.validate(&store).get(HANDLE_CONSISTENCY), Some(true));

        store.links.x_url = "https://twitter.com/abcd".to_string();
        assert_eq!(validator.validate(&store).get(HANDLE_CONSISTENCY), Some(false));
    }

    #[test]
    fn test_enforce_modes() {
        let mut store = builtin("/");
        store.skills.clear();
        let report = Validator::new(&ValidationRules::default())
            .unwrap()
            .validate(&store);

        assert!(report.enforce(ValidationMode::Permissive).is_ok());
        match report.enforce(ValidationMode::Strict) {
            Err(PortfolioError::ValidationFailure { failed }) => {
                assert_eq!(failed, vec![SKILLS_NON_EMPTY.to_string()]);
            }
            other => panic!("expected validation failure, got {:?}", other),
        }
    }

    #[test]
    fn test_self_test_runs_once() {
        let store = builtin("/");
        let self_test = SelfTest::new(&store, &ValidationRules::default()).unwrap();
        assert_eq!(self_test.state(), RunState::NotRun);

        let first = self_test.run() as *const Report;
        assert_eq!(self_test.state(), RunState::Ran);
        let second = self_test.run() as *const Report;
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_required_project_rejected() {
        let rules = ValidationRules {
            required_project: String::new(),
            ..ValidationRules::default()
        };
        assert!(matches!(
            Validator::new(&rules),
            Err(PortfolioError::InvalidConfigValueError { .. })
        ));
    }

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn captured_lines<F: FnOnce()>(f: F) -> Vec<String> {
        let buf = Captured::default();
        let writer = buf.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, f);

        let bytes = buf.0.lock().unwrap().clone();
        String::from_utf8(bytes)
            .unwrap()
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_log_warns_once_with_failed_checks() {
        let mut store = builtin("/");
        store.projects.clear();
        let report = Validator::new(&ValidationRules::default())
            .unwrap()
            .validate(&store);

        let lines = captured_lines(|| report.log());

        assert_eq!(lines.len(), 1, "{:?}", lines);
        assert!(lines[0].contains("WARN"));
        assert!(lines[0].contains("required project present=false, projects non-empty=false"));
        assert!(lines[0].contains("failed_checks="));
    }

    #[test]
    fn test_log_info_once_when_clean() {
        let store = builtin("/");
        let report = Validator::new(&ValidationRules::default())
            .unwrap()
            .validate(&store);

        let lines = captured_lines(|| report.log());

        assert_eq!(lines.len(), 1, "{:?}", lines);
        assert!(lines[0].contains("INFO"));
        assert!(lines[0].contains("all checks passed"));
    }

    #[test]
    fn test_self_test_logs_only_first_run() {
        let store = builtin("/");
        let self_test = SelfTest::new(&store, &ValidationRules::default()).unwrap();

        let lines = captured_lines(|| {
            self_test.run();
            self_test.run();
        });

        assert_eq!(lines.len(), 1, "{:?}", lines);
    }

    #[test]
    fn test_invalid_pattern_rejected() {
        let rules = ValidationRules {
            social_url_pattern: "(".to_string(),
            ..ValidationRules::default()
        };
        assert!(Validator::new(&rules).is_err());
    }
}
