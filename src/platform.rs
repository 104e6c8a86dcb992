//! Hosting platform bootstrap.
//!
//! Reads the identity the managed platform exposes through environment
//! variables (service, revision, entry point, project) exactly once per
//! process. Nothing here is consulted per request.

use std::sync::OnceLock;

/// Service name, set by the platform on every instance
pub const SERVICE_ENV_VAR: &str = "K_SERVICE";
/// Deployed revision of the service
pub const REVISION_ENV_VAR: &str = "K_REVISION";
/// Name of the function entry point
pub const FUNCTION_TARGET_ENV_VAR: &str = "FUNCTION_TARGET";
/// Project identifiers, in order of preference
pub const PROJECT_ENV_VARS: [&str; 2] = ["GOOGLE_CLOUD_PROJECT", "GCLOUD_PROJECT"];

static PLATFORM: OnceLock<PlatformContext> = OnceLock::new();

/// Identity of the environment this process is running in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlatformContext {
    pub service: Option<String>,
    pub revision: Option<String>,
    pub function_target: Option<String>,
    pub project: Option<String>,
}

impl PlatformContext {
    /// Build the context from an environment lookup. Empty values count as unset.
    pub fn detect<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

        Self {
            service: get(SERVICE_ENV_VAR),
            revision: get(REVISION_ENV_VAR),
            function_target: get(FUNCTION_TARGET_ENV_VAR),
            project: PROJECT_ENV_VARS.iter().find_map(|key| get(*key)),
        }
    }

    /// True when running under the managed platform rather than locally.
    pub fn is_managed(&self) -> bool {
        self.service.is_some()
    }
}

/// Detect the platform context once and return it.
///
/// Repeated calls return the instance created by the first one.
pub fn initialize() -> &'static PlatformContext {
    PLATFORM.get_or_init(|| {
        let context = PlatformContext::detect(|key| std::env::var(key).ok());

        if context.is_managed() {
            tracing::info!(
                service = context.service.as_deref().unwrap_or_default(),
                revision = context.revision.as_deref().unwrap_or_default(),
                function_target = context.function_target.as_deref().unwrap_or_default(),
                project = context.project.as_deref().unwrap_or_default(),
                "Running on managed platform"
            );
        } else {
            tracing::info!("No platform environment detected, running locally");
        }

        context
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_managed() {
        let context = PlatformContext::detect(|key| match key {
            "K_SERVICE" => Some("hello-world".to_string()),
            "K_REVISION" => Some("hello-world-00002-abc".to_string()),
            "FUNCTION_TARGET" => Some("hello_world".to_string()),
            "GCLOUD_PROJECT" => Some("demo-project".to_string()),
            _ => None,
        });

        assert!(context.is_managed());
        assert_eq!(context.service.as_deref(), Some("hello-world"));
        assert_eq!(context.revision.as_deref(), Some("hello-world-00002-abc"));
        assert_eq!(context.function_target.as_deref(), Some("hello_world"));
        assert_eq!(context.project.as_deref(), Some("demo-project"));
    }

    #[test]
    fn test_detect_prefers_google_cloud_project() {
        let context = PlatformContext::detect(|key| match key {
            "GOOGLE_CLOUD_PROJECT" => Some("primary".to_string()),
            "GCLOUD_PROJECT" => Some("legacy".to_string()),
            _ => None,
        });
        assert_eq!(context.project.as_deref(), Some("primary"));
        assert!(!context.is_managed());
    }

    #[test]
    fn test_detect_empty_values_are_unset() {
        let context = PlatformContext::detect(|_| Some(String::new()));
        assert_eq!(context, PlatformContext::default());
    }

    #[test]
    fn test_initialize_once() {
        let first = initialize();
        let second = initialize();
        assert!(std::ptr::eq(first, second));
    }
}
