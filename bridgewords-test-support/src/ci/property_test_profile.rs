//! Property-test run profile shared by every proptest suite in the workspace.
//!
//! CI raises the case count through `PROGTEST_CASES` and can isolate cases in
//! forked processes through `BRIDGEWORDS_PBT_FORK`. Malformed overrides are
//! logged and ignored.

use std::env;

/// Environment variable controlling proptest case counts.
pub const PROGTEST_CASES_ENV_KEY: &str = "PROGTEST_CASES";
/// Environment variable controlling proptest process forking.
pub const BRIDGEWORDS_PBT_FORK_ENV_KEY: &str = "BRIDGEWORDS_PBT_FORK";

/// Case count and fork mode for one property suite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
}

impl ProptestRunProfile {
    /// Loads the profile from the environment, falling back to the defaults.
    ///
    /// # Examples
    /// ```
    /// use bridgewords_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(64, false);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool) -> Self {
        let cases = env::var(PROGTEST_CASES_ENV_KEY).ok();
        let fork = env::var(BRIDGEWORDS_PBT_FORK_ENV_KEY).ok();
        Self::from_overrides(default_cases, default_fork, cases.as_deref(), fork.as_deref())
    }

    /// Builds a profile from raw override values without touching the
    /// environment.
    ///
    /// # Examples
    /// ```
    /// use bridgewords_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::from_overrides(64, false, Some("512"), Some("yes"));
    /// assert_eq!(profile.cases(), 512);
    /// assert!(profile.fork());
    /// ```
    #[must_use]
    pub fn from_overrides(
        default_cases: u32,
        default_fork: bool,
        cases: Option<&str>,
        fork: Option<&str>,
    ) -> Self {
        Self {
            cases: resolve(PROGTEST_CASES_ENV_KEY, cases, default_cases, parse_cases),
            fork: resolve(BRIDGEWORDS_PBT_FORK_ENV_KEY, fork, default_fork, parse_bool),
        }
    }

    /// Number of cases to run per property.
    #[must_use]
    pub const fn cases(&self) -> u32 {
        self.cases
    }

    /// Whether each case runs in a forked subprocess.
    #[must_use]
    pub const fn fork(&self) -> bool {
        self.fork
    }
}

fn resolve<T: Copy>(
    key: &'static str,
    raw: Option<&str>,
    default: T,
    parser: fn(&str) -> Result<T, String>,
) -> T {
    let Some(raw) = raw else {
        return default;
    };
    parser(raw).unwrap_or_else(|reason| {
        ::tracing::warn!(
            env = key,
            raw = %raw,
            reason = %reason,
            "invalid property-test profile override; using default",
        );
        default
    })
}

fn parse_cases(raw: &str) -> Result<u32, String> {
    match raw.trim().parse::<u32>() {
        Ok(0) => Err("cases must be > 0".to_owned()),
        Ok(cases) => Ok(cases),
        Err(error) => Err(format!("parse error: {error}")),
    }
}

fn parse_bool(raw: &str) -> Result<bool, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err("expected one of: true/false/1/0/yes/no/on/off".to_owned()),
    }
}
