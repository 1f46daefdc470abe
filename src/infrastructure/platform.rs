use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    static ref MOBILE_AGENT: Option<Regex> =
        Regex::new(r"(?i)Android|webOS|iPhone|iPad|iPod|BlackBerry|IEMobile|Opera Mini").ok();
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Platform {
    #[default]
    Desktop,
    Mobile,
}

impl Platform {
    pub fn is_mobile(&self) -> bool {
        matches!(self, Platform::Mobile)
    }

    /// Classifies a browser-style user agent string
    pub fn from_user_agent(user_agent: &str) -> Self {
        match MOBILE_AGENT.as_ref() {
            Some(re) if re.is_match(user_agent) => Platform::Mobile,
            _ => Platform::Desktop,
        }
    }

    /// A configured user agent wins; otherwise a Termux session counts as mobile.
    /// `force_mobile` comes from the command line.
    pub fn detect(user_agent: Option<&str>, force_mobile: bool) -> Self {
        if force_mobile {
            return Platform::Mobile;
        }
        match user_agent {
            Some(agent) => Self::from_user_agent(agent),
            None if std::env::var_os("TERMUX_VERSION").is_some() => Platform::Mobile,
            None => Platform::Desktop,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("Mozilla/5.0 (Linux; Android 11; M2007J20CG)", Platform::Mobile)]
    #[case("Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X)", Platform::Mobile)]
    #[case("Mozilla/5.0 (iPad; CPU OS 16_0 like Mac OS X)", Platform::Mobile)]
    #[case("Opera/9.80 (J2ME/MIDP; Opera Mini/9.80)", Platform::Mobile)]
    #[case("mozilla/5.0 (linux; android 13)", Platform::Mobile)]
    #[case("Mozilla/5.0 (X11; Linux x86_64) Firefox/128.0", Platform::Desktop)]
    #[case("Mozilla/5.0 (Windows NT 10.0; Win64; x64)", Platform::Desktop)]
    #[case("", Platform::Desktop)]
    fn test_from_user_agent(#[case] agent: &str, #[case] expected: Platform) {
        assert_eq!(Platform::from_user_agent(agent), expected);
    }

    #[test]
    fn test_force_mobile_wins() {
        assert_eq!(
            Platform::detect(Some("Mozilla/5.0 (X11; Linux x86_64)"), true),
            Platform::Mobile
        );
    }

    #[test]
    fn test_configured_agent_wins_over_environment() {
        assert_eq!(
            Platform::detect(Some("Mozilla/5.0 (X11; Linux x86_64)"), false),
            Platform::Desktop
        );
        assert!(Platform::detect(Some("BlackBerry9700"), false).is_mobile());
    }
}
