//! Password strength tiers

use std::str::FromStr;

/// Password strength tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordStrength {
    /// 6+ characters minimum
    Basic,
    /// 8+ chars with uppercase, lowercase, and digit
    Medium,
    /// 8+ chars with uppercase, lowercase, digit, and special character
    Strong,
}

impl FromStr for PasswordStrength {
    type Err = anyhow::Error;

    fn from_str(tier: &str) -> Result<Self, Self::Err> {
        match tier {
            "basic" => Ok(PasswordStrength::Basic),
            "medium" => Ok(PasswordStrength::Medium),
            "strong" => Ok(PasswordStrength::Strong),
            other => anyhow::bail!("unknown password strength tier: {}", other),
        }
    }
}

impl PasswordStrength {
    /// Check `password`, returning the message of the first unmet requirement
    pub fn check(self, password: &str) -> Result<(), &'static str> {
        let (min, too_short) = match self {
            PasswordStrength::Basic => (6, "Password must be at least 6 characters"),
            PasswordStrength::Medium | PasswordStrength::Strong => {
                (8, "Password must be at least 8 characters")
            }
        };
        let mut checks = vec![(password.chars().count() >= min, too_short)];

        if self != PasswordStrength::Basic {
            checks.extend([
                (
                    password.chars().any(char::is_uppercase),
                    "Password must contain at least one uppercase letter",
                ),
                (
                    password.chars().any(char::is_lowercase),
                    "Password must contain at least one lowercase letter",
                ),
                (
                    password.chars().any(char::is_numeric),
                    "Password must contain at least one number",
                ),
            ]);
        }

        if self == PasswordStrength::Strong {
            checks.push((
                password.chars().any(|c| !c.is_alphanumeric()),
                "Password must contain at least one special character",
            ));
        }

        checks
            .into_iter()
            .find(|(ok, _)| !ok)
            .map_or(Ok(()), |(_, message)| Err(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tiers() {
        assert_eq!("basic".parse::<PasswordStrength>().unwrap(), PasswordStrength::Basic);
        assert_eq!("strong".parse::<PasswordStrength>().unwrap(), PasswordStrength::Strong);
        assert!("extreme".parse::<PasswordStrength>().is_err());
    }

    #[test]
    fn test_basic_password() {
        assert!(PasswordStrength::Basic.check("simple").is_ok());
        assert!(PasswordStrength::Basic.check("short").is_err());
    }

    #[test]
    fn test_medium_password() {
        assert!(PasswordStrength::Medium.check("Password123").is_ok());
        assert_eq!(
            PasswordStrength::Medium.check("lowercase1"),
            Err("Password must contain at least one uppercase letter")
        );
        assert!(PasswordStrength::Medium.check("Short1A").is_err());
    }

    #[test]
    fn test_strong_password() {
        assert!(PasswordStrength::Strong.check("Password123!").is_ok());
        assert_eq!(
            PasswordStrength::Strong.check("NoSpecial123"),
            Err("Password must contain at least one special character")
        );
    }
}
