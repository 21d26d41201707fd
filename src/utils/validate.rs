//! 输入校验
//!
//! 注册与用户管理共用的字段校验，规则保持宽松：
//! 只拦明显不合法的输入，不做复杂的密码策略。

use once_cell::sync::Lazy;
use regex::Regex;

static USERNAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_\-]{3,32}$").expect("username regex"));

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex"));

/// 用户名：3-32 位字母、数字、下划线或连字符
pub fn validate_username(username: &str) -> Result<(), String> {
    if USERNAME_RE.is_match(username) {
        Ok(())
    } else {
        Err("用户名必须为 3-32 位字母、数字、下划线或连字符".to_string())
    }
}

/// 邮箱格式
pub fn validate_email(email: &str) -> Result<(), String> {
    if EMAIL_RE.is_match(email) {
        Ok(())
    } else {
        Err(format!("邮箱格式不正确: {email}"))
    }
}

/// 密码：至少 8 位
pub fn validate_password(password: &str) -> Result<(), String> {
    if password.len() >= 8 {
        Ok(())
    } else {
        Err("密码长度至少 8 位".to_string())
    }
}

/// 成绩：0-100
pub fn validate_score(score: i32) -> Result<(), String> {
    if (0..=100).contains(&score) {
        Ok(())
    } else {
        Err(format!("成绩必须在 0-100 之间: {score}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_username() {
        assert!(validate_username("alice").is_ok());
        assert!(validate_username("bob_2024").is_ok());
        assert!(validate_username("ab").is_err());
        assert!(validate_username("空格 不行").is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("a@b.com").is_ok());
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("a@b").is_err());
    }

    #[test]
    fn test_validate_password() {
        assert!(validate_password("12345678").is_ok());
        assert!(validate_password("1234567").is_err());
    }

    #[test]
    fn test_validate_score_bounds() {
        assert!(validate_score(0).is_ok());
        assert!(validate_score(100).is_ok());
        assert!(validate_score(-1).is_err());
        assert!(validate_score(101).is_err());
    }
}
