use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}$").expect("Invalid email regex")
});

/// 成绩分数的上限（0-20 分制）
pub const GRADE_MAX: f64 = 20.0;

pub fn validate_name(name: &str) -> Result<(), &'static str> {
    // 名称长度校验：非空且不超过 120 字符
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err("Name must not be empty");
    }
    if trimmed.len() > 120 {
        return Err("Name must not exceed 120 characters");
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    // 邮箱格式校验：必须包含 @ 和 .
    if !EMAIL_RE.is_match(email) {
        return Err("Email format is invalid");
    }
    Ok(())
}

/// 校验分数落在 0-20 分制内
///
/// 分数范围是服务端统一校验的不变量，NaN 一并拒绝。
pub fn validate_grade(grade: f64) -> Result<(), &'static str> {
    if grade.is_nan() || !(0.0..=GRADE_MAX).contains(&grade) {
        return Err("Grade must be between 0 and 20");
    }
    Ok(())
}

pub fn validate_assessment_type(assessment_type: &str) -> Result<(), &'static str> {
    let trimmed = assessment_type.trim();
    if trimmed.is_empty() {
        return Err("Assessment type must not be empty");
    }
    if trimmed.len() > 64 {
        return Err("Assessment type must not exceed 64 characters");
    }
    Ok(())
}

pub fn validate_weekday(weekday: i32) -> Result<(), &'static str> {
    // 0 = 周一 … 6 = 周日
    if !(0..=6).contains(&weekday) {
        return Err("Weekday must be between 0 (Monday) and 6 (Sunday)");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_grades() {
        assert!(validate_grade(0.0).is_ok());
        assert!(validate_grade(14.5).is_ok());
        assert!(validate_grade(20.0).is_ok());
    }

    #[test]
    fn test_grade_out_of_range() {
        assert!(validate_grade(25.0).is_err());
        assert!(validate_grade(20.01).is_err());
        assert!(validate_grade(-0.5).is_err());
    }

    #[test]
    fn test_grade_nan_rejected() {
        assert!(validate_grade(f64::NAN).is_err());
    }

    #[test]
    fn test_valid_email() {
        assert!(validate_email("maria.santos@escola.pt").is_ok());
        assert!(validate_email("j_silva+teste@example.org").is_ok());
    }

    #[test]
    fn test_invalid_email() {
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("missing@tld").is_err());
    }

    #[test]
    fn test_name_must_not_be_empty() {
        assert!(validate_name("Turma A").is_ok());
        assert!(validate_name("").is_err());
        assert!(validate_name("   ").is_err());
    }

    #[test]
    fn test_name_length_limit() {
        assert!(validate_name(&"x".repeat(120)).is_ok());
        assert!(validate_name(&"x".repeat(121)).is_err());
    }

    #[test]
    fn test_assessment_type() {
        assert!(validate_assessment_type("Teste 1").is_ok());
        assert!(validate_assessment_type("").is_err());
        assert!(validate_assessment_type(&"x".repeat(65)).is_err());
    }

    #[test]
    fn test_weekday_range() {
        assert!(validate_weekday(0).is_ok());
        assert!(validate_weekday(6).is_ok());
        assert!(validate_weekday(-1).is_err());
        assert!(validate_weekday(7).is_err());
    }
}
