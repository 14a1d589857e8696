use crate::error::{FieldError, QuizError, Result};

/// Parses a user-supplied id.
///
/// Like a lenient integer parse: leading whitespace and an optional sign are accepted, then the
/// leading run of digits is taken and anything after it is discarded (`"3abc"` is `3`).
/// Negative values parse; they are rejected later by the store lookup.
pub fn validate_identifier(raw: Option<&str>) -> Result<i64> {
    let raw = raw.ok_or(QuizError::MissingParameter)?;
    let trimmed = raw.trim_start();

    let (sign_len, negative) = match trimmed.as_bytes().first() {
        Some(b'-') => (1, true),
        Some(b'+') => (1, false),
        _ => (0, false),
    };
    let unsigned = &trimmed[sign_len..];
    let digits_len = unsigned
        .bytes()
        .take_while(|b| b.is_ascii_digit())
        .count();

    if digits_len == 0 {
        return Err(QuizError::NotANumber(raw.to_string()));
    }

    let magnitude: i64 = unsigned[..digits_len]
        .parse()
        .map_err(|_| QuizError::NotANumber(raw.to_string()))?;
    Ok(if negative { -magnitude } else { magnitude })
}

/// Rejects records with an empty question or answer, naming every offending field.
pub fn validate_record(question: &str, answer: &str) -> Result<()> {
    let mut errors = Vec::new();
    if question.trim().is_empty() {
        errors.push(FieldError::new("question", "The question must not be empty."));
    }
    if answer.trim().is_empty() {
        errors.push(FieldError::new("answer", "The answer must not be empty."));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(QuizError::Validation(errors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_id() {
        assert!(matches!(
            validate_identifier(None),
            Err(QuizError::MissingParameter)
        ));
    }

    #[test]
    fn not_a_number() {
        assert!(matches!(
            validate_identifier(Some("abc")),
            Err(QuizError::NotANumber(s)) if s == "abc"
        ));
        assert!(matches!(
            validate_identifier(Some("")),
            Err(QuizError::NotANumber(_))
        ));
        assert!(matches!(
            validate_identifier(Some("-")),
            Err(QuizError::NotANumber(_))
        ));
    }

    #[test]
    fn takes_leading_integer() {
        assert_eq!(validate_identifier(Some("3xyz")).unwrap(), 3);
        assert_eq!(validate_identifier(Some("  12")).unwrap(), 12);
        assert_eq!(validate_identifier(Some("7.9")).unwrap(), 7);
        assert_eq!(validate_identifier(Some("+2")).unwrap(), 2);
    }

    #[test]
    fn negative_ids_parse() {
        assert_eq!(validate_identifier(Some("-1")).unwrap(), -1);
    }

    #[test]
    fn overflowing_id_is_not_a_number() {
        assert!(matches!(
            validate_identifier(Some("99999999999999999999999")),
            Err(QuizError::NotANumber(_))
        ));
    }

    #[test]
    fn record_with_both_fields_is_valid() {
        assert!(validate_record("Capital de Italia", "Roma").is_ok());
    }

    #[test]
    fn empty_fields_are_each_reported() {
        let Err(QuizError::Validation(errors)) = validate_record("  ", "") else {
            panic!("expected validation failure");
        };
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["question", "answer"]);
    }

    #[test]
    fn only_empty_answer_is_reported() {
        let Err(QuizError::Validation(errors)) = validate_record("q", " ") else {
            panic!("expected validation failure");
        };
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "answer");
    }
}
