//! Client-side form validation.
//!
//! All checks run before any network call; a failing rule's message is
//! rendered inline and the submit never reaches the backend.

/// Minimum accepted password length.
pub const PASSWORD_MIN_LEN: usize = 6;

/// Plausibility check for an email address: a `[\w.-]` local part, at least
/// one domain label, and a 2-4 character top-level domain.
pub fn is_valid_email(email: &str) -> bool {
    fn word_chars(s: &str) -> bool {
        !s.is_empty()
            && s.chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-'))
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty()
        || !local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
    {
        return false;
    }

    let mut labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return false;
    }
    let tld = labels.pop().unwrap_or_default();
    if !(2..=4).contains(&tld.len()) || !word_chars(tld) {
        return false;
    }
    labels.iter().all(|label| word_chars(label))
}

/// Validate a credentials pair for the login/register forms. Returns the
/// first failing rule's message.
pub fn validate_credentials(email: &str, password: &str) -> Result<(), &'static str> {
    if email.is_empty() || password.is_empty() {
        return Err("Email and password are required.");
    }
    if !is_valid_email(email) {
        return Err("Please enter a valid email address.");
    }
    if password.len() < PASSWORD_MIN_LEN {
        return Err("Password must be at least 6 characters.");
    }
    Ok(())
}

/// Split a textarea draft into trimmed, non-empty lines. Used by the inline
/// recipe editor, where ingredients/steps are edited one per line.
pub fn split_draft_lines(draft: &str) -> Vec<String> {
    draft
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

/// Join list items back into a newline-separated textarea draft.
pub fn join_draft_lines(items: &[String]) -> String {
    items.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        assert!(is_valid_email("cook@example.com"));
        assert!(is_valid_email("first.last@mail.example.org"));
        assert!(is_valid_email("a_b-c@sub-domain.info"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("no-at-sign.example.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("cook@example"));
        assert!(!is_valid_email("cook@example.toolong"));
        assert!(!is_valid_email("cook@exa mple.com"));
    }

    #[test]
    fn short_password_is_rejected_with_fixed_message() {
        assert_eq!(
            validate_credentials("cook@example.com", "12345"),
            Err("Password must be at least 6 characters.")
        );
    }

    #[test]
    fn empty_fields_are_rejected_first() {
        assert_eq!(
            validate_credentials("", "123456"),
            Err("Email and password are required.")
        );
        assert_eq!(
            validate_credentials("cook@example.com", ""),
            Err("Email and password are required.")
        );
    }

    #[test]
    fn invalid_email_beats_short_password() {
        assert_eq!(
            validate_credentials("not-an-email", "123"),
            Err("Please enter a valid email address.")
        );
    }

    #[test]
    fn valid_credentials_pass() {
        assert_eq!(validate_credentials("cook@example.com", "123456"), Ok(()));
    }

    #[test]
    fn draft_lines_roundtrip() {
        let draft = "  flour \n\n eggs\nmilk  ";
        let items = split_draft_lines(draft);
        assert_eq!(items, vec!["flour", "eggs", "milk"]);
        assert_eq!(join_draft_lines(&items), "flour\neggs\nmilk");
    }
}
