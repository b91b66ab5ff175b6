use super::*;

fn valid_form() -> FormData {
    FormData {
        name: "Ana".to_owned(),
        phone: "1122334455".to_owned(),
        email: "ana@example.com".to_owned(),
        ..FormData::default()
    }
}

#[test]
fn valid_form_passes() {
    assert_eq!(validate(&valid_form()), Ok(()));
}

#[test]
fn whitespace_only_name_is_rejected() {
    let form = FormData { name: "   ".to_owned(), ..valid_form() };
    assert_eq!(validate(&form), Err(ValidationError::NameRequired));
}

#[test]
fn byte_order_mark_counts_as_blank_name() {
    let form = FormData { name: "\u{FEFF} \u{FEFF}".to_owned(), ..valid_form() };
    assert_eq!(validate(&form), Err(ValidationError::NameRequired));
}

#[test]
fn email_with_byte_order_mark_is_rejected() {
    assert!(!is_valid_email("a\u{FEFF}b@x.com"));
    assert!(!is_valid_email("ab@x.c\u{FEFF}om"));
    assert!(is_valid_email("ab@x.com"));
}

#[test]
fn name_is_checked_before_phone_and_email() {
    let form = FormData::default();
    assert_eq!(validate(&form), Err(ValidationError::NameRequired));

    let form = FormData { name: "Ana".to_owned(), ..FormData::default() };
    assert_eq!(validate(&form), Err(ValidationError::PhoneInvalid));
}

#[test]
fn phone_accepts_ten_or_more_digits() {
    for phone in ["1122334455", "541122334455", "0000000000"] {
        assert!(is_valid_phone(phone), "{phone} should pass");
    }
}

#[test]
fn phone_rejects_short_or_non_digit_input() {
    for phone in ["112233445", "", "11 2233 4455", "+541122334455", "11-22334455", "1122334455\n", "１１２２３３４４５５"] {
        assert!(!is_valid_phone(phone), "{phone:?} should fail");
    }
    let form = FormData { phone: "12345".to_owned(), ..valid_form() };
    assert_eq!(validate(&form), Err(ValidationError::PhoneInvalid));
}

#[test]
fn email_requires_at_and_dot_after_it() {
    for email in ["ana.example.com", "ana@example", "ana@.com", "@example.com", "ana@example.", "ana @example.com", "ana@exa mple.com", ""] {
        assert!(!is_valid_email(email), "{email:?} should fail");
    }
    let form = FormData { email: "ana@example".to_owned(), ..valid_form() };
    assert_eq!(validate(&form), Err(ValidationError::EmailInvalid));
}

#[test]
fn email_pattern_is_permissive_beyond_its_literal_rules() {
    for email in ["a@b.c", "ana+tag@sub.example.co", "x@y.z.w"] {
        assert!(is_valid_email(email), "{email:?} should pass");
    }
}

#[test]
fn messages_match_the_user_facing_copy() {
    assert_eq!(ValidationError::NameRequired.to_string(), "name is required.");
    assert_eq!(ValidationError::PhoneInvalid.to_string(), "phone must contain at least 10 digits.");
    assert_eq!(ValidationError::EmailInvalid.to_string(), "please enter a valid email.");
}
