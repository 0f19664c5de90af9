use super::*;

#[test]
fn validate_signup_input_trims_name_and_email() {
    assert_eq!(
        validate_signup_input(" Jane ", " jane@example.com ", "secret"),
        Ok((
            "Jane".to_owned(),
            "jane@example.com".to_owned(),
            "secret".to_owned()
        ))
    );
}

#[test]
fn validate_signup_input_requires_every_field() {
    assert_eq!(
        validate_signup_input("", "jane@example.com", "secret"),
        Err("Enter name, email, and password.")
    );
    assert_eq!(
        validate_signup_input("Jane", "  ", "secret"),
        Err("Enter name, email, and password.")
    );
    assert_eq!(
        validate_signup_input("Jane", "jane@example.com", ""),
        Err("Enter name, email, and password.")
    );
}
