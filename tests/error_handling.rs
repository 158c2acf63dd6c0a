use appfit::error;
use appfit::models::bmi;
use appfit::AppError;

#[test]
fn test_measurement_error_message() {
    let err = bmi::calculate("abc", "175").unwrap_err();
    assert_eq!(
        error::user_friendly_message(&err),
        error::MEASUREMENT_MESSAGE
    );
    assert!(error::is_user_recoverable(&err));
}

#[test]
fn test_display_names_field() {
    let err = bmi::calculate("70", "tall").unwrap_err();
    assert!(err.to_string().contains("height"));
    assert!(err.to_string().contains("tall"));
}

#[test]
fn test_config_errors_are_not_recoverable_in_place() {
    let err = AppError::Config("bad".into());
    assert!(!error::is_user_recoverable(&err));
    assert!(error::user_friendly_message(&err).contains("bad"));
}

#[test]
fn test_io_error_conversion() {
    let io = std::io::Error::new(std::io::ErrorKind::Other, "tty gone");
    let err: AppError = io.into();
    assert!(matches!(err, AppError::Io(_)));
    assert!(err.to_string().contains("tty gone"));
}
