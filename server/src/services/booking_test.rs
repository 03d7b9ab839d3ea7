use super::*;

#[test]
fn trigger_is_case_insensitive() {
    assert!(is_booking_request("Book Appointment: tomorrow"));
    assert!(is_booking_request("please BOOK APPOINTMENT for me"));
    assert!(!is_booking_request("what are your hours?"));
}

#[test]
fn parses_full_booking() {
    let booking = parse_booking("book appointment: 2025-12-10 10:30, John Doe, haircut").unwrap();
    assert_eq!(booking.name, "John Doe");
    assert_eq!(booking.purpose, "haircut");
    assert_eq!(booking.date_string(), "2025-12-10");
    assert_eq!(booking.time_string(), "10:30");
}

#[test]
fn purpose_keeps_inner_commas() {
    let booking = parse_booking("book appointment: 2025-12-03 16:00, Alex, meeting,  follow-up , notes").unwrap();
    assert_eq!(booking.purpose, "meeting, follow-up, notes");
}

#[test]
fn purpose_may_be_empty() {
    let booking = parse_booking("book appointment: 2025-12-03 16:00, Alex").unwrap();
    assert_eq!(booking.purpose, "");
}

#[test]
fn missing_colon_is_rejected() {
    assert_eq!(parse_booking("book appointment tomorrow"), Err(BookingError::MissingDetails));
}

#[test]
fn malformed_datetime_is_rejected() {
    assert_eq!(
        parse_booking("book appointment: next tuesday, Alex"),
        Err(BookingError::InvalidDateTime("next tuesday".into()))
    );
    assert!(matches!(
        parse_booking("book appointment: 2025-13-40 10:30, Alex"),
        Err(BookingError::InvalidDateTime(_))
    ));
}

#[test]
fn missing_or_blank_name_is_rejected() {
    assert_eq!(parse_booking("book appointment: 2025-12-03 16:00"), Err(BookingError::MissingName));
    assert_eq!(parse_booking("book appointment: 2025-12-03 16:00,  , x"), Err(BookingError::MissingName));
}

#[test]
fn confirmation_text() {
    assert_eq!(confirmation("Alex", "2025-12-03", "16:00"), "Appointment booked for Alex on 2025-12-03 at 16:00!");
}

#[test]
fn unpadded_date_and_time_are_accepted() {
    let booking = parse_booking("book appointment: 2025-1-5 9:30, Alex, checkup").unwrap();
    assert_eq!(booking.date_string(), "2025-01-05");
    assert_eq!(booking.time_string(), "09:30");
}
