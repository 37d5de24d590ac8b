use hotel_core::errors::{ExError, ExErrorKind, HotelError};

#[test]
fn test_validation_errors_map_to_invalid_input_with_field() {
    let cases = vec![
        (
            HotelError::InvalidName {
                reason: "name cannot be empty".to_string(),
            },
            "name",
        ),
        (
            HotelError::InvalidPhone {
                reason: "phone cannot be empty".to_string(),
            },
            "phone",
        ),
        (HotelError::InvalidPrice { price: -5.0 }, "price"),
        (
            HotelError::InvalidDate {
                field: "check_out_date".to_string(),
                value: "soon".to_string(),
            },
            "check_out_date",
        ),
    ];

    for (err, field) in cases {
        let ex_err: ExError = err.into();
        assert_eq!(ex_err.kind(), ExErrorKind::InvalidInput);
        assert_eq!(ex_err.code(), "ERR_INVALID_INPUT");
        assert_eq!(ex_err.field(), Some(field));
    }
}

#[test]
fn test_not_found_verifiable_by_kind_and_entity() {
    let ex_err: ExError = HotelError::RoomNotFound { room_id: 42 }.into();

    assert_eq!(ex_err.kind(), ExErrorKind::NotFound);
    assert_eq!(ex_err.code(), "ERR_NOT_FOUND");
    assert_eq!(ex_err.entity(), Some("room"));
    assert_eq!(ex_err.entity_id(), Some(42));
    assert!(ex_err.message().contains("Room not found"));
}

#[test]
fn test_each_entity_has_its_own_not_found() {
    let customer: ExError = HotelError::CustomerNotFound { customer_id: 1 }.into();
    let booking: ExError = HotelError::BookingNotFound { booking_id: 1 }.into();

    assert_eq!(customer.entity(), Some("customer"));
    assert_eq!(booking.entity(), Some("booking"));
}

#[test]
fn test_referenced_delete_is_constraint_violation() {
    let err = HotelError::CustomerHasBookings {
        customer_id: 3,
        booking_count: 2,
    };
    assert_eq!(
        err.to_string(),
        "Cannot delete customer 3: referenced by 2 booking(s)"
    );

    let ex_err: ExError = err.into();
    assert_eq!(ex_err.kind(), ExErrorKind::ConstraintViolation);
    assert_eq!(ex_err.code(), "ERR_CONSTRAINT_VIOLATION");
}

#[test]
fn test_error_kind_code_mapping() {
    let kinds = vec![
        (ExErrorKind::InvalidInput, "ERR_INVALID_INPUT"),
        (ExErrorKind::NotFound, "ERR_NOT_FOUND"),
        (ExErrorKind::ConstraintViolation, "ERR_CONSTRAINT_VIOLATION"),
        (ExErrorKind::Io, "ERR_IO"),
        (ExErrorKind::Serialization, "ERR_SERIALIZATION"),
        (ExErrorKind::Persistence, "ERR_PERSISTENCE"),
        (ExErrorKind::Internal, "ERR_INTERNAL"),
    ];

    for (kind, expected_code) in kinds {
        assert_eq!(kind.code(), expected_code);
    }
}

#[test]
fn test_display_with_field_context() {
    let ex_err: ExError = HotelError::InvalidPrice { price: -1.0 }.into();
    let ex_err = ex_err.with_op("add_room");

    let text = ex_err.to_string();
    assert!(text.starts_with("[ERR_INVALID_INPUT] in operation 'add_room'"));
    assert!(text.ends_with("(field: price)"));
}
