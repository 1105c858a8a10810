use std::{sync::Arc, thread};

use exprcalc::{
    CalcError, ErrorKind, Memory,
    math::{arithmetic, logarithm, trigonometry},
    response::{CalculationResponse, ErrorResponse, MemoryResponse, MessageResponse, calculate},
    scientific,
    session::{Command, Reply, Session},
};
use serde_json::{Value, json};

fn to_json<T: serde::Serialize>(body: &T) -> Value {
    serde_json::to_value(body).unwrap()
}

#[test]
fn memory_starts_empty_and_round_trips() {
    let memory = Memory::new();
    assert_eq!(memory.recall(), None);

    memory.store(42.5).unwrap();
    assert_eq!(memory.recall(), Some(42.5));
    memory.store(-1.0).unwrap();
    assert_eq!(memory.recall(), Some(-1.0));

    memory.clear();
    assert_eq!(memory.recall(), None);
    memory.clear();
    assert_eq!(memory.recall(), None);
}

#[test]
fn memory_coerces_strings() {
    let memory = Memory::new();
    assert_eq!(memory.store_str("1e3"), Ok(1000.0));
    assert_eq!(memory.recall(), Some(1000.0));

    let err = memory.store_str("abc").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidValue);
    assert_eq!(err.to_string(), "Invalid numeric value: 'abc'.");
    assert_eq!(memory.recall(), Some(1000.0));

    assert_eq!(memory.store_str("NaN").unwrap_err().kind(), ErrorKind::InvalidValue);
    assert_eq!(memory.store_str("").unwrap_err().kind(), ErrorKind::InvalidValue);
}

#[test]
fn memory_refuses_nan() {
    let memory = Memory::new();
    memory.store(1.5).unwrap();

    let err = memory.store(f64::NAN).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidValue);
    assert_eq!(memory.recall(), Some(1.5));

    memory.store(f64::INFINITY).unwrap();
    assert_eq!(memory.recall(), Some(f64::INFINITY));
}

#[test]
fn memory_is_shared_between_threads() {
    let memory = Arc::new(Memory::new());

    let handles: Vec<_> = (0..8).map(|i| {
                                    let memory = Arc::clone(&memory);
                                    thread::spawn(move || {
                                        for _ in 0..100 {
                                            memory.store(f64::from(i)).unwrap();
                                            let _ = memory.recall();
                                        }
                                    })
                                })
                                .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let last = memory.recall().unwrap();
    assert!((0..8).any(|i| f64::from(i) == last));
}

#[test]
fn scientific_format() {
    assert_eq!(scientific::format(1234.5, 6), "1.234500e3");
    assert_eq!(scientific::format(14.0, 6), "1.400000e1");
    assert_eq!(scientific::format(0.00042, 2), "4.20e-4");
    assert_eq!(scientific::format(-5.0, 0), "-5e0");
    assert_eq!(scientific::format(0.0, 6), "0");
    assert_eq!(scientific::format(-0.0, 6), "0");
    assert_eq!(scientific::format(f64::INFINITY, 6), "inf");
    assert_eq!(scientific::format(f64::NEG_INFINITY, 6), "-inf");
    assert_eq!(scientific::format(f64::NAN, 6), "NaN");
}

#[test]
fn scientific_parse() {
    assert_eq!(scientific::parse("1.5e3"), Ok(1500.0));
    assert_eq!(scientific::parse("1.234500e3"), Ok(1234.5));
    assert_eq!(scientific::parse(".5E1"), Ok(5.0));
    assert_eq!(scientific::parse("-4e-1"), Ok(-0.4));

    for bad in ["", "1500", "e3", "1.5e", "1.5e3.0", "abc", " 1e3", "1e3 "] {
        assert_eq!(scientific::parse(bad),
                   Err(CalcError::InvalidFormat { text: bad.to_string() }),
                   "{bad:?} should be rejected");
    }
}

#[test]
fn arithmetic_primitives() {
    assert_eq!(arithmetic::add(2.0, 3.0), 5.0);
    assert_eq!(arithmetic::subtract(2.0, 3.0), -1.0);
    assert_eq!(arithmetic::multiply(2.5, 4.0), 10.0);
    assert_eq!(arithmetic::divide(7.0, 2.0), Ok(3.5));
    assert_eq!(arithmetic::divide(7.0, 0.0), Err(CalcError::DivisionByZero));
    assert_eq!(arithmetic::divide(7.0, -0.0), Err(CalcError::DivisionByZero));
}

#[test]
fn trigonometric_primitives() {
    assert_eq!(trigonometry::sin(0.0), 0.0);
    assert_eq!(trigonometry::cos(0.0), 1.0);
    assert_eq!(trigonometry::tan(0.0), 0.0);
    assert_eq!(trigonometry::atan(0.0), 0.0);
    assert_eq!(trigonometry::asin(1.0), Ok(std::f64::consts::FRAC_PI_2));
    assert_eq!(trigonometry::acos(1.0), Ok(0.0));

    for outside in [1.5, -1.0001, f64::NAN] {
        assert_eq!(trigonometry::asin(outside).unwrap_err().kind(), ErrorKind::DomainError);
        assert_eq!(trigonometry::acos(outside).unwrap_err().kind(), ErrorKind::DomainError);
    }
}

#[test]
fn logarithmic_primitives() {
    assert_eq!(logarithm::ln(1.0), Ok(0.0));
    assert_eq!(logarithm::log10(100.0), Ok(2.0));
    assert_eq!(logarithm::exp(0.0), 1.0);

    for outside in [0.0, -1.0, f64::NAN] {
        assert_eq!(logarithm::ln(outside).unwrap_err().kind(), ErrorKind::DomainError);
        assert_eq!(logarithm::log10(outside).unwrap_err().kind(), ErrorKind::DomainError);
    }
}

#[test]
fn calculation_bodies() {
    let ok = calculate("2+3*4", 6).unwrap();
    assert_eq!(to_json(&ok),
               json!({ "status": "success", "result": 14.0, "scientific": "1.400000e1" }));

    let err = calculate("10/0", 6).unwrap_err();
    assert_eq!(to_json(&err), json!({ "status": "error", "message": "Division by zero." }));

    let missing = calculate("", 6).unwrap_err();
    assert_eq!(missing, ErrorResponse::new("Expression is required"));

    let blank = calculate("   ", 6).unwrap_err();
    assert!(blank.message.starts_with("Invalid expression"));
}

#[test]
fn memory_and_message_bodies() {
    assert_eq!(to_json(&MemoryResponse::new(None)),
               json!({ "status": "success", "value": null }));
    assert_eq!(to_json(&MemoryResponse::new(Some(3.5))),
               json!({ "status": "success", "value": 3.5 }));
    assert_eq!(to_json(&MessageResponse::new("Memory cleared")),
               json!({ "status": "success", "message": "Memory cleared" }));
    assert_eq!(to_json(&CalculationResponse::new(0.0, 6))["scientific"], json!("0"));
}

#[test]
fn command_classification() {
    assert_eq!(Command::parse("ms"), Command::Store(None));
    assert_eq!(Command::parse("MS  7 "), Command::Store(Some("7")));
    assert_eq!(Command::parse("mc"), Command::Clear);
    assert_eq!(Command::parse("mr"), Command::Recall);
    assert_eq!(Command::parse("mr 1"), Command::Evaluate("mr 1"));
    assert_eq!(Command::parse(" sin(0) "), Command::Evaluate("sin(0)"));
}

#[test]
fn session_drives_memory() {
    let mut session = Session::new(6);

    assert_eq!(session.execute("ms").to_string(), "Error: Value is required");
    assert_eq!(session.execute("mr").to_json().unwrap(),
               r#"{"status":"success","value":null}"#);

    assert!(matches!(session.execute("(2+3)*4"), Reply::Calculated(_)));
    assert_eq!(session.last_result(), Some(20.0));

    let failed = session.execute("1/0");
    assert!(failed.is_error());
    assert_eq!(failed.to_string(), "Error: Division by zero.");
    assert_eq!(session.last_result(), Some(20.0));

    session.execute("ms");
    assert_eq!(session.memory().recall(), Some(20.0));

    assert!(session.execute("ms abc").is_error());
    assert_eq!(session.memory().recall(), Some(20.0));

    session.execute("ms 2.5");
    assert_eq!(session.execute("mr").to_string(), "2.5");

    assert_eq!(session.execute("mc").to_json().unwrap(),
               r#"{"status":"success","message":"Memory cleared"}"#);
    assert_eq!(session.memory().recall(), None);
}

#[test]
fn session_will_not_store_a_nan_result() {
    let mut session = Session::new(6);

    let nan = session.execute("1e999-1e999");
    assert_eq!(nan.to_json().unwrap(),
               r#"{"status":"success","result":null,"scientific":"NaN"}"#);

    let stored = session.execute("ms");
    assert!(stored.is_error());
    assert_eq!(stored.to_string(), "Error: Invalid numeric value: 'NaN'.");
    assert_eq!(session.memory().recall(), None);
    assert_eq!(session.execute("mr").to_json().unwrap(),
               r#"{"status":"success","value":null}"#);
}

#[test]
fn sessions_can_share_one_memory() {
    let memory = Arc::new(Memory::new());
    let mut first = Session::with_memory(Arc::clone(&memory), 6);
    let mut second = Session::with_memory(Arc::clone(&memory), 6);

    first.execute("ms 9");
    assert_eq!(second.execute("mr").to_string(), "9");
    second.execute("mc");
    assert_eq!(memory.recall(), None);
}
