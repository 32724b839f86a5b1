//! End-to-end usage scenarios for `Optional` and `Outcome`.

use functional::optional::{none, some};
use functional::outcome::{error, ok};
use functional::{AccessError, BoxError, Optional, Outcome, Unit};
use std::cell::Cell;
use std::fmt;
use std::panic;
use std::rc::Rc;

#[derive(Debug)]
struct ParseFailure {
    input: String,
}

impl fmt::Display for ParseFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot parse {:?}", self.input)
    }
}

impl std::error::Error for ParseFailure {}

fn panic_message(payload: Box<dyn std::any::Any + Send>) -> String {
    match payload.downcast::<String>() {
        Ok(msg) => *msg,
        Err(payload) => payload
            .downcast_ref::<&str>()
            .map(|s| (*s).to_string())
            .unwrap_or_default(),
    }
}

#[test]
fn some_rendered_as_text() {
    let rendered = some(1653).map(|v| v.to_string());
    assert_eq!(rendered, some("1653".to_string()));
}

#[test]
fn none_map_is_never_invoked() {
    let reached = Cell::new(false);
    let mapped = none::<bool>().map(|b| {
        reached.set(true);
        !b
    });
    assert_eq!(mapped, Optional::None);
    assert!(!reached.get());
}

#[test]
fn ok_bound_to_text() {
    let bound = ok::<i32, ParseFailure>(42).bind(|v| ok(v.to_string()));
    assert_eq!(bound.unwrap(), "42");
}

#[test]
fn error_bind_keeps_payload_identity() {
    let payload = Rc::new(ParseFailure {
        input: "x".into(),
    });
    let failed: Outcome<i32, Rc<ParseFailure>> = error(Rc::clone(&payload));
    let reached = Cell::new(false);

    let bound = failed.bind(|v| {
        reached.set(true);
        ok(v.to_string())
    });

    assert!(!reached.get());
    assert!(Rc::ptr_eq(&bound.unwrap_error(), &payload));
}

#[test]
fn combine_by_nice_or_answer() {
    let combined = ok::<i32, ParseFailure>(42)
        .combine_by(ok("nice"), |s: &str, i: i32| s == "nice" || i == 42);
    assert!(combined.contains(&true));
}

#[test]
fn unwrap_none_is_fatal() {
    let caught = panic::catch_unwind(|| none::<Unit>().unwrap());
    let message = panic_message(caught.unwrap_err());
    assert_eq!(message, AccessError::EmptyAccess.to_string());
}

#[test]
fn unwrap_error_outcome_is_fatal() {
    let caught = panic::catch_unwind(|| {
        let failed: Outcome<i32, ParseFailure> = error(ParseFailure {
            input: "abc".into(),
        });
        failed.unwrap()
    });
    let message = panic_message(caught.unwrap_err());
    assert!(message.contains("on an `Err` value"));
    assert!(message.ends_with("cannot parse \"abc\""));
}

#[test]
fn unwrap_error_on_ok_is_fatal() {
    let caught = panic::catch_unwind(|| ok::<i32, ParseFailure>(1).unwrap_error());
    let message = panic_message(caught.unwrap_err());
    assert_eq!(message, AccessError::InvalidErrorAccess.to_string());
}

#[test]
fn pipeline_with_boxed_errors() {
    fn parse(raw: &str) -> Outcome<i64> {
        match raw.trim().parse::<i64>() {
            Ok(v) => Outcome::Ok(v),
            Err(_) => Outcome::Err(BoxError::from(ParseFailure { input: raw.into() })),
        }
    }

    let total = ["1", "2", "39"]
        .iter()
        .map(|raw| parse(raw))
        .fold(Outcome::<i64>::Ok(0), |acc, next| {
            acc.combine_by(next, |n, sum| sum + n)
        });
    assert_eq!(total.to_string(), "42");

    let broken = ["1", "two", "three"]
        .iter()
        .map(|raw| parse(raw))
        .fold(Outcome::<i64>::Ok(0), |acc, next| {
            acc.combine_by(next, |n, sum| sum + n)
        });
    assert_eq!(broken.to_string(), "cannot parse \"two\"");
    assert_eq!(broken.to_optional(), Optional::None);
}

#[test]
fn rendering_contract() {
    assert_eq!(none::<String>().to_string(), "None");
    assert_eq!(some(2.5).to_string(), "2.5");
    assert_eq!(ok::<&str, BoxError>("fine").to_string(), "fine");

    let failed: Outcome<i32, BoxError> = Outcome::Err("disk full".into());
    assert_eq!(failed.to_string(), "disk full");
}

#[test]
fn optional_lookup_chain() {
    let config = [("host", "localhost"), ("port", "8080")];
    let lookup = |key: &str| -> Optional<&'static str> {
        config
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
            .into()
    };

    let port = lookup("port")
        .bind(|raw| raw.parse::<u16>().ok().into())
        .filter(|p| *p > 1024);
    assert_eq!(port, some(8080));

    let timeout = lookup("timeout")
        .bind(|raw| raw.parse::<u64>().ok().into())
        .default_with(|| 30);
    assert_eq!(timeout, 30);
}

#[test]
fn presence_only_with_unit() {
    let flags: Vec<Optional<Unit>> = vec![some("a").void(), none::<&str>().void()];
    let present = flags.iter().filter(|f| f.is_some()).count();
    assert_eq!(present, 1);
    assert_eq!(flags[0].to_string(), "()");
}

#[cfg(feature = "serde")]
#[test]
fn serde_representation() {
    let some_json = serde_json::to_string(&some(5)).unwrap();
    let back: Optional<i32> = serde_json::from_str(&some_json).unwrap();
    assert_eq!(back, some(5));

    let failed: Outcome<i32, String> = error("bad".to_string());
    let json = serde_json::to_string(&failed).unwrap();
    assert_eq!(json, r#"{"Err":"bad"}"#);
}
