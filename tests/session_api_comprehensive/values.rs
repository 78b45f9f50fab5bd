//! Value Semantics Tests
//!
//! Tests for heterogeneous values, reference vs copy semantics and stored
//! `Option` values.

use crate::*;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq)]
struct BasicStruct {
    property: String,
}

#[derive(Debug)]
struct BasicClass {
    prop: i32,
}

impl BasicClass {
    fn method(&self) -> String {
        self.prop.to_string()
    }
}

#[test]
fn test_get_struct_and_nested_array() {
    let session = create_session();

    let basic = BasicStruct {
        property: "hello world".to_string(),
    };
    session.set("basic_struct", basic.clone());

    let from_session = session.get_as::<BasicStruct>("basic_struct");
    assert_eq!(from_session.map(|b| b.property), Some(basic.property));

    let array_3d: Vec<Vec<Vec<i32>>> = vec![
        vec![vec![1, 2], vec![3, 4]],
        vec![vec![5, 6], vec![7, 8]],
    ];
    session.set("3d", array_3d.clone());

    match session.get_as::<Vec<Vec<Vec<i32>>>>("3d") {
        Some(from_session) => assert_eq!(array_3d[0][1], from_session[0][1]),
        None => panic!("Failed to store nested array type"),
    }
}

#[test]
fn test_reference_values_share_state() {
    let session = create_session();

    let basic = Arc::new(Mutex::new(BasicClass { prop: 42 }));
    session.set("basic_class", Arc::clone(&basic));

    let read = |s: &Session| {
        s.get_as::<Arc<Mutex<BasicClass>>>("basic_class")
            .map(|c| {
                let guard = c.lock().unwrap();
                guard.method()
            })
    };
    assert_eq!(read(&session).as_deref(), Some("42"));

    basic.lock().unwrap().prop = 777;

    assert_eq!(read(&session).as_deref(), Some("777"));
    assert_ne!(read(&session).as_deref(), Some("42"));
}

#[test]
fn test_delete_reference_type_keeps_outside_handle() {
    let session = create_session();

    let basic = Arc::new(Mutex::new(BasicClass { prop: 42 }));
    session.set("bc", Arc::clone(&basic));
    basic.lock().unwrap().prop = 53;

    let from_session = session.get_as::<Arc<Mutex<BasicClass>>>("bc").unwrap();
    session.delete("bc");

    assert_eq!(session.count(), 0);
    assert_eq!(
        from_session.lock().unwrap().method(),
        basic.lock().unwrap().method()
    );
}

#[test]
fn test_copy_values_are_isolated() {
    let session = create_session();

    let mut test_var = String::from("og");
    session.set("test", test_var.clone());

    assert_eq!(session.get_as::<String>("test").as_deref(), Some("og"));

    test_var = String::from("nv");

    assert_eq!(session.get_as::<String>("test").as_deref(), Some("og"));
    assert_ne!(session.get_as::<String>("test"), Some(test_var));
}

#[test]
fn test_set_nil_value() {
    let session = create_session();

    let thing: Option<String> = None;
    session.set("nil_value", thing);

    assert_eq!(session.count(), 1);
    assert!(session.contains("nil_value"));
    assert_eq!(session.get_as::<String>("nil_value"), None);
    assert!(session.try_get::<String>("nil_value").unwrap_err().is_not_found());
}

#[test]
fn test_some_value_unwraps_on_read() {
    let session = create_session();

    session.set("maybe", Some(7u16));

    assert_eq!(session.get_as::<u16>("maybe"), Some(7));
    assert_eq!(session.get_as::<Option<u16>>("maybe"), Some(Some(7)));
}

#[test]
fn test_wrong_type_is_none_not_panic() {
    let session = create_session();

    session.set("n", 1i32);

    assert_eq!(session.get_as::<i64>("n"), None);
    assert_eq!(session.get_as::<String>("n"), None);
    assert_eq!(session.get_as::<i32>("n"), Some(1));
}

#[test]
fn test_put_prewrapped_value() {
    let session = create_session();

    let value = Value::new(3.5f64);
    session.put("Pi-ish", value.clone(), Some("Numbers"));

    let group = session.get_group("numbers").unwrap();
    assert!(group["pi-ish"].ptr_eq(&value));
    assert_eq!(session.records()[0].type_name, "f64");
}
