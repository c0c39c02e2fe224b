//! Decoding tests run through the YAML document boundary, so the scalar
//! forms the parser produces (numbers, booleans, quoted strings) are covered.

use robot_core::{DecodeError, DecodeErrorKind, MouseButton};
use robot_script::{Command, MouseClick, MouseMove, RunProcess, Script};

fn parse_one(yaml: &str) -> Result<Command, DecodeError> {
    let text = format!("commands:\n  - {}\n", yaml);
    match text.parse::<Script>() {
        Ok(script) => Ok(script.commands()[0].clone()),
        Err(err) => Err(err.as_decode().cloned().expect("decode error")),
    }
}

#[test]
fn test_button_synonyms() {
    for button in ["centre", "middle", "CENTER"] {
        let cmd = parse_one(&format!("click: {{button: {}}}", button)).unwrap();
        assert_eq!(
            cmd,
            Command::MouseClick(MouseClick {
                button: MouseButton::Center
            })
        );
    }

    let err = parse_one("click: {button: up}").unwrap_err();
    assert_eq!(err.kind(), DecodeErrorKind::InvalidOptionValue);
}

#[test]
fn test_mouse_values_from_yaml_scalars() {
    let cmd = parse_one("mouse: {x: '  15 ', y: -7, relative: True}").unwrap();
    assert_eq!(
        cmd,
        Command::MouseMove(MouseMove {
            x: 15,
            y: -7,
            relative: true
        })
    );
}

#[test]
fn test_mouse_float_rejected() {
    let err = parse_one("mouse: {x: 1.5, y: 2}").unwrap_err();
    assert!(matches!(err, DecodeError::InvalidInteger { .. }));
}

#[test]
fn test_each_kind_missing_and_unknown() {
    let cases = [
        ("mouse", "x"),
        ("click", "button"),
        ("keypress", "key"),
        ("type", "text"),
        ("sleep", "seconds"),
        ("exec", "program"),
    ];
    for (name, required) in cases {
        let err = parse_one(&format!("{}: {{}}", name)).unwrap_err();
        assert_eq!(err, DecodeError::missing_option(name, required));

        let err = parse_one(&format!("{}: {{foo: true}}", name)).unwrap_err();
        assert_eq!(err, DecodeError::unrecognized_option(name, "foo"));
    }
}

#[test]
fn test_exec_args_list() {
    let cmd = parse_one("exec: {program: echo, args: [\"a b\", c]}").unwrap();
    assert_eq!(
        cmd,
        Command::RunProcess(RunProcess {
            program: "echo".to_string(),
            args: vec!["a b".to_string(), "c".to_string()],
        })
    );

    let err = parse_one("exec: {program: echo, args: [[nested]]}").unwrap_err();
    assert_eq!(err.kind(), DecodeErrorKind::WrongListEntryType);
}

#[test]
fn test_keypress_mods_must_be_list() {
    let err = parse_one("keypress: {key: a, mods: {shift: true}}").unwrap_err();
    assert_eq!(
        err.to_string(),
        "keypress: expected list value to 'mods' option (value = {shift: true})"
    );
}

#[test]
fn test_unknown_command() {
    let err = parse_one("jump: {height: 3}").unwrap_err();
    assert_eq!(err, DecodeError::unrecognized_command("jump"));
}

#[test]
fn test_null_options_unclassifiable() {
    let err = "commands:\n  - sleep:\n".parse::<Script>().unwrap_err();
    assert_eq!(err.as_decode().map(DecodeError::kind), Some(DecodeErrorKind::NotClassifiable));
}

#[test]
fn test_mouse_coordinates_are_base_ten() {
    let err = parse_one("mouse: {x: 0x10, y: 0}").unwrap_err();
    assert!(matches!(err, DecodeError::InvalidInteger { ref observed, .. } if observed == "0x10"));

    let cmd = parse_one("mouse: {x: 010, y: +5}").unwrap();
    assert_eq!(
        cmd,
        Command::MouseMove(MouseMove {
            x: 10,
            y: 5,
            relative: false
        })
    );
}
