#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn pack_accepts_repeated_box_flags() {
    let cli = Cli::try_parse_from([
        "packing-cli",
        "pack",
        "--width",
        "30",
        "--length",
        "40",
        "--height",
        "20",
        "--box",
        "a:1x1x1:1",
        "--box",
        "b:2x2x2:1:4",
    ])
    .unwrap();
    let Command::Pack(args) = cli.command else {
        panic!("expected pack");
    };
    assert_eq!(args.boxes.len(), 2);
    let (container, request) =
        build_request(&args.container.base(), &[parse_box_arg(&args.boxes[1]).unwrap()]).unwrap();
    assert_eq!(request.base_dimensions, [30.0, 20.0, 40.0]);
    assert_eq!(container.length, 40.0);
    assert_eq!(request.boxes[0].quantity, 4);
}

#[test]
fn base_url_has_a_local_default() {
    let cli = Cli::try_parse_from(["packing-cli", "ping"]).unwrap();
    assert!(cli.base_url.starts_with("http://"));
}

#[test]
fn ruler_requires_a_complete_container() {
    let args = RulerArgs {
        container: ContainerArgs { width: Some(10.0), length: None, height: Some(5.0) },
        divisions: None,
    };
    assert!(matches!(run_ruler(&args), Err(CliError::Input(InputError::InvalidBase))));
}

#[test]
fn ruler_prints_for_a_valid_container() {
    let args = RulerArgs {
        container: ContainerArgs { width: Some(10.0), length: Some(10.0), height: Some(5.0) },
        divisions: Some(2),
    };
    assert!(run_ruler(&args).is_ok());
}

#[test]
fn missing_input_file_is_an_io_error() {
    assert!(matches!(read_input("/nonexistent/request.json"), Err(CliError::Io(_))));
}
