use std::io::Write as _;

use clap::Parser;
use tempfile::NamedTempFile;

use super::*;

fn file_with(text: &str) -> NamedTempFile {
	let mut file = NamedTempFile::new().unwrap();
	write!(file, "{text}").unwrap();
	file
}

fn cli(args: &[&str]) -> Cli {
	Cli::try_parse_from(std::iter::once("textobj").chain(args.iter().copied())).unwrap()
}

fn run_capture(cli: &Cli) -> (bool, String) {
	let mut out = Vec::new();
	let applied = run(cli, Keymap::builtin(), &mut out).unwrap();
	(applied, String::from_utf8(out).unwrap())
}

#[test]
fn test_cli_defaults() {
	let cli = cli(&["notes.txt", "iw"]);
	assert_eq!(cli.cursor, 0);
	assert_eq!(cli.operation(), Operation::Delete);
	assert!(!cli.in_place);
	assert!(cli.config.is_none());
}

#[test]
fn test_cli_select_conflicts_with_in_place() {
	let args = ["textobj", "-s", "-i", "notes.txt", "iw"];
	assert!(Cli::try_parse_from(args).is_err());
}

#[test]
fn test_delete_prints_edited_text() {
	let file = file_with("foo bar  baz");
	let path = file.path().to_str().unwrap();
	let (applied, out) = run_capture(&cli(&["-c", "5", path, "aw"]));

	assert!(applied);
	assert_eq!(out, "foo baz");
	assert_eq!(std::fs::read_to_string(file.path()).unwrap(), "foo bar  baz");
}

#[test]
fn test_select_prints_selection() {
	let file = file_with("line1\nline2\nline3");
	let path = file.path().to_str().unwrap();
	let (applied, out) = run_capture(&cli(&["--cursor", "8", "--select", path, "il"]));

	assert!(applied);
	assert_eq!(out, "line2\n");
}

#[test]
fn test_in_place_writes_file() {
	let file = file_with("call(a, b);");
	let path = file.path().to_str().unwrap();
	let (applied, out) = run_capture(&cli(&["-c", "6", "-i", path, "i("]));

	assert!(applied);
	assert!(out.is_empty());
	assert_eq!(std::fs::read_to_string(file.path()).unwrap(), "call();");
}

#[test]
fn test_not_found_fails() {
	let file = file_with("(foo");
	let path = file.path().to_str().unwrap();
	let (applied, out) = run_capture(&cli(&["-c", "4", path, "a("]));

	assert!(!applied);
	assert!(out.is_empty());
}

#[test]
fn test_rejected_and_incomplete_fail() {
	let file = file_with("foo");
	let path = file.path().to_str().unwrap();

	assert!(!run_capture(&cli(&[path, "xw"])).0);
	assert!(!run_capture(&cli(&[path, "i"])).0);
}

#[test]
fn test_list_needs_no_path() {
	let cli = cli(&["--list"]);
	assert!(cli.list);
	assert!(cli.path.is_none());
	assert!(Cli::try_parse_from(["textobj"]).is_err());
}

#[test]
fn test_list_objects() {
	let mut keymap = Keymap::builtin();
	keymap.bind_object('b', textobj_objects::ObjectKind::Parenthesized);
	let mut out = Vec::new();
	list_objects(&keymap, &mut out).unwrap();
	let out = String::from_utf8(out).unwrap();
	let lines: Vec<&str> = out.lines().collect();

	assert_eq!(lines.len(), 13);
	assert!(lines[0].starts_with("w  word "));
	assert!(lines[4].starts_with("(  parenthesized "));
	assert!(lines[12].starts_with("b  parenthesized "));
}

#[test]
fn test_missing_file_is_error() {
	let dir = tempfile::tempdir().unwrap();
	let missing = dir.path().join("missing.txt");
	let cli = cli(&[missing.to_str().unwrap(), "iw"]);

	let err = run(&cli, Keymap::builtin(), &mut Vec::<u8>::new()).unwrap_err();
	assert!(err.to_string().starts_with("reading "));
}
