use disasm_window::render::{serialize_window, write_window};
use disasm_window::{lookup, Disassembler, ExtractError, Mode};
use std::path::Path;

/// Serves a canned listing instead of running objdump.
struct FakeDisassembler(Vec<String>);

impl Disassembler for FakeDisassembler {
    fn disassemble(&self, _binary: &Path) -> Result<Vec<String>, ExtractError> {
        Ok(self.0.clone())
    }
}

struct FailingDisassembler;

impl Disassembler for FailingDisassembler {
    fn disassemble(&self, binary: &Path) -> Result<Vec<String>, ExtractError> {
        Err(ExtractError::Launch(format!(
            "cannot open binary file '{}'",
            binary.display()
        )))
    }
}

fn fake() -> FakeDisassembler {
    FakeDisassembler(
        [
            "",
            "a.out:     file format elf64-x86-64",
            "",
            "Disassembly of section .text:",
            "",
            "0000000000401000 <main>:",
            "  401000:\t55                   \tpush   %rbp",
            "  401001:\tc3                   \tret",
            "",
            "0000000000401010 <helper>:",
            "  401010:\t90                   \tnop",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect(),
    )
}

fn render(dis: &dyn Disassembler, address: &str, mode: Mode) -> Result<String, ExtractError> {
    lookup(dis, Path::new("a.out"), address, mode, |window, _| {
        let mut out = Vec::new();
        write_window(&mut out, window).expect("write to Vec");
        String::from_utf8(out).expect("utf8 output")
    })
}

#[test]
fn bounded_lookup_prints_function_and_lines() {
    let text = render(&fake(), "0x0x00401001", Mode::Bounded { before: 1, after: 1 }).unwrap();
    let expected = [
        "Function: main",
        "  401000:\t55                   \tpush   %rbp",
        "  401001:\tc3                   \tret",
        "",
    ];
    assert_eq!(text, format!("{}\n", expected.join("\n")));
}

#[test]
fn full_function_lookup() {
    let text = render(&fake(), "401000", Mode::FullFunction).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "Function: main");
    assert_eq!(lines[1], "0000000000401000 <main>:");
    assert_eq!(lines.last(), Some(&"  401001:\tc3                   \tret"));
    assert_eq!(lines.len(), 4);
}

#[test]
fn full_function_in_last_function_runs_to_end() {
    let text = render(&fake(), "0X401010", Mode::FullFunction).unwrap();
    assert_eq!(
        text,
        "Function: helper\n0000000000401010 <helper>:\n  401010:\t90                   \tnop\n"
    );
}

#[test]
fn absent_address_reports_normalized_form() {
    let err = render(&fake(), "0xDEADBEEF", Mode::default()).unwrap_err();
    assert!(matches!(err, ExtractError::NotFound(ref a) if a == "deadbeef"));
    assert_eq!(err.to_string(), "Address 0xdeadbeef not found in disassembly.");
}

#[test]
fn empty_disassembly_is_reported_separately() {
    let err = render(&FakeDisassembler(Vec::new()), "401000", Mode::default()).unwrap_err();
    assert!(matches!(err, ExtractError::EmptyInput));
    assert_eq!(err.to_string(), "Disassembly failed or binary invalid.");
}

#[test]
fn launch_failure_propagates() {
    let err = render(&FailingDisassembler, "401000", Mode::default()).unwrap_err();
    assert!(matches!(err, ExtractError::Launch(_)));
}

#[test]
fn json_rendering_through_lookup() {
    let v = lookup(
        &fake(),
        Path::new("a.out"),
        "401010",
        Mode::Bounded { before: 0, after: 0 },
        serialize_window,
    )
    .unwrap();
    assert_eq!(v["function"], "helper");
    assert_eq!(v["address"], "0x401010");
    assert_eq!(v["lines"].as_array().map(|a| a.len()), Some(1));
}

#[cfg(unix)]
#[test]
fn objdump_disassembler_runs_external_program() {
    use disasm_window::ObjdumpDisassembler;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let binary = dir.path().join("a.out");
    fs::write(&binary, b"\x7fELF").unwrap();

    let script = dir.path().join("fake-objdump");
    fs::write(
        &script,
        concat!(
            "#!/bin/sh\n",
            "printf '0000000000401000 <main>:\\n  401000:\\tpush %%rbp\\n  401001:\\tret\\n'\n",
        ),
    )
    .unwrap();
    fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();

    let dis = ObjdumpDisassembler::new(&script);
    let lines = dis.disassemble(&binary).unwrap();
    assert_eq!(
        lines,
        vec!["0000000000401000 <main>:", "  401000:\tpush %rbp", "  401001:\tret"]
    );

    let failing = dir.path().join("failing-objdump");
    fs::write(
        &failing,
        "#!/bin/sh\necho 'objdump: a.out: file format not recognized' >&2\nexit 1\n",
    )
    .unwrap();
    fs::set_permissions(&failing, fs::Permissions::from_mode(0o755)).unwrap();
    let err = ObjdumpDisassembler::new(&failing).disassemble(&binary).unwrap_err();
    assert!(matches!(
        err,
        ExtractError::Launch(ref m) if m.contains("file format not recognized")
    ));
}
