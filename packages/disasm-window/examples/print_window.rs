use disasm_window::render::write_window;
use disasm_window::{extract, Mode, NormalizedAddress};

fn main() {
    let lines: Vec<String> = [
        "0000000000401000 <main>:",
        "  401000:\t55\tpush   %rbp",
        "  401001:\tc3\tret",
        "0000000000401010 <helper>:",
        "  401010:\t90\tnop",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();

    let address = NormalizedAddress::new("0x401001");
    for mode in [Mode::Bounded { before: 1, after: 1 }, Mode::FullFunction] {
        match extract(&lines, &address, mode) {
            Ok(window) => write_window(&mut std::io::stdout(), &window).unwrap(),
            Err(e) => eprintln!("{}", e),
        }
    }
}
