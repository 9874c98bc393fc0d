//! Definition fuzz target: feed arbitrary text to the definition parser and the
//! full compiler. Neither may panic; both return Ok or Err.
//! Build with: cargo fuzz run definition_fuzz (requires nightly and cargo fuzz).

#![cfg_attr(fuzzing, no_main)]

#[cfg(fuzzing)]
use libfuzzer_sys::fuzz_target;

#[cfg(fuzzing)]
fuzz_target!(|data: &[u8]| {
    let s = match std::str::from_utf8(data) {
        Ok(x) => x,
        Err(_) => return,
    };
    let _ = fieldlayout::parse_definition(s);
    let lines: Vec<&str> = s.lines().collect();
    let _ = fieldlayout::compile("Fuzz", &lines);
});

#[cfg(not(fuzzing))]
fn main() {
    eprintln!("Build with: cargo fuzz run definition_fuzz");
}
