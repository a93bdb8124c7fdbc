//!
//! The CPU name cleaner.
//!

/// The noise substrings replaced with a space, in order.
pub const NOISE: [&str; 19] = [
    "(TM)",
    "(R)",
    "processor",
    "Processor",
    "\u{ae}",
    "\u{99}",
    "supporting Hyper-Threading Technology",
    "with Hyper-Threading Technology",
    "with HT Technology",
    "dual-core",
    "Dual-Core",
    "Quad-Core",
    "Dual Core",
    "Single Chip",
    "w/ MMX technology",
    "with MMX technology",
    "with 2MB L2 Cache",
    "64-bit",
    "Model",
];

lazy_static::lazy_static! {
    /// A parenthesized aside.
    static ref PARENTHESIZED: regex::Regex =
        regex::Regex::new(r"\([^)]*\)").expect("Always valid");

    /// An embedded clock speed.
    static ref CLOCK_SPEED: regex::Regex =
        regex::Regex::new(r"/?\d+(?:\.\d+)?[Aa]? ?[mMgG][hH][zZ]").expect("Always valid");
}

///
/// Strips the noise from a free-text CPU name.
///
/// Trademark glyphs, marketing qualifiers, parenthesized asides and clock
/// speeds are removed, everything after the first comma is dropped and
/// whitespace runs are collapsed.
///
pub fn clean(cpu: &str) -> String {
    let mut cpu = cpu.to_owned();
    for noise in NOISE {
        cpu = cpu.replace(noise, " ");
    }
    let cpu = PARENTHESIZED.replace_all(cpu.as_str(), " ");
    let cpu = CLOCK_SPEED.replace_all(&cpu, " ");
    let cpu = cpu.split(',').next().unwrap_or_default();
    cpu.split_whitespace().collect::<Vec<&str>>().join(" ")
}
