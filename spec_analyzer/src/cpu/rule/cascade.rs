//!
//! The ordered CPU classification cascade.
//!

use super::Brand;
use super::Matcher;
use super::Model;
use super::Rule;

/// The brand of names no rule recognizes.
pub const UNKNOWN_BRAND: &str = "Unknown";

/// The model of Xeon names without a recognizable model number.
pub const UNSPECIFIED_XEON: &str = "Xeon (unspecified model)";

fn pattern(pattern: &str) -> Matcher {
    Matcher::Pattern(regex::Regex::new(pattern).expect("Always valid"))
}

lazy_static::lazy_static! {
    ///
    /// The rules, most specific first. The first matching rule wins.
    ///
    pub static ref CASCADE: Vec<Rule> = vec![
        // Pentium II and III, including their Xeon variants
        Rule::new(
            Matcher::Contains(&["Pentium III", "PentiumIII"]),
            Brand::Fixed("Intel Pentium"),
            Model::XeonSuffixed("Pentium III"),
        ),
        Rule::new(
            Matcher::Contains(&["Pentium II"]),
            Brand::Fixed("Intel Pentium"),
            Model::XeonSuffixed("Pentium II"),
        ),
        // Xeon by model number
        Rule::xeon(pattern(r"E7-[^\s]+"), Brand::Fixed("Intel Xeon"), Model::Matched("Xeon ")),
        Rule::xeon(pattern(r"E3-[^\s]+"), Brand::Fixed("Intel Xeon"), Model::Matched("Xeon ")),
        Rule::xeon(
            pattern(r"[A-Z]?(\d)\d{3}[A-Z]?"),
            Brand::Fixed("Intel Xeon"),
            Model::Matched("Xeon "),
        ),
        Rule::xeon(
            Matcher::Equals(&["Intel Xeon MP"]),
            Brand::Fixed("Intel Xeon"),
            Model::Fixed("Xeon MP"),
        ),
        Rule::xeon(
            Matcher::Equals(&["Intel Xeon", "Xeon"]),
            Brand::Fixed("Intel Xeon"),
            Model::Fixed(UNSPECIFIED_XEON),
        ),
        Rule::xeon(
            pattern(r"^Intel Xeon (\d\.\d|2M Cache)(Hz)?"),
            Brand::Fixed("Intel Xeon"),
            Model::Fixed(UNSPECIFIED_XEON),
        ),
        Rule::xeon(
            Matcher::StartsWith("Intel Xeon LV"),
            Brand::Fixed("Intel Xeon"),
            Model::Fixed("Xeon LV"),
        ),
        Rule::xeon(
            Matcher::StartsWith("Intel LV Xeon 400"),
            Brand::Fixed("Intel Xeon"),
            Model::Fixed("Xeon LV"),
        ),
        // Core generations
        Rule::new(Matcher::StartsWith("Intel Core i"), Brand::Fixed("Intel Core"), Model::Tail("", 6)),
        Rule::new(Matcher::StartsWith("Intel Core 2 "), Brand::Fixed("Intel Core"), Model::Tail("", 6)),
        Rule::new(
            Matcher::StartsWith("Intel Core2 "),
            Brand::Fixed("Intel Core"),
            Model::Tail("Core 2 ", 12),
        ),
        Rule::new(Matcher::StartsWith("Intel Core "), Brand::Fixed("Intel Core"), Model::Tail("", 6)),
        Rule::new(
            Matcher::StartsWith("Intel Pentium D"),
            Brand::Fixed("Intel Pentium"),
            Model::Tail("", 6),
        ),
        // R10000 and later MIPS
        Rule::new(pattern(r"^R1\d000"), Brand::Fixed("MIPS"), Model::Cleaned),
        Rule::new(pattern(r"^MIPS (R1\d000)"), Brand::Fixed("MIPS"), Model::Group("", 1)),
        // Pentium family
        Rule::new(pattern(r"Pentium 4.*"), Brand::Fixed("Intel Pentium"), Model::Matched("")),
        Rule::new(
            Matcher::Equals(&["Intel P4"]),
            Brand::Fixed("Intel Pentium"),
            Model::Fixed("Pentium 4"),
        ),
        Rule::new(
            Matcher::Equals(&["Pentium"]),
            Brand::Fixed("Intel Pentium"),
            Model::Fixed("Pentium"),
        ),
        Rule::new(
            Matcher::Equals(&["Pentium Pro", "Pentium-Pro"]),
            Brand::Fixed("Intel Pentium"),
            Model::Fixed("Pentium Pro"),
        ),
        Rule::new(
            pattern(r"^Intel Pentium ((?:M )?[A-Z]?\d{3,4}T?)"),
            Brand::Fixed("Intel Pentium"),
            Model::Group("Pentium ", 1),
        ),
        Rule::new(
            Matcher::StartsWith("Intel Pentium"),
            Brand::Fixed("Intel Pentium"),
            Model::Tail("", 6),
        ),
        Rule::new(
            Matcher::Equals(&["Celeron"]),
            Brand::Fixed("Intel Celeron"),
            Model::Fixed("Celeron"),
        ),
        Rule::new(
            Matcher::StartsWith("Intel Celeron"),
            Brand::Fixed("Intel Celeron"),
            Model::Tail("", 6),
        ),
        // Alpha
        Rule::new(pattern(r"21\d64[A-Z]*"), Brand::Fixed("DEC Alpha"), Model::Matched("Alpha ")),
        // POWER and PowerPC
        Rule::new(Matcher::StartsWith("POWER"), Brand::Fixed("IBM POWER"), Model::Matched("")),
        Rule::new(pattern(r"PowerPC.*"), Brand::Fixed("PowerPC"), Model::Matched("")),
        Rule::new(
            Matcher::Equals(&["RS64 IV", "RS64 II"]),
            Brand::Fixed("PowerPC"),
            Model::Matched(""),
        ),
        Rule::new(Matcher::StartsWith("Power"), Brand::Fixed("IBM POWER"), Model::Uppercase(0)),
        Rule::new(Matcher::StartsWith("IBM Power"), Brand::Fixed("IBM POWER"), Model::Uppercase(4)),
        Rule::new(Matcher::StartsWith("P2SC"), Brand::Fixed("IBM POWER"), Model::Fixed("P2SC")),
        // Older MIPS
        Rule::new(Matcher::StartsWith("MIPS"), Brand::Fixed("MIPS"), Model::Word(1)),
        Rule::new(pattern(r"^(100 )?R\d{4}"), Brand::Fixed("MIPS"), Model::Cleaned),
        // SPARC
        Rule::new(Matcher::StartsWith("SPARC64"), Brand::Fixed("Fujitsu SPARC"), Model::Matched("")),
        Rule::new(Matcher::StartsWith("MicroSPARC"), Brand::Fixed("Sun SPARC"), Model::Matched("")),
        Rule::new(Matcher::StartsWith("UltraSPARC"), Brand::Fixed("Sun SPARC"), Model::Matched("")),
        Rule::new(Matcher::StartsWith("SuperSPARC"), Brand::Fixed("Sun SPARC"), Model::Matched("")),
        Rule::new(Matcher::Equals(&["SPARC T3"]), Brand::Fixed("Sun SPARC"), Model::Matched("")),
        Rule::new(
            Matcher::Equals(&["TurboSPARC"]),
            Brand::Fixed("Fujitsu SPARC"),
            Model::Fixed("TurboSPARC"),
        ),
        Rule::new(
            Matcher::Equals(&["512k HyperCACHE", "HyperSPARC"]),
            Brand::Fixed("Fujitsu SPARC"),
            Model::Fixed("HyperSPARC"),
        ),
        Rule::new(
            Matcher::Equals(&["ULV Intel Pentium M"]),
            Brand::Fixed("Intel Pentium"),
            Model::Fixed("Pentium M"),
        ),
        // AMD
        Rule::new(Matcher::StartsWith("AMD FX-"), Brand::Fixed("AMD FX"), Model::Tail("", 4)),
        Rule::new(Matcher::StartsWith("AMD"), Brand::SecondWord("AMD "), Model::Words(1)),
        Rule::new(Matcher::StartsWith("Opteron"), Brand::Fixed("AMD Opteron"), Model::Matched("")),
        // Itanium
        Rule::new(
            pattern(r"Itanium.*"),
            Brand::Fixed("Intel Itanium"),
            Model::Rewritten(&[("Itanium2", "Itanium 2"), (" FSB", "")]),
        ),
        // PA-RISC
        Rule::new(
            Matcher::StartsWith("PA-"),
            Brand::Fixed("HP PA-RISC"),
            Model::Rewritten(&[("PA-RISC ", "PA-"), ("_", "")]),
        ),
        Rule::new(
            Matcher::Equals(&["PA8600"]),
            Brand::Fixed("HP PA-RISC"),
            Model::Fixed("PA-8600"),
        ),
        // Last resorts consulting the submission as reported
        Rule::new(
            Matcher::RawContains("Xeon"),
            Brand::Fixed("Intel Xeon"),
            Model::Fixed(UNSPECIFIED_XEON),
        ),
        Rule::new(
            Matcher::MachineEquals("AlphaServer 2100A 5/300"),
            Brand::Fixed("DEC Alpha"),
            Model::Fixed("Alpha 21164"),
        ),
    ];
}
