//!
//! The dialect report parser tests.
//!

use std::path::Path;

use crate::model::BenchType;
use crate::model::Dialect;
use crate::model::Score;

use super::error::Error;
use super::outcome::Outcome;
use super::Parser;

const CPU95_TERMINATOR: &str =
    "   ------------  --------  --------  --------  --------  --------  --------";
const CPU2000_TERMINATOR: &str =
    "   ========================================================================";
const CPU2006_TERMINATOR: &str =
    "==============================================================================";

fn row(name: &str, base: &str, peak: &str) -> String {
    format!("{name:<35}{base:>10}{:<20}{peak:>10}", "")
}

fn row_2006(name: &str, base: &str, peak: &str) -> String {
    format!("{name:<33}{base:>10}{:<22}{peak:>10}", "")
}

fn peak_line(text: &str, peak: &str) -> String {
    format!("{text:<65}{peak:>10}")
}

fn property_95(label: &str, description: &str) -> String {
    format!("{label:>19}: {description}")
}

fn property(label: &str, description: &str) -> String {
    format!("{label:>20}: {description}")
}

fn cpu95(header: &[&str], label: &str, properties: &[(&str, &str)]) -> String {
    let mut lines = vec!["                        SPEC CINT95 Summary".to_owned()];
    lines.extend(header.iter().map(|line| (*line).to_owned()));
    lines.push("   Benchmark       Reference   Base      Base      Peak      Peak".to_owned());
    lines.push(CPU95_TERMINATOR.to_owned());
    lines.push(row("099.go", "100", "110"));
    lines.push(row("124.m88ksim", "400", "420"));
    lines.push(format!("   {label:<32}{:>10}", "200"));
    lines.push(peak_line("   SPECint95 (Geom. Mean)", "215"));
    lines.push(String::new());
    lines.push("HARDWARE".to_owned());
    lines.push("--------".to_owned());
    lines.extend(
        properties
            .iter()
            .map(|(label, description)| property_95(label, description)),
    );
    lines.push("NOTES".to_owned());
    lines.push(property_95("Compiler", "ignored after notes"));
    lines.join("\n")
}

const CPU95_PROPERTIES: [(&str, &str); 7] = [
    ("Model Name", "AlphaStation 600 5/333"),
    ("CPU", "333MHz Alpha 21164"),
    ("Hardware Avail", "Jun-96"),
    ("Operating System", "Digital UNIX V4.0B"),
    ("Compiler", "DEC C V5.2-036"),
    ("Tested By", "Digital Equipment"),
    ("Memory", "256MB"),
];

fn cpu2000(marker: Option<&str>, label: &str) -> String {
    let mut lines = vec![
        "                           SPEC CINT2000 Summary".to_owned(),
        "        ACME Corp  ACME Workstation 400".to_owned(),
        "  SPEC license #:  14      Hardware availability: Mar-2001".to_owned(),
        "  Tester: ACME Corp        Software availability: Jan-2001".to_owned(),
    ];
    if let Some(marker) = marker {
        lines.push(marker.to_owned());
    }
    lines.push(CPU2000_TERMINATOR.to_owned());
    lines.push(row("164.gzip", "512", "530"));
    lines.push(String::new());
    lines.push(row("175.vpr", "498", "--"));
    lines.push(format!("   {label:<32}{:>10}", "505"));
    lines.push(peak_line("   SPECint2000", "--"));
    lines.push("HARDWARE".to_owned());
    lines.push("--------".to_owned());
    lines.push(property("Model Name", "ACME Workstation 400"));
    lines.push(property("CPU", "Intel Pentium III"));
    lines.push(format!("{:22}{}", "", "processor"));
    lines.push(property("CPU MHz", "1000"));
    lines.push("SOFTWARE".to_owned());
    lines.push(property("Operating System", "Windows 2000"));
    lines.push(property("Compiler", "Intel C++ 5.0.1"));
    lines.push("NOTES".to_owned());
    lines.join("\n")
}

fn cpu2006(first: &str, marker: Option<&str>, label: &str) -> String {
    let mut lines = vec![
        first.to_owned(),
        "ACME Corp ACME Server 9000 (Intel Xeon X5355)".to_owned(),
        "CPU2006 license: 9       Hardware availability: Jan-2007".to_owned(),
        "Tested by:    ACME Corp       Software availability: Dec-2006".to_owned(),
    ];
    if let Some(marker) = marker {
        lines.push(marker.to_owned());
    }
    lines.push(CPU2006_TERMINATOR.to_owned());
    lines.push(row_2006("400.perlbench", "15.2", "16.1"));
    lines.push(row_2006("401.bzip2", "12.8", "13.0"));
    lines.push(row_2006("429.mcf", "18.4", "19.9"));
    lines.push(format!(" {label:<32}{:>10}", "15.3"));
    lines.push(peak_line(" SPECint(R)2006", "16.2"));
    lines.push("HARDWARE".to_owned());
    lines.push("--------".to_owned());
    lines.push(property("CPU Name", "Intel Xeon X5355"));
    lines.push(property("CPU MHz", "2660"));
    lines.push("SOFTWARE".to_owned());
    lines.push("--------".to_owned());
    lines.push(property("Operating System", "SUSE Linux Enterprise Server 10"));
    lines.push(property("Compiler", "Intel C++ Compiler 10.0"));
    lines.push(property("Auto Parallel", "Yes"));
    lines.push("Submit Notes".to_owned());
    lines.join("\n")
}

#[test]
fn cpu95_two_rows() {
    let text = cpu95(&[], "SPECint_base95 (Geom. Mean)", &CPU95_PROPERTIES);
    let outcome = Parser::new(Path::new("scraped/cpu95/a00001.asc"), Dialect::Cpu95)
        .parse(text.as_str())
        .expect("Parsing failed");

    let (tests, benches) = outcome.into_records();
    assert_eq!(tests.len(), 1);
    let test = &tests[0];
    assert_eq!(test.test_id, "a00001");
    assert_eq!(test.bench_type, BenchType::Cint95);
    assert_eq!(test.machine, "AlphaStation 600 5/333");
    assert_eq!(test.cpu, "333MHz Alpha 21164");
    assert_eq!(test.mhz, 333.0);
    assert_eq!(test.hw_avail, "Jun-1996");
    assert_eq!(test.tester, "Digital Equipment");
    assert_eq!(test.os, "Digital UNIX V4.0B");
    assert_eq!(test.compiler, "DEC C V5.2-036");
    assert!(!test.auto_parallel);
    assert_eq!(test.base, Score::new("200"));
    assert_eq!(test.peak, Score::new("215"));

    assert_eq!(benches.len(), 2);
    assert_eq!(benches[0].test_id, "a00001");
    assert_eq!(benches[0].bench_name, "099.go");
    assert_eq!(benches[0].base, Score::new("100"));
    assert_eq!(benches[0].peak, Score::new("110"));
    assert_eq!(benches[1].bench_name, "124.m88ksim");
    assert_eq!(benches[1].base.value(), Some(400.0));
}

#[test]
fn cpu95_disqualified_regardless_of_body() {
    let text = format!(
        "{}\n   SPEC has determined that this result was not in\n   compliance.\n{}\ngarbage\n",
        "                        SPEC CINT95 Summary", CPU95_TERMINATOR,
    );
    let outcome = Parser::new(Path::new("a00002.asc"), Dialect::Cpu95)
        .parse(text.as_str())
        .expect("Parsing failed");

    assert_eq!(outcome, Outcome::Disqualified);
    assert_eq!(outcome.into_records(), (vec![], vec![]));
}

#[test]
fn cpu95_rate_is_excluded() {
    let text = cpu95(&[], "SPECint_rate_base95 (Geom. Mean)", &CPU95_PROPERTIES);
    let outcome = Parser::new(Path::new("a00003.asc"), Dialect::Cpu95)
        .parse(text.as_str())
        .expect("Parsing failed");

    assert_eq!(outcome, Outcome::RateExcluded);
}

#[test]
fn cpu95_unrecognized_label() {
    let text = cpu95(&[], "SPECint_base96 (Geom. Mean)", &CPU95_PROPERTIES);
    let result = Parser::new(Path::new("a00004.asc"), Dialect::Cpu95).parse(text.as_str());

    match result {
        Err(Error::UnrecognizedBenchmarkLabel { label, .. }) => {
            assert_eq!(label, "SPECint_base96 (Geom. Mean)")
        }
        result => panic!("Unexpected result: {result:?}"),
    }
}

#[test]
fn cpu95_missing_required_field() {
    let properties: Vec<(&str, &str)> = CPU95_PROPERTIES
        .iter()
        .copied()
        .filter(|(label, _)| *label != "Compiler")
        .collect();
    let text = cpu95(&[], "SPECint_base95 (Geom. Mean)", properties.as_slice());
    let result = Parser::new(Path::new("a00005.asc"), Dialect::Cpu95).parse(text.as_str());

    match result {
        Err(Error::MissingRequiredField { key, .. }) => assert_eq!(key, "Compiler"),
        result => panic!("Unexpected result: {result:?}"),
    }
}

#[test]
fn cpu95_malformed_clock_speed() {
    let mut properties = CPU95_PROPERTIES;
    properties[1] = ("CPU", "Alpha 21164");
    let text = cpu95(&[], "SPECint_base95 (Geom. Mean)", &properties);
    let result = Parser::new(Path::new("a00006.asc"), Dialect::Cpu95).parse(text.as_str());

    match result {
        Err(Error::MalformedClockSpeed { text, .. }) => assert_eq!(text, "Alpha 21164"),
        result => panic!("Unexpected result: {result:?}"),
    }
}

#[test]
fn cpu95_companion_fallback() {
    let directory = tempfile::tempdir().expect("Temporary directory creation failed");
    let properties: Vec<(&str, &str)> = CPU95_PROPERTIES
        .iter()
        .copied()
        .filter(|(label, _)| *label != "Hardware Avail" && *label != "Tested By")
        .collect();
    let text = cpu95(&[], "SPECfp_base95 (Geom. Mean)", properties.as_slice());
    let report = directory.path().join("f00001.asc");
    std::fs::write(report.as_path(), text).expect("Report writing failed");
    std::fs::write(
        directory.path().join("f00001.html"),
        "<TR><TD>Hardware Avail:\n    <TD align=left>Sep-95 </TD>\n<TR><TD>Tested By:  <TD align=left>ACME Labs \n",
    )
    .expect("Companion writing failed");

    let outcome = Parser::new(report.as_path(), Dialect::Cpu95)
        .parse_file()
        .expect("Parsing failed");

    let (tests, benches) = outcome.into_records();
    assert_eq!(tests[0].bench_type, BenchType::Cfp95);
    assert_eq!(tests[0].hw_avail, "Sep-1995");
    assert_eq!(tests[0].tester, "ACME Labs");
    assert_eq!(benches.len(), 2);
}

#[test]
fn cpu95_missing_companion() {
    let directory = tempfile::tempdir().expect("Temporary directory creation failed");
    let properties: Vec<(&str, &str)> = CPU95_PROPERTIES
        .iter()
        .copied()
        .filter(|(label, _)| *label != "Tested By")
        .collect();
    let text = cpu95(&[], "SPECint_base95 (Geom. Mean)", properties.as_slice());
    let report = directory.path().join("f00002.asc");
    std::fs::write(report.as_path(), text).expect("Report writing failed");

    let result = Parser::new(report.as_path(), Dialect::Cpu95).parse_file();

    assert!(matches!(result, Err(Error::CompanionReading { .. })));
}

#[test]
fn cpu2000_preamble_fields() {
    let text = cpu2000(None, "SPECint_base2000");
    let outcome = Parser::new(Path::new("cpu2000-20010312-00462.asc"), Dialect::Cpu2000)
        .parse(text.as_str())
        .expect("Parsing failed");

    let (tests, benches) = outcome.into_records();
    let test = &tests[0];
    assert_eq!(test.test_id, "cpu2000-20010312-00462");
    assert_eq!(test.bench_type, BenchType::Cint2000);
    assert_eq!(test.tester, "ACME Corp");
    assert_eq!(test.hw_avail, "Mar-2001");
    assert_eq!(test.cpu, "Intel Pentium III processor");
    assert_eq!(test.mhz, 1000.0);
    assert_eq!(test.machine, "ACME Workstation 400");
    assert_eq!(test.base, Score::new("505"));
    assert_eq!(test.peak, Score::new("--"));

    assert_eq!(benches.len(), 2);
    assert_eq!(benches[1].bench_name, "175.vpr");
    assert_eq!(benches[1].peak.value(), None);
}

#[test]
fn cpu2000_disqualified() {
    let text = cpu2000(
        Some("   SPEC has determined that this result was not in compliance"),
        "SPECint_base2000",
    );
    let outcome = Parser::new(Path::new("x.asc"), Dialect::Cpu2000)
        .parse(text.as_str())
        .expect("Parsing failed");

    assert_eq!(outcome, Outcome::Disqualified);
}

#[test]
fn cpu2000_ignores_newest_dialect_marker() {
    let text = cpu2000(
        Some("   SPEC has determined that this result is not in compliance"),
        "SPECfp_base2000",
    );
    let outcome = Parser::new(Path::new("x.asc"), Dialect::Cpu2000)
        .parse(text.as_str())
        .expect("Parsing failed");

    assert!(matches!(outcome, Outcome::Admitted { .. }));
}

#[test]
fn cpu2000_rate_is_excluded() {
    let text = cpu2000(None, "SPECint_rate_base2000");
    let outcome = Parser::new(Path::new("x.asc"), Dialect::Cpu2000)
        .parse(text.as_str())
        .expect("Parsing failed");

    assert_eq!(outcome, Outcome::RateExcluded);
}

#[test]
fn cpu2006_machine_and_auto_parallel() {
    let text = cpu2006(
        "                  SPEC CINT2006 Summary",
        None,
        "SPECint(R)_base2006",
    );
    let outcome = Parser::new(Path::new("cpu2006-20070102-00001.txt"), Dialect::Cpu2006)
        .parse(text.as_str())
        .expect("Parsing failed");

    let (tests, benches) = outcome.into_records();
    let test = &tests[0];
    assert_eq!(test.bench_type, BenchType::Cint2006);
    assert_eq!(test.machine, "ACME Server 9000 (Intel Xeon X5355)");
    assert_eq!(test.tester, "ACME Corp");
    assert_eq!(test.hw_avail, "Jan-2007");
    assert_eq!(test.cpu, "Intel Xeon X5355");
    assert_eq!(test.mhz, 2660.0);
    assert!(test.auto_parallel);
    assert_eq!(test.base, Score::new("15.3"));
    assert_eq!(test.peak, Score::new("16.2"));

    let names: Vec<&str> = benches
        .iter()
        .map(|bench| bench.bench_name.as_str())
        .collect();
    assert_eq!(names, vec!["400.perlbench", "401.bzip2", "429.mcf"]);
    assert_eq!(benches[0].base, Score::new("15.2"));
    assert_eq!(benches[2].peak, Score::new("19.9"));
}

#[test]
fn cpu2006_is_not_in_compliance() {
    let text = cpu2006(
        "                  SPEC CINT2006 Summary",
        Some("  SPEC has determined that this result is not in compliance"),
        "SPECint(R)_base2006",
    );
    let outcome = Parser::new(Path::new("x.txt"), Dialect::Cpu2006)
        .parse(text.as_str())
        .expect("Parsing failed");

    assert_eq!(outcome, Outcome::Disqualified);
}

#[test]
fn cpu2006_banner() {
    let text = cpu2006(
        "##################################################",
        None,
        "SPECint(R)_base2006",
    );
    let outcome = Parser::new(Path::new("x.txt"), Dialect::Cpu2006)
        .parse(text.as_str())
        .expect("Parsing failed");

    assert_eq!(outcome, Outcome::Disqualified);
}

#[test]
fn cpu2006_floating_point_rate() {
    let text = cpu2006(
        "                  SPEC CFP2006 Summary",
        None,
        "SPECfp(R)_rate_base2006",
    );
    let outcome = Parser::new(Path::new("x.txt"), Dialect::Cpu2006)
        .parse(text.as_str())
        .expect("Parsing failed");

    assert_eq!(outcome, Outcome::RateExcluded);
}

#[test]
fn truncated_table() {
    let text = format!(
        "                  SPEC CINT95 Summary\n{}\n{}\n",
        CPU95_TERMINATOR,
        row("099.go", "100", "110"),
    );
    let result = Parser::new(Path::new("t.asc"), Dialect::Cpu95).parse(text.as_str());

    assert!(matches!(
        result,
        Err(Error::UnexpectedEnd {
            section: "benchmark table",
            ..
        })
    ));
}

#[test]
fn missing_header_terminator() {
    let text = "                  SPEC CINT95 Summary\nnothing else\n";
    let result = Parser::new(Path::new("t.asc"), Dialect::Cpu95).parse(text);

    assert!(matches!(
        result,
        Err(Error::UnexpectedEnd {
            section: "header",
            ..
        })
    ));
}
