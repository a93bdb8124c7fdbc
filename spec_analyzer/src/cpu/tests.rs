//!
//! The CPU identity resolver tests.
//!

use crate::model::BenchType;
use crate::model::Score;
use crate::model::TestRecord;

use super::classify;
use super::cleaner::clean;
use super::is_within_percent;
use super::identified;
use super::CpuDatabase;

fn check(cpu: &str, brand: &str, model: &str) {
    assert_eq!(
        classify(cpu, ""),
        (brand.to_owned(), model.to_owned()),
        "CPU name `{cpu}`"
    );
}

#[test]
fn clean_strips_noise() {
    assert_eq!(
        clean("Intel(R) Xeon(TM) processor 2.80GHz, 512KB L2"),
        "Intel Xeon"
    );
    assert_eq!(clean("Pentium\u{ae} III 1000MHz"), "Pentium III");
    assert_eq!(
        clean("AMD Athlon(tm) 64 FX-55 Processor"),
        "AMD Athlon 64 FX-55"
    );
    assert_eq!(clean("Dual-Core AMD Opteron 2218"), "AMD Opteron 2218");
    assert_eq!(clean("  UltraSPARC-II   400/8MB "), "UltraSPARC-II 400/8MB");
}

#[test]
fn pentium_iii_xeon_suffix() {
    check("Intel Pentium III Xeon", "Intel Pentium", "Pentium III Xeon");
    check("Intel Pentium III", "Intel Pentium", "Pentium III");
    check("Pentium II 450MHz", "Intel Pentium", "Pentium II");
}

#[test]
fn xeon_models() {
    check("Intel Xeon E7-4870", "Intel Xeon", "Xeon E7-4870");
    check("Intel Xeon E3-1280 v2", "Intel Xeon", "Xeon E3-1280");
    check("Intel Xeon X5355", "Intel Xeon", "Xeon X5355");
    check("Intel Xeon 5160", "Intel Xeon", "Xeon 5160");
    check("Intel Xeon MP", "Intel Xeon", "Xeon MP");
    check("Intel Xeon", "Intel Xeon", "Xeon (unspecified model)");
    check("Intel Xeon 3.6GHz", "Intel Xeon", "Xeon (unspecified model)");
    check("Intel Xeon LV", "Intel Xeon", "Xeon LV");
}

#[test]
fn core_generations() {
    check("Intel Core i7-920", "Intel Core", "Core i7-920");
    check("Intel Core 2 Duo E6700", "Intel Core", "Core 2 Duo E6700");
    check("Intel Core2 Extreme X6800", "Intel Core", "Core 2 Extreme X6800");
    check("Intel Core Duo T2600", "Intel Core", "Core Duo T2600");
}

#[test]
fn pentium_family() {
    check("Intel Pentium D 940", "Intel Pentium", "Pentium D 940");
    check("Intel Pentium 4 Extreme Edition", "Intel Pentium", "Pentium 4 Extreme Edition");
    check("Intel P4", "Intel Pentium", "Pentium 4");
    check("Pentium Pro 200MHz", "Intel Pentium", "Pentium Pro");
    check("Intel Pentium M 755", "Intel Pentium", "Pentium M 755");
    check("Intel Pentium Extreme Edition 965", "Intel Pentium", "Pentium Extreme Edition 965");
    check("ULV Intel Pentium M", "Intel Pentium", "Pentium M");
    check("Intel Celeron D 346", "Intel Celeron", "Celeron D 346");
}

#[test]
fn risc_families() {
    check("Alpha 21164A", "DEC Alpha", "Alpha 21164A");
    check("POWER4+", "IBM POWER", "POWER4+");
    check("PowerPC 604e", "PowerPC", "PowerPC 604e");
    check("Power5", "IBM POWER", "POWER5");
    check("IBM Power6", "IBM POWER", "POWER6");
    check("MIPS R12000", "MIPS", "R12000");
    check("R10000", "MIPS", "R10000");
    check("MIPS R4400", "MIPS", "R4400");
    check("MIPS R4400 SC", "MIPS", "R4400");
    check("R4400 SC", "MIPS", "R4400 SC");
    check("100 R4600", "MIPS", "100 R4600");
    check("R10000 IP25", "MIPS", "R10000 IP25");
    check("MIPS R12000 IP27", "MIPS", "R12000");
    check("UltraSPARC-III Cu", "Sun SPARC", "UltraSPARC-III Cu");
    check("SPARC64 VI", "Fujitsu SPARC", "SPARC64 VI");
    check("HyperSPARC", "Fujitsu SPARC", "HyperSPARC");
    check("PA-RISC 8700", "HP PA-RISC", "PA-8700");
    check("PA-8600", "HP PA-RISC", "PA-8600");
    check("PA8600", "HP PA-RISC", "PA-8600");
}

#[test]
fn amd_and_itanium() {
    check("AMD FX-62", "AMD FX", "FX-62");
    check("AMD Opteron 2218", "AMD Opteron", "Opteron 2218");
    check("AMD Phenom II X4 940", "AMD Phenom", "Phenom II X4 940");
    check("Opteron 248", "AMD Opteron", "Opteron 248");
    check("Intel Itanium2 1.6GHz FSB 667", "Intel Itanium", "Itanium 2 667");
}

#[test]
fn last_resorts() {
    assert_eq!(
        classify("Xeon-class part", "Some Server"),
        ("Intel Xeon".to_owned(), "Xeon (unspecified model)".to_owned())
    );
    assert_eq!(
        classify("EV5", "AlphaServer 2100A 5/300"),
        ("DEC Alpha".to_owned(), "Alpha 21164".to_owned())
    );
    check("Cyrix 6x86", "Unknown", "Cyrix 6x86");
}

#[test]
fn within_percent() {
    assert!(is_within_percent(2400.0, 2450.0, 5.0));
    assert!(is_within_percent(2450.0, 2400.0, 5.0));
    assert!(!is_within_percent(2400.0, 2600.0, 5.0));
    assert!(!is_within_percent(100.0, 105.0, 5.0));
}

#[test]
fn close_speeds_share_an_identity_in_either_order() {
    for speeds in [[2400.0, 2450.0], [2450.0, 2400.0]] {
        let mut database = CpuDatabase::default();
        let first = database.identify("Intel Xeon X5355", "", speeds[0]);
        let second = database.identify("Intel Xeon X5355 2.66GHz", "", speeds[1]);

        assert_eq!(first, second);
        assert_eq!(database.len(), 1);
        assert_eq!(database.get(first).mhz, speeds[0]);
    }
}

#[test]
fn distant_speeds_get_separate_identities() {
    for speeds in [[2400.0, 2600.0], [2600.0, 2400.0]] {
        let mut database = CpuDatabase::default();
        let first = database.identify("AMD Opteron 2218", "", speeds[0]);
        let second = database.identify("AMD Opteron 2218", "", speeds[1]);

        assert_ne!(first, second);
        assert_eq!(database.len(), 2);
        assert_eq!(database.get(first).model, database.get(second).model);
        assert_eq!(database.get(first).brand, "AMD Opteron");
    }
}

#[test]
fn first_seen_identity_wins() {
    let mut database = CpuDatabase::default();
    let slow = database.identify("Alpha 21264", "", 500.0);
    let fast = database.identify("Alpha 21264", "", 600.0);
    let between = database.identify("Alpha 21264", "", 520.0);

    assert_eq!(between, slow);
    assert_ne!(fast, slow);
    let speeds: Vec<f64> = database.iter().map(|(_, info)| info.mhz).collect();
    assert_eq!(speeds, vec![500.0, 600.0]);
}

fn record(test_id: &str, cpu: &str, mhz: f64) -> TestRecord {
    TestRecord {
        test_id: test_id.to_owned(),
        tester: "ACME".to_owned(),
        machine: "ACME Server".to_owned(),
        cpu: cpu.to_owned(),
        mhz,
        hw_avail: "Jan-2007".to_owned(),
        os: "Linux".to_owned(),
        compiler: "cc".to_owned(),
        auto_parallel: false,
        bench_type: BenchType::Cint2006,
        base: Score::new("10"),
        peak: Score::new("11"),
    }
}

#[test]
fn models_are_counted_per_brand() {
    let mut database = CpuDatabase::default();
    database.identify("AMD Opteron 2218", "", 2600.0);
    database.identify("AMD Opteron 2218", "", 2000.0);
    database.identify("AMD Opteron 248", "", 2200.0);
    database.identify("MIPS R4400 SC", "", 150.0);

    let counts: Vec<(&str, usize)> = database.models_by_brand().into_iter().collect();
    assert_eq!(counts, vec![("AMD Opteron", 2), ("MIPS", 1)]);
}

#[test]
fn identified_listing_has_one_row_per_name() {
    let tests = vec![
        record("b", "R4400 SC", 150.0),
        record("a", "MIPS R4400 SC", 150.0),
        record("c", "R4400 SC", 200.0),
    ];
    let mut database = CpuDatabase::default();

    let listing = identified::encode(&mut database, tests.iter());
    let lines: Vec<&str> = listing.lines().collect();

    assert_eq!(
        lines,
        vec![
            "brand,model,mhz,cpu,benchType,testID",
            "MIPS,R4400,150,MIPS R4400 SC,CINT2006,a",
            "MIPS,R4400 SC,200,R4400 SC,CINT2006,c",
        ]
    );
    assert_eq!(database.len(), 2);
}
