use log::LevelFilter;
use salvo::{short_target, LogFilter};

#[test]
fn test_bare_level_sets_default() {
    let filter = LogFilter::parse("debug");
    assert_eq!(filter.level_for("salvo::placement"), LevelFilter::Debug);
    assert_eq!(filter.max_level(), LevelFilter::Debug);
}

#[test]
fn test_empty_defaults_to_info() {
    let filter = LogFilter::parse("");
    assert_eq!(filter.level_for("salvo::ai"), LevelFilter::Info);
    assert_eq!(filter, LogFilter::parse("bogus"));
}

#[test]
fn test_module_directive_overrides_default() {
    let filter = LogFilter::parse("warn, salvo::placement=trace");
    assert_eq!(filter.level_for("salvo::placement"), LevelFilter::Trace);
    assert_eq!(filter.level_for("salvo::ai"), LevelFilter::Warn);
    // prefix must end on a module boundary
    assert_eq!(filter.level_for("salvo::placements"), LevelFilter::Warn);
    assert_eq!(filter.max_level(), LevelFilter::Trace);
}

#[test]
fn test_most_specific_directive_wins() {
    let filter = LogFilter::parse("salvo=debug,salvo::hunt=off");
    assert_eq!(filter.level_for("salvo::hunt"), LevelFilter::Off);
    assert_eq!(filter.level_for("salvo::game"), LevelFilter::Debug);
    assert_eq!(filter.level_for("sim"), LevelFilter::Info);
}

#[test]
fn test_short_target() {
    assert_eq!(short_target("salvo::placement"), "placement");
    assert_eq!(short_target("sim"), "sim");
}
