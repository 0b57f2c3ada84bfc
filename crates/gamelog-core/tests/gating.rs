use gamelog_core::sink::MemorySink;
use gamelog_core::{apply_decorations, Color, Console, Debugger, Decoration, Severity, Sinks};
use std::sync::Arc;

struct Recorded {
    debugger: Debugger,
    info: Arc<MemorySink>,
    warning: Arc<MemorySink>,
    error: Arc<MemorySink>,
}

fn recorded() -> Recorded {
    let info = Arc::new(MemorySink::new());
    let warning = Arc::new(MemorySink::new());
    let error = Arc::new(MemorySink::new());
    let debugger = Debugger::with_console(
        Sinks::new(info.clone(), warning.clone(), error.clone()),
        Console::unavailable("test"),
    );
    Recorded {
        debugger,
        info,
        warning,
        error,
    }
}

#[test]
fn fresh_categories_are_enabled() {
    let Recorded { debugger, .. } = recorded();
    for (index, severity) in Severity::ALL.into_iter().enumerate() {
        let category = format!("Fresh{}", index);
        assert!(debugger.is_enabled(severity, &category));
        assert!(debugger.is_enabled(severity, "Shared"));
    }
}

#[test]
fn disabled_category_stays_silent_until_enabled() {
    let recorded = recorded();
    let debugger = &recorded.debugger;
    debugger.disable_info_category("Physics");
    for _ in 0..10 {
        debugger.info_in("step", "Physics", &[]);
    }
    assert!(recorded.info.is_empty());

    debugger.enable_info_category("Physics");
    debugger.info_in("step", "Physics", &[]);
    assert_eq!(recorded.info.len(), 1);

    debugger.disable_info_category("Physics");
    debugger.info_in("step", "Physics", &[]);
    debugger.enable_all();
    debugger.info_in("step", "Physics", &[]);
    assert_eq!(recorded.info.len(), 2);
}

#[test]
fn severities_do_not_share_categories() {
    let recorded = recorded();
    let debugger = &recorded.debugger;
    debugger.disable_error_category("X");

    debugger.info_in("info", "X", &[]);
    debugger.warning_in("warning", "X", &[]);
    debugger.error_in("error", "X", &[]);

    assert_eq!(recorded.info.len(), 1);
    assert_eq!(recorded.warning.len(), 1);
    assert!(recorded.error.is_empty());
}

#[test]
fn disable_all_does_not_reach_new_categories() {
    let recorded = recorded();
    let debugger = &recorded.debugger;
    debugger.warning_in("first", "Declared", &[]);
    debugger.disable_all();

    debugger.warning_in("second", "Declared", &[]);
    debugger.warning_in("third", "BrandNew", &[]);

    assert_eq!(
        recorded.warning.messages(),
        vec!["first".to_string(), "third".to_string()]
    );
}

#[test]
fn quiet_warnings_never_reach_the_sink() {
    let recorded = recorded();
    recorded.debugger.disable_warning_category("Quiet");
    recorded.debugger.warning_in("boom", "Quiet", &[]);
    assert_eq!(recorded.warning.len(), 0);
}

#[test]
fn decorations_are_applied_in_order() {
    let recorded = recorded();
    let red = Decoration::from(Color::rgb(1.0, 0.0, 0.0));
    recorded.debugger.error("hi", &[Decoration::BOLD, red.clone()]);
    recorded.debugger.error("hi", &[red.clone(), Decoration::BOLD]);

    let messages = recorded.error.messages();
    assert_eq!(messages[0], "<color=#FF0000><b>hi</b></color>");
    assert_eq!(messages[1], "<b><color=#FF0000>hi</color></b>");
    assert_eq!(messages[0], apply_decorations("hi", &[Decoration::BOLD, red]));
}

#[test]
fn translucent_colors_render_rgb() {
    let recorded = recorded();
    recorded
        .debugger
        .info("x", &[Decoration::color_rgba(1.0, 0.0, 0.0, 0.5)]);
    assert_eq!(recorded.info.messages(), vec!["<color=#FF0000>x</color>".to_string()]);
}

#[test]
fn unrecognized_decorations_pass_through() {
    let recorded = recorded();
    let unknown: Decoration = "blink".parse().unwrap();
    recorded.debugger.info("steady", &[unknown]);
    assert_eq!(recorded.info.messages(), vec!["steady".to_string()]);
}

#[test]
fn registry_can_be_inspected() {
    let recorded = recorded();
    recorded.debugger.disable_info_category("b");
    recorded.debugger.info_in("a", "a", &[]);
    let categories = recorded.debugger.with_registry(|registry| {
        registry
            .table(Severity::Info)
            .categories()
            .into_iter()
            .map(|(name, enabled)| (name.to_string(), enabled))
            .collect::<Vec<_>>()
    });
    assert_eq!(
        categories,
        vec![("a".to_string(), true), ("b".to_string(), false)]
    );
}
