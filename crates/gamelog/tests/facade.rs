#![cfg(feature = "enabled")]

use gamelog::sink::MemorySink;
use gamelog::{log_error, log_info, log_warning, Color, Console, Decoration, Severity, Sinks};
use once_cell::sync::Lazy;
use parking_lot::{Mutex, MutexGuard};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

static GLOBAL: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

struct Recorded {
    _guard: MutexGuard<'static, ()>,
    info: Arc<MemorySink>,
    warning: Arc<MemorySink>,
    error: Arc<MemorySink>,
}

/// Takes exclusive use of the global debugger and points its sinks at memory.
fn recorded() -> Recorded {
    let guard = GLOBAL.lock();
    gamelog::reset();
    let info = Arc::new(MemorySink::new());
    let warning = Arc::new(MemorySink::new());
    let error = Arc::new(MemorySink::new());
    gamelog::set_sinks(Sinks::new(info.clone(), warning.clone(), error.clone()));
    gamelog::set_console(Console::unavailable("test"));
    Recorded {
        _guard: guard,
        info,
        warning,
        error,
    }
}

#[test]
fn macros_accept_every_form() {
    let recorded = recorded();
    log_info!("plain");
    log_info!("bold", [Decoration::BOLD]);
    log_info!("categorized", "AI");
    log_info!(
        format!("{} decorated", "fully"),
        "AI",
        [Decoration::ITALIC, Decoration::color(0.0, 0.0, 1.0)],
    );

    assert_eq!(
        recorded.info.messages(),
        vec![
            "plain".to_string(),
            "<b>bold</b>".to_string(),
            "categorized".to_string(),
            "<color=#0000FF><i>fully decorated</i></color>".to_string(),
        ]
    );
}

#[test]
fn severities_use_their_own_sink() {
    let recorded = recorded();
    log_info!("i");
    log_warning!("w");
    log_error!("e");
    assert_eq!(recorded.info.messages(), vec!["i".to_string()]);
    assert_eq!(recorded.warning.messages(), vec!["w".to_string()]);
    assert_eq!(recorded.error.messages(), vec!["e".to_string()]);
}

#[test]
fn omitted_category_is_default() {
    let recorded = recorded();
    gamelog::disable_warning_category(gamelog::DEFAULT_CATEGORY);
    log_warning!("dropped");
    log_warning!("kept", "Other");
    assert_eq!(recorded.warning.messages(), vec!["kept".to_string()]);
}

#[test]
fn disabled_category_skips_arguments() {
    let recorded = recorded();
    let evaluated = AtomicUsize::new(0);
    let message = || {
        evaluated.fetch_add(1, Ordering::SeqCst);
        "expensive"
    };
    let decoration = || {
        evaluated.fetch_add(1, Ordering::SeqCst);
        Decoration::BOLD
    };

    gamelog::disable_error_category("Quiet");
    log_error!(message(), "Quiet", [decoration()]);
    assert_eq!(evaluated.load(Ordering::SeqCst), 0);
    assert!(recorded.error.is_empty());

    gamelog::enable_error_category("Quiet");
    log_error!(message(), "Quiet", [decoration()]);
    assert_eq!(evaluated.load(Ordering::SeqCst), 2);
    assert_eq!(recorded.error.messages(), vec!["<b>expensive</b>".to_string()]);
}

#[test]
fn global_toggles() {
    let recorded = recorded();
    assert!(gamelog::is_enabled(Severity::Info, "Fresh"));

    log_info!("seen", "Seen");
    gamelog::disable_all();
    log_info!("hidden", "Seen");
    log_info!("new", "Unseen");
    gamelog::enable_all();
    log_info!("back", "Seen");

    assert_eq!(
        recorded.info.messages(),
        vec!["seen".to_string(), "new".to_string(), "back".to_string()]
    );

    gamelog::disable_info_category("Mixed");
    gamelog::disable_warning_category("Mixed");
    log_info!("a", "Mixed");
    log_warning!("b", "Mixed");
    log_error!("c", "Mixed");
    assert_eq!(recorded.warning.len(), 0);
    assert_eq!(recorded.error.len(), 1);

    gamelog::enable_warning_category("Mixed");
    log_warning!("d", "Mixed");
    assert_eq!(recorded.warning.len(), 1);
}

#[test]
fn default_decoration_color_is_only_stored() {
    let recorded = recorded();
    assert_eq!(gamelog::default_decoration_color(), Color::DARK);
    gamelog::set_default_decoration_color(Color::LIGHT);
    assert_eq!(gamelog::default_decoration_color(), Color::LIGHT);
    log_info!("uncolored");
    assert_eq!(recorded.info.messages(), vec!["uncolored".to_string()]);
}

#[test]
fn replace_a_single_sink() {
    let recorded = recorded();
    let replacement = Arc::new(MemorySink::new());
    gamelog::set_sink(Severity::Warning, replacement.clone());
    log_warning!("moved");
    assert!(recorded.warning.is_empty());
    assert_eq!(replacement.messages(), vec!["moved".to_string()]);
}

#[test]
fn clear_console_reports_failure() {
    let _recorded = recorded();
    assert!(matches!(
        gamelog::clear_console(),
        Err(gamelog::ConsoleError::Unavailable(_))
    ));
}
