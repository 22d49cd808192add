use super::PwaSettings;

/// Which service-worker script body to serve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerVariant {
    EscapeHatch,
    Noop,
    Full,
}

/// Pick the worker variant for a settings snapshot, first match wins.
///
/// The escape hatch stays reachable even when the app is otherwise disabled,
/// so a previously registered real worker can be neutralized on returning
/// clients without flipping `enabled` back on. The no-op worker serves the
/// same bypass purpose at lower priority while keeping the registration
/// alive. `None` means the worker endpoint has nothing to serve.
pub fn select_worker_variant(settings: &PwaSettings) -> Option<WorkerVariant> {
    if settings.escape_hatch {
        Some(WorkerVariant::EscapeHatch)
    } else if settings.noop {
        Some(WorkerVariant::Noop)
    } else if settings.enabled {
        Some(WorkerVariant::Full)
    } else {
        None
    }
}
