//! Name field handlers: debounced upper-casing and availability checks

use tracing::{debug, trace, warn};

use crate::name_check::Settled;
use crate::state::EditSession;

use super::{UpdateAction, UpdateResult};

/// Store the raw value and (re)start the debounce window
pub(crate) fn handle_name_input(session: &mut EditSession, value: String) -> UpdateResult {
    if session.form.name_disabled {
        debug!("Name is locked in edit mode, ignoring edit");
        return UpdateResult::none();
    }

    session.form.name = value;
    let generation = session.name_check.begin_edit();
    UpdateResult::action(UpdateAction::ScheduleNameSettle {
        generation,
        delay: session.settings.name_debounce(),
    })
}

/// The field went quiet: normalize to uppercase, then check if it changed
pub(crate) fn handle_name_settled(session: &mut EditSession, generation: u64) -> UpdateResult {
    if generation != session.name_check.generation() {
        trace!("Debounce for generation {} superseded", generation);
        return UpdateResult::none();
    }

    let normalized = session.form.name.to_uppercase();
    session.form.name = normalized.clone();

    match session.name_check.settle(generation, &normalized) {
        Settled::Check(name) => {
            debug!("Checking availability of {}", name);
            UpdateResult::action(UpdateAction::CheckName { generation, name })
        }
        Settled::Resolved | Settled::Stale => UpdateResult::none(),
    }
}

pub(crate) fn handle_name_check_completed(
    session: &mut EditSession,
    generation: u64,
    name: String,
    result: Result<bool, String>,
) -> UpdateResult {
    if let Err(e) = &result {
        warn!("Name check for {} failed, treating as available: {}", name, e);
    }

    if session.name_check.complete(generation, &name, result) {
        debug!("Name {} is {:?}", name, session.name_check.status());
    } else {
        trace!("Dropping superseded name check for {}", name);
    }
    UpdateResult::none()
}
