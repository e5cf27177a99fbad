/// Popup flows: decimating the window and restoring a single tab
use log::{debug, info, warn};
use rand::Rng;
use thiserror::Error;

use crate::host::{HostError, SoundPlayer, TabHost};
use crate::operations::{SelectError, restore_request, select_tabs_to_decimate};
use crate::tab_data::TabInfo;
use crate::undo::{UndoAction, UndoState};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecimateError {
    #[error(transparent)]
    Host(#[from] HostError),
    #[error(transparent)]
    Select(#[from] SelectError),
}

/// Close a random half of the current window's tabs
///
/// Every closed tab is dispatched into the undo store before the host is asked
/// to remove it. Returns the ids handed to the host.
pub async fn decimate<H, S, R, D>(
    host: &H,
    sound: &S,
    rng: &mut R,
    dispatch: D,
) -> Result<Vec<i32>, DecimateError>
where
    H: TabHost,
    S: SoundPlayer,
    R: Rng + ?Sized,
    D: Fn(UndoAction),
{
    sound.load();

    let tabs = host.query_current_window().await?;
    let selected = select_tabs_to_decimate(&tabs, rng)?;

    let mut remove_ids = Vec::with_capacity(selected.len());
    for tab in selected {
        remove_ids.push(tab.id);
        dispatch(UndoAction::Add(tab));
    }

    if let Err(e) = sound.play() {
        warn!("Snap failed: {}", e);
    }

    if remove_ids.is_empty() {
        debug!("Only the active tab is open; nothing to close");
        return Ok(remove_ids);
    }

    info!("Decimating {} of {} tabs", remove_ids.len(), tabs.len());
    host.remove(remove_ids.clone()).await?;

    Ok(remove_ids)
}

/// Reopen `tab` and drop it from the undo store
///
/// The store entry goes away as soon as the create request is built, before the
/// host answers and whether or not it manages to create the tab.
pub async fn restore_tab<H, D>(
    host: &H,
    state: &UndoState,
    tab: &TabInfo,
    dispatch: D,
) -> Result<(), HostError>
where
    H: TabHost,
    D: Fn(UndoAction),
{
    let request = restore_request(state, tab);
    debug!("Restoring tab {} ({}), focus: {}", tab.id, request.url, request.active);

    let created = host.create(request);
    dispatch(UndoAction::Remove(tab.clone()));

    created.await.map(|new_tab| debug!("Tab {} reopened as {}", tab.id, new_tab.id))
}
