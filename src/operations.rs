/// Tab operations: picking tabs to decimate, planning restores

use rand::Rng;
use rand::seq::SliceRandom;
use thiserror::Error;

use crate::tab_data::{CreateProperties, TabInfo};
use crate::undo::UndoState;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectError {
    #[error("no active tab in the current window")]
    NoActiveTab,
    #[error("more than one active tab in the current window")]
    MultipleActiveTabs,
}

/// Number of tabs to close: half the window, rounded up
pub fn take_count(total: usize) -> usize {
    total.div_ceil(2)
}

/// Pick a random half of the window's tabs, never the active one
///
/// The count is computed from the full window, so when only the active tab
/// would be left out of a small window the result may be shorter than
/// `take_count(tabs.len())`.
pub fn select_tabs_to_decimate<R: Rng + ?Sized>(
    tabs: &[TabInfo],
    rng: &mut R,
) -> Result<Vec<TabInfo>, SelectError> {
    let active_id = find_active_tab(tabs)?.id;
    let count = take_count(tabs.len());

    let mut candidates: Vec<TabInfo> = tabs
        .iter()
        .filter(|tab| tab.id != active_id)
        .cloned()
        .collect();

    candidates.shuffle(rng);
    candidates.truncate(count);

    Ok(candidates)
}

fn find_active_tab(tabs: &[TabInfo]) -> Result<&TabInfo, SelectError> {
    let mut active = tabs.iter().filter(|tab| tab.active);

    match (active.next(), active.next()) {
        (Some(tab), None) => Ok(tab),
        (None, _) => Err(SelectError::NoActiveTab),
        (Some(_), Some(_)) => Err(SelectError::MultipleActiveTabs),
    }
}

/// Build the create request for reopening `tab`
///
/// The reopened tab only takes focus when it is the last one in the store,
/// which also closes the popup.
pub fn restore_request(state: &UndoState, tab: &TabInfo) -> CreateProperties {
    CreateProperties {
        url: tab.url.clone(),
        active: state.len() == 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::undo::{UndoAction, reduce};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn create_test_tab(id: i32, active: bool) -> TabInfo {
        TabInfo {
            id,
            url: format!("https://example.com/{}", id),
            title: format!("Tab {}", id),
            active,
        }
    }

    fn window(n: i32, active_id: i32) -> Vec<TabInfo> {
        (1..=n).map(|id| create_test_tab(id, id == active_id)).collect()
    }

    #[test]
    fn test_take_count() {
        assert_eq!(take_count(0), 0);
        assert_eq!(take_count(1), 1);
        assert_eq!(take_count(2), 1);
        assert_eq!(take_count(5), 3);
        assert_eq!(take_count(10), 5);
    }

    #[test]
    fn test_select_five_tabs_skips_active() {
        let tabs = window(5, 3);
        let mut rng = StdRng::seed_from_u64(42);

        let selected = select_tabs_to_decimate(&tabs, &mut rng).unwrap();
        let ids: HashSet<i32> = selected.iter().map(|t| t.id).collect();

        assert_eq!(selected.len(), 3);
        assert_eq!(ids.len(), 3);
        assert!(!ids.contains(&3));
        assert!(ids.is_subset(&HashSet::from([1, 2, 4, 5])));
    }

    #[test]
    fn test_selection_size_for_window_sizes() {
        for n in 1..=12 {
            for seed in 0..8 {
                let active_id = (seed as i32 % n) + 1;
                let tabs = window(n, active_id);
                let mut rng = StdRng::seed_from_u64(seed);

                let selected = select_tabs_to_decimate(&tabs, &mut rng).unwrap();
                let expected = take_count(n as usize).min(n as usize - 1);

                assert_eq!(selected.len(), expected, "n={} seed={}", n, seed);
                assert!(selected.iter().all(|t| t.id != active_id));
            }
        }
    }

    #[test]
    fn test_single_tab_window_selects_nothing() {
        let tabs = window(1, 1);
        let mut rng = StdRng::seed_from_u64(7);

        let selected = select_tabs_to_decimate(&tabs, &mut rng).unwrap();

        assert!(selected.is_empty());
    }

    #[test]
    fn test_selection_varies_with_seed() {
        let tabs = window(20, 1);
        let picks: HashSet<Vec<i32>> = (0..10)
            .map(|seed| {
                let mut rng = StdRng::seed_from_u64(seed);
                let mut ids: Vec<i32> = select_tabs_to_decimate(&tabs, &mut rng)
                    .unwrap()
                    .iter()
                    .map(|t| t.id)
                    .collect();
                ids.sort();
                ids
            })
            .collect();

        assert!(picks.len() > 1);
    }

    #[test]
    fn test_no_active_tab() {
        let tabs = vec![create_test_tab(1, false), create_test_tab(2, false)];
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(
            select_tabs_to_decimate(&tabs, &mut rng),
            Err(SelectError::NoActiveTab)
        );
        assert_eq!(
            select_tabs_to_decimate(&[], &mut rng),
            Err(SelectError::NoActiveTab)
        );
    }

    #[test]
    fn test_multiple_active_tabs() {
        let tabs = vec![create_test_tab(1, true), create_test_tab(2, true)];
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(
            select_tabs_to_decimate(&tabs, &mut rng),
            Err(SelectError::MultipleActiveTabs)
        );
    }

    #[test]
    fn test_restore_request_last_tab_is_active() {
        let tab = TabInfo::new(7, "https://x".to_string(), "X".to_string(), false);
        let state = reduce(&UndoState::new(), UndoAction::Add(tab.clone()));

        let request = restore_request(&state, &tab);

        assert_eq!(
            request,
            CreateProperties {
                url: "https://x".to_string(),
                active: true,
            }
        );
    }

    #[test]
    fn test_restore_request_with_more_tabs_stays_in_background() {
        let first = create_test_tab(1, false);
        let second = create_test_tab(2, false);
        let mut state = UndoState::new();
        state = reduce(&state, UndoAction::Add(first.clone()));
        state = reduce(&state, UndoAction::Add(second));

        let request = restore_request(&state, &first);

        assert_eq!(request.url, "https://example.com/1");
        assert!(!request.active);
    }
}
