/// Undo store for decimated tabs
///
/// Holds the snapshots of every tab closed during the current popup session,
/// keyed by tab id, plus the order in which they were closed. The store only
/// changes through [`reduce`], which is also what Yew's `use_reducer` calls.
use std::collections::HashMap;
use std::rc::Rc;

use log::warn;
use yew::Reducible;

use crate::tab_data::TabInfo;

/// Transitions accepted by the undo store
#[derive(Debug, Clone, PartialEq)]
pub enum UndoAction {
    Add(TabInfo),
    Remove(TabInfo),
}

/// Tabs closed during this popup session
///
/// Every id in `all_ids` has an entry in `by_id` and vice versa.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UndoState {
    by_id: HashMap<i32, TabInfo>,
    all_ids: Vec<i32>,
}

impl UndoState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ids in the order the tabs were closed
    pub fn tab_ids(&self) -> &[i32] {
        &self.all_ids
    }

    pub fn tab(&self, id: i32) -> Option<&TabInfo> {
        self.by_id.get(&id)
    }

    /// Snapshots in the order the tabs were closed
    pub fn tabs(&self) -> Vec<&TabInfo> {
        self.all_ids
            .iter()
            .filter_map(|id| self.by_id.get(id))
            .collect()
    }

    pub fn contains(&self, id: i32) -> bool {
        self.by_id.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.all_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all_ids.is_empty()
    }
}

/// Apply one action to the store, returning the next state
pub fn reduce(state: &UndoState, action: UndoAction) -> UndoState {
    match action {
        UndoAction::Add(tab) => add(state, tab),
        UndoAction::Remove(tab) => remove(state, &tab),
    }
}

fn add(state: &UndoState, tab: TabInfo) -> UndoState {
    let mut next = state.clone();

    // A second add for the same id refreshes the snapshot but keeps its slot
    if next.by_id.insert(tab.id, tab.clone()).is_some() {
        warn!("Tab {} was already in the undo list; replacing snapshot", tab.id);
    } else {
        next.all_ids.push(tab.id);
    }

    next
}

fn remove(state: &UndoState, tab: &TabInfo) -> UndoState {
    if !state.contains(tab.id) {
        return state.clone();
    }

    let mut next = state.clone();
    next.by_id.remove(&tab.id);
    next.all_ids.retain(|id| *id != tab.id);
    next
}

impl Reducible for UndoState {
    type Action = UndoAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(crate::undo::reduce(&self, action))
    }
}
