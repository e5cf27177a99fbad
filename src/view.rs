/// What the popup shows for a given undo store
use crate::undo::UndoState;

/// One restorable row in the decimated list
#[derive(Debug, Clone, PartialEq)]
pub struct DecimatedEntry {
    pub id: i32,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PopupView {
    /// Nothing closed yet; offer the snap
    Prompt,
    Decimated {
        heading: String,
        entries: Vec<DecimatedEntry>,
    },
}

impl PopupView {
    pub fn from_state(state: &UndoState) -> PopupView {
        if state.is_empty() {
            return PopupView::Prompt;
        }

        let entries = state
            .tabs()
            .into_iter()
            .map(|tab| DecimatedEntry {
                id: tab.id,
                title: tab.title.clone(),
            })
            .collect();

        PopupView::Decimated {
            heading: decimated_heading(state.len()),
            entries,
        }
    }
}

pub fn decimated_heading(count: usize) -> String {
    let noun = if count == 1 { "tab" } else { "tabs" };
    format!("{} {} decimated.", count, noun)
}
