/// Popup UI for Tab Decimator extension

use log::{error, warn};
use patternfly_yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::actions::{decimate, restore_tab};
use crate::config::PopupConfig;
use crate::host::{ChromeTabs, SnapSound};
use crate::ui::components::{DecimatedList, SnapImage};
use crate::undo::{UndoAction, UndoState};
use crate::view::PopupView;

#[function_component(App)]
pub fn app() -> Html {
    let config = use_memo((), |_| PopupConfig::default());
    let undo = use_reducer(UndoState::new);
    let failure = use_state(|| None::<String>);

    let sound = {
        let config = config.clone();
        use_memo((), move |_| SnapSound::new(&config.snap_sound))
    };

    // Decimate handler
    let on_decimate = {
        let dispatcher = undo.dispatcher();
        let sound = sound.clone();
        let failure = failure.clone();

        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            e.stop_propagation();

            let dispatcher = dispatcher.clone();
            let sound = sound.clone();
            let failure = failure.clone();

            spawn_local(async move {
                let mut rng = rand::thread_rng();
                let dispatch = |action: UndoAction| dispatcher.dispatch(action);

                match decimate(&ChromeTabs, &*sound, &mut rng, dispatch).await {
                    Ok(_) => failure.set(None),
                    Err(e) => {
                        error!("Decimate failed: {}", e);
                        failure.set(Some(format!("Decimate failed: {}", e)));
                    }
                }
            });
        })
    };

    // Restore handler
    let on_restore = {
        let undo = undo.clone();
        let failure = failure.clone();

        Callback::from(move |tab_id: i32| {
            let Some(tab) = undo.tab(tab_id).cloned() else {
                warn!("Tab {} is no longer in the undo list", tab_id);
                return;
            };

            let state = (*undo).clone();
            let dispatcher = undo.dispatcher();
            let failure = failure.clone();

            spawn_local(async move {
                let dispatch = |action: UndoAction| dispatcher.dispatch(action);

                match restore_tab(&ChromeTabs, &state, &tab, dispatch).await {
                    Ok(_) => failure.set(None),
                    Err(e) => {
                        error!("Restore failed: {}", e);
                        failure.set(Some(format!("Restore failed: {}", e)));
                    }
                }
            });
        })
    };

    html! {
        <div class="App">
            if let Some(message) = (*failure).clone() {
                <Alert r#type={AlertType::Danger} title={"Error"} inline={true}>
                    {message}
                </Alert>
            }

            {match PopupView::from_state(&undo) {
                PopupView::Prompt => html! {
                    <SnapImage
                        src={config.idle_image.clone()}
                        title={config.prompt_title.clone()}
                        onclick={on_decimate}
                    />
                },
                PopupView::Decimated { heading, entries } => html! {
                    <div>
                        <SnapImage src={config.decimated_image.clone()} />
                        <DecimatedList {heading} {entries} {on_restore} />
                    </div>
                },
            }}
        </div>
    }
}
