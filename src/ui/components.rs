/// Reusable UI components

use yew::prelude::*;

use crate::view::DecimatedEntry;

#[derive(Properties, PartialEq)]
pub struct SnapImageProps {
    pub src: AttrValue,
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
}

#[function_component(SnapImage)]
pub fn snap_image(props: &SnapImageProps) -> Html {
    html! {
        <div class="text-center">
            <img
                src={props.src.clone()}
                title={props.title.clone()}
                onclick={props.onclick.clone()}
                class="glow"
            />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct DecimatedListProps {
    pub heading: AttrValue,
    pub entries: Vec<DecimatedEntry>,
    pub on_restore: Callback<i32>,
}

#[function_component(DecimatedList)]
pub fn decimated_list(props: &DecimatedListProps) -> Html {
    html! {
        <div class="well">
            <h1 class="text-center">{props.heading.clone()}</h1>
            <ol>
                {for props.entries.iter().map(|entry| {
                    let on_restore = props.on_restore.clone();
                    let id = entry.id;
                    let onclick = Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        e.stop_propagation();
                        on_restore.emit(id);
                    });

                    html! {
                        <li key={entry.id}>
                            {&entry.title}{" ("}
                            <a href="#" {onclick}>{"restore"}</a>
                            {")"}
                        </li>
                    }
                })}
            </ol>
        </div>
    }
}
