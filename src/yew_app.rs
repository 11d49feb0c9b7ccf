use std::rc::Rc;

use cartela_core::{CardView, ConfigCell, Marks, PlayCell, Tab};
use web_sys::{Element, HtmlSelectElement, KeyboardEvent, MouseEvent};
use yew::prelude::*;

use crate::app_config::{AppConfig, MOUNT_ID};
use crate::app_core::AppCore;
use crate::export;

const CHOOSE_PLACEHOLDER: &str = "-- escolha --";
const CLEAR_LABEL: &str = "Limpar";
const EXPORT_LABEL: &str = "Exportar imagem";
const LOADING_LABEL: &str = "Carregando…";

#[derive(Properties)]
struct AppProps {
    core: Rc<AppCore>,
    config: AppConfig,
}

impl PartialEq for AppProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.core, &other.core) && self.config == other.config
    }
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let app_core = props.core.clone();
    let app_snapshot = use_state(|| app_core.snapshot());
    {
        let app_core = app_core.clone();
        let app_snapshot = app_snapshot.clone();
        use_effect_with((), move |_| {
            let app_core_for_cb = app_core.clone();
            let subscription = app_core.subscribe(Rc::new(move || {
                app_snapshot.set(app_core_for_cb.snapshot());
            }));
            move || drop(subscription)
        });
    }
    let snapshot = (*app_snapshot).clone();
    if !snapshot.booted {
        return html! {
            <main class="app">
                <p class="status" id="config-status">{LOADING_LABEL}</p>
            </main>
        };
    }

    let play_enabled = snapshot.status.play_enabled();
    let tab_button = |tab: Tab| {
        let app_core = app_core.clone();
        let onclick = Callback::from(move |_: MouseEvent| {
            app_core.select_tab(tab);
        });
        let hidden = tab == Tab::Play && !play_enabled;
        html! {
            <button
                id={format!("tab-{}-btn", tab.id())}
                class={classes!((snapshot.tab == tab).then_some("active"))}
                style={hidden.then_some("display: none")}
                {onclick}
            >
                {tab.label()}
            </button>
        }
    };
    let tab_class = |tab: Tab| classes!("tab-content", (snapshot.tab == tab).then_some("active"));

    let on_choose = {
        let app_core = app_core.clone();
        Callback::from(move |(cell, word): (usize, String)| app_core.choose_word(cell, &word))
    };
    let on_clear = {
        let app_core = app_core.clone();
        Callback::from(move |cell: usize| app_core.clear_cell(cell))
    };
    let on_export = Callback::from(|_: MouseEvent| export::export_active_card());

    html! {
        <main class="app">
            <nav class="tabs">
                {tab_button(Tab::Config)}
                {tab_button(Tab::Play)}
            </nav>
            <p class="status" id="config-status">{snapshot.status_line()}</p>
            <section id={Tab::Config.id()} class={tab_class(Tab::Config)}>
                <ConfigGrid
                    view={Rc::new(snapshot.card.config_view())}
                    free_label={props.config.free_label.clone()}
                    {on_choose}
                    {on_clear}
                />
            </section>
            <section id={Tab::Play.id()} class={tab_class(Tab::Play)}>
                <PlayGrid
                    key={snapshot.revision.to_string()}
                    view={Rc::new(snapshot.card.play_view())}
                    free_label={props.config.free_label.clone()}
                />
            </section>
            <div
                id="play-actions"
                class="actions"
                style={(!play_enabled).then_some("display: none")}
            >
                <button id="export-btn" onclick={on_export}>{EXPORT_LABEL}</button>
            </div>
        </main>
    }
}

fn header_row(headers: &[&'static str]) -> Html {
    html! {
        <thead>
            <tr>
                { for headers.iter().map(|letter| html! { <th>{*letter}</th> }) }
            </tr>
        </thead>
    }
}

fn free_cell(label: &[String], marked: bool) -> Html {
    html! {
        <td class={classes!("free", marked.then_some("marked"))}>
            { for label.iter().map(|line| html! { <div>{line.clone()}</div> }) }
        </td>
    }
}

#[derive(Properties, PartialEq)]
struct ConfigGridProps {
    view: Rc<CardView<ConfigCell>>,
    free_label: Vec<String>,
    on_choose: Callback<(usize, String)>,
    on_clear: Callback<usize>,
}

#[function_component(ConfigGrid)]
fn config_grid(props: &ConfigGridProps) -> Html {
    let rows = props.view.rows().enumerate().map(|(row, cells)| {
        let cells = cells.iter().enumerate().map(|(col, cell)| {
            let index = row * cells.len() + col;
            config_cell(index, cell, props)
        });
        html! { <tr>{ for cells }</tr> }
    });
    html! {
        <div class="bingo-container" id="bingo-config">
            <table>
                {header_row(&props.view.headers)}
                <tbody>{ for rows }</tbody>
            </table>
        </div>
    }
}

fn config_cell(index: usize, cell: &ConfigCell, props: &ConfigGridProps) -> Html {
    match cell {
        ConfigCell::Free => free_cell(&props.free_label, false),
        ConfigCell::Filled { word, .. } => {
            let on_clear = props.on_clear.clone();
            let onclick = Callback::from(move |_: MouseEvent| on_clear.emit(index));
            html! {
                <td>
                    <div>{word.clone()}</div>
                    <button class="clear" {onclick}>{CLEAR_LABEL}</button>
                </td>
            }
        }
        ConfigCell::Choice { options, .. } => {
            let on_choose = props.on_choose.clone();
            let onchange = Callback::from(move |event: Event| {
                let select: HtmlSelectElement = event.target_unchecked_into();
                on_choose.emit((index, select.value()));
            });
            html! {
                <td>
                    <select {onchange}>
                        <option value="" selected=true>{CHOOSE_PLACEHOLDER}</option>
                        { for options.iter().map(|word| html! {
                            <option value={word.clone()}>{word.clone()}</option>
                        }) }
                    </select>
                </td>
            }
        }
    }
}

#[derive(Properties, PartialEq)]
struct PlayGridProps {
    view: Rc<CardView<PlayCell>>,
    free_label: Vec<String>,
}

enum PlayAction {
    Toggle(usize),
}

#[derive(Clone, Copy, Default, PartialEq)]
struct PlayMarks(Marks);

impl Reducible for PlayMarks {
    type Action = PlayAction;

    fn reduce(self: Rc<Self>, action: PlayAction) -> Rc<Self> {
        let mut marks = self.0;
        match action {
            PlayAction::Toggle(index) => {
                marks.toggle(index);
            }
        }
        Rc::new(Self(marks))
    }
}

#[function_component(PlayGrid)]
fn play_grid(props: &PlayGridProps) -> Html {
    let marks = use_reducer(PlayMarks::default);
    let rows = props.view.rows().enumerate().map(|(row, cells)| {
        let cells = cells.iter().enumerate().map(|(col, cell)| {
            let index = row * cells.len() + col;
            match cell {
                PlayCell::Free => free_cell(&props.free_label, true),
                PlayCell::Word { word, .. } => {
                    let onclick = {
                        let marks = marks.dispatcher();
                        Callback::from(move |_: MouseEvent| {
                            marks.dispatch(PlayAction::Toggle(index))
                        })
                    };
                    let onkeydown = {
                        let marks = marks.dispatcher();
                        Callback::from(move |event: KeyboardEvent| {
                            if matches!(event.key().as_str(), "Enter" | " ") {
                                event.prevent_default();
                                marks.dispatch(PlayAction::Toggle(index));
                            }
                        })
                    };
                    html! {
                        <td
                            tabindex="0"
                            class={classes!(marks.0.is_marked(index).then_some("marked"))}
                            {onclick}
                            {onkeydown}
                        >
                            {word.clone()}
                        </td>
                    }
                }
            }
        });
        html! { <tr>{ for cells }</tr> }
    });
    html! {
        <div class="bingo-container" id="bingo-play">
            <table>
                {header_row(&props.view.headers)}
                <tbody>{ for rows }</tbody>
            </table>
        </div>
    }
}

fn mount_root() -> Option<Element> {
    let document = web_sys::window()?.document()?;
    document
        .get_element_by_id(MOUNT_ID)
        .or_else(|| document.body().map(Element::from))
}

pub(crate) fn mount(core: Rc<AppCore>, config: AppConfig) {
    let Some(root) = mount_root() else {
        gloo::console::error!("app: no mount point");
        return;
    };
    let _app_handle =
        yew::Renderer::<App>::with_root_and_props(root, AppProps { core, config }).render();
}
