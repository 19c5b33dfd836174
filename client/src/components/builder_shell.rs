//! Form builder chrome: device frame, zoom stepper, grid and snap toggles.
//!
//! DESIGN
//! ======
//! All state lives in one [`BuilderView`] signal created per mount. The
//! sidebar palette and properties panel are static placeholders; nothing is
//! placed on the canvas yet.

use leptos::prelude::*;

use crate::state::builder::{BuilderView, DeviceKey, PALETTE_FIELDS};

const GRID_BACKGROUND: &str = "background-image: linear-gradient(to right, rgba(255,255,255,0.06) 1px, transparent 1px), linear-gradient(to bottom, rgba(255,255,255,0.06) 1px, transparent 1px); background-size: 8px 8px;";

#[component]
fn Sidebar() -> impl IntoView {
    view! {
        <aside class="builder-sidebar">
            <div class="builder-sidebar__title">"Form Elements"</div>
            <div class="builder-sidebar__section">
                <div class="builder-sidebar__heading">"Background"</div>
                <label class="builder-dropzone">
                    <input type="file" class="builder-dropzone__input" accept="image/*"/>
                    <span>"Drop image here or click to upload"</span>
                </label>
            </div>
            <div class="builder-sidebar__section">
                <div class="builder-sidebar__heading">"Form Fields"</div>
                <div class="builder-palette">
                    {PALETTE_FIELDS
                        .into_iter()
                        .map(|label| view! { <button class="builder-palette__item" type="button">{label}</button> })
                        .collect_view()}
                </div>
            </div>
        </aside>
    }
}

#[component]
fn PropertiesPanel() -> impl IntoView {
    view! {
        <aside class="builder-properties">
            <div class="builder-properties__title">"Properties"</div>
            <div class="builder-properties__empty">"Select an element to edit properties"</div>
        </aside>
    }
}

#[component]
pub fn BuilderShell(#[prop(into)] event_id: String) -> impl IntoView {
    let view_state = RwSignal::new(BuilderView::default());
    let preview_href = format!("/preview/{event_id}");

    let canvas_style = move || {
        let size = view_state.get().canvas_size();
        format!("width: {}px; height: {}px;", size.width, size.height)
    };

    view! {
        <main class="builder">
            <header class="builder-header">
                <div class="builder-header__left">
                    <div class="builder-header__label">"Target Device"</div>
                    <select
                        class="builder-select"
                        on:change=move |ev| {
                            let key = event_target_value(&ev);
                            view_state.update(|v| v.select_device(&key));
                        }
                    >
                        {DeviceKey::ALL
                            .into_iter()
                            .map(|device| {
                                view! {
                                    <option
                                        value=device.key()
                                        selected=move || view_state.get().device == device
                                    >
                                        {device.preset().label}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                    <div class="builder-header__readout">{move || view_state.get().readout()}</div>
                </div>
                <div class="builder-header__right">
                    <button class="builder-button" on:click=move |_| view_state.update(BuilderView::zoom_out)>
                        "-"
                    </button>
                    <button class="builder-button" on:click=move |_| view_state.update(BuilderView::zoom_in)>
                        "+"
                    </button>
                    <a class="builder-button builder-button--preview" href=preview_href>
                        "Preview"
                    </a>
                </div>
            </header>

            <Sidebar/>

            <section class="builder-stage">
                <div class="builder-canvas" style=canvas_style>
                    <Show when=move || view_state.get().grid>
                        <div class="builder-canvas__grid" style=GRID_BACKGROUND></div>
                    </Show>
                    <div class="builder-canvas__toggles">
                        <label>
                            <input
                                type="checkbox"
                                prop:checked=move || view_state.get().grid
                                on:change=move |ev| {
                                    let checked = event_target_checked(&ev);
                                    view_state.update(|v| v.grid = checked);
                                }
                            />
                            "Grid"
                        </label>
                        <label>
                            <input
                                type="checkbox"
                                prop:checked=move || view_state.get().snap
                                on:change=move |ev| {
                                    let checked = event_target_checked(&ev);
                                    view_state.update(|v| v.snap = checked);
                                }
                            />
                            "Snap"
                        </label>
                    </div>
                </div>
            </section>

            <PropertiesPanel/>
        </main>
    }
}
