use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use web_sys::{window, MouseEvent};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod pages {
    pub mod landing;
    pub mod termsprivacy;
}
mod components {
    pub mod chat_widget;
    pub mod lead_form;
}

use pages::landing::Landing;
use pages::termsprivacy::{TermsAndConditions, PrivacyPolicy};
use components::chat_widget::ChatWidget;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/terms")]
    Terms,
    #[at("/privacy")]
    Privacy,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing /> }
        }
        Route::Terms => {
            info!("Rendering Terms page");
            html! { <TermsAndConditions /> }
        }
        Route::Privacy => {
            info!("Rendering Privacy page");
            html! { <PrivacyPolicy /> }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub is_dark_mode: bool,
    pub on_toggle_theme: Callback<()>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = document.document_element().unwrap().scroll_top();
                    is_scrolled.set(scroll_top > 60);
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let toggle_theme = {
        let on_toggle_theme = props.on_toggle_theme.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle_theme.emit(());
        })
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_e: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    let theme_label = if props.is_dark_mode {
        "Switch to light mode"
    } else {
        "Switch to dark mode"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    <span class="nav-logo-accent">{"Soft"}</span>{"Sell"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>

                <div class={menu_class}>
                    <a href="/#home" class="nav-link" onclick={close_menu.clone()}>{"Home"}</a>
                    <a href="/#how-it-works" class="nav-link" onclick={close_menu.clone()}>{"How It Works"}</a>
                    <a href="/#why-us" class="nav-link" onclick={close_menu.clone()}>{"Why Choose Us"}</a>
                    <a href="/#testimonials" class="nav-link" onclick={close_menu.clone()}>{"Testimonials"}</a>
                    <a href="/#contact" class="nav-link" onclick={close_menu}>{"Contact"}</a>
                    <button
                        class="theme-toggle"
                        onclick={toggle_theme}
                        aria-label={theme_label}
                    >
                        { if props.is_dark_mode { "☀️" } else { "🌙" } }
                    </button>
                </div>
            </div>
        </nav>
    }
}

fn prefers_dark_mode() -> bool {
    window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

#[function_component]
fn App() -> Html {
    let is_dark_mode = use_state(prefers_dark_mode);

    // Reflect the current mode on the document element so the CSS
    // variables in the shell and the widget pick it up together.
    {
        use_effect_with_deps(
            move |dark: &bool| {
                if let Some(document) = window().and_then(|w| w.document()) {
                    if let Some(root) = document.document_element() {
                        let _ = root.set_attribute(
                            "data-theme",
                            if *dark { "dark" } else { "light" },
                        );
                    }
                }
                || ()
            },
            *is_dark_mode,
        );
    }

    let toggle_theme = {
        let is_dark_mode = is_dark_mode.clone();
        Callback::from(move |_| {
            is_dark_mode.set(!*is_dark_mode);
        })
    };

    html! {
        <BrowserRouter>
            <Nav is_dark_mode={*is_dark_mode} on_toggle_theme={toggle_theme} />
            <Switch<Route> render={switch} />
            <ChatWidget is_dark_mode={*is_dark_mode} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
