use super::{
    dom::{scroll_y, ThrottledScroll},
    use_config,
};
use crate::config::NavConfig;
use crate::effects::navigation::{
    current_section, link_is_active, navbar_style, scroll_target, section_id_from_href,
    SectionBounds, ACTIVE_CLASS,
};
use wasm_bindgen::JsCast;
use web_sys::{window, Document, HtmlElement, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub struct NavLink {
    pub href: AttrValue,
    pub label: AttrValue,
}

fn document() -> Option<Document> {
    window()?.document()
}

fn section_bounds(document: &Document) -> Vec<SectionBounds> {
    let Ok(nodes) = document.query_selector_all("section[id]") else {
        return Vec::new();
    };

    (0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .map(|section| SectionBounds {
            id: section.id(),
            top: f64::from(section.offset_top()),
            height: f64::from(section.client_height()),
        })
        .collect()
}

fn apply_navbar_style(navbar: &HtmlElement, scroll: f64, config: &NavConfig) {
    let style = navbar_style(scroll, config);
    let declaration = navbar.style();
    let _ = declaration.set_property("background", style.background);
    let _ = declaration.set_property("backdrop-filter", style.backdrop_filter);
}

fn scroll_to_section(id: &str, config: &NavConfig) {
    let Some(section) = document()
        .and_then(|document| document.get_element_by_id(id))
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };
    let Some(win) = window() else {
        return;
    };

    let options = ScrollToOptions::new();
    options.set_top(scroll_target(f64::from(section.offset_top()), config));
    options.set_behavior(ScrollBehavior::Smooth);
    win.scroll_to_with_scroll_to_options(&options);
}

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub brand: AttrValue,
    pub links: Vec<NavLink>,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let config = use_config();
    let navbar = use_node_ref();
    let current = use_state_eq(|| None::<String>);

    {
        let navbar = navbar.clone();
        let current = current.clone();
        use_effect_with(config.clone(), move |config| {
            let nav_config = config.nav.clone();
            let refresh = move || {
                let scroll = scroll_y();
                if let Some(navbar) = navbar.cast::<HtmlElement>() {
                    apply_navbar_style(&navbar, scroll, &nav_config);
                }
                if let Some(document) = document() {
                    let sections = section_bounds(&document);
                    current.set(current_section(&sections, scroll, &nav_config).map(str::to_string));
                }
            };
            refresh();
            let subscription = ThrottledScroll::new(config.scroll_throttle_ms, refresh);
            move || drop(subscription)
        });
    }

    let links = props.links.iter().map(|link| {
        let active = link_is_active(&link.href, current.as_deref());
        let onclick = {
            let href = link.href.clone();
            let nav_config = config.nav.clone();
            Callback::from(move |event: MouseEvent| {
                event.prevent_default();
                if let Some(id) = section_id_from_href(&href) {
                    scroll_to_section(id, &nav_config);
                }
            })
        };

        html! {
            <li>
                <a
                    class={classes!("nav-link", active.then_some(ACTIVE_CLASS))}
                    href={link.href.clone()}
                    aria-current={active.then_some("true")}
                    onclick={onclick}
                >
                    {link.label.clone()}
                </a>
            </li>
        }
    });

    html! {
        <nav ref={navbar} class="navbar" aria-label="Primary">
            <div class="nav-container">
                <a class="nav-brand" href="#home">{props.brand.clone()}</a>
                <ul class="nav-menu">
                    { for links }
                </ul>
            </div>
        </nav>
    }
}
