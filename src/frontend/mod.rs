mod contact;
mod cursor;
mod decorations;
mod dom;
mod navigation;
mod parallax;
mod reveal;
mod skills;
mod stats;
mod toast;
mod typing;

use crate::config::{ConfigSource, InteractionConfig, CONFIG_ELEMENT_ID};
use crate::effects::decorations::{HOVER_HINTS_CSS, HOVER_HINTS_STYLE_ID, RIPPLE_CSS, RIPPLE_STYLE_ID};
use crate::logging::{log_event, LogLevel};
use contact::ContactForm;
use cursor::CursorFollower;
use decorations::{GlassCard, ProjectCard, RippleButton};
use dom::{inject_style_once, Timeout};
use navigation::{NavLink, Navbar};
use parallax::HeroBackdrop;
use serde_json::json;
use skills::{SkillCategory, SkillMeter};
use stats::StatCounter;
use std::rc::Rc;
use toast::ToastHost;
use typing::TypingText;
use web_sys::window;
use yew::prelude::*;

const PAGE_FADE_IN_MS: u32 = 100;
const PAGE_FADE_TRANSITION: &str = "opacity 0.5s ease";

const PROJECTS: [(&str, &str, &[&str]); 3] = [
    (
        "Ledger Stream",
        "Event-sourced payments ledger processing 40k writes per second with exactly-once settlement.",
        &["Go", "Kafka", "PostgreSQL"],
    ),
    (
        "Atlas Metrics",
        "Multi-tenant time-series pipeline with tiered retention and sub-second rollups.",
        &["Rust", "ClickHouse", "gRPC"],
    ),
    (
        "Harbor Deploy",
        "Self-service deployment platform with canary analysis and automatic rollback.",
        &["Kubernetes", "Terraform", "Go"],
    ),
];

const SKILLS: [(&str, &[(&str, &str)]); 3] = [
    ("Backend", &[("Go", "95"), ("Rust", "80"), ("Python", "85")]),
    ("Data", &[("PostgreSQL", "90"), ("Kafka", "85"), ("ClickHouse", "75")]),
    ("Infrastructure", &[("Kubernetes", "88"), ("Terraform", "82"), ("AWS", "86")]),
];

const STATS: [(&str, &str); 3] = [
    ("8", "Years building backends"),
    ("250", "Services shipped"),
    ("40", "Teams supported"),
];

pub type SharedConfig = Rc<InteractionConfig>;

#[hook]
pub fn use_config() -> SharedConfig {
    use_context::<SharedConfig>().unwrap_or_default()
}

fn load_config() -> (InteractionConfig, ConfigSource) {
    let raw = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content());

    InteractionConfig::load(raw.as_deref())
}

fn fade_in_page() -> Option<Timeout> {
    let body = window()?.document()?.body()?;
    let style = body.style();
    let _ = style.set_property("opacity", "0");
    let _ = style.set_property("transition", PAGE_FADE_TRANSITION);

    Some(Timeout::new(PAGE_FADE_IN_MS, move || {
        let _ = body.style().set_property("opacity", "1");
    }))
}

fn nav_links() -> Vec<NavLink> {
    [("#home", "Home"), ("#about", "About"), ("#projects", "Projects"), ("#skills", "Skills"), ("#contact", "Contact")]
        .into_iter()
        .map(|(href, label)| NavLink {
            href: AttrValue::Static(href),
            label: AttrValue::Static(label),
        })
        .collect()
}

fn scroll_to_contact(_: MouseEvent) {
    if let Some(contact) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("contact"))
    {
        contact.scroll_into_view();
    }
}

#[derive(Properties, PartialEq)]
struct AppProps {
    config: SharedConfig,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    use_effect_with((), |_| {
        inject_style_once(RIPPLE_STYLE_ID, RIPPLE_CSS);
        inject_style_once(HOVER_HINTS_STYLE_ID, HOVER_HINTS_CSS);
        let fade_in = fade_in_page();
        log_event(LogLevel::Info, "app_mounted", json!({}));
        move || drop(fade_in)
    });

    html! {
        <ContextProvider<SharedConfig> context={props.config.clone()}>
            <ToastHost>
                <CursorFollower />
                <Navbar brand="Elias Varga" links={nav_links()} />

                <main>
                    <section id="home" class="hero">
                        <HeroBackdrop />
                        <div class="hero-content">
                            <h1 class="hero-title">{"Elias Varga"}</h1>
                            <TypingText fallback="Backend Developer & Systems Architect" />
                            <p class="hero-description">
                                {"I design calm, observable backend systems that keep working when traffic does not."}
                            </p>
                            <div class="hero-actions">
                                <RippleButton class={classes!("btn--primary")} onclick={Callback::from(scroll_to_contact)}>
                                    {"Start a Project"}
                                </RippleButton>
                                <RippleButton class={classes!("btn--outline")} href="/resume.pdf">
                                    {"Download CV"}
                                </RippleButton>
                            </div>
                        </div>
                    </section>

                    <section id="about" class="section">
                        <div class="container">
                            <h2 class="section-title">{"About"}</h2>
                            <div class="about-grid">
                                <GlassCard>
                                    <p>
                                        {"Eight years across payments, observability and platform teams. "}
                                        {"I care about boring deploys, clear ownership and data you can trust."}
                                    </p>
                                </GlassCard>
                                <GlassCard class={classes!("stats-card")}>
                                    <div class="stats-grid">
                                        { for STATS.iter().map(|(value, label)| html! {
                                            <StatCounter value={*value} label={*label} />
                                        }) }
                                    </div>
                                </GlassCard>
                            </div>
                        </div>
                    </section>

                    <section id="projects" class="section">
                        <div class="container">
                            <h2 class="section-title">{"Selected Work"}</h2>
                            <div class="projects-grid">
                                { for PROJECTS.iter().map(|(title, description, tags)| html! {
                                    <ProjectCard>
                                        <h3 class="project-title">{*title}</h3>
                                        <p class="project-description">{*description}</p>
                                        <ul class="project-tags">
                                            { for tags.iter().map(|tag| html! { <li class="tag">{*tag}</li> }) }
                                        </ul>
                                    </ProjectCard>
                                }) }
                            </div>
                        </div>
                    </section>

                    <section id="skills" class="section">
                        <div class="container">
                            <h2 class="section-title">{"Skills"}</h2>
                            <div class="skills-grid">
                                { for SKILLS.iter().map(|(category, skills)| html! {
                                    <SkillCategory title={*category}>
                                        { for skills.iter().map(|(name, width)| html! {
                                            <SkillMeter name={*name} width={*width} />
                                        }) }
                                    </SkillCategory>
                                }) }
                            </div>
                        </div>
                    </section>

                    <section id="contact" class="section">
                        <div class="container">
                            <h2 class="section-title">{"Get in Touch"}</h2>
                            <GlassCard class={classes!("contact-card")}>
                                <ContactForm />
                            </GlassCard>
                        </div>
                    </section>
                </main>

                <footer class="footer">
                    <p>{"© Elias Varga"}</p>
                </footer>
            </ToastHost>
        </ContextProvider<SharedConfig>>
    }
}

pub fn run() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    let (config, source) = load_config();
    config.install_logging(&source);

    yew::Renderer::<App>::with_root_and_props(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
        AppProps {
            config: Rc::new(config),
        },
    )
    .render();
}
