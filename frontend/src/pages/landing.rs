use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::animated_counter::AnimatedCounter;
use crate::components::icons::{Feather, Icon};
use crate::content::{
    NavLink, NavTarget, StatValue, CONTACT_LINES, CREWS, FEATURES, FOOTER_COLUMNS, HERO_IMAGE, JOIN_STEPS, NAV_LINKS,
    PHONE_HREF, REVIEWS, SCHEDULE, STATS,
};
use crate::hooks::{use_active_crews, use_carousel, use_clock, use_theme, use_weather};
use crate::services::clock::CLOCK_PLACEHOLDER;
use crate::Route;

#[function_component(Landing)]
pub fn landing() -> Html {
    html! {
        <div class="landing-page">
            <style>{ LANDING_CSS }</style>
            <Blobs />
            <Header />
            <Hero />
            <Features />
            <Crews />
            <Schedule />
            <Reviews />
            <JoinSteps />
            <CallToAction />
            <Footer />
            <FloatingActions />
        </div>
    }
}

#[function_component(Blobs)]
fn blobs() -> Html {
    html! {
        <div aria-hidden="true" class="blobs">
            <div class="blob blob-orange"></div>
            <div class="blob blob-violet"></div>
        </div>
    }
}

#[function_component(Header)]
fn header() -> Html {
    let (theme, toggle_theme) = use_theme();
    let menu_open = use_state(|| false);

    let open_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(true))
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let theme_icon = if theme.is_dark() { Icon::Sun } else { Icon::Moon };

    html! {
        <header class="site-header">
            <div class="container">
                <div class="header-bar glass">
                    <a href="#" class="brand">
                        <div class="brand-mark"></div>
                        <span class="heading">{"RunCrew"}</span>
                    </a>
                    <nav class="desktop-nav">
                        { for NAV_LINKS.iter().map(nav_link) }
                    </nav>
                    <div class="header-actions">
                        <button aria-label="Toggle theme" class="round-button glass" onclick={toggle_theme}>
                            <Feather icon={theme_icon} />
                        </button>
                        <Link<Route> to={Route::Signup} classes="gradient-button header-cta">
                            {"지금 가입하기"}
                        </Link<Route>>
                        <button aria-label="Open menu" class="round-button glass burger" onclick={open_menu}>
                            <Feather icon={Icon::Menu} />
                        </button>
                    </div>
                </div>
            </div>
            if *menu_open {
                <MobileMenu on_close={close_menu} />
            }
        </header>
    }
}

#[derive(Properties, PartialEq)]
struct MobileMenuProps {
    on_close: Callback<MouseEvent>,
}

#[function_component(MobileMenu)]
fn mobile_menu(props: &MobileMenuProps) -> Html {
    // Clicks inside the panel must not reach the backdrop
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="mobile-overlay" onclick={props.on_close.clone()}>
            <div class="mobile-panel glass" onclick={keep_open}>
                <div class="mobile-panel-head">
                    <span class="heading">{"RunCrew"}</span>
                    <button aria-label="Close menu" class="round-button glass" onclick={props.on_close.clone()}>
                        <Feather icon={Icon::Close} />
                    </button>
                </div>
                <nav class="mobile-nav">
                    { for NAV_LINKS.iter().map(|link| html! {
                        <div onclick={props.on_close.clone()}>{ nav_link(link) }</div>
                    }) }
                </nav>
                <div onclick={props.on_close.clone()}>
                    <Link<Route> to={Route::Signup} classes="gradient-button cool full-width">
                        {"무료로 시작하기"}
                    </Link<Route>>
                </div>
            </div>
        </div>
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    html! {
        <section class="hero container">
            <div class="hero-grid">
                <div>
                    <h1 class="heading rise">
                        <span class="gradient-text">{"함께 달리면 더 멀리"}</span>{" 갈 수 있어요"}
                    </h1>
                    <p class="hero-lead muted rise" style="animation-delay: 100ms">
                        {"새로운 러닝 메이트를 만나고, 목표를 세우고, 성취의 기쁨을 함께 느껴봐요."}
                    </p>
                    <div class="hero-actions rise" style="animation-delay: 200ms">
                        <Link<Route> to={Route::Signup} classes="gradient-button large">
                            {"무료로 시작하기"}
                        </Link<Route>>
                        <a href="#crews" class="outline-button large">{"크루 둘러보기"}</a>
                    </div>
                    <div class="info-chips">
                        <ClockChip />
                        <WeatherChip />
                        <ActiveCrewsChip />
                    </div>
                </div>
                <div class="hero-card-frame pop">
                    <Link<Route> to={Route::Signup} classes="hero-card">
                        <img src={HERO_IMAGE} alt="러닝크루 히어로 배경" />
                        <div class="hero-card-shade"></div>
                        <div class="hero-card-text heading">{"달리기, 지금 시작!"}</div>
                    </Link<Route>>
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct InfoChipProps {
    icon: Icon,
    label: &'static str,
    value: String,
}

#[function_component(InfoChip)]
fn info_chip(props: &InfoChipProps) -> Html {
    html! {
        <div class="info-chip glass">
            <Feather icon={props.icon} class="accent" />
            <div>
                <div class="chip-label muted">{ props.label }</div>
                <div class="chip-value">{ props.value.clone() }</div>
            </div>
        </div>
    }
}

#[function_component(ClockChip)]
fn clock_chip() -> Html {
    let now = use_clock();
    let value = now.unwrap_or_else(|| CLOCK_PLACEHOLDER.to_string());
    html! { <InfoChip icon={Icon::Clock} label="현재 시간" {value} /> }
}

#[function_component(WeatherChip)]
fn weather_chip() -> Html {
    let weather = use_weather();
    html! { <InfoChip icon={Icon::MapPin} label="날씨" value={weather.summary()} /> }
}

#[function_component(ActiveCrewsChip)]
fn active_crews_chip() -> Html {
    let count = use_active_crews();
    html! { <InfoChip icon={Icon::Users} label="현재 활동 중 크루" value={format!("{}개", count)} /> }
}

#[function_component(Features)]
fn features() -> Html {
    html! {
        <section id="features" class="section container">
            <div class="section-head">
                <h2 class="heading">{"러닝크루의 특징"}</h2>
                <p class="muted">{"젊고 역동적인 경험을 위한 핵심 가치"}</p>
            </div>
            <div class="grid three">
                { for FEATURES.iter().enumerate().map(|(i, feature)| html! {
                    <div key={feature.title} class="card lift rise" style={stagger(i, 60)}>
                        <div class="feature-icon" style={format!("background: {}", feature.accent)}>
                            <Feather icon={Icon::Star} />
                        </div>
                        <div class="card-title">{ feature.title }</div>
                        <div class="muted">{ feature.desc }</div>
                        <div class="more accent">{"자세히 보기"}<Feather icon={Icon::ChevronRight} /></div>
                    </div>
                }) }
            </div>
        </section>
    }
}

#[function_component(Crews)]
fn crews() -> Html {
    html! {
        <section id="crews" class="section container">
            <div class="section-head">
                <h2 class="heading">{"이런 크루들이 기다리고 있어요"}</h2>
            </div>
            <div class="grid four">
                { for CREWS.iter().enumerate().map(|(i, crew)| html! {
                    <div key={crew.name} class="card crew-card rise" style={stagger(i, 50)}>
                        <div class="crew-photo">
                            <img src={crew.image} alt={crew.name} />
                        </div>
                        <div class="crew-body">
                            <div class="crew-title">
                                <span class="card-title">{ crew.name }</span>
                                <span class="pill">{ crew.pace }</span>
                            </div>
                            <div class="small muted">{ format!("{} · {}", crew.region, crew.time) }</div>
                            <div class="small"><strong>{ crew.members }</strong>{" 명"}</div>
                            <p class="small muted clamp">{ crew.desc }</p>
                            <a href="#cta" class="more accent">{"자세히 보기"}<Feather icon={Icon::ChevronRight} /></a>
                        </div>
                    </div>
                }) }
            </div>
        </section>
    }
}

#[function_component(Schedule)]
fn schedule() -> Html {
    html! {
        <section id="schedule" class="section container">
            <div class="section-head">
                <h2 class="heading">{"이번 주 러닝 일정"}</h2>
                <p class="muted">{"함께 달릴 시간을 정해요"}</p>
            </div>
            <ol class="timeline">
                { for SCHEDULE.iter().enumerate().map(|(i, run)| html! {
                    <li key={format!("{}-{}", run.date, i)} class="slide-in" style={stagger(i, 50)}>
                        <span class="timeline-dot"></span>
                        <div class="card">
                            <div class="timeline-row">
                                <div class="small muted">{ format!("{} · {}", run.date, run.time) }</div>
                                <div class="small strong"><Feather icon={Icon::MapPin} />{" "}{ run.place }</div>
                            </div>
                            <div class="small">{ format!("거리 {}km · 예상 참여 {}명", run.km, run.people) }</div>
                        </div>
                    </li>
                }) }
            </ol>
        </section>
    }
}

#[function_component(Reviews)]
fn reviews() -> Html {
    let (carousel, select) = use_carousel(REVIEWS.len());
    let index = carousel.index();
    let track_style = format!(
        "transform: translateX(-{}%); transition: transform 600ms ease;",
        carousel.offset_percent()
    );

    html! {
        <section id="reviews" class="section container">
            <div class="section-head">
                <h2 class="heading">{"크루원들의 생생한 후기"}</h2>
            </div>
            <div class="carousel">
                <div class="carousel-track" style={track_style}>
                    { for REVIEWS.iter().map(|review| html! {
                        <div class="slide">
                            <div class="card">
                                <div class="reviewer">
                                    <div class="avatar"></div>
                                    <div>
                                        <div class="strong">{ format!("{} · {}", review.name, review.age) }</div>
                                        <div class="tiny muted">{ format!("참여 {}", review.period) }</div>
                                    </div>
                                </div>
                                <p class="small">{ review.text }</p>
                                <div class="stars">
                                    { for (0..review.rating).map(|_| html! { <Feather icon={Icon::Star} /> }) }
                                </div>
                            </div>
                        </div>
                    }) }
                </div>
                <div class="dots">
                    { for (0..REVIEWS.len()).map(|i| {
                        let select = select.clone();
                        html! {
                            <button
                                aria-label={format!("go to slide {}", i + 1)}
                                class={classes!("dot", (i == index).then_some("active"))}
                                onclick={Callback::from(move |_: MouseEvent| select.emit(i))}
                            ></button>
                        }
                    }) }
                </div>
            </div>
            <div class="grid stats">
                { for STATS.iter().map(|stat| html! {
                    <div key={stat.label} class="card centered">
                        <div class="stat-value">
                            { match stat.value {
                                StatValue::CountUp(to) => html! { <AnimatedCounter {to} /> },
                                StatValue::Fixed(text) => html! { <span>{ text }</span> },
                            } }
                        </div>
                        <div class="small muted">{ stat.label }</div>
                    </div>
                }) }
            </div>
        </section>
    }
}

#[function_component(JoinSteps)]
fn join_steps() -> Html {
    html! {
        <section class="section container">
            <div class="section-head">
                <h2 class="heading">{"3단계로 쉬운 가입"}</h2>
            </div>
            <div class="grid three narrow">
                { for JOIN_STEPS.iter().enumerate().map(|(i, step)| html! {
                    <div key={step.step} class="card centered rise" style={stagger(i, 100)}>
                        <div class="step-badge">{ step.step }</div>
                        <div class="strong">{ step.title }</div>
                        <div class="small muted">{ step.desc }</div>
                    </div>
                }) }
            </div>
        </section>
    }
}

#[function_component(CallToAction)]
fn call_to_action() -> Html {
    html! {
        <section id="cta" class="container cta">
            <div class="cta-frame">
                <div class="cta-inner">
                    <h2 class="heading">{"오늘부터 새로운 러닝 라이프를 시작하세요"}</h2>
                    <p class="soft">{"가입비 무료 · 언제든 탈퇴 가능"}</p>
                    <Link<Route> to={Route::Signup} classes="gradient-button large pulse">
                        {"무료 가입하기"}
                    </Link<Route>>
                </div>
            </div>
        </section>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="container grid footer-grid">
                <div>
                    <div class="heading footer-brand">{"RunCrew"}</div>
                    <p class="small muted">{"건강한 라이프스타일을 위한 러닝 커뮤니티"}</p>
                </div>
                { for FOOTER_COLUMNS.iter().map(|column| html! {
                    <div>
                        <div class="strong">{ column.title }</div>
                        <ul class="small muted">
                            { for column.links.iter().map(|link| html! { <li><a href="#">{ *link }</a></li> }) }
                        </ul>
                    </div>
                }) }
                <div>
                    <div class="strong">{"연락처"}</div>
                    <ul class="small muted">
                        { for CONTACT_LINES.iter().map(|line| html! { <li>{ *line }</li> }) }
                    </ul>
                </div>
            </div>
            <div class="tiny muted centered copyright">{"© 2025 RunCrew. All rights reserved."}</div>
        </footer>
    }
}

#[function_component(FloatingActions)]
fn floating_actions() -> Html {
    html! {
        <div class="fab-stack">
            <a href="#" class="fab fab-chat" aria-label="채팅"><Feather icon={Icon::MessageCircle} /></a>
            <a href={PHONE_HREF} class="fab fab-phone" aria-label="전화"><Feather icon={Icon::Phone} /></a>
        </div>
    }
}

fn nav_link(link: &NavLink) -> Html {
    match link.target {
        NavTarget::Section(anchor) => html! { <a href={anchor}>{ link.label }</a> },
        NavTarget::Signup => html! { <Link<Route> to={Route::Signup}>{ link.label }</Link<Route>> },
    }
}

fn stagger(index: usize, step_ms: usize) -> String {
    format!("animation-delay: {}ms", index * step_ms)
}

pub(crate) const LANDING_CSS: &str = r#"
.landing-page { min-height: 100vh; position: relative; }

.blobs { position: fixed; inset: 0; z-index: -1; pointer-events: none; }
.blob { position: absolute; border-radius: 9999px; filter: blur(40px); }
.blob-orange {
    top: -6rem; left: -4rem; width: 20rem; height: 20rem;
    background: radial-gradient(circle at 30% 30%, #fb923c66, transparent 60%);
    animation: drift-a 12s ease-in-out infinite;
}
.blob-violet {
    top: 10rem; right: 0; width: 24rem; height: 24rem;
    background: radial-gradient(circle at 70% 30%, #a78bfa66, transparent 60%);
    animation: drift-b 14s ease-in-out infinite;
}
@keyframes drift-a { 50% { transform: translate(10px, 20px); } }
@keyframes drift-b { 50% { transform: translate(-10px, -15px); } }

.site-header { position: fixed; top: 0; width: 100%; z-index: 50; }
.header-bar {
    margin-top: 0.75rem;
    border-radius: 1rem;
    padding: 0.75rem 1rem;
    display: flex;
    align-items: center;
    justify-content: space-between;
}
.brand { display: flex; align-items: center; gap: 0.5rem; font-size: 1.125rem; }
.brand-mark {
    width: 2rem; height: 2rem; border-radius: 0.5rem;
    background: linear-gradient(135deg, #f97316, #ec4899, #a855f7);
}
.desktop-nav { display: flex; gap: 1.5rem; font-size: 0.875rem; }
.desktop-nav a:hover, .mobile-nav a:hover { color: var(--accent); }
.header-actions { display: flex; align-items: center; gap: 0.5rem; }
.burger { display: none; }
.mobile-overlay { position: fixed; inset: 0; z-index: 50; background: rgba(0, 0, 0, 0.5); }
.mobile-panel {
    position: absolute; right: 1rem; top: 1rem;
    width: 85%; max-width: 20rem;
    border-radius: 1rem; padding: 1.5rem;
}
.mobile-panel-head {
    display: flex; align-items: center; justify-content: space-between;
    margin-bottom: 1.5rem; font-size: 1.25rem;
}
.mobile-nav { display: flex; flex-direction: column; gap: 1rem; }

.hero { padding-top: 9rem; }
.hero-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 2.5rem; align-items: center; }
.hero h1 { font-size: 3.5rem; line-height: 1.1; margin: 0; }
.hero-lead { margin-top: 1.5rem; font-size: 1.125rem; }
.hero-actions { margin-top: 2rem; display: flex; gap: 0.75rem; }
.info-chips { margin-top: 2rem; display: grid; grid-template-columns: repeat(3, 1fr); gap: 0.75rem; }
.info-chip { border-radius: 0.75rem; padding: 1rem; display: flex; align-items: center; gap: 0.75rem; }
.chip-label { font-size: 0.75rem; }
.chip-value { font-size: 0.875rem; font-weight: 600; }
.hero-card-frame {
    height: 340px; border-radius: 1.5rem; padding: 4px;
    background: linear-gradient(135deg, #3b82f6, #a855f7, #ec4899);
    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
}
.hero-card {
    position: relative; display: block; width: 100%; height: 100%;
    overflow: hidden; border-radius: 22px;
}
.hero-card img {
    width: 100%; height: 100%; object-fit: cover;
    transition: transform 500ms ease;
}
.hero-card:hover img { transform: scale(1.05); }
.hero-card-shade {
    position: absolute; inset: 0; background: rgba(0, 0, 0, 0.55);
    transition: background 500ms ease;
}
.hero-card:hover .hero-card-shade { background: rgba(0, 0, 0, 0.35); }
.hero-card-text {
    position: absolute; inset: 0;
    display: flex; align-items: center; justify-content: center;
    color: #fff; font-size: 1.5rem;
}

.section { padding-top: 5rem; padding-bottom: 5rem; }
.section-head { text-align: center; margin-bottom: 2.5rem; }
.section-head h2 { font-size: 2.25rem; margin: 0; }
.grid { display: grid; gap: 1.5rem; }
.grid.three { grid-template-columns: repeat(3, 1fr); }
.grid.four { grid-template-columns: repeat(4, 1fr); }
.grid.narrow { max-width: 56rem; margin: 0 auto; }
.grid.stats { margin-top: 3rem; grid-template-columns: repeat(4, 1fr); gap: 1rem; }
.card { border: 1px solid var(--line); border-radius: 1rem; padding: 1.5rem; }
.card.lift { transition: transform 200ms ease, box-shadow 200ms ease; }
.card.lift:hover { transform: translateY(-4px); box-shadow: 0 10px 25px rgba(0, 0, 0, 0.1); }
.card-title { font-size: 1.125rem; font-weight: 600; }
.feature-icon {
    display: inline-flex; align-items: center; justify-content: center;
    width: 2.75rem; height: 2.75rem; border-radius: 0.75rem;
    color: #fff; margin-bottom: 1rem;
}
.more { margin-top: 1rem; display: inline-flex; align-items: center; gap: 0.25rem; }
.crew-card { padding: 0; overflow: hidden; }
.crew-photo { height: 10rem; background: var(--line); }
.crew-photo img { width: 100%; height: 100%; object-fit: cover; }
.crew-body { padding: 1rem; }
.crew-title { display: flex; align-items: center; justify-content: space-between; }
.pill { border-radius: 9999px; background: var(--line); padding: 0.125rem 0.5rem; font-size: 0.75rem; }
.clamp { display: -webkit-box; -webkit-line-clamp: 2; -webkit-box-orient: vertical; overflow: hidden; }

.timeline { position: relative; max-width: 48rem; margin: 0 auto; border-left: 1px solid var(--line); list-style: none; padding: 0; }
.timeline li { position: relative; margin: 0 0 2rem 2rem; }
.timeline-dot {
    position: absolute; left: -2.75rem; top: 0.5rem;
    width: 1.5rem; height: 1.5rem; border-radius: 9999px;
    background: linear-gradient(90deg, #3b82f6, #a855f7);
    box-shadow: 0 0 0 2px var(--background);
}
.timeline .card { padding: 1rem; }
.timeline-row { display: flex; flex-wrap: wrap; justify-content: space-between; gap: 0.75rem; margin-bottom: 0.5rem; }

.carousel { position: relative; max-width: 48rem; margin: 0 auto; overflow: hidden; }
.carousel-track { display: flex; }
.slide { width: 100%; flex-shrink: 0; padding: 0 0.5rem; box-sizing: border-box; }
.reviewer { display: flex; align-items: center; gap: 0.75rem; margin-bottom: 0.5rem; }
.avatar { width: 2.5rem; height: 2.5rem; border-radius: 9999px; background: var(--line); }
.stars { margin-top: 0.75rem; color: #fb923c; }
.dots { margin-top: 1rem; display: flex; justify-content: center; gap: 0.5rem; }
.dot {
    width: 0.5rem; height: 0.5rem; padding: 0; border: none; border-radius: 9999px;
    background: var(--foreground); opacity: 0.2; cursor: pointer;
}
.dot.active { opacity: 1; }
.stat-value { font-size: 1.875rem; font-weight: 700; }
.step-badge {
    margin: 0 auto 0.75rem; width: 2.5rem; height: 2.5rem; border-radius: 9999px;
    display: flex; align-items: center; justify-content: center;
    color: #fff; background: linear-gradient(90deg, #3b82f6, #a855f7);
}

.cta { padding-bottom: 6rem; }
.cta-frame {
    border-radius: 1.5rem; padding: 4px; overflow: hidden;
    background: linear-gradient(135deg, #2563eb, #9333ea, #db2777);
}
.cta-inner { border-radius: 22px; background: var(--background); opacity: 0.95; padding: 3rem; text-align: center; }
.cta-inner h2 { font-size: 2.25rem; margin: 0; }
.pulse { margin-top: 1.5rem; animation: pulse 2s ease-in-out infinite; }
@keyframes pulse { 50% { opacity: 0.6; } }

.site-footer { border-top: 1px solid var(--line); padding: 3rem 0; }
.footer-grid { grid-template-columns: repeat(4, 1fr); gap: 2rem; }
.footer-brand { font-size: 1.25rem; }
.site-footer ul { list-style: none; padding: 0; display: flex; flex-direction: column; gap: 0.5rem; }
.site-footer a:hover { color: var(--foreground); }
.copyright { margin-top: 2.5rem; }

.fab-stack { position: fixed; bottom: 1.25rem; right: 1.25rem; display: flex; flex-direction: column; gap: 0.75rem; }
.fab {
    display: inline-flex; align-items: center; justify-content: center;
    width: 3rem; height: 3rem; border-radius: 9999px;
    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.2);
}
.fab-chat { color: #fff; background: linear-gradient(135deg, #3b82f6, #a855f7); }
.fab-phone { color: var(--background); background: var(--foreground); }

.rise { animation: rise 600ms ease both; }
.slide-in { animation: slide-in 500ms ease both; }
.pop { animation: pop 600ms ease both; }
@keyframes rise { from { opacity: 0; transform: translateY(16px); } }
@keyframes slide-in { from { opacity: 0; transform: translateX(-12px); } }
@keyframes pop { from { opacity: 0; transform: scale(0.95); } }

@media (max-width: 1024px) {
    .hero-grid { grid-template-columns: 1fr; }
    .grid.four { grid-template-columns: repeat(2, 1fr); }
    .grid.three { grid-template-columns: repeat(2, 1fr); }
}
@media (max-width: 768px) {
    .desktop-nav { display: none; }
    .burger { display: inline-flex; }
    .hero h1 { font-size: 2.25rem; }
    .info-chips, .grid.three, .grid.four, .footer-grid { grid-template-columns: 1fr; }
    .grid.stats { grid-template-columns: repeat(2, 1fr); }
    .hero-actions { flex-direction: column; }
}
@media (max-width: 640px) {
    .header-cta { display: none; }
}
"#;
