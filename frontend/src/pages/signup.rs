use web_sys::window;
use yew::prelude::*;

use crate::config;

pub const REDIRECT_NOTICE: &str = "회원가입 페이지로 이동 중...";

/// `(input type, placeholder)` for each field of the placeholder form.
pub const FORM_FIELDS: [(&str, &str); 3] = [
    ("text", "이름"),
    ("email", "이메일"),
    ("password", "비밀번호"),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignupMode {
    Redirect(&'static str),
    Placeholder,
}

impl SignupMode {
    pub fn from_url(url: Option<&'static str>) -> Self {
        match url {
            Some(url) if !url.trim().is_empty() => SignupMode::Redirect(url),
            _ => SignupMode::Placeholder,
        }
    }
}

/// Sends the browser somewhere else without leaving a history entry.
pub trait Redirect {
    fn replace(&self, url: &str);
}

pub struct BrowserLocation;

impl Redirect for BrowserLocation {
    fn replace(&self, url: &str) {
        let Some(window) = window() else { return };
        if let Err(e) = window.location().replace(url) {
            log::warn!("signup redirect to {} failed: {:?}", url, e);
        }
    }
}

/// Runs on mount. Returns whether a redirect was issued.
pub fn begin_signup(mode: SignupMode, to: &impl Redirect) -> bool {
    match mode {
        SignupMode::Redirect(url) => {
            log::info!("Redirecting to external signup");
            to.replace(url);
            true
        }
        SignupMode::Placeholder => false,
    }
}

#[function_component(Signup)]
pub fn signup() -> Html {
    let mode = SignupMode::from_url(config::signup_url());

    use_effect_with_deps(
        move |&mode| {
            begin_signup(mode, &BrowserLocation);
            || ()
        },
        mode,
    );

    html! { <SignupView {mode} /> }
}

#[derive(Properties, PartialEq)]
pub struct SignupViewProps {
    pub mode: SignupMode,
}

#[function_component(SignupView)]
pub fn signup_view(props: &SignupViewProps) -> Html {
    match props.mode {
        SignupMode::Redirect(_) => html! {
            <div class="signup-page">
                <style>{ SIGNUP_CSS }</style>
                <p class="notice">{ REDIRECT_NOTICE }</p>
            </div>
        },
        SignupMode::Placeholder => html! { <PlaceholderForm /> },
    }
}

#[function_component(PlaceholderForm)]
fn placeholder_form() -> Html {
    // Not wired to anything yet
    let onsubmit = Callback::from(|e: SubmitEvent| e.prevent_default());

    html! {
        <div class="signup-page">
            <style>{ SIGNUP_CSS }</style>
            <div class="signup-card">
                <h1 class="heading">{"회원가입"}</h1>
                <p class="notice">{"간단하게 회원가입을 해보세요."}</p>
                <form {onsubmit}>
                    { for FORM_FIELDS.iter().map(|(kind, placeholder)| html! {
                        <input type={*kind} placeholder={*placeholder} />
                    }) }
                    <button type="submit">{"가입하기"}</button>
                </form>
            </div>
        </div>
    }
}

pub(crate) const SIGNUP_CSS: &str = r#"
.signup-page {
    min-height: 100vh;
    display: flex;
    align-items: center;
    justify-content: center;
    padding: 0 1rem;
}
.signup-page .notice { font-size: 0.875rem; color: var(--muted); margin-bottom: 1.5rem; }
.signup-card {
    width: 100%;
    max-width: 28rem;
    border-radius: 1rem;
    border: 1px solid var(--line);
    padding: 1.5rem;
}
.signup-card h1 { font-size: 1.5rem; margin: 0 0 1rem; }
.signup-card form { display: flex; flex-direction: column; gap: 0.75rem; }
.signup-card input {
    border-radius: 0.5rem;
    border: 1px solid var(--line);
    padding: 0.5rem 0.75rem;
    background: transparent;
    color: inherit;
}
.signup-card button {
    border: none;
    border-radius: 9999px;
    padding: 0.5rem 1rem;
    color: #fff;
    font-weight: 600;
    cursor: pointer;
    background: linear-gradient(90deg, #f97316, #ec4899, #a855f7);
}
"#;
