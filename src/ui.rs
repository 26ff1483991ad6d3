// UI layer: an interactive menu built on `dialoguer`. The session token is
// a local of `main_menu`; it is handed to the quick-add and contents flows
// as a plain value and dropped when the menu exits.

use anyhow::Result;
use crossterm::style::{style, Stylize};
use dialoguer::{Confirm, Input, Password, Select};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use crate::api::ApiClient;
use crate::forms::{LoginForm, QuickAddForm, RegisterForm, StatusKind, StatusLine, LOGIN_REQUIRED_MESSAGE};
use crate::showcase::{self, ARCHITECTURE_SECTION, HERO, QUICK_START_SECTION, ROADMAP_SECTION};
use crate::types::{ContentSummary, ContentType, Page};

const MENU: [&str; 6] = ["Login", "Register", "Quick-add content", "My contents", "About", "Exit"];

/// Main interactive menu. Runs until the user picks "Exit". Request
/// failures are printed as status lines and never end the loop.
pub fn main_menu(api: ApiClient) -> Result<()> {
    print_showcase(&showcase::render_hero());
    let mut token: Option<String> = None;
    let mut login = LoginForm::default();
    let mut quick_add = QuickAddForm::default();

    loop {
        let prompt = if token.is_some() { "SmartCurator (로그인됨)" } else { "SmartCurator" };
        let selection = Select::new().with_prompt(prompt).items(&MENU[..]).default(0).interact()?;
        match selection {
            0 => {
                if let Some(issued) = handle_login(&api, &mut login)? {
                    token = Some(issued);
                }
            }
            1 => handle_register(&api)?,
            2 => handle_quick_add(&api, &mut quick_add, token.as_deref())?,
            3 => handle_contents(&api, token.as_deref())?,
            4 => print_showcase(&showcase::render_all()),
            5 => break,
            _ => {}
        }
    }
    Ok(())
}

/// Collect credentials (prefilled with the demo account) and log in.
/// Returns the access token when one was issued.
fn handle_login(api: &ApiClient, form: &mut LoginForm) -> Result<Option<String>> {
    form.email = Input::new()
        .with_prompt("이메일")
        .default(form.email.clone())
        .interact_text()?;
    let password: String = Password::new()
        .with_prompt("비밀번호 (Enter: 데모 계정)")
        .allow_empty_password(true)
        .interact()?;
    if !password.is_empty() {
        form.password = password;
    }

    let outcome = with_spinner("요청 중...", || form.submit(api))?;
    print_status(&outcome.status);
    Ok(outcome.token)
}

fn handle_register(api: &ApiClient) -> Result<()> {
    let mut form = RegisterForm {
        email: Input::new().with_prompt("이메일").interact_text()?,
        password: Password::new()
            .with_prompt("비밀번호")
            .with_confirmation("비밀번호 확인", "비밀번호가 일치하지 않습니다.")
            .interact()?,
        full_name: Input::new()
            .with_prompt("이름 (선택)")
            .allow_empty(true)
            .interact_text()?,
    };
    let status = with_spinner("가입 중...", || form.submit(api))?;
    print_status(&status);
    Ok(())
}

/// Fill in the quick-add form and send it. The token check happens before
/// any prompt so a logged-out user is not asked for fields first.
fn handle_quick_add(api: &ApiClient, form: &mut QuickAddForm, token: Option<&str>) -> Result<()> {
    if token.is_none() {
        print_status(&form.submit(api, None));
        return Ok(());
    }

    form.title = Input::new()
        .with_prompt("제목")
        .with_initial_text(form.title.clone())
        .interact_text()?;
    form.url = Input::new()
        .with_prompt("URL (선택)")
        .with_initial_text(form.url.clone())
        .allow_empty(true)
        .interact_text()?;
    form.content = Input::new()
        .with_prompt("메모 / 본문 (선택)")
        .with_initial_text(form.content.clone())
        .allow_empty(true)
        .interact_text()?;
    let labels: Vec<&str> = ContentType::ALL.iter().map(|kind| kind.label()).collect();
    let current = ContentType::ALL
        .iter()
        .position(|kind| *kind == form.content_type)
        .unwrap_or(0);
    form.content_type = ContentType::ALL[Select::new()
        .with_prompt("타입")
        .items(&labels)
        .default(current)
        .interact()?];
    form.is_public = Confirm::new()
        .with_prompt("공개 컨텐츠로 저장")
        .default(form.is_public)
        .interact()?;

    let status = with_spinner("등록 중...", || form.submit(api, token))?;
    print_status(&status);
    Ok(())
}

fn handle_contents(api: &ApiClient, token: Option<&str>) -> Result<()> {
    let Some(token) = token else {
        print_status(&StatusLine::failure(LOGIN_REQUIRED_MESSAGE));
        return Ok(());
    };
    match with_spinner("불러오는 중...", || api.my_contents(token, Page::default()))? {
        Ok(rows) => print_contents(&rows),
        Err(e) => print_status(&StatusLine::failure(e.to_string())),
    }
    Ok(())
}

/// Run `f` while a spinner shows `message`. The spinner is cleared before
/// the status line is printed.
fn with_spinner<T>(message: &str, f: impl FnOnce() -> T) -> Result<T> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}")?);
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(80));
    let value = f();
    spinner.finish_and_clear();
    Ok(value)
}

pub fn print_status(status: &StatusLine) {
    match status.kind {
        StatusKind::Success => println!("{}", style(&status.text).green()),
        StatusKind::Failure => println!("{}", style(&status.text).yellow()),
    }
}

/// Print `/contents/my` rows, one block per item.
pub fn print_contents(rows: &[ContentSummary]) {
    if rows.is_empty() {
        println!("등록된 컨텐츠가 없습니다.");
        return;
    }
    for row in rows {
        println!("{} {} [{}]", style(format!("#{}", row.id)).dim(), style(&row.title).bold(), row.status);
        if let Some(summary) = &row.summary {
            println!("    {summary}");
        }
        if let Some(tags) = row.tags.as_ref().filter(|tags| !tags.is_empty()) {
            println!("    {}", style(tags.join(", ")).cyan());
        }
        if let Some(updated_at) = &row.updated_at {
            println!("    {}", style(updated_at).dim());
        }
    }
}

/// Print showcase text with section headings highlighted.
pub fn print_showcase(text: &str) {
    let headings = [
        HERO.headline,
        QUICK_START_SECTION.title,
        ARCHITECTURE_SECTION.title,
        ROADMAP_SECTION.title,
    ];
    for line in text.lines() {
        if headings.contains(&line) {
            println!("{}", style(line).bold().cyan());
        } else if line.starts_with("■ ") {
            println!("{}", style(line).bold());
        } else {
            println!("{line}");
        }
    }
}
