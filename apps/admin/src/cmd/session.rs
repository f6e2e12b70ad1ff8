//! Login and page rendering against a one-shot session.

use crate::config::ConsoleConfig;
use anyhow::{Context, Result};
use clap::Args;
use gate::{LoginForm, Navigator, NoticeLevel, Render, SessionContext};
use identity::SessionIdentity;
use std::io::{self, Write};

/// Render one page.
#[derive(Args, Debug)]
pub struct VisitCommand {
    /// Page slug.
    pub page: String,
    /// Log in as this user first.
    #[arg(long, requires = "key")]
    pub email: Option<String>,
    /// API key for `--email`.
    #[arg(long, requires = "email")]
    pub key: Option<String>,
}

impl VisitCommand {
    /// Run the render cycle for the page and print it to stdout.
    pub fn run(&self, config: &ConsoleConfig) -> Result<()> {
        self.write_to(config, &mut io::stdout().lock())
    }

    /// Run the render cycle for the page, following a denial redirect, and
    /// write what the user would see to `out`.
    pub fn write_to(&self, config: &ConsoleConfig, out: &mut impl Write) -> Result<()> {
        let nav = Navigator::console();
        let mut ctx = SessionContext::new();

        if let (Some(email), Some(key)) = (&self.email, &self.key) {
            sign_in(config, &mut ctx, email, key, out)?;
        }

        if let Render::Redirected { to, denial } = nav.render(&mut ctx, &self.page) {
            writeln!(out, "Redirected to {to}: {denial}")?;
        }
        let render = nav.render(&mut ctx, &self.page);
        write_notices(&mut ctx, out)?;

        if let Render::Page {
            page,
            identity,
            menu,
        } = render
        {
            writeln!(out, "Page: {} {} ({})", page.icon, page.title, page.slug)?;
            write_identity(identity.as_ref(), out)?;
            for section in menu {
                let titles: Vec<_> = section.pages.iter().map(|p| p.title).collect();
                writeln!(out, "  {}: {}", section.section.title(), titles.join(", "))?;
            }
        }
        Ok(())
    }
}

/// Log in and print the identity and its menu to stdout.
pub fn login(config: &ConsoleConfig, email: &str, key: &str) -> Result<()> {
    login_to(config, email, key, &mut io::stdout().lock())
}

/// Log in and write the identity and its menu to `out`.
pub fn login_to(
    config: &ConsoleConfig,
    email: &str,
    key: &str,
    out: &mut impl Write,
) -> Result<()> {
    let mut ctx = SessionContext::new();
    let identity = sign_in(config, &mut ctx, email, key, out)?;
    write_identity(Some(&identity), out)?;

    let nav = Navigator::console();
    for section in nav.menu(Some(&identity)) {
        for page in section.pages {
            writeln!(out, "  {} {}", page.icon, page.title)?;
        }
    }
    Ok(())
}

fn sign_in(
    config: &ConsoleConfig,
    ctx: &mut SessionContext,
    email: &str,
    key: &str,
    out: &mut impl Write,
) -> Result<SessionIdentity> {
    let authenticator = config.authenticator(config.credential_store())?;
    let result = LoginForm::new(config.disclosure()).submit(ctx, &authenticator, email, key);
    write_notices(ctx, out)?;
    result.context("login failed")
}

fn write_notices(ctx: &mut SessionContext, out: &mut impl Write) -> io::Result<()> {
    for notice in ctx.take_notices() {
        match notice.level {
            NoticeLevel::Error => writeln!(out, "error: {}", notice.text)?,
            NoticeLevel::Success => writeln!(out, "{}", notice.text)?,
        }
    }
    Ok(())
}

fn write_identity(identity: Option<&SessionIdentity>, out: &mut impl Write) -> io::Result<()> {
    match identity {
        Some(identity) => writeln!(
            out,
            "Signed in as {} <{}> ({})",
            identity.display_name(),
            identity.email(),
            identity.role_label()
        ),
        None => writeln!(out, "Not signed in"),
    }
}
