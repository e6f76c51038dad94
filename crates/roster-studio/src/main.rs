//! Interactive demo shell for the roster directory.
//!
//! Loads the bundled 20-record dataset, then drives a
//! [`DirectorySession`] from stdin commands, printing the rendered
//! view after each one. `html <path>` writes a complete document for
//! opening in a browser.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};

use roster_markup::{Element, Node};
use roster_ui::prelude::*;

const DATASET: &str = include_str!("../data/students.json");

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    println!();
    println!("  ╔════════════════════════════════════════╗");
    println!("  ║           ROSTER STUDIO v0.1           ║");
    println!("  ║   paginated student directory  demo    ║");
    println!("  ╚════════════════════════════════════════╝");
    println!();

    let records: Vec<Record> =
        serde_json::from_str(DATASET).context("parsing bundled dataset")?;
    log::info!("loaded {} records", records.len());

    let mut session = DirectorySession::new(records);
    print_view(&session);
    print_help();

    let stdin = io::stdin();
    loop {
        print!("roster> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        match Command::parse(&line) {
            Some(Command::Search(text)) => {
                session.handle_event(&UiEvent::SearchInput { text });
                print_view(&session);
            }
            Some(Command::Page(page)) => {
                if session.handle_event(&UiEvent::PageSelected { page }).is_consumed() {
                    print_view(&session);
                } else {
                    println!("  already on page {page}");
                }
            }
            Some(Command::Clear) => {
                session.handle_event(&UiEvent::SearchInput { text: String::new() });
                print_view(&session);
            }
            Some(Command::Show) => println!("{}", session.render_page().to_html()),
            Some(Command::Html(path)) => {
                std::fs::write(&path, full_document(&session))
                    .with_context(|| format!("writing {path}"))?;
                println!("  wrote {path}");
            }
            Some(Command::Quit) => break,
            None => print_help(),
        }
    }

    Ok(())
}

// ── Commands ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Search(String),
    Page(usize),
    Clear,
    /// Print the page region markup.
    Show,
    /// Write a full HTML document to the given path.
    Html(String),
    Quit,
}

impl Command {
    fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((v, r)) => (v, r.trim()),
            None => (line, ""),
        };
        match verb {
            "search" if !rest.is_empty() => Some(Self::Search(rest.to_string())),
            "page" => rest.parse().ok().map(Self::Page),
            "clear" => Some(Self::Clear),
            "show" => Some(Self::Show),
            "html" if !rest.is_empty() => Some(Self::Html(rest.to_string())),
            "quit" | "exit" => Some(Self::Quit),
            _ => None,
        }
    }
}

fn print_help() {
    println!("  commands: search <text> | page <n> | clear | show | html <path> | quit");
    println!();
}

// ── Output ────────────────────────────────────────────────────────────────

/// Print the current page as a terminal summary.
fn print_view(session: &DirectorySession) {
    println!();
    for card in session.page_cards() {
        println!("  {:<24} {:<32} {}", card.full_name, card.email, card.joined);
    }
    if session.no_results() {
        println!("  No result");
    }

    let controls = session.page_controls();
    if controls.visible {
        let bar: Vec<String> = controls
            .controls
            .iter()
            .map(|c| {
                if c.active { format!("[{}]", c.number) } else { format!(" {} ", c.number) }
            })
            .collect();
        println!();
        println!("  {} of {} shown   pages: {}", session.page_cards().len(),
            session.active_list().len(), bar.join(" "));
    }
    println!();
}

/// A complete document: the page region with the header and search
/// block inserted ahead of the student list.
fn full_document(session: &DirectorySession) -> String {
    let header = Element::with_attr("header", "class", "header")
        .child(Element::new("h2").text("Students"))
        .child(search_block_markup());

    let mut page = session.render_page();
    page.children.insert(0, Node::Element(header));

    let doc = Element::new("html")
        .child(
            Element::new("head")
                .child(Element::with_attr("meta", "charset", "utf-8"))
                .child(Element::new("title").text("Students")),
        )
        .child(Element::new("body").child(page));

    format!("<!DOCTYPE html>\n{}\n", doc.to_html())
}
