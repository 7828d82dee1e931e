//! Debug tool to dump generated `.pptx` and `.docx` files.
//!
//! Usage:
//!   `cargo run --bin dump_deck -- <file.pptx|file.docx>`
//!   `cargo run --bin dump_deck -- <file> --json`
//!
//! Prints the slide or paragraph structure read back from the package, for
//! checking layouts, placeholders and missing-screenshot notes.

// Development/debug binary - allow expect/unwrap for simpler error handling
#![allow(clippy::expect_used, clippy::unwrap_used)]

use casedeck::export::DocumentKind;
use casedeck::ooxml::inspect::{inspect_deck, inspect_document, DeckSummary, DocumentSummary};
use std::env;
use std::path::Path;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <file.pptx|file.docx> [--json]", args[0]);
        std::process::exit(1);
    }

    let path = Path::new(&args[1]);
    let json = args.contains(&"--json".to_string());

    match DocumentKind::from_path(path) {
        Some(DocumentKind::Presentation) => {
            let deck = inspect_deck(path).unwrap_or_else(|e| {
                eprintln!("Failed to read {}: {e}", path.display());
                std::process::exit(1);
            });
            if json {
                println!("{}", serde_json::to_string_pretty(&deck).unwrap());
            } else {
                dump_deck(path, &deck);
            }
        }
        Some(DocumentKind::Document) => {
            let doc = inspect_document(path).unwrap_or_else(|e| {
                eprintln!("Failed to read {}: {e}", path.display());
                std::process::exit(1);
            });
            if json {
                println!("{}", serde_json::to_string_pretty(&doc).unwrap());
            } else {
                dump_document(path, &doc);
            }
        }
        None => {
            eprintln!("Not a .pptx or .docx file: {}", path.display());
            std::process::exit(1);
        }
    }
}

fn dump_deck(path: &Path, deck: &DeckSummary) {
    println!("Deck: {} ({} slides)", path.display(), deck.slides.len());
    println!();

    for (i, slide) in deck.slides.iter().enumerate() {
        let layout = slide
            .layout
            .as_deref()
            .and_then(|l| l.rsplit('/').next())
            .unwrap_or("-");
        println!("{:>2}. {} [{layout}]", i + 1, slide.title.as_deref().unwrap_or("(untitled)"));
        for text in &slide.texts {
            println!("      • {text}");
        }
        if slide.pictures > 0 {
            println!("      picture x{}", slide.pictures);
        }
        if slide.placeholders > 0 {
            println!("      placeholder x{}", slide.placeholders);
        }
        if let Some(notes) = &slide.notes {
            println!("      notes: {notes}");
        }
    }
}

fn dump_document(path: &Path, doc: &DocumentSummary) {
    println!("Document: {} ({} paragraphs, {} pictures)", path.display(), doc.paragraphs.len(), doc.pictures());
    println!();

    for p in &doc.paragraphs {
        if p.page_breaks > 0 {
            println!("──── page break ────");
            continue;
        }
        if p.pictures > 0 {
            println!("[picture x{}]", p.pictures);
            continue;
        }
        let style = p.style.as_deref().unwrap_or("Normal");
        let marks = match (p.bold, p.italic) {
            (true, true) => " (bold, italic)",
            (true, false) => " (bold)",
            (false, true) => " (italic)",
            (false, false) => "",
        };
        println!("{style:<12} {}{marks}", p.text);
    }
}
