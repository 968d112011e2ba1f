//! Terminal rendering for listings and mutation results.

use chrono::{DateTime, Utc};
use colored::Colorize;
use notewallapp::commands::list::Listing;
use notewallapp::model::Note;
use unicode_width::UnicodeWidthChar;

const TITLE_WIDTH: usize = 48;

pub(super) fn print_listing(listing: &Listing, page_size: usize) {
    if listing.notes.is_empty() {
        println!("No notes found.");
        return;
    }

    for note in &listing.notes {
        print_note_row(note);
    }

    let pages = listing.total.div_ceil(page_size).max(1);
    let mut footer = format!("Page {}/{} · {} notes", listing.page, pages, listing.total);
    if listing.has_more {
        footer.push_str(" · more available");
    }
    println!("{}", footer.dimmed());

    if !listing.tag_cloud.is_empty() {
        let cloud: Vec<String> = listing
            .tag_cloud
            .iter()
            .map(|(tag, count)| format!("{}({})", tag, count))
            .collect();
        println!("{} {}", "tags:".dimmed(), cloud.join(" "));
    }
    if !listing.authors.is_empty() {
        println!("{} {}", "authors:".dimmed(), listing.authors.join(", "));
    }
}

fn print_note_row(note: &Note) {
    let mut counters = format!("{} likes · {} comments", note.likes, note.comments.len());
    if !note.attachments.is_empty() {
        counters.push_str(&format!(" · {} files", note.attachments.len()));
    }
    println!(
        "{:>4}  {}  {}  {}  {} {}",
        note.id.to_string().yellow(),
        format!("[{}]", note.class_code).cyan(),
        truncate_to_width(&note.title, TITLE_WIDTH).bold(),
        note.author,
        format_time_ago(note.created).dimmed(),
        counters.dimmed(),
    );
    if !note.tags.is_empty() || !note.hashtags.is_empty() {
        let mut labels: Vec<String> = note.tags.iter().map(|t| format!("[{}]", t)).collect();
        labels.extend(note.hashtags.iter().map(|h| format!("#{}", h)));
        println!("      {}", labels.join(" ").dimmed());
    }
}

pub(super) fn print_created(note: &Note) {
    println!("{} {} ({})", "Created note".green(), note.id, note.title);
    for attachment in &note.attachments {
        println!("  attached {} as id {}", attachment.original_filename, attachment.id);
    }
}

pub(super) fn print_edited(note: &Note) {
    println!("{} {} ({})", "Updated note".green(), note.id, note.title);
    for attachment in &note.attachments {
        println!("  attachment {} (id {})", attachment.original_filename, attachment.id);
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let formatter = timeago::Formatter::new();
    formatter.convert(duration.to_std().unwrap_or_default())
}
