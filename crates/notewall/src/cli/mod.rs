//! Argument parsing, context wiring, and dispatch for the notewall binary.

mod render;

use std::error::Error;
use std::fs;
use std::io::Read;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use confique::Config;
use directories::ProjectDirs;

use notewallapp::auth::Principal;
use notewallapp::config::NotewallConfig;
use notewallapp::files::local::LocalBlobs;
use notewallapp::files::Upload;
use notewallapp::model::{CommentDraft, NoteDelta, NoteDraft};
use notewallapp::query::{DateRange, NoteQuery, SortKey};
use notewallapp::store::fs::FileStore;
use notewallapp::NotewallApi;

#[derive(Parser)]
#[command(name = "notewall", version, about = "Share and browse class notes")]
struct Cli {
    /// Data directory (defaults to the OS data dir).
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List notes with optional filters.
    List {
        /// Class code filter ("All" or e.g. CS124).
        #[arg(long)]
        class: Option<String>,
        /// Author filter (exact name).
        #[arg(long)]
        author: Option<String>,
        /// Tag filter (case-insensitive).
        #[arg(long)]
        tag: Option<String>,
        /// Case-insensitive search over title and body.
        #[arg(long, default_value = "")]
        search: String,
        /// Date range: All, Today, Week, or Month.
        #[arg(long, default_value = "All")]
        date: String,
        /// Sort key: recent, oldest, title, author, most_liked,
        /// most_commented, or popular.
        #[arg(long, default_value = "recent")]
        sort: String,
        /// 1-based page number.
        #[arg(long, default_value = "1")]
        page: String,
    },
    /// Create a note.
    Create {
        #[arg(long, default_value = "")]
        title: String,
        #[arg(long)]
        body: String,
        #[arg(long, default_value = "")]
        author: String,
        #[arg(long, default_value = "General")]
        class: String,
        /// Comma-separated tags; entries starting with # become hashtags.
        #[arg(long, default_value = "")]
        tags: String,
        /// Files to attach.
        #[arg(long = "attach")]
        attachments: Vec<PathBuf>,
        /// Act as this user (sets the note owner).
        #[arg(long = "as")]
        as_user: Option<String>,
    },
    /// Edit a note. Omitted fields keep their current value.
    Edit {
        id: u64,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        body: Option<String>,
        #[arg(long)]
        author: Option<String>,
        #[arg(long)]
        class: Option<String>,
        #[arg(long)]
        tags: Option<String>,
        #[arg(long = "attach")]
        attachments: Vec<PathBuf>,
        /// Attachment ids to remove.
        #[arg(long = "remove-attachment")]
        remove_attachments: Vec<u64>,
        #[arg(long = "as")]
        as_user: Option<String>,
        #[arg(long)]
        admin: bool,
    },
    /// Delete a note and its attachments.
    Delete {
        id: u64,
        #[arg(long = "as")]
        as_user: Option<String>,
        #[arg(long)]
        admin: bool,
    },
    /// Like a note.
    Like { id: u64 },
    /// Comment on a note.
    Comment {
        id: u64,
        #[arg(long)]
        body: String,
        #[arg(long, default_value = "")]
        author: String,
    },
    /// Download an attachment by id.
    Download {
        attachment_id: u64,
        /// Write to this path instead of the original filename.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Summarize text from a file, or stdin when no file is given.
    Summarize { file: Option<PathBuf> },
}

pub fn run() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let root = data_root(cli.dir.clone())?;
    let config = NotewallConfig::builder()
        .env()
        .file(root.join("notewall.toml"))
        .load()?;

    let upload_dir = {
        let configured = PathBuf::from(&config.upload_dir);
        if configured.is_absolute() {
            configured
        } else {
            root.join(configured)
        }
    };

    let mut api = NotewallApi::new(
        FileStore::new(root.clone()),
        LocalBlobs::new(upload_dir),
        &config,
    );

    match cli.command {
        Commands::List {
            class,
            author,
            tag,
            search,
            date,
            sort,
            page,
        } => {
            let query = NoteQuery {
                class: selector(class),
                author: selector(author),
                tag: selector(tag),
                search,
                date: DateRange::parse(&date),
                sort: SortKey::parse(&sort),
                page: page.parse().unwrap_or(1),
            };
            let listing = api.list(&query)?;
            render::print_listing(&listing, config.page_size);
        }
        Commands::Create {
            title,
            body,
            author,
            class,
            tags,
            attachments,
            as_user,
        } => {
            let draft = NoteDraft {
                author,
                title,
                body,
                class_code: class,
                tags,
            };
            let uploads = read_uploads(&attachments)?;
            let note = api.create(draft, uploads, as_user)?;
            render::print_created(&note);
        }
        Commands::Edit {
            id,
            title,
            body,
            author,
            class,
            tags,
            attachments,
            remove_attachments,
            as_user,
            admin,
        } => {
            let delta = NoteDelta {
                title,
                body,
                author,
                class_code: class,
                tags,
            };
            let uploads = read_uploads(&attachments)?;
            let actor = principal(as_user, admin);
            let note = api.edit(id, delta, uploads, &remove_attachments, actor.as_ref())?;
            render::print_edited(&note);
        }
        Commands::Delete { id, as_user, admin } => {
            let actor = principal(as_user, admin);
            api.delete(id, actor.as_ref())?;
            println!("Note {} deleted.", id);
        }
        Commands::Like { id } => {
            let likes = api.like(id)?;
            println!("Note {} now has {} like{}.", id, likes, plural(likes));
        }
        Commands::Comment { id, body, author } => {
            let note = api.comment(id, CommentDraft { author, body })?;
            println!(
                "Comment added; note {} has {} comment{}.",
                id,
                note.comments.len(),
                plural(note.comments.len() as u64)
            );
        }
        Commands::Download { attachment_id, out } => {
            let download = api.download(attachment_id)?;
            let target = out.unwrap_or_else(|| PathBuf::from(&download.filename));
            fs::write(&target, &download.bytes)?;
            println!("Saved {} ({} bytes).", target.display(), download.bytes.len());
        }
        Commands::Summarize { file } => {
            let text = match file {
                Some(path) => fs::read_to_string(path)?,
                None => {
                    let mut buf = String::new();
                    std::io::stdin().read_to_string(&mut buf)?;
                    buf
                }
            };
            let summary = api.summarize(&text)?;
            println!("{}", summary);
        }
    }

    Ok(())
}

/// "All" (any casing) and blank both mean no filtering.
fn selector(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty() && !v.eq_ignore_ascii_case("all"))
}

fn principal(as_user: Option<String>, admin: bool) -> Option<Principal> {
    match (as_user, admin) {
        (Some(user), true) => Some(Principal::admin(user.clone(), user)),
        (Some(user), false) => Some(Principal::new(user.clone(), user)),
        (None, true) => Some(Principal::admin("admin", "admin")),
        (None, false) => None,
    }
}

fn read_uploads(paths: &[PathBuf]) -> Result<Vec<Upload>, Box<dyn Error>> {
    let mut uploads = Vec::with_capacity(paths.len());
    for path in paths {
        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| format!("not a file path: {}", path.display()))?
            .to_string();
        uploads.push(Upload {
            filename,
            bytes: fs::read(path)?,
        });
    }
    Ok(uploads)
}

fn data_root(explicit: Option<PathBuf>) -> Result<PathBuf, Box<dyn Error>> {
    if let Some(dir) = explicit {
        return Ok(dir);
    }
    let dirs = ProjectDirs::from("", "", "notewall")
        .ok_or("could not determine a data directory; pass --dir")?;
    Ok(dirs.data_dir().to_path_buf())
}

fn plural(count: u64) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}
