use chrono::Utc;
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use slip::api::{CmdMessage, ConfigAction, MessageLevel, SlipApi, SlipPaths};
use slip::commands::export::ExportFormat;
use slip::commands::{HomeSummary, NoteStats};
use slip::config::SlipConfig;
use slip::editor::edit_text;
use slip::error::{Result, SlipError};
use slip::index::{DisplayIndex, DisplayNote};
use slip::markdown::{encode_markdown, note_to_markdown};
use slip::model::Note;
use slip::preview::render_note;
use slip::session::ViewMode;
use slip::store::fs::FileStore;
use slip::store::DataStore;
use slip::tree::encode_tree;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: SlipApi<FileStore>,
    config: SlipConfig,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Create { title, body }) => handle_create(&mut ctx, title, body),
        Some(Commands::List) => handle_list(&ctx),
        Some(Commands::View {
            indexes,
            html,
            markdown,
            tree,
        }) => {
            let mode = if html {
                ViewMode::Preview
            } else if tree {
                ViewMode::Rich
            } else if markdown {
                ViewMode::Markdown
            } else {
                ctx.config.view_mode()
            };
            handle_view(&ctx, indexes, mode)
        }
        Some(Commands::Edit { indexes }) => handle_edit(&mut ctx, indexes),
        Some(Commands::Rename { index, title }) => handle_rename(&mut ctx, index, title),
        Some(Commands::Duplicate { indexes }) => handle_duplicate(&mut ctx, indexes),
        Some(Commands::Delete { indexes }) => handle_delete(&mut ctx, indexes),
        Some(Commands::Pin { indexes }) => handle_pin(&mut ctx, indexes),
        Some(Commands::Unpin { indexes }) => handle_unpin(&mut ctx, indexes),
        Some(Commands::Search { term }) => handle_search(&ctx, term),
        Some(Commands::Export {
            indexes,
            format,
            output,
        }) => handle_export(&ctx, indexes, format, output),
        Some(Commands::Import { paths }) => handle_import(&mut ctx, paths),
        Some(Commands::Stats { indexes }) => handle_stats(&ctx, indexes),
        Some(Commands::Home) => handle_home(&ctx),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        Some(Commands::Init) => handle_init(&mut ctx),
        None => handle_list(&ctx),
    }
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("SLIP_LOG").unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn resolve_home(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.store {
        return Ok(dir.clone());
    }
    if let Some(dir) = std::env::var_os("SLIP_HOME").filter(|d| !d.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "slip", "slip")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| SlipError::Store("Could not determine data directory".into()))
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let home = resolve_home(cli)?;
    let config = SlipConfig::load(&home).unwrap_or_default();
    let store = FileStore::new(&home);
    let fresh = store.store_path().is_some_and(|path| !path.exists());
    tracing::debug!(home = %home.display(), fresh, "resolved slip home");

    let mut api = SlipApi::new(store, SlipPaths { home });

    let seeds = !matches!(cli.command, Some(Commands::Init) | Some(Commands::Config { .. }));
    if fresh && seeds && config.seed_welcome {
        api.init()?;
    }

    Ok(AppContext { api, config })
}

fn handle_create(ctx: &mut AppContext, title: Option<String>, body: Option<String>) -> Result<()> {
    let result = ctx.api.create_note(title, body)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_notes()?;
    print_notes(&result.listed_notes);
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &AppContext, indexes: Vec<String>, mode: ViewMode) -> Result<()> {
    let result = ctx.api.view_notes(&indexes)?;
    print_full_notes(&result.listed_notes, mode)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(ctx: &mut AppContext, indexes: Vec<String>) -> Result<()> {
    let viewed = ctx.api.view_notes(&indexes)?;
    let target = match viewed.listed_notes.as_slice() {
        [one] => one,
        [] => return Err(SlipError::Api("No slip selected".into())),
        many => {
            return Err(SlipError::Api(format!(
                "Edit one slip at a time ({} selected)",
                many.len()
            )))
        }
    };

    let edited = edit_text(&note_to_markdown(&target.note), &ctx.config.editor_ext)?;
    let selector = [target.index.to_string()];
    let result = ctx.api.edit_note(&selector, &edited)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_rename(ctx: &mut AppContext, index: String, title: String) -> Result<()> {
    let result = ctx.api.rename_note(&[index], &title)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_duplicate(ctx: &mut AppContext, indexes: Vec<String>) -> Result<()> {
    let result = ctx.api.duplicate_notes(&indexes)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, indexes: Vec<String>) -> Result<()> {
    let result = ctx.api.delete_notes(&indexes)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_pin(ctx: &mut AppContext, indexes: Vec<String>) -> Result<()> {
    let result = ctx.api.pin_notes(&indexes)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_unpin(ctx: &mut AppContext, indexes: Vec<String>) -> Result<()> {
    let result = ctx.api.unpin_notes(&indexes)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(ctx: &AppContext, term: String) -> Result<()> {
    let result = ctx.api.search_notes(&term)?;
    print_notes(&result.listed_notes);
    print_messages(&result.messages);
    Ok(())
}

fn handle_export(
    ctx: &AppContext,
    indexes: Vec<String>,
    format: String,
    output: Option<PathBuf>,
) -> Result<()> {
    let format: ExportFormat = format.parse().map_err(SlipError::Api)?;
    let result = ctx.api.export_notes(&indexes, format)?;

    if !result.exported.is_empty() {
        let joined = result
            .exported
            .iter()
            .map(|e| e.content.as_str())
            .collect::<Vec<_>>()
            .join("\n\n");

        match output {
            Some(path) => {
                std::fs::write(&path, format!("{}\n", joined))?;
                print_messages(&[CmdMessage::success(format!(
                    "Exported {} slip{} to {}",
                    result.exported.len(),
                    if result.exported.len() == 1 { "" } else { "s" },
                    path.display()
                ))]);
            }
            None => println!("{}", joined),
        }
    }

    print_messages(&result.messages);
    Ok(())
}

fn handle_import(ctx: &mut AppContext, paths: Vec<PathBuf>) -> Result<()> {
    let result = ctx.api.import_notes(&paths)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_stats(ctx: &AppContext, indexes: Vec<String>) -> Result<()> {
    let result = ctx.api.stats(&indexes)?;
    print_stats(&result.stats);
    print_messages(&result.messages);
    Ok(())
}

fn handle_home(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.home()?;
    if let Some(home) = &result.home {
        print_home(home);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = ctx.api.config_action(action)?;
    if show_all {
        if let Some(config) = &result.config {
            for (key, value) in config.entries() {
                println!("{} = {}", key, value);
            }
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_init(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.init()?;
    print_messages(&result.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn print_full_notes(notes: &[DisplayNote], mode: ViewMode) -> Result<()> {
    for (i, dn) in notes.iter().enumerate() {
        if i > 0 {
            println!("\n================================\n");
        }
        match mode {
            ViewMode::Markdown => {
                println!("{} {}", dn.index.to_string().yellow(), dn.note.title.bold());
                println!("--------------------------------");
                println!("{}", encode_markdown(dn.note.body()));
            }
            ViewMode::Preview => println!("{}", render_note(&dn.note)),
            ViewMode::Rich => println!("{}", encode_tree(dn.note.body()).to_json()?),
        }
    }
    Ok(())
}

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;
const PIN_MARKER: &str = "⚲";

fn print_notes(notes: &[DisplayNote]) {
    if notes.is_empty() {
        println!("No slips found.");
        return;
    }

    let has_pinned = notes
        .iter()
        .any(|dn| matches!(dn.index, DisplayIndex::Pinned(_)));
    if has_pinned {
        println!();
    }

    let mut last_was_pinned = false;
    for dn in notes {
        let is_pinned_entry = matches!(dn.index, DisplayIndex::Pinned(_));
        if last_was_pinned && !is_pinned_entry {
            println!();
        }
        last_was_pinned = is_pinned_entry;

        let idx_str = format!("{}. ", dn.index);
        let left_prefix = if is_pinned_entry {
            format!("  {} ", PIN_MARKER)
        } else {
            "    ".to_string()
        };
        let right_suffix = if dn.note.is_pinned && !is_pinned_entry {
            format!("{} ", PIN_MARKER)
        } else {
            "  ".to_string()
        };

        let title_content = match preview_line(&dn.note) {
            preview if preview.is_empty() => dn.note.title.clone(),
            preview => format!("{} {}", dn.note.title, preview),
        };

        let fixed_width = left_prefix.width() + idx_str.width() + right_suffix.width() + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed_width);
        let title_display = truncate_to_width(&title_content, available);
        let padding = available.saturating_sub(title_display.width());

        let idx_colored = if is_pinned_entry {
            idx_str.yellow()
        } else {
            idx_str.normal()
        };

        println!(
            "{}{}{}{}{}{}",
            left_prefix,
            idx_colored,
            title_display,
            " ".repeat(padding),
            right_suffix,
            format_time_ago(dn.note.updated_at).dimmed()
        );
    }
}

/// First 50 characters of the body, flattened onto one line.
fn preview_line(note: &Note) -> String {
    note.body()
        .iter()
        .map(|b| b.content.as_str())
        .filter(|c| !c.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
        .chars()
        .take(50)
        .map(|c| if c == '\n' { ' ' } else { c })
        .collect()
}

fn print_stats(stats: &[NoteStats]) {
    for entry in stats {
        println!(
            "{} {}: {} words, {} characters",
            entry.index.to_string().yellow(),
            entry.title.bold(),
            entry.stats.words,
            entry.stats.characters
        );
    }
}

fn print_home(home: &HomeSummary) {
    println!("{}", home.headline.bold());

    if !home.recent.is_empty() {
        println!("\n{}", "Recent".underline());
        for note in &home.recent {
            let title = truncate_to_width(&note.title, LINE_WIDTH - TIME_WIDTH - 4);
            let padding = (LINE_WIDTH - TIME_WIDTH - 4).saturating_sub(title.width());
            println!(
                "    {}{}{}",
                title,
                " ".repeat(padding),
                format_time_ago(note.updated_at).dimmed()
            );
        }
    }

    let today = home.updated_today.len();
    println!(
        "\n{}",
        format!(
            "Today: {} slip{} updated",
            today,
            if today == 1 { "" } else { "s" }
        )
        .dimmed()
    );
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: chrono::DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let time_str = timeago::Formatter::new().convert(duration.to_std().unwrap_or_default());

    // Singular units are one character shorter; keep the column aligned.
    let time_str = ["second", "minute", "hour", "day", "week", "month", "year"]
        .iter()
        .fold(time_str, |acc, unit| {
            acc.replace(&format!("{} ago", unit), &format!("{}  ago", unit))
        });

    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
