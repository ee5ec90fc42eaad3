use std::io::stdout;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{
        DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
        Event, EventStream, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::prelude::*;
use serde_json::Value;
use tokio::sync::mpsc;

use picksheet::config::Config;
use picksheet::error::PickerError;
use picksheet::events::EventOutcome;
use picksheet::log;
use picksheet::picker::{Labeled, Picker};
use picksheet::sheet::{self, SheetManager};

/// Simulated lookup latency, so the loading state is visible
const SEARCH_DELAY: Duration = Duration::from_millis(150);
const TICK: Duration = Duration::from_millis(80);

const BUILTIN_COLORS: &[&str] = &[
    "Red", "Orange", "Yellow", "Green", "Teal", "Blue", "Indigo", "Violet", "Pink", "Brown",
    "Black", "White", "Grey",
];

/// Messages from the picker callbacks to the event loop.
enum UiEvent {
    Search(String),
    Selected(Value),
}

#[derive(Debug, Default)]
struct Args {
    label: Option<String>,
    searchable: Option<bool>,
    height: Option<u16>,
    config: Option<PathBuf>,
    data_file: Option<PathBuf>,
}

fn parse_args(args: &[String]) -> Args {
    let mut parsed = Args::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--label" | "-l" => {
                if i + 1 < args.len() {
                    parsed.label = Some(args[i + 1].clone());
                    i += 2;
                    continue;
                } else {
                    eprintln!("Warning: --label requires a value");
                }
            }
            "--no-search" => parsed.searchable = Some(false),
            "--search" => parsed.searchable = Some(true),
            "--height" => {
                if i + 1 < args.len() {
                    match args[i + 1].parse() {
                        Ok(height) => parsed.height = Some(height),
                        Err(_) => eprintln!("Warning: '{}' is not a valid height", args[i + 1]),
                    }
                    i += 2;
                    continue;
                } else {
                    eprintln!("Warning: --height requires a number of rows");
                }
            }
            "--config" | "-c" => {
                if i + 1 < args.len() {
                    parsed.config = Some(PathBuf::from(&args[i + 1]));
                    i += 2;
                    continue;
                } else {
                    eprintln!("Warning: --config requires a path argument");
                }
            }
            arg if !arg.starts_with('-') => parsed.data_file = Some(PathBuf::from(arg)),
            _ => {
                // Unknown flag, ignore
            }
        }
        i += 1;
    }

    parsed
}

/// Items from a JSON array file. Plain strings become `{"name": ...}`.
fn load_data(path: &Path) -> picksheet::error::Result<Vec<Value>> {
    let contents = std::fs::read_to_string(path)?;
    match serde_json::from_str(&contents)? {
        Value::Array(items) => Ok(items
            .into_iter()
            .map(|item| match item {
                Value::String(name) => serde_json::json!({ "name": name }),
                other => other,
            })
            .collect()),
        _ => Err(PickerError::Data(format!(
            "{} does not contain a JSON array",
            path.display()
        ))),
    }
}

fn builtin_data() -> Vec<Value> {
    BUILTIN_COLORS
        .iter()
        .map(|name| serde_json::json!({ "name": name }))
        .collect()
}

/// Case-insensitive label match on the trimmed query.
fn filter_items(items: &[Value], query: &str) -> Vec<Value> {
    let query = query.trim().to_lowercase();
    items
        .iter()
        .filter(|item| {
            query.is_empty()
                || item
                    .label()
                    .is_some_and(|label| label.to_lowercase().contains(&query))
        })
        .cloned()
        .collect()
}

/// Config file plus CLI flags. The demo searches unless told otherwise.
fn load_config(args: &Args) -> Config {
    let mut config = Config::load(args.config.as_deref()).with_overrides(
        args.label.clone(),
        args.searchable,
        args.height,
    );
    config.searchable.get_or_insert(true);
    config
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging and panic hook
    if let Ok(log_path) = log::init() {
        log::log(&format!("Log file: {}", log_path.display()));
        log::install_panic_hook();
    }

    let args: Vec<String> = std::env::args().collect();
    let args = parse_args(&args);

    let config = load_config(&args);

    let items = match &args.data_file {
        Some(path) => load_data(path)?,
        None => builtin_data(),
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &config, items).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableMouseCapture, DisableBracketedPaste, LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Some(choice) = result? {
        println!("{}", serde_json::to_string_pretty(&choice)?);
    }
    Ok(())
}

async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    config: &Config,
    items: Vec<Value>,
) -> Result<Option<Value>>
where
    B::Error: Send + Sync + 'static,
{
    let items = Arc::new(items);
    let (ui_tx, mut ui_rx) = mpsc::unbounded_channel::<UiEvent>();
    let (result_tx, mut result_rx) = mpsc::unbounded_channel::<(String, Vec<Value>)>();

    let manager = SheetManager::new();
    let search_tx = ui_tx.clone();
    let select_tx = ui_tx;
    let mut picker = Picker::new("demo", items.as_ref().clone())
        .with_config(config.picker_config())
        .on_search(move |query| {
            let _ = search_tx.send(UiEvent::Search(query.to_string()));
        })
        .on_select(move |item: &Value| {
            let _ = select_tx.send(UiEvent::Selected(item.clone()));
        });

    picker.mount(&manager)?;
    picker.open();

    let mut chosen = None;
    let mut event_stream = EventStream::new();
    let mut tick = tokio::time::interval(TICK);

    loop {
        terminal.draw(|frame| {
            let area = frame.area();
            picker.render(frame, area)
        })?;

        tokio::select! {
            maybe_event = event_stream.next() => {
                let Some(Ok(event)) = maybe_event else {
                    break;
                };
                if picker.handle_event(&event) != EventOutcome::Ignored {
                    continue;
                }

                // Keys the picker did not take
                if let Event::Key(key) = event {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    match key.code {
                        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => break,
                        KeyCode::Char('q') => break,
                        KeyCode::Esc if !picker.is_open() => break,
                        KeyCode::Char('o') | KeyCode::Enter => {
                            sheet::open(&manager, picker.id());
                        }
                        _ => {}
                    }
                }
            }

            Some(event) = ui_rx.recv() => match event {
                UiEvent::Search(query) => {
                    picker.set_input_value(query.clone());
                    picker.set_loading(true);
                    let items = Arc::clone(&items);
                    let result_tx = result_tx.clone();
                    tokio::spawn(async move {
                        tokio::time::sleep(SEARCH_DELAY).await;
                        let matches = filter_items(&items, &query);
                        let _ = result_tx.send((query, matches));
                    });
                }
                UiEvent::Selected(item) => {
                    log::log(&format!("chosen: {}", item));
                    chosen = Some(item);
                }
            },

            Some((query, matches)) = result_rx.recv() => {
                // Results for an older query are dropped
                if query == picker.input_value() {
                    picker.set_data(matches);
                    picker.set_loading(false);
                }
            }

            _ = tick.tick() => picker.tick(),
        }
    }

    Ok(chosen)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("picksheet")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_parse_args() {
        let parsed = parse_args(&args(&["--label", "Colors", "--no-search", "--height", "12", "colors.json"]));
        assert_eq!(parsed.label.as_deref(), Some("Colors"));
        assert_eq!(parsed.searchable, Some(false));
        assert_eq!(parsed.height, Some(12));
        assert_eq!(parsed.data_file, Some(PathBuf::from("colors.json")));
    }

    #[test]
    fn test_parse_args_bad_height_ignored() {
        let parsed = parse_args(&args(&["--height", "tall"]));
        assert_eq!(parsed.height, None);
        assert!(parsed.data_file.is_none());
    }

    fn write_config(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("picksheet_{}_{}.toml", name, std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_config_file_can_disable_search() {
        let path = write_config("nosearch", "searchable = false");
        let parsed = parse_args(&args(&["--config", path.to_str().unwrap()]));
        let config = load_config(&parsed);
        let _ = std::fs::remove_file(&path);

        assert_eq!(config.searchable, Some(false));
        assert!(!config.picker_config().searchable);
    }

    #[test]
    fn test_cli_flag_beats_config_file() {
        let path = write_config("search", "searchable = false");
        let parsed = parse_args(&args(&["--config", path.to_str().unwrap(), "--search"]));
        let config = load_config(&parsed);
        let _ = std::fs::remove_file(&path);

        assert!(config.picker_config().searchable);
    }

    #[test]
    fn test_search_on_by_default() {
        let parsed = parse_args(&args(&["--config", "/nonexistent/picksheet/config.toml"]));
        assert_eq!(load_config(&parsed).searchable, Some(true));
    }

    #[test]
    fn test_filter_items() {
        let items = builtin_data();
        let matches = filter_items(&items, " re");
        assert_eq!(matches, vec![json!({"name": "Red"}), json!({"name": "Green"}), json!({"name": "Grey"})]);
        assert_eq!(filter_items(&items, "").len(), BUILTIN_COLORS.len());
        assert!(filter_items(&items, "zzz").is_empty());
    }

    #[test]
    fn test_load_data() {
        let path = std::env::temp_dir().join(format!("picksheet_data_{}.json", std::process::id()));
        std::fs::write(&path, r##"["Red", {"name": "Blue", "hex": "#0000FF"}]"##).unwrap();
        let items = load_data(&path);
        let _ = std::fs::remove_file(&path);

        let items = items.unwrap();
        assert_eq!(items[0], json!({"name": "Red"}));
        assert_eq!(items[1]["hex"], "#0000FF");
    }

    #[test]
    fn test_load_data_requires_array() {
        let path = std::env::temp_dir().join(format!("picksheet_obj_{}.json", std::process::id()));
        std::fs::write(&path, r#"{"name": "Red"}"#).unwrap();
        let result = load_data(&path);
        let _ = std::fs::remove_file(&path);
        assert!(matches!(result, Err(PickerError::Data(_))));
    }
}
