use finguard_core::{extension::TomlTableExt, state::State};
use std::{io, sync::OnceLock};
use tracing::Level;
use tracing_subscriber::{
    filter::{EnvFilter, LevelFilter},
    fmt::writer::MakeWriterExt,
    layer::SubscriberExt,
};

/// Initializes the tracing subscriber from the `[tracing]` table.
///
/// Events are written to stderr so that stdout only carries the results.
pub(super) fn init(state: &State) {
    if TRACING_INITIALIZED.get().is_some() {
        tracing::warn!("tracing subscriber has already been initialized");
        return;
    }

    let in_dev_mode = state.env().is_dev();
    let mut event_format = if in_dev_mode { "pretty" } else { "json" };
    let mut level_filter = if in_dev_mode {
        LevelFilter::INFO
    } else {
        LevelFilter::WARN
    };
    let mut stderr_max_level = if in_dev_mode {
        Level::DEBUG
    } else {
        Level::WARN
    };
    let mut env_filter = if in_dev_mode {
        "info,finguard_cli=debug,finguard_core=debug"
    } else {
        "warn,finguard_cli=info,finguard_core=info"
    };
    let mut ansi_terminal = true;
    let mut display_target = true;
    let mut display_filename = false;
    let mut display_line_number = false;
    let mut flatten_event = false;
    if let Some(config) = state.config().get_table("tracing") {
        if let Some(format) = config.get_str("format") {
            event_format = format;
        }
        if let Some(level) = config.get_str("level") {
            match (level.parse::<Level>(), level.parse::<LevelFilter>()) {
                (Ok(level), Ok(filter)) => {
                    stderr_max_level = level;
                    level_filter = filter;
                }
                _ => tracing::warn!("invalid tracing level `{level}`"),
            }
        }
        if let Some(filter) = config.get_str("filter") {
            env_filter = filter;
        }
        ansi_terminal = config.get_bool("ansi").unwrap_or(true);
        display_target = config.get_bool("display-target").unwrap_or(true);
        display_filename = config.get_bool("display-filename").unwrap_or(in_dev_mode);
        display_line_number = config
            .get_bool("display-line-number")
            .unwrap_or(in_dev_mode);
        flatten_event = config.get_bool("flatten-event").unwrap_or(false);
    }

    // Format layer
    let stderr = io::stderr.with_max_level(stderr_max_level);
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(ansi_terminal)
        .with_target(display_target)
        .with_file(display_filename)
        .with_line_number(display_line_number)
        .with_writer(stderr);

    let env_filter_layer = EnvFilter::builder()
        .with_default_directive(level_filter.into())
        .parse(env_filter)
        .unwrap_or_else(|err| {
            tracing::warn!("fail to parse the env filter `{env_filter}`: {err}");
            EnvFilter::default().add_directive(level_filter.into())
        });

    let subscriber = tracing_subscriber::registry().with(env_filter_layer);
    match event_format {
        "compact" => {
            let compact_fmt_layer = fmt_layer.compact();
            let subscriber = subscriber.with(compact_fmt_layer);
            if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
                tracing::warn!(
                    "fail to set the default subscriber with a `Compact` formatter: {err}"
                );
            }
        }
        "json" => {
            let json_fmt_layer = fmt_layer.json().flatten_event(flatten_event);
            let subscriber = subscriber.with(json_fmt_layer);
            if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
                tracing::warn!("fail to set the default subscriber with a `Json` formatter: {err}");
            }
        }
        "pretty" => {
            let pretty_fmt_layer = fmt_layer.pretty();
            let subscriber = subscriber.with(pretty_fmt_layer);
            if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
                tracing::warn!(
                    "fail to set the default subscriber with a `Pretty` formatter: {err}"
                );
            }
        }
        _ => {
            let subscriber = subscriber.with(fmt_layer);
            if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
                tracing::warn!("fail to set the default subscriber with a `Full` formatter: {err}");
            }
        }
    }
    TRACING_INITIALIZED.get_or_init(|| ());
}

/// Whether the tracing subscriber has been initialized.
static TRACING_INITIALIZED: OnceLock<()> = OnceLock::new();
