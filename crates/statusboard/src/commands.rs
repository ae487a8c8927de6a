use clap::ArgMatches;
use serde_json::Map;
use tracing::{error, info, warn};

use statusboard_core::config::loading::merge_configs;
use statusboard_core::{
    ApiPassword, DisplayRecord, ErrorRecord, Pollable, Responses, StatusWidget,
    StatusboardConfig, StatusboardError, WidgetConfig, WidgetData, decode_payload,
};

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    match matches.subcommand() {
        Some(("render", sub_matches)) => handle_render_command(sub_matches),
        Some(("endpoints", sub_matches)) => handle_endpoints_command(sub_matches),
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    }
}

/// Load configuration with warning on errors.
///
/// Falls back to defaults if config loading fails, but notifies the user via:
/// - stderr message for immediate visibility
/// - structured log event `cli.config.load_failed` for debugging
fn load_config_with_warning() -> StatusboardConfig {
    match StatusboardConfig::load_hierarchy() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Could not load config: {}. Using defaults.\n\
                 Tip: Check ~/.statusboard/config.toml and ./.statusboard/config.toml for syntax errors.",
                e
            );
            warn!(
                event = "cli.config.load_failed",
                error = %e,
                code = e.error_code(),
                "Config load failed, using defaults"
            );
            StatusboardConfig::default()
        }
    }
}

/// Config values given on the command line.
fn cli_overrides(matches: &ArgMatches) -> StatusboardConfig {
    StatusboardConfig {
        widget: WidgetConfig {
            title: matches.get_one::<String>("title").cloned(),
            api_base: matches.get_one::<String>("api-base").cloned(),
            api_password: matches
                .get_one::<String>("api-password")
                .map(|password| ApiPassword::new(password.as_str())),
            extra: Map::new(),
        },
    }
}

fn build_widget(matches: &ArgMatches) -> Result<StatusWidget, Box<dyn std::error::Error>> {
    let config = merge_configs(load_config_with_warning(), cli_overrides(matches));

    match StatusWidget::from_config(&config.widget) {
        Ok(widget) => {
            if widget.base().api_password.is_empty() {
                warn!(
                    event = "cli.api_password_missing",
                    endpoint = widget.status_endpoint()
                );
            }
            Ok(widget)
        }
        Err(e) => {
            eprintln!("❌ Cannot set up status widget: {}", e);
            error!(
                event = "cli.widget_build_failed",
                error = %e,
                code = e.error_code()
            );
            Err(e.into())
        }
    }
}

/// Read a payload from a file path, or stdin for `-`.
fn read_payload(source: &str) -> Result<String, std::io::Error> {
    if source == "-" {
        std::io::read_to_string(std::io::stdin())
    } else {
        std::fs::read_to_string(source)
    }
}

fn handle_render_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");
    let widget = build_widget(matches)?;

    info!(
        event = "cli.render_started",
        endpoint = widget.status_endpoint(),
        json_output = json_output
    );

    let data: WidgetData<DisplayRecord> =
        if let Some(message) = matches.get_one::<String>("error") {
            ErrorRecord::new(message.as_str()).into()
        } else if let Some(source) = matches.get_one::<String>("payload") {
            let raw = match read_payload(source) {
                Ok(raw) => raw,
                Err(e) => {
                    eprintln!("❌ Failed to read payload '{}': {}", source, e);
                    error!(event = "cli.payload_read_failed", source = source, error = %e);
                    return Err(e.into());
                }
            };

            // An undecodable body is what a host would report as a failed poll
            match decode_payload(&raw) {
                Ok(payload) => {
                    let mut responses = Responses::new();
                    responses.insert(widget.status_endpoint().to_string(), payload);
                    widget.extract_data(&responses).into()
                }
                Err(e) => {
                    warn!(
                        event = "cli.payload_invalid",
                        source = source,
                        error = %e,
                        code = e.error_code()
                    );
                    ErrorRecord::from_error(&e).into()
                }
            }
        } else {
            WidgetData::default()
        };

    if json_output {
        println!("{}", serde_json::to_string_pretty(&data)?);
    } else {
        println!("{}", widget.render_content(&data));
    }

    info!(
        event = "cli.render_completed",
        failed = matches!(data, WidgetData::Error(_))
    );

    Ok(())
}

fn handle_endpoints_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");
    let widget = build_widget(matches)?;

    info!(event = "cli.endpoints_started", json_output = json_output);

    if json_output {
        #[derive(serde::Serialize)]
        struct EndpointsOutput<'a> {
            title: &'a str,
            interval_secs: u64,
            endpoints: &'a [String],
        }

        let output = EndpointsOutput {
            title: widget.title(),
            interval_secs: widget.interval().as_secs(),
            endpoints: widget.endpoints(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("Title    : {}", widget.title());
        println!("Interval : {}s", widget.interval().as_secs());
        for endpoint in widget.endpoints() {
            println!("Endpoint : GET {}", endpoint);
        }
    }

    info!(
        event = "cli.endpoints_completed",
        count = widget.endpoints().len()
    );

    Ok(())
}
