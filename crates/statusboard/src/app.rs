use clap::{Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    Command::new("statusboard")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render service status panels from captured /api/status payloads")
        .long_about("statusboard runs a status widget's extract and render steps offline. Feed it a payload captured from GET {api_base}/api/status to preview exactly what the dashboard panel will show, or list the endpoints a dashboard host must poll.")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("title")
                .long("title")
                .help("Panel title (overrides config)")
                .global(true),
        )
        .arg(
            Arg::new("api-base")
                .long("api-base")
                .help("Base URL of the service API, e.g. http://localhost:3000 (overrides config)")
                .global(true),
        )
        .arg(
            Arg::new("api-password")
                .long("api-password")
                .env("STATUSBOARD_API_PASSWORD")
                .hide_env_values(true)
                .help("API password the dashboard host sends with each poll (overrides config)")
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("render")
                .about("Extract and render a status payload as panel text")
                .arg(
                    Arg::new("payload")
                        .long("payload")
                        .short('p')
                        .value_name("FILE")
                        .help("JSON payload from /api/status ('-' reads stdin). Omit to render the pre-poll state")
                )
                .arg(
                    Arg::new("error")
                        .long("error")
                        .short('e')
                        .value_name("MESSAGE")
                        .help("Render a poll failure with this message instead of a payload")
                        .conflicts_with("payload")
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output the extracted record as JSON")
                        .action(ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("endpoints")
                .about("Show the endpoints and interval a host must poll for this widget")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue)
                )
        )
}
