/*!
# runplan - today's training plan entry

Reads a training plan spreadsheet and prints the row planned for today.

## Usage

```
runplan [OPTIONS]

Options:
  -f, --format <FORMAT>          Output format [default: text] [possible values: text, json, summary]
      --legacy-json              Write JSON in the legacy layout (no escaping, row-length commas)
  -d, --debug                    Print debugging messages to stderr
      --log-format <LOG_FORMAT>  Format of the messages written to stderr [default: text]
      --grid-file <PATH>         Read the plan from a JSON value-range file instead of the Sheets API
      --date <DATE>              Look up this date instead of today (format: YYYY-MM-DD or YYYYMMDD)
  -h, --help                     Print help
  -V, --version                  Print version
```

## Configuration

- `MARATHON_SPREADSHEET_ID`: spreadsheet holding the plan
- `MARATHON_SHEET_RANGE`: range or sheet name to read (defaults to `Main`)
- `MARATHON_CREDENTIALS` / `MARATHON_TOKEN`: OAuth client secrets and token cache
*/

use chrono::{Local, Utc};
use runplan::cli::{CliArgs, LogFormat};
use runplan::config::Config;
use runplan::constants::{APP_NAME, DEBUG_LOG_LEVEL, DEFAULT_LOG_LEVEL};
use runplan::errors::{AppError, AppResult};
use runplan::ops;
use runplan::sheets::{self, Authenticator, ClientSecrets, SheetsClient};
use runplan::table::Grid;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_tracing(&args);
    debug!("CLI arguments: {:?}", args);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:?}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Sends diagnostics to stderr. `--debug` forces debug output for this crate;
/// otherwise `RUST_LOG` applies, defaulting to warnings only.
fn init_tracing(args: &CliArgs) {
    let filter = if args.debug {
        EnvFilter::new(format!(
            "{},{}={}",
            DEFAULT_LOG_LEVEL, APP_NAME, DEBUG_LOG_LEVEL
        ))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);
    let _ = match args.log_format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
}

fn run(args: &CliArgs) -> AppResult<()> {
    let today = match args.parse_date() {
        Some(Ok(date)) => date,
        Some(Err(e)) => return Err(AppError::Config(format!("Invalid date format: {}", e))),
        None => Local::now().date_naive(),
    };
    debug!("Looking up {}", today);

    let grid = match &args.grid_file {
        Some(path) => sheets::load_grid_file(path)?,
        None => fetch_grid()?,
    };

    let output = ops::render_today(&grid, today, &args.output_options())?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

fn fetch_grid() -> AppResult<Grid> {
    info!("Loading configuration");
    let config = Config::load()?;
    debug!("Config: {:?}", config);
    let spreadsheet_id = config.require_spreadsheet_id()?;

    let secrets = ClientSecrets::load(&config.credentials_path)?;
    let authenticator =
        Authenticator::new(secrets, config.token_path.clone(), config.http_timeout)?;
    let access_token = authenticator.access_token(Utc::now())?;
    debug!("Got access token");

    let client = SheetsClient::new(config.sheets_url.as_str(), config.http_timeout)?;
    client.fetch_grid(spreadsheet_id, &config.range, &access_token)
}
