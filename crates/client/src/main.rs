//! `todo-client` -- interactive terminal client for the todo API.
//!
//! Loads the list once at start-up, then reads one command per line from
//! stdin. Each command runs to completion before the next line is read.
//!
//! # Environment variables
//!
//! | Variable         | Required | Default                 | Description              |
//! |------------------|----------|-------------------------|--------------------------|
//! | `API_URL`        | no       | `http://localhost:8080` | API base URL (`BACKEND_ORIGIN` is also read) |
//! | `TODO_USER_ID`   | no       | `1`                     | Owner id for new todos   |

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use todo_client::api::TodoApi;
use todo_client::app::{App, Flow};
use todo_client::command::{Command, ParseError, HELP};
use todo_client::config::ClientConfig;
use todo_client::view;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo_client=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = ClientConfig::from_env();
    tracing::info!(api_url = %config.api_url, user_id = config.user_id, "Starting todo-client");

    let api = match TodoApi::new(&config.api_url) {
        Ok(api) => api,
        Err(e) => {
            tracing::error!(error = %e, "Failed to build HTTP client");
            std::process::exit(1);
        }
    };

    let mut app = App::new(api, config.user_id);
    app.load().await;
    show(&mut app);
    println!("type 'help' for commands");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                tracing::error!(error = %e, "Failed to read stdin");
                break;
            }
        };

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(ParseError::Empty) => continue,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };

        if command == Command::Help {
            println!("{HELP}");
            continue;
        }

        if app.execute(command).await == Flow::Quit {
            break;
        }
        show(&mut app);
    }
}

/// Print the current state, then clear any failure it reported.
fn show(app: &mut App) {
    print!("{}", view::render(app.state()));
    app.dismiss_error();
}
