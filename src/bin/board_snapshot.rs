//! Prints a text snapshot of a user's board.
//!
//! Usage:
//!
//! ```text
//! board-snapshot [project-name]
//! ```
//!
//! Reads `TASKBOARD_USER_ID` and `TASKBOARD_ACCESS_TOKEN` plus the regular
//! board configuration from the environment (a `.env` file is honoured),
//! loads the user's projects, selects the named project or the first listed
//! (newest) one and prints the rendered board.

use chrono::{Duration, Utc};
use std::env;
use std::io::{self, Write};
use std::sync::Arc;
use taskboard::auth::adapters::memory::InMemorySessionProvider;
use taskboard::auth::domain::{AccessToken, AuthenticatedUser, UserId};
use taskboard::board::services::{BoardError, BoardService};
use taskboard::board::view::BoardCoordinator;
use taskboard::config::{BoardConfig, ConfigError};
use taskboard::persistence::{ApiError, ApiTransport};
use taskboard::project::adapters::http::HttpProjectApi;
use taskboard::task::adapters::http::HttpTaskApi;
use taskboard::telemetry::{TelemetryError, init_tracing};
use thiserror::Error;
use tokio::runtime::Builder;

const USER_ID_ENV: &str = "TASKBOARD_USER_ID";
const ACCESS_TOKEN_ENV: &str = "TASKBOARD_ACCESS_TOKEN";
const SESSION_LIFETIME_HOURS: i64 = 1;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can occur while taking a snapshot.
#[derive(Debug, Error)]
enum SnapshotError {
    #[error("missing environment variable {0}")]
    MissingEnv(&'static str),
    #[error("invalid TASKBOARD_USER_ID: {0}")]
    InvalidUserId(#[from] uuid::Error),
    #[error("project not found: {0}")]
    UnknownProject(String),
    #[error("failed to build runtime: {0}")]
    Runtime(#[source] io::Error),
    #[error("failed to write snapshot: {0}")]
    Output(#[source] io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Board(#[from] BoardError),
}

fn main() -> Result<(), BoxError> {
    dotenvy::dotenv().ok();
    init_tracing("warn")?;
    let project_name = env::args().nth(1);
    run(project_name.as_deref()).map_err(Into::into)
}

fn run(project_name: Option<&str>) -> Result<(), SnapshotError> {
    let config = BoardConfig::from_env()?;
    let user_id: UserId = required_env(USER_ID_ENV)?.parse()?;
    let token = AccessToken::new(required_env(ACCESS_TOKEN_ENV)?);
    let session = AuthenticatedUser::new(
        user_id,
        String::new(),
        token,
        Utc::now() + Duration::hours(SESSION_LIFETIME_HOURS),
    );
    let transport = ApiTransport::new(
        &config,
        Arc::new(InMemorySessionProvider::with_session(session)),
    )?;
    let service = BoardService::new(
        Arc::new(HttpTaskApi::new(transport.clone())),
        Arc::new(HttpProjectApi::new(transport)),
        mockable::DefaultClock,
        user_id,
    );
    let coordinator = BoardCoordinator::from_config(service, &config);

    let runtime = build_runtime()?;
    let snapshot = runtime.block_on(async {
        let service = coordinator.service();
        service.load_projects().await?;
        let target = service.read(|workspace| {
            workspace
                .projects()
                .iter()
                .find(|project| project_name.is_none_or(|name| project.name() == name))
                .map(taskboard::project::domain::Project::id)
        })?;
        match (target, project_name) {
            (Some(id), _) => service.select_project(id).await?,
            (None, Some(name)) => return Err(SnapshotError::UnknownProject(name.to_owned())),
            (None, None) => {}
        }
        Ok::<_, SnapshotError>(coordinator.render()?)
    })?;

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(snapshot.as_bytes())
        .map_err(SnapshotError::Output)?;
    stdout.flush().map_err(SnapshotError::Output)
}

fn required_env(key: &'static str) -> Result<String, SnapshotError> {
    env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .ok_or(SnapshotError::MissingEnv(key))
}

fn build_runtime() -> Result<tokio::runtime::Runtime, SnapshotError> {
    Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(SnapshotError::Runtime)
}
