use std::fs;
use std::io::{self, Read};
use std::path::Path;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use feedback::upload::{ADVISORY_UPLOAD_LIMIT_BYTES, UPLOAD_FIELD, format_size};
use feedback::{
    ApiError, ERROR_MESSAGE, FeedbackClient, FeedbackTransport, RawResponse, SelectedFile,
    Submission, TEXT_CONTENT_TYPE, render_response,
};
use reqwest::header::CONTENT_TYPE;
use tracing_subscriber::EnvFilter;


#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("nothing to submit: input text is empty")]
    EmptyInput,
    #[error("failed to read {path}: {source}")]
    ReadFile { path: String, source: io::Error },
    #[error("failed to read stdin: {0}")]
    Stdin(io::Error),
    #[error("feedback request failed: {0}")]
    Api(#[from] ApiError),
}

#[derive(Parser, Debug)]
#[command(
    name = "writing-assistant",
    about = "Request writing feedback from the AI Writing Assistant API"
)]
struct Cli {
    #[arg(long, env = "WRITING_ASSISTANT_API_BASE_URL", default_value = "http://127.0.0.1:8000")]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Send raw text to `POST /feedback`.
    Text {
        #[arg(help = "Text to review, or - (default) to read stdin")]
        text: Option<String>,
    },
    /// Upload a .docx/.doc document to `POST /fileupload`.
    File { path: String },
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::Api(error)) => {
            tracing::error!(%error, "feedback request failed");
            eprintln!("{ERROR_MESSAGE}");
            ExitCode::FAILURE
        }
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::from(2)
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let submission = match cli.command {
        Command::Text { text } => Submission::Text(read_text(text, io::stdin())?),
        Command::File { path } => Submission::File(read_document(Path::new(&path))?),
    };

    let client = FeedbackClient::new(cli.base_url, ReqwestTransport::default());
    tracing::info!(base_url = client.base_url(), path = submission.path(), "requesting feedback");
    let response = client.submit(&submission).await?;
    println!("{}", render_response(&response).to_plain_text());
    Ok(())
}

/// Use the argument as-is, or read `stdin` when it is absent or `-`.
fn read_text(arg: Option<String>, mut stdin: impl Read) -> Result<String, CliError> {
    let text = match arg {
        Some(text) if text != "-" => text,
        _ => {
            let mut buf = String::new();
            stdin.read_to_string(&mut buf).map_err(CliError::Stdin)?;
            buf
        }
    };
    if text.is_empty() {
        return Err(CliError::EmptyInput);
    }
    Ok(text)
}

fn read_document(path: &Path) -> Result<SelectedFile, CliError> {
    let bytes = fs::read(path).map_err(|source| CliError::ReadFile {
        path: path.display().to_string(),
        source,
    })?;
    let name = path
        .file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
    let file = SelectedFile::new(name, None, bytes);
    if file.exceeds_advisory_limit() {
        tracing::warn!(
            file = %file.name,
            size = %format_size(file.size()),
            limit = %format_size(ADVISORY_UPLOAD_LIMIT_BYTES),
            "file is larger than the API asks for; uploading anyway"
        );
    }
    Ok(file)
}

#[derive(Clone, Debug, Default)]
struct ReqwestTransport {
    http: reqwest::Client,
}

#[async_trait::async_trait(?Send)]
impl FeedbackTransport for ReqwestTransport {
    async fn post_text(&self, url: &str, text: &str) -> Result<RawResponse, ApiError> {
        let response = self
            .http
            .post(url)
            .header(CONTENT_TYPE, TEXT_CONTENT_TYPE)
            .body(text.to_owned())
            .send()
            .await
            .map_err(transport_error)?;
        read_response(response).await
    }

    async fn post_file(&self, url: &str, file: &SelectedFile) -> Result<RawResponse, ApiError> {
        let part = reqwest::multipart::Part::bytes(file.bytes.clone())
            .file_name(file.name.clone())
            .mime_str(&file.media_type)
            .map_err(transport_error)?;
        let form = reqwest::multipart::Form::new().part(UPLOAD_FIELD, part);
        let response = self
            .http
            .post(url)
            .multipart(form)
            .send()
            .await
            .map_err(transport_error)?;
        read_response(response).await
    }
}

fn transport_error(error: reqwest::Error) -> ApiError {
    ApiError::Transport(error.to_string())
}

async fn read_response(response: reqwest::Response) -> Result<RawResponse, ApiError> {
    let status = response.status().as_u16();
    let body = response
        .text()
        .await
        .map_err(|error| ApiError::Body(error.to_string()))?;
    Ok(RawResponse { status, body })
}
