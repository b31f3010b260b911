use clap::{Parser, Subcommand};
use database::DbRepository;
use gateway::Router;
use gateway::response::body_text;
use lambda_http::{Body, Context, Error, Request, Response, run, service_fn};
use serde_json::json;
use std::sync::Arc;
use tracing::Instrument;

/// The main entry point for the Labour API Lambda function.
#[tokio::main]
async fn main() -> Result<(), Error> {
    // Local runs may keep DB_* in a .env file; in Lambda there is none.
    dotenvy::dotenv().ok();
    configuration::telemetry::init_tracing()?;

    // Parse command-line arguments
    let cli = Cli::parse();

    // A router exists only once the database handle is live. Any failure here
    // ends the process before it serves a single request.
    let router = bootstrap().await.inspect_err(|e| {
        tracing::error!(error = %e, "Bootstrap failed.");
    })?;

    // Execute the appropriate command
    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve(&router).await,
        Commands::Invoke(args) => invoke(&router, args).await,
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Serverless API Gateway handler for the labour participation dataset.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve Lambda invocations (the default when no command is given).
    Serve,
    /// Dispatch one request locally and print the response.
    Invoke(InvokeArgs),
}

#[derive(Parser)]
struct InvokeArgs {
    /// The HTTP method of the synthetic request.
    #[arg(long, default_value = "GET")]
    method: String,

    /// The request path (e.g., "/hello").
    #[arg(long)]
    path: String,
}

// ==============================================================================
// Bootstrap and Dispatch
// ==============================================================================

/// Loads settings, opens the database handle and builds the router.
async fn bootstrap() -> Result<Router, Error> {
    let settings = configuration::load_settings()?;
    let pool = database::acquire_connection(&settings.database).await?;
    let repo = DbRepository::new(pool);
    Ok(Router::with_default_routes(Arc::new(repo)))
}

/// Hands every Lambda invocation to the router until the runtime shuts down.
async fn serve(router: &Router) -> Result<(), Error> {
    tracing::info!(routes = router.routes().len(), "Waiting for invocations.");
    run(service_fn(|request: Request| async move { handle(router, request).await })).await
}

/// Handles one invocation. Routing never fails, so neither does this.
async fn handle(router: &Router, request: Request) -> Result<Response<Body>, Error> {
    let request_id = request
        .extensions()
        .get::<Context>()
        .map(|context| context.request_id.clone())
        .unwrap_or_default();
    let span = tracing::info_span!(
        "request",
        request_id = %request_id,
        method = %request.method(),
        path = %request.uri().path(),
    );
    Ok(router.dispatch(&request).instrument(span).await)
}

/// Runs one synthetic request through the router and prints the response.
async fn invoke(router: &Router, args: InvokeArgs) -> Result<(), Error> {
    let request = lambda_http::http::Request::builder()
        .method(args.method.as_str())
        .uri(args.path.as_str())
        .body(Body::Empty)?;
    let response = router.dispatch(&request).await;
    let printed = json!({
        "statusCode": response.status().as_u16(),
        "body": body_text(response.body()),
    });
    println!("{}", serde_json::to_string_pretty(&printed)?);
    Ok(())
}
