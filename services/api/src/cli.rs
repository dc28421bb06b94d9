use crate::server;
use clap::{Args, Parser, Subcommand};
use marketplace_intent::error::AppError;
use marketplace_intent::intent::{detect_user_context, ContextInfo, ContextResponse, QueryParams};

#[derive(Parser, Debug)]
#[command(
    name = "Marketplace Intent Service",
    about = "Classify marketplace visitors as buyers or sellers and serve the result over HTTP",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Classify a single visit and print the inferred intent and CTAs
    Classify(ClassifyArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

#[derive(Args, Debug)]
pub(crate) struct ClassifyArgs {
    /// Path of the visited page, e.g. /for-sellers
    pathname: String,
    /// Referrer URL of the visit
    #[arg(long)]
    referrer: Option<String>,
    /// Query string of the visited page, e.g. "intent=buyer&utm_campaign=spring"
    #[arg(long)]
    query: Option<String>,
    /// Print the result as JSON instead of text
    #[arg(long)]
    json: bool,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Classify(args) => run_classify(args),
    }
}

fn run_classify(args: ClassifyArgs) -> Result<(), AppError> {
    let params = args.query.as_deref().map(QueryParams::from_query_str);
    let context = detect_user_context(&args.pathname, args.referrer.as_deref(), params.as_ref());

    if args.json {
        let response = ContextResponse::from(context);
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        println!("{}", render_context(&args.pathname, &context));
    }

    Ok(())
}

fn render_context(pathname: &str, context: &ContextInfo) -> String {
    let confirmation = if context.requires_confirmation() {
        "ask the visitor to confirm"
    } else {
        "pre-select without confirmation"
    };

    [
        format!("Visitor intent for {pathname}"),
        format!(
            "Intent: {} ({} confidence, decided by {})",
            context.intent, context.confidence, context.signal_source
        ),
        format!("Page context: {}", context.page_context),
        format!(
            "Primary CTA: \"{}\" -> {} [{}]",
            context.primary_cta.text, context.primary_cta.action, context.primary_cta.style_token
        ),
        format!(
            "Secondary CTA: \"{}\" -> {} [{}]",
            context.secondary_cta.text,
            context.secondary_cta.action,
            context.secondary_cta.style_token
        ),
        format!("Role selection: {confirmation}"),
    ]
    .join("\n")
}
