use std::process;

use editorjs_html::{
    DocumentParser, DocumentRenderer,
    application::error::AppError,
    config::{self, BlocksArgs, Command, RenderArgs, Settings},
    document_renderer,
    infra::{io, telemetry},
};
use tracing::{Dispatch, Level, dispatcher, error, info};
use tracing_subscriber::fmt as tracing_fmt;

fn main() {
    if let Err(error) = run() {
        report_application_error(&error);
        process::exit(error.exit_code());
    }
}

fn report_application_error(error: &AppError) {
    if dispatcher::has_been_set() {
        error!(category = error.category(), error = %error, "application error");
        return;
    }

    let subscriber = tracing_fmt()
        .with_max_level(Level::ERROR)
        .with_writer(std::io::stderr)
        .finish();
    let dispatch = Dispatch::new(subscriber);
    dispatcher::with_default(&dispatch, || {
        error!(category = error.category(), error = %error, "application error");
    });
}

fn run() -> Result<(), AppError> {
    let (cli_args, settings) = config::load_with_cli()?;

    telemetry::init(&settings.logging)?;

    match cli_args.command {
        Command::Render(args) => run_render(&settings, args),
        Command::Blocks(args) => run_blocks(args),
    }
}

fn run_render(settings: &Settings, args: RenderArgs) -> Result<(), AppError> {
    let content = io::read_document(&args.input)?;
    let sanitize = settings.render.sanitize;

    let document = document_renderer().render_document(&content, sanitize)?;
    info!(
        target = "editorjs_html::render",
        input = %args.input.display(),
        blocks = document.block_count,
        sanitize,
        "document rendered"
    );

    io::write_output(args.output.as_deref(), &document.into_html())?;
    Ok(())
}

fn run_blocks(args: BlocksArgs) -> Result<(), AppError> {
    let content = io::read_document(&args.input)?;
    let parser = DocumentParser::new(&content)?;

    let listing: Vec<String> = parser
        .iter()?
        .enumerate()
        .map(|(index, block)| format!("{index}\t{}", block.kind()))
        .collect();

    io::write_output(None, &listing.join("\n"))?;
    Ok(())
}
