use astra_center::app::{Session, SessionOptions};
use astra_center::catalog::CatalogEntry;
use astra_center::config;
use astra_center::diagnostics::Diagnostics;
use pico_args;

fn main() -> std::process::ExitCode {
    let mut args = pico_args::Arguments::from_env();

    let options = SessionOptions {
        cli_lang: args.opt_value_from_str("--lang").unwrap_or(None),
        offline: args.contains("--offline"),
        ..SessionOptions::default()
    };

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(error) => {
            eprintln!("Failed to start runtime: {error}");
            return std::process::ExitCode::FAILURE;
        }
    };

    runtime.block_on(run(options));
    std::process::ExitCode::SUCCESS
}

async fn run(options: SessionOptions<'_>) {
    let config = config::load().unwrap_or_default();
    let session = Session::initialize(options, config, Diagnostics::default()).await;
    let catalog = session.load_catalog().await;

    println!("{}", session.get_text("app-title"));

    print_section(&session, "featured-heading", &catalog.featured);
    print_section(&session, "apps-heading", &catalog.apps);
}

fn print_section(session: &Session, heading_key: &str, entries: &[CatalogEntry]) {
    println!();
    println!("== {} ==", session.get_text(heading_key));

    if entries.is_empty() {
        println!("  {}", session.get_text("empty-catalog"));
        return;
    }

    let tag = session.active_tag();
    for entry in entries {
        match entry.summary(tag) {
            Some(summary) => println!("  {}: {}", entry.name(tag), summary),
            None => println!("  {}", entry.name(tag)),
        }
    }
}
