use anyhow::Result;
use clap::Parser;

use pkgcatalog::cli::commands::add::{AddOptions, run_add};
use pkgcatalog::cli::commands::update::{UpdateCommandOptions, run_update};
use pkgcatalog::cli::{Args, Command, exit_code};
use pkgcatalog::config::ResolveOptions;
use pkgcatalog::output::{self, OutputConfig};
use pkgcatalog::sync::{AddRequest, UpdateOptions};
use pkgcatalog::ui::Style;

#[tokio::main]
async fn main() {
    let args = Args::parse();

    output::init(OutputConfig {
        quiet: args.quiet,
        no_color: args.no_color || OutputConfig::default().no_color,
    });

    if let Err(e) = run(args).await {
        eprintln!("{} {e:#}", Style::error("Error:"));
        std::process::exit(exit_code(&e));
    }
}

async fn run(args: Args) -> Result<()> {
    match args.command {
        Command::Add {
            name,
            import_path,
            repo,
            author,
            with_readme,
            no_build,
        } => {
            let options = AddOptions {
                config: args.config,
                resolve: ResolveOptions {
                    content_dir: args.content_dir,
                    no_build,
                },
                request: AddRequest {
                    name,
                    import_path,
                    repo_url: repo,
                    author,
                    with_readme,
                },
            };
            run_add(options).await
        }
        Command::Update {
            names,
            dry_run,
            update_author,
            update_missing,
            no_build,
        } => {
            let options = UpdateCommandOptions {
                config: args.config,
                resolve: ResolveOptions {
                    content_dir: args.content_dir,
                    no_build,
                },
                names,
                update: UpdateOptions {
                    dry_run,
                    update_author,
                    update_missing,
                },
            };
            run_update(options).await
        }
    }
}
