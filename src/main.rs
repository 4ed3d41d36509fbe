use clap::Parser;
use log::debug;
use quire::application::{
    init, ConfigService, ListItemsService, NoteService, NotebookService, OpenNoteService,
    OutputFormat,
};
use quire::cli::commands::parse_platform;
use quire::cli::{format_config, format_listing, format_listing_json, Cli, Commands};
use quire::domain::short_id;
use quire::error::QuireError;
use quire::infrastructure::FileSystemRepository;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::new().filter_or("QUIRE_LOG", "warn")).init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), QuireError> {
    let Some(command) = cli.command else {
        println!("quire - Terminal notebook application");
        println!("Use --help for usage information");
        return Ok(());
    };
    debug!("running {:?}", command);

    match command {
        Commands::Init { path } => {
            init::init(&path)?;
            println!("Initialized quire store at {}", path.display());
            Ok(())
        }
        Commands::Mkbook { title } => {
            let folder = NotebookService::new(FileSystemRepository::discover()?).create(&title)?;
            println!("Created notebook {} ({})", folder.title, short_id(&folder.id));
            Ok(())
        }
        Commands::Use { notebook } => {
            let folder = NotebookService::new(FileSystemRepository::discover()?).select(&notebook)?;
            println!("Current notebook: {}", folder.title);
            Ok(())
        }
        Commands::Mknote { title } => {
            let note = NoteService::new(FileSystemRepository::discover()?).create(&title, false)?;
            println!("Created note {} ({})", note.title, short_id(&note.id));
            Ok(())
        }
        Commands::Mktodo { title } => {
            let note = NoteService::new(FileSystemRepository::discover()?).create(&title, true)?;
            println!("Created to-do {} ({})", note.title, short_id(&note.id));
            Ok(())
        }
        Commands::Done { note } => {
            NoteService::new(FileSystemRepository::discover()?).set_completed(&note, true)?;
            Ok(())
        }
        Commands::Undone { note } => {
            NoteService::new(FileSystemRepository::discover()?).set_completed(&note, false)?;
            Ok(())
        }
        Commands::Ls(args) => {
            let options = args.to_options()?;
            let service = ListItemsService::new(FileSystemRepository::discover()?);
            let context = service.context()?;
            let listing = service.execute(&context, args.pattern.as_deref(), &options)?;

            match options.format {
                OutputFormat::Json => println!("{}", format_listing_json(&listing)?),
                OutputFormat::Text => {
                    print!(
                        "{}",
                        format_listing(&listing, options.long, &context.datetime_format)
                    )
                }
            }
            Ok(())
        }
        Commands::Edit { note } => {
            OpenNoteService::new(FileSystemRepository::discover()?).edit(&note)?;
            Ok(())
        }
        Commands::Url { note, platform } => {
            let platform = parse_platform(platform.as_deref())?;
            let url = OpenNoteService::new(FileSystemRepository::discover()?).url(&note, platform)?;
            println!("{}", url);
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let service = ConfigService::new(FileSystemRepository::discover()?);

            if list {
                print!("{}", format_config(&service.list()?));
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
                Ok(())
            } else {
                println!("Usage: quire config [--list | <key> [<value>]]");
                println!(
                    "Valid keys: {}, current_notebook, created",
                    quire::application::manage_config::SETTABLE_KEYS.join(", ")
                );
                Ok(())
            }
        }
    }
}
