use clap::Parser;
use nonepad::application::{load_scratch, save_scratch, PageService};
use nonepad::cli::{format_page, format_page_list, Cli, Commands};
use nonepad::error::NonepadError;
use nonepad::infrastructure::{data_dir, PageStore, ScratchSlot};
use std::path::PathBuf;

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), NonepadError> {
    match cli.command {
        Some(command) => {
            // Every command works against the same resolved directory
            let data_dir = data_dir::resolve(cli.dir)?;
            dispatch(command, data_dir)
        }
        None => {
            // No command given, show help
            println!("nonepad - Plain-text notebook for pages and a scratch buffer");
            println!("Use --help for usage information");
            Ok(())
        }
    }
}

fn dispatch(command: Commands, data_dir: PathBuf) -> Result<(), NonepadError> {
    match command {
        Commands::List => {
            let service = PageService::new(PageStore::new(data_dir));
            let pages = service.list()?;
            println!("{}", format_page_list(&pages));
            Ok(())
        }
        Commands::New { title } => {
            let service = PageService::new(PageStore::new(data_dir));
            let page = service.create(&title)?;
            println!("{}", page.id);
            Ok(())
        }
        Commands::Show { id } => {
            let service = PageService::new(PageStore::new(data_dir));
            let page = service.get(&id)?;
            println!("{}", format_page(&page));
            Ok(())
        }
        Commands::Edit { id, title, content } => {
            let service = PageService::new(PageStore::new(data_dir));
            service.edit(&id, title.as_deref(), content.as_deref())?;
            println!("Updated page {}", id);
            Ok(())
        }
        Commands::Delete { id } => {
            let service = PageService::new(PageStore::new(data_dir));
            service.delete(&id)?;
            println!("Deleted page {}", id);
            Ok(())
        }
        Commands::Scratch { text } => {
            let slot = ScratchSlot::new(data_dir);
            match text {
                Some(text) => {
                    save_scratch(&slot, &text)?;
                    println!("Saved scratch buffer");
                }
                None => println!("{}", load_scratch(&slot)),
            }
            Ok(())
        }
    }
}
