use std::{fs, time::Duration};

use dee_wikiapi::{
    ratings::{self, RatingCollection},
    LookupOutcome, WikiClient,
};
use owo_colors::OwoColorize;

use crate::{
    cli::{ChartArgs, ConfigArgs, ConfigCommand, EndpointArgs, GetArgs, SearchArgs},
    config::{self, ENDPOINT_KEY},
    models::{AppError, ConfigShowItem, ItemResponse, ListResponse, OutputMode, PageItem},
};

pub fn get(args: &GetArgs, mode: &OutputMode) -> Result<(), AppError> {
    let client = build_client(&args.endpoint, mode)?;

    let page = match client.lookup(&args.title)? {
        LookupOutcome::Found(page) => page,
        LookupOutcome::Invalid { reason } => return Err(AppError::InvalidTitle(reason)),
        LookupOutcome::Missing { title } => return Err(AppError::NotFound(title)),
        LookupOutcome::NoPages => return Err(AppError::NotFound(args.title.clone())),
    };

    let item = PageItem::from(&page);
    if mode.json {
        print_json(&ItemResponse { ok: true, item })
    } else {
        print_page_human(&item, mode.quiet);
        Ok(())
    }
}

pub fn search(args: &SearchArgs, mode: &OutputMode) -> Result<(), AppError> {
    let client = build_client(&args.endpoint, mode)?;
    let titles = client.search_titles(&args.term)?;

    if mode.json {
        print_json(&ListResponse {
            ok: true,
            count: titles.len(),
            items: titles,
        })
    } else {
        if !mode.quiet {
            println!("Found {} titles", titles.len());
        }
        for title in &titles {
            println!("{title}");
        }
        Ok(())
    }
}

pub fn chart(args: &ChartArgs, mode: &OutputMode) -> Result<(), AppError> {
    let content = fs::read_to_string(&args.file)
        .map_err(|err| AppError::RatingFile(format!("{}: {err}", args.file.display())))?;
    let collection: RatingCollection = serde_json::from_str(&content)
        .map_err(|err| AppError::RatingFile(format!("{}: {err}", args.file.display())))?;

    if mode.json {
        print_json(&ItemResponse {
            ok: true,
            item: collection,
        })
    } else {
        print!("{}", ratings::render_bars(&args.title, &collection, args.width));
        Ok(())
    }
}

pub fn config(args: &ConfigArgs, mode: &OutputMode) -> Result<(), AppError> {
    match &args.command {
        ConfigCommand::Set(set_args) => {
            if set_args.key != ENDPOINT_KEY {
                return Err(AppError::UnknownKey(set_args.key.clone()));
            }
            let mut cfg = config::load_config().map_err(AppError::Config)?;
            cfg.endpoint = Some(set_args.value.clone());
            config::save_config(&cfg).map_err(AppError::Config)?;
            if mode.json {
                print_json(&ItemResponse {
                    ok: true,
                    item: format!("Set {}", set_args.key),
                })
            } else {
                println!("Saved {}", set_args.key);
                Ok(())
            }
        }
        ConfigCommand::Show => {
            let cfg = config::load_config().map_err(AppError::Config)?;
            let item = ConfigShowItem {
                path: config::config_path().display().to_string(),
                endpoint: cfg.endpoint,
            };
            if mode.json {
                print_json(&ItemResponse { ok: true, item })
            } else {
                println!("path: {}", item.path);
                println!(
                    "endpoint: {}",
                    item.endpoint.as_deref().unwrap_or("(default)")
                );
                Ok(())
            }
        }
        ConfigCommand::Path => {
            println!("{}", config::config_path().display());
            Ok(())
        }
    }
}

fn build_client(args: &EndpointArgs, mode: &OutputMode) -> Result<WikiClient, AppError> {
    let endpoint = config::resolve_endpoint(args)?;
    let mut client = match args.timeout_secs {
        Some(secs) => WikiClient::with_timeout(endpoint, Duration::from_secs(secs))?,
        None => WikiClient::with_endpoint(endpoint)?,
    };
    client.set_debug(mode.verbose);
    Ok(client)
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), AppError> {
    let text = serde_json::to_string(value).map_err(|_| AppError::Serialize)?;
    println!("{text}");
    Ok(())
}

fn print_page_human(item: &PageItem, quiet: bool) {
    if quiet {
        println!("{}", item.title);
    } else {
        println!("{} (id={})", item.title.bold(), item.id);
    }
    if !item.summary.is_empty() {
        println!("{}", item.summary);
    }
    if !quiet {
        if let Some(thumb) = &item.thumbnail {
            println!("thumbnail: {}x{}", thumb.width, thumb.height);
        }
    }
}
