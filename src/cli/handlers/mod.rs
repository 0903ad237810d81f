mod settings;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::config_io;
use crate::io::contacts_io;
use crate::io::json_store::JsonStore;
use crate::model::config::RosterConfig;
use crate::model::contact::{ACCOUNT_STATUSES, CONTACT_SOURCES, Contact, SEGMENTS};
use crate::model::filter::FilterState;
use crate::model::profile::TIMEZONES;
use crate::model::sort::SortField;
use crate::ops::TableStateController;

/// Everything a command needs: where it runs, its config, and the store
pub(crate) struct Context {
    pub dir: PathBuf,
    pub config: RosterConfig,
    pub store: JsonStore,
}

impl Context {
    fn load(dir: Option<&str>) -> Result<Self, Box<dyn std::error::Error>> {
        let dir = match dir {
            Some(d) => fs::canonicalize(d)
                .map_err(|e| format!("cannot resolve -C path '{}': {}", d, e))?,
            None => std::env::current_dir()?,
        };
        let config = config_io::read_config(&dir)?;
        let store = JsonStore::new(config_io::store_dir(&dir, &config));
        debug!(dir = %dir.display(), store = %store.dir().display(), "loaded context");
        Ok(Context { dir, config, store })
    }
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    let ctx = Context::load(cli.dir.as_deref())?;

    match cli.command {
        Commands::List(args) => cmd_list(&ctx, args, json),
        Commands::Options => cmd_options(json),
        Commands::Import(args) => cmd_import(&ctx, args),
        Commands::Prefs(args) => settings::cmd_prefs(&ctx, args, json),
        Commands::Profile(args) => settings::cmd_profile(&ctx, args, json),
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

// ---------------------------------------------------------------------------
// Contact table
// ---------------------------------------------------------------------------

fn cmd_list(ctx: &Context, args: ListArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if args.page == 0 {
        return Err("--page starts at 1".into());
    }
    let page_size = args.page_size.unwrap_or(ctx.config.table.page_size);
    if page_size == 0 {
        return Err("page size must be at least 1".into());
    }
    let sort_fields = args
        .sort
        .iter()
        .map(|s| s.parse::<SortField>())
        .collect::<Result<Vec<_>, _>>()?;

    let contacts = contacts_io::load_contacts(&ctx.store, args.page - 1, page_size)?;
    let mut table = TableStateController::with_contacts(contacts);

    table.set_filters(FilterState {
        search_term: args.search,
        source: args.source,
        segment: args.segment,
        status: args.status,
    });
    for field in sort_fields {
        table.sort_by(field);
    }
    if args.select_all {
        table.select_all(true);
    }
    for id in &args.select {
        if !table.is_visible(id) {
            eprintln!(
                "warning: contact '{}' is not visible on page {}",
                id, args.page
            );
            continue;
        }
        table.toggle_selected(id);
    }

    let visible = table.visible();
    let rows: Vec<&Contact> = if args.selected_only {
        visible
            .into_iter()
            .filter(|c| table.is_selected(&c.id))
            .collect()
    } else {
        visible
    };

    if json {
        print_json(&contact_list_to_json(&table, &rows, args.page, page_size))
    } else {
        for line in format_contact_table(&table, &rows) {
            println!("{}", line);
        }
        Ok(())
    }
}

fn cmd_options(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let options = OptionsJson {
        sources: CONTACT_SOURCES.to_vec(),
        segments: SEGMENTS.to_vec(),
        statuses: ACCOUNT_STATUSES.to_vec(),
        sort_fields: SortField::ALL.iter().map(|f| f.key()).collect(),
        timezones: TIMEZONES
            .iter()
            .map(|&(value, label)| TimezoneJson { value, label })
            .collect(),
    };
    if json {
        return print_json(&options);
    }
    let sections: [(&str, &[&str]); 4] = [
        ("sources", &options.sources),
        ("segments", &options.segments),
        ("statuses", &options.statuses),
        ("sort fields", &options.sort_fields),
    ];
    for (title, values) in sections {
        println!("{}: all, {}", title, values.join(", "));
    }
    println!("timezones:");
    for tz in &options.timezones {
        println!("  {:<20} {}", tz.value, tz.label);
    }
    Ok(())
}

fn read_contacts_file(path: &Path) -> Result<Vec<Contact>, Box<dyn std::error::Error>> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("could not read {}: {}", path.display(), e))?;
    let contacts: Vec<Contact> = serde_json::from_str(&text)
        .map_err(|e| format!("{} is not a JSON array of contacts: {}", path.display(), e))?;
    Ok(contacts)
}

fn cmd_import(ctx: &Context, args: ImportArgs) -> Result<(), Box<dyn std::error::Error>> {
    let path = ctx.dir.join(&args.file);
    let contacts = read_contacts_file(&path)?;
    let count = contacts_io::import_contacts(&ctx.store, &contacts)?;
    info!(count, file = %path.display(), "imported contacts");
    println!("imported {} contacts", count);
    Ok(())
}
