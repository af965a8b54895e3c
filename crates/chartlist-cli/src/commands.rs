use std::fs::File;
use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result, bail};
use tracing::info;

use chartlist_cli::pipeline::{ListRequest, export, load_snapshot, open_list, row_selection};
use chartlist_core::FormatOptions;
use chartlist_model::{ItemTypeId, ListItemsMode, RecordId, SortBy, SortOrder};

use crate::cli::{ExportArgs, ListArgs, ModeArg, TypesArgs};
use crate::summary::{print_list, print_status, print_types};

pub fn run_show(args: &ListArgs) -> Result<()> {
    let request = list_request(args)?;
    let session = open_list(load_snapshot(&args.snapshot)?, &request)?;
    let view = session.view();
    print_status(&view.status(session.formatter()));
    print_list(&view);
    Ok(())
}

pub fn run_types(args: &TypesArgs) -> Result<()> {
    let request = ListRequest {
        mode: mode(args.mode),
        ..ListRequest::default()
    };
    let session = open_list(load_snapshot(&args.snapshot)?, &request)?;
    let choices = session.view().item_type_choices();
    if choices.len() <= 1 {
        println!("No {} selected.", mode_noun(request.mode));
        return Ok(());
    }
    print_types(&choices);
    Ok(())
}

pub fn run_export(args: &ExportArgs) -> Result<()> {
    let request = list_request(&args.list)?;
    let session = open_list(load_snapshot(&args.list.snapshot)?, &request)?;

    let select = args
        .select
        .as_ref()
        .map(|ids| parse_ids(ids))
        .transpose()?;
    *session.view_mut().row_selection_mut() = row_selection(select.as_deref());
    if !session.view().export_enabled() {
        bail!("nothing to export: --select was given without any record ids");
    }

    let written = match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("create export file {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            let written = export(&session, &mut writer)?;
            info!(path = %path.display(), "wrote export file");
            written
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            let written = export(&session, &mut writer)?;
            writer.flush().context("flush stdout")?;
            written
        }
    };
    if args.output.is_some() {
        eprintln!("Exported {written} row(s).");
    }
    Ok(())
}

fn list_request(args: &ListArgs) -> Result<ListRequest> {
    let item_type = args
        .item_type
        .as_deref()
        .map(ItemTypeId::new)
        .transpose()
        .context("invalid --type")?;
    let sort = args.sort.as_ref().map(|key| {
        let order = if args.descending {
            SortOrder::Descending
        } else {
            SortOrder::Ascending
        };
        SortBy::new(key.clone(), order)
    });
    Ok(ListRequest {
        mode: mode(args.mode),
        item_type,
        sort,
        format: FormatOptions::new().with_bidi_isolation(!args.no_bidi_isolation),
    })
}

fn parse_ids(values: &[String]) -> Result<Vec<RecordId>> {
    values
        .iter()
        .map(|value| RecordId::new(value.as_str()).context("invalid --select id"))
        .collect()
}

fn mode(arg: ModeArg) -> ListItemsMode {
    match arg {
        ModeArg::Entity => ListItemsMode::Entity,
        ModeArg::Link => ListItemsMode::Link,
    }
}

fn mode_noun(mode: ListItemsMode) -> &'static str {
    match mode {
        ListItemsMode::Entity => "entities",
        ListItemsMode::Link => "links",
    }
}
