use std::fs::File;
use std::io;
use std::path::Path;

use anyhow::Context;
use itertools::Itertools;
use log::info;

use data_object::codec::{from_reader, to_json_string_pretty};
use data_object::utils::logging::{init_logger, log_hydrated};
use data_object::{FieldKind, Record};

fn main() -> anyhow::Result<()> {
    // Setup logging
    init_logger("info");

    let source = std::env::args().nth(1);
    let record: Record = match source.as_deref() {
        Some(path) => {
            let file = File::open(Path::new(path)).with_context(|| format!("opening {path}"))?;
            from_reader(file).with_context(|| format!("reading {path}"))?
        }
        None => from_reader(io::stdin().lock()).context("reading stdin")?,
    };
    log_hydrated(record.type_name(), record.len(), source.as_deref().unwrap_or("stdin"));

    let kinds = record.kinds();
    for (key, value) in &record {
        let kind = kinds.get(key.as_str()).copied().unwrap_or(FieldKind::Null);
        println!("{key}: {kind:?} = {}", summarize(value));
    }

    let objects = record.object_names();
    if !objects.is_empty() {
        info!("Object fields: {}", objects.iter().join(", "));
    }

    println!("{}", to_json_string_pretty(&record)?);
    Ok(())
}

fn summarize(value: &data_object::Value) -> String {
    match value {
        data_object::Value::List(items) => format!("[{} item(s)]", items.len()),
        data_object::Value::Object(record) | data_object::Value::Dynamic(record) => {
            format!("{{{}}}", record.keys().join(", "))
        }
        other => other.to_json().to_string(),
    }
}
