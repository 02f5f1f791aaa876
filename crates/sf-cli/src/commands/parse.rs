//! Parse command implementation

use anyhow::{Context, Result};
use sf_core::ErModel;
use sf_sql::SchemaParser;
use std::fmt::Write;
use std::path::Path;

use crate::cli::{GlobalArgs, ParseArgs, ParseOutput};
use crate::commands::common::{load_config, read_input};

/// Execute the parse command
pub(crate) fn execute(args: &ParseArgs, global: &GlobalArgs) -> Result<()> {
    let config = load_config(global, Path::new("."))?;
    let sql = read_input(&args.input)?;

    let model = SchemaParser::new(config).parse(&sql);
    log::debug!(
        "{}: {} entities, {} relations",
        args.input,
        model.entities.len(),
        model.relations.len()
    );

    let rendered = match args.output {
        ParseOutput::Json => {
            serde_json::to_string_pretty(&model).context("Failed to serialize model")?
        }
        ParseOutput::Pretty => render_pretty(&model),
        ParseOutput::Names => render_names(&model),
    };
    print!("{}", rendered);
    if !rendered.ends_with('\n') {
        println!();
    }
    Ok(())
}

/// One block per entity: its fields, then the relations it owns
fn render_pretty(model: &ErModel) -> String {
    let mut out = String::new();
    if model.is_empty() {
        out.push_str("No entities found\n");
        return out;
    }

    for entity in &model.entities {
        let _ = writeln!(out, "{} ({})", entity.name, entity.table_name);
        if entity.fields.is_empty() {
            out.push_str("  (no fields)\n");
        }
        for field in &entity.fields {
            let mut flags = Vec::new();
            if !field.nullable {
                flags.push("not null");
            }
            if field.unique {
                flags.push("unique");
            }
            let flags = if flags.is_empty() {
                String::new()
            } else {
                format!(" [{}]", flags.join(", "))
            };
            let _ = writeln!(out, "  {}: {}{}", field.name, field.field_type, flags);
        }

        for relation in model.relations_from(&entity.id) {
            let target = model
                .entity(&relation.target_entity_id)
                .map_or("?", |e| e.name.as_str());
            let _ = writeln!(
                out,
                "  {} -> {} (on delete {}, on update {})",
                relation.source_field_name,
                target,
                relation.foreign_key.on_delete,
                relation.foreign_key.on_update
            );
        }
        out.push('\n');
    }
    out
}

fn render_names(model: &ErModel) -> String {
    model
        .entities
        .iter()
        .map(|e| format!("{}\n", e.name))
        .collect()
}

#[cfg(test)]
#[path = "parse_test.rs"]
mod tests;
