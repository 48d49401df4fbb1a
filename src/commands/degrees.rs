//! Degrees command handler - resolve two names and report the shortest chain.

use std::time::Instant;

use crate::cli::OutputFormat;
use crate::commands::CommandContext;
use crate::dataset::DatasetIndex;
use crate::error::Result;
use crate::names::NameResolver;
use crate::prompt::{ask_name, Prompt, PromptDisambiguator};
use crate::schema::{PathStep, PersonId};
use crate::search::{PathSearch, SearchOutcome};

/// Prompt for a source and a target name and resolve both to person ids.
pub fn resolve_pair(
    index: &DatasetIndex,
    prompt: &mut dyn Prompt,
) -> Result<(PersonId, PersonId)> {
    let resolver = NameResolver::new(index);

    let name = ask_name(prompt)?;
    let source = resolver.resolve(&name, &mut PromptDisambiguator::new(prompt))?;

    let name = ask_name(prompt)?;
    let target = resolver.resolve(&name, &mut PromptDisambiguator::new(prompt))?;

    Ok((source, target))
}

pub fn run_degrees(
    index: &DatasetIndex,
    prompt: &mut dyn Prompt,
    ctx: &CommandContext,
) -> Result<String> {
    let (source, target) = resolve_pair(index, prompt)?;

    let mut search = PathSearch::new(index);
    // A timeout too large to represent is no deadline at all
    if let Some(deadline) = ctx.timeout.and_then(|t| Instant::now().checked_add(t)) {
        search = search.with_deadline(deadline);
    }
    let (outcome, stats) = search.shortest_path_with_stats(&source, &target)?;

    let output = match ctx.format {
        OutputFormat::Text => render_text(index, &source, &outcome),
        OutputFormat::Json => {
            let mut value = render_json(index, &source, &target, &outcome);
            if ctx.verbose {
                value["stats"] = serde_json::to_value(stats)?;
            }
            format!("{}\n", serde_json::to_string_pretty(&value)?)
        }
    };

    Ok(output)
}

/// `Not connected.` or the numbered chain, one line per degree
pub fn render_text(index: &DatasetIndex, source: &PersonId, outcome: &SearchOutcome) -> String {
    let Some(path) = outcome.path() else {
        return "Not connected.\n".to_string();
    };

    let mut output = format!("{} degrees of separation.\n", path.len());
    let mut previous = source;
    for (i, step) in path.iter().enumerate() {
        output.push_str(&format!(
            "{}: {} and {} starred in {}\n",
            i + 1,
            person_name(index, previous),
            person_name(index, &step.person_id),
            movie_title(index, step),
        ));
        previous = &step.person_id;
    }
    output
}

pub fn render_json(
    index: &DatasetIndex,
    source: &PersonId,
    target: &PersonId,
    outcome: &SearchOutcome,
) -> serde_json::Value {
    let mut previous = source;
    let steps: Vec<serde_json::Value> = outcome
        .path()
        .unwrap_or_default()
        .iter()
        .enumerate()
        .map(|(i, step)| {
            let value = serde_json::json!({
                "index": i + 1,
                "from": person_name(index, previous),
                "to": person_name(index, &step.person_id),
                "person_id": step.person_id,
                "movie_id": step.movie_id,
                "movie": movie_title(index, step),
                "year": index.movie(&step.movie_id).map(|m| m.year.as_str()),
            });
            previous = &step.person_id;
            value
        })
        .collect();

    serde_json::json!({
        "_type": "degrees",
        "source": { "id": source, "name": person_name(index, source) },
        "target": { "id": target, "name": person_name(index, target) },
        "connected": outcome.is_connected(),
        "degrees": outcome.degrees(),
        "steps": steps,
    })
}

fn person_name<'a>(index: &'a DatasetIndex, id: &'a PersonId) -> &'a str {
    index
        .person(id)
        .map(|p| p.name.as_str())
        .unwrap_or(id.as_str())
}

fn movie_title<'a>(index: &'a DatasetIndex, step: &'a PathStep) -> &'a str {
    index
        .movie(&step.movie_id)
        .map(|m| m.title.as_str())
        .unwrap_or(step.movie_id.as_str())
}
