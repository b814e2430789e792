//! Selection command

use super::ProfileArgs;
use crate::error::CliResult;
use crate::output::{print_heading, print_json, print_table, OutputFormat};
use habitus_catalog::HabitCatalog;
use habitus_engine::ScoredHabit;
use habitus_templates::{GeneratorConfig, TemplateAssembler};
use habitus_types::{Profile, SelectedHabit};
use serde::Serialize;
use tabled::Tabled;

/// Table row for a scored candidate
#[derive(Debug, Serialize, Tabled)]
struct CandidateRow {
    rank: usize,
    id: String,
    category: String,
    priority: u32,
    score: String,
}

impl CandidateRow {
    fn new(rank: usize, candidate: &ScoredHabit<'_>) -> Self {
        Self {
            rank,
            id: candidate.habit.id.clone(),
            category: candidate.habit.category.to_string(),
            priority: candidate.habit.priority,
            score: format!("{:.1}", candidate.score),
        }
    }
}

/// Table row for a selected habit
#[derive(Debug, Serialize, Tabled)]
struct SelectionRow {
    id: String,
    category: String,
    emoji: String,
    minutes: u32,
    name_key: String,
}

impl From<&SelectedHabit> for SelectionRow {
    fn from(habit: &SelectedHabit) -> Self {
        Self {
            id: habit.id.clone(),
            category: habit.category.to_string(),
            emoji: habit.emoji.clone(),
            minutes: habit.target_minutes,
            name_key: habit.name_key.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
struct SelectOutput {
    desired: usize,
    candidates: Vec<CandidateRow>,
    habits: Vec<SelectedHabit>,
}

/// Rank and select with the same settings `generate` uses
fn run(
    profile: &Profile,
    top: usize,
    catalog: &HabitCatalog,
    config: &GeneratorConfig,
) -> CliResult<SelectOutput> {
    profile.validate()?;
    let assembler = TemplateAssembler::new(catalog, config.clone())?;
    let selector = assembler.selector();

    let candidates = selector
        .explain(profile)
        .iter()
        .take(top)
        .enumerate()
        .map(|(i, candidate)| CandidateRow::new(i + 1, candidate))
        .collect();
    Ok(SelectOutput {
        desired: selector.desired_count(profile),
        candidates,
        habits: selector.select(profile),
    })
}

/// Show how a profile's habits are ranked and selected
pub fn execute(
    args: ProfileArgs,
    top: usize,
    catalog: &HabitCatalog,
    config: &GeneratorConfig,
    format: OutputFormat,
) -> CliResult<()> {
    let output = run(&args.into_profile(), top, catalog, config)?;

    match format {
        OutputFormat::Json => print_json(&output)?,
        OutputFormat::Table => {
            print_heading(&format!("Top {} candidates", output.candidates.len()));
            print_table(output.candidates);
            println!();
            print_heading(&format!(
                "Selected {} of {} requested",
                output.habits.len(),
                output.desired
            ));
            print_table(output.habits.iter().map(SelectionRow::from).collect());
        }
    }
    Ok(())
}
