//! Command orchestration for the binary
//!
//! Loads the rule table, optionally lints or exports it, and runs the
//! selected strategy. Output is buffered and only written once the whole
//! run has succeeded, so a failed run never leaves a partial file behind.

use crate::cli::{CliArgs, StrategyType};
use crate::core::{BatchSummary, RuleSet};
use crate::io::csv_format::{read_rules_csv, write_rules_csv};
use crate::io::sync_reader::open_file;
use crate::strategy::create_strategy;
use crate::types::EnrichError;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tracing::{info, warn};

/// Load a rule table from CSV, or the built-in table when `path` is `None`
pub fn load_rule_set(path: Option<&Path>) -> Result<RuleSet, EnrichError> {
    match path {
        Some(path) => {
            let rules = read_rules_csv(open_file(path)?)?;
            info!(path = %path.display(), rules = rules.len(), "Loaded rule table");
            Ok(RuleSet::new(rules))
        }
        None => Ok(RuleSet::default()),
    }
}

/// Log every lint of the rule table as a warning, returning how many were found
pub fn report_lints(rule_set: &RuleSet) -> usize {
    let lints = rule_set.lints();
    for (index, rule_lints) in &lints {
        for lint in rule_lints {
            warn!(rule = index + 1, "{}", lint);
        }
    }
    lints.iter().map(|(_, l)| l.len()).sum()
}

/// Run one invocation, returning the batch summary when rows were processed
pub fn run(args: &CliArgs) -> Result<Option<BatchSummary>, EnrichError> {
    let rule_set = load_rule_set(args.rules_file.as_deref())?;
    if args.lint {
        report_lints(&rule_set);
    }

    let mut buffer = Vec::new();
    // Without an input file the CLI guarantees --export-rules
    let summary = match args.input_file.as_deref() {
        Some(input_file) => {
            let config =
                matches!(args.strategy, StrategyType::Async).then(|| args.to_batch_config());
            let strategy = create_strategy(args.strategy.clone(), config);
            Some(strategy.process(input_file, rule_set.rules(), &mut buffer)?)
        }
        None => {
            write_rules_csv(rule_set.rules(), &mut buffer)?;
            None
        }
    };

    match &args.output_file {
        Some(path) => fs::write(path, &buffer)?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(&buffer)?;
            stdout.flush()?;
        }
    }

    Ok(summary)
}
