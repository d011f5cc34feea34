use cardiopath::input::{FieldKind, FieldSpec, FieldValue, ModuleInput};
use cardiopath::modules::ModuleId;
use clap::Parser;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::fs;

/// A CLI tool to generate random module input for the pathway evaluator
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The module whose field contract is used
    module: ModuleId,

    /// The path to write the generated JSON file to (stdout when omitted)
    #[arg(short, long)]
    output: Option<String>,

    /// How many inputs to generate
    #[arg(short, long, default_value_t = 1)]
    count: usize,

    /// Probability that any field is left unset
    #[arg(long, default_value_t = 0.2)]
    unset_rate: f64,

    /// Probability that an enumerated field gets a code outside its contract
    #[arg(long, default_value_t = 0.0)]
    invalid_rate: f64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    for (name, rate) in [("--unset-rate", cli.unset_rate), ("--invalid-rate", cli.invalid_rate)] {
        if !(0.0..=1.0).contains(&rate) {
            eprintln!("Error: {} ({}) must be between 0 and 1", name, rate);
            std::process::exit(1);
        }
    }

    let mut rng = rand::rng();
    let fields = cli.module.table().fields;
    let inputs: Vec<ModuleInput> = (0..cli.count)
        .map(|_| generate_input(&mut rng, fields, &cli))
        .collect();

    let json_output = if inputs.len() == 1 {
        serde_json::to_string_pretty(&inputs[0])?
    } else {
        serde_json::to_string_pretty(&inputs)?
    };

    match &cli.output {
        Some(path) => {
            fs::write(path, json_output)?;
            eprintln!(
                "Generated {} input(s) for '{}' into '{}'",
                inputs.len(),
                cli.module,
                path
            );
        }
        None => println!("{}", json_output),
    }
    Ok(())
}

fn generate_input(rng: &mut impl Rng, fields: &[FieldSpec], cli: &Cli) -> ModuleInput {
    fields
        .iter()
        .map(|spec| (spec.id, generate_value(&mut *rng, spec, cli)))
        .collect()
}

fn generate_value(rng: &mut impl Rng, spec: &FieldSpec, cli: &Cli) -> FieldValue {
    if rng.random_bool(cli.unset_rate) {
        return FieldValue::Unset;
    }
    match spec.kind {
        FieldKind::Tristate => FieldValue::Bool(rng.random_bool(0.5)),
        FieldKind::Choice(codes) => {
            if rng.random_bool(cli.invalid_rate) {
                return FieldValue::Text(format!("not_a_{}", spec.id));
            }
            codes
                .choose(rng)
                .map_or(FieldValue::Unset, |code| FieldValue::from(*code))
        }
        FieldKind::Text => {
            let notes = ["", "Patient declined", "Renal function borderline", "No local access"];
            notes
                .choose(rng)
                .map_or(FieldValue::Unset, |note| FieldValue::from(*note))
        }
    }
}
