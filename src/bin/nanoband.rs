use std::fmt::Write;

use clap::Parser;
use composition::{AtomicDatabase, ChemicalComposition, CompositionError};
use miette::{Diagnostic, GraphicalReportHandler, GraphicalTheme, IntoDiagnostic};
use nanomaterial::{
    MaterialType, Measurement, Nanomaterial, NanomaterialError,
    descriptor::{EnergyBandDescriptor, NanomaterialDescriptor},
    serializer,
};
use rustyline::DefaultEditor;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Estimates the band energies of metal oxide nanomaterials, one formula at a time
///
/// Each line read should look like `<formula> [<size> [<unit>]]`, where the size is either a single value (`25`) or
/// a range (`10-40`), and the unit is a unit name like `NM` (the default) or `UM`.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Also print each material as a CML document
    #[arg(long, default_value_t = false)]
    cml: bool,
    /// The type of every material entered
    #[arg(long = "type", value_name = "MATERIAL_TYPE", default_value = "METALOXIDE")]
    material_type: MaterialType,
    /// A label to attach to every material entered (can be repeated)
    #[arg(long = "label", value_name = "LABEL")]
    labels: Vec<String>,
}

#[derive(Debug, Diagnostic, Error)]
enum InputError {
    #[diagnostic(help("enter a formula, optionally followed by a size and a unit name, like `ZnO 25 NM`"))]
    #[error("no chemical formula was entered")]
    MissingFormula,

    #[diagnostic(help("sizes are a single number like `25`, or a range like `10-40`"))]
    #[error("the size {0:?} is not a number or a range of numbers")]
    InvalidSize(String),

    #[diagnostic(help("only a formula, a size, and a unit name are expected on each line"))]
    #[error("unexpected input after the unit name: {0:?}")]
    TrailingInput(String),

    #[diagnostic(transparent)]
    #[error(transparent)]
    Composition(#[from] Box<CompositionError>),

    #[diagnostic(transparent)]
    #[error(transparent)]
    Nanomaterial(#[from] Box<NanomaterialError>),
}

fn main() -> miette::Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let db = AtomicDatabase::default();
    let mut rl = DefaultEditor::new().into_diagnostic()?;
    while let Ok(line) = rl.readline("Nanomaterial: ") {
        rl.add_history_entry(&line).into_diagnostic()?;
        if line.trim().is_empty() {
            continue;
        }
        match material_info(&db, &args, &line) {
            Ok(info) => print!("{info}"),
            Err(diagnostic) => render_error(diagnostic),
        }
    }
    Ok(())
}

fn material_info(db: &AtomicDatabase, args: &Args, line: &str) -> Result<String, InputError> {
    let mut words = line.split_whitespace();
    let formula = words.next().ok_or(InputError::MissingFormula)?;
    let size = words.next();
    let unit = words.next().unwrap_or("NM");
    if let Some(rest) = words.next() {
        return Err(InputError::TrailingInput(rest.to_owned()));
    }

    let composition = ChemicalComposition::new(db, formula)?;
    let mut material = Nanomaterial::new(args.material_type).with_composition(&composition);
    if let Some(size) = size {
        material.set_size(parse_size(size, unit)?);
    }
    for label in &args.labels {
        material.add_label(label);
    }

    let mut buf = String::new();
    // NOTE: Writing to a `String` never fails, so the `fmt::Result`s here are safely ignored
    let _ = writeln!(buf, "Formula: {composition}");
    if let Some(size) = material.size() {
        let _ = writeln!(buf, "Size: {size}");
    }

    let bands = EnergyBandDescriptor.calculate(Some(&material));
    if bands.is_computable() {
        for (name, value) in bands.names().into_iter().zip(bands.values()) {
            let _ = writeln!(buf, "{name}: {value} eV");
        }
    } else {
        let _ = writeln!(buf, "Band energies: unknown for this material");
    }

    if args.cml {
        let _ = writeln!(buf, "{}", serializer::to_cml(&material).to_pretty_xml());
    }
    let _ = writeln!(buf);

    Ok(buf)
}

fn parse_size(size: &str, unit: &str) -> Result<Measurement, InputError> {
    let number = |n: &str| {
        n.trim()
            .parse::<f64>()
            .map_err(|_| InputError::InvalidSize(size.to_owned()))
    };

    // A range separator follows a digit or a decimal point, so signs and exponents (`-5`, `1e-3`) aren't split on
    let separator = size
        .char_indices()
        .skip(1)
        .find(|&(i, c)| c == '-' && size[..i].ends_with(|p: char| p.is_ascii_digit() || p == '.'));

    let measurement = if let Some((i, _)) = separator {
        let (minimum, maximum) = (&size[..i], &size[i + 1..]);
        Measurement::range_in(number(minimum)?, number(maximum)?, unit)?
    } else {
        Measurement::value_in(number(size)?, unit)?
    };
    Ok(measurement)
}

fn render_error(diagnostic: impl Into<Box<dyn Diagnostic + 'static>>) {
    let mut buf = String::new();
    let _ = GraphicalReportHandler::new_themed(GraphicalTheme::unicode())
        .render_report(&mut buf, diagnostic.into().as_ref());
    println!("{buf}");
}
