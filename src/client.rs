use crate::config::{Config, CONFIG_FILE_PATH};
use crate::error::BoxedErrorTrait;
use crate::prover::{self, Prover, Response};

use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;

const VALID_REACT: char = '✅';
const INVALID_REACT: char = '❌';
const UNDETERMINED_REACT: char = '❔';

/// Decide the validity of inferences with semantic tableaux
#[derive(Parser, Debug)]
#[command(name = "tableau-prover")]
#[command(about = "checks inferences such as `P, P→Q ⊨ Q` with semantic tableaux")]
pub struct Args {
    /// Path to the TOML config file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print responses as json
    #[arg(long)]
    json: bool,

    /// Print the evaluated tableau under each verdict
    #[arg(long)]
    tree: bool,

    /// Give up on an inference after this many steps
    #[arg(long, value_name = "N")]
    step_limit: Option<usize>,

    /// Formulas or inferences to check
    #[arg(required = true, value_name = "INPUT")]
    inputs: Vec<String>,
}

impl Args {
    /// The config file, with command line flags taking precedence
    fn config(&self) -> Result<Config, BoxedErrorTrait> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::load_or_default(CONFIG_FILE_PATH)?,
        };
        config.json |= self.json;
        config.show_tableau |= self.tree;
        if self.step_limit.is_some() {
            config.step_limit = self.step_limit;
        }
        Ok(config)
    }
}

/// Presents the answer to a request
pub trait Report {
    fn report(&mut self, response: &Response) -> Result<(), BoxedErrorTrait>;
}

/// One verdict line per inference, optionally followed by its tableau
pub struct ConsoleReport<W> {
    out: W,
    show_tableau: bool,
}
impl <W: Write> ConsoleReport<W> {
    pub fn new(out: W, show_tableau: bool) -> ConsoleReport<W> {
        ConsoleReport { out, show_tableau }
    }
}
impl <W: Write> Report for ConsoleReport<W> {
    fn report(&mut self, response: &Response) -> Result<(), BoxedErrorTrait> {
        writeln!(self.out, "{} {}", react(response.valid), response.inference)?;
        if self.show_tableau {
            write!(self.out, "{}", response.tableau)?;
        }
        Ok( () )
    }
}

/// One json object per line
pub struct JsonReport<W> {
    out: W,
}
impl <W: Write> JsonReport<W> {
    pub fn new(out: W) -> JsonReport<W> {
        JsonReport { out }
    }
}
impl <W: Write> Report for JsonReport<W> {
    fn report(&mut self, response: &Response) -> Result<(), BoxedErrorTrait> {
        serde_json::to_writer(&mut self.out, response)?;
        writeln!(self.out)?;
        Ok( () )
    }
}

pub fn react(valid: Option<bool>) -> char {
    match valid {
        Some(true) => VALID_REACT,
        Some(false) => INVALID_REACT,
        None => UNDETERMINED_REACT,
    }
}

/// Check every input, reporting each one.
/// Returns how many inputs could not be served
pub fn run(inputs: &[String], prover: &Prover, report: &mut dyn Report) -> Result<usize, BoxedErrorTrait> {
    let mut failures = 0;
    for input in inputs {
        match prover::service_validity_request(input, prover) {
            Ok(response) => report.report(&response)?,
            Err(why) => {
                error!("could not check `{}`: {}", input, why);
                failures += 1;
            }
        }
    }
    Ok( failures )
}

/// Entry point for the binary. Returns `false` if any input failed
pub fn start() -> Result<bool, BoxedErrorTrait> {
    let args = Args::parse();
    let config = args.config()?;
    info!("running with {:?}", config);
    let prover = Prover::from_config(&config);

    let mut report: Box<dyn Report> = if config.json {
        Box::new(JsonReport::new(io::stdout().lock()))
    } else {
        Box::new(ConsoleReport::new(io::stdout().lock(), config.show_tableau))
    };
    let failures = run(args.inputs.as_slice(), &prover, report.as_mut())?;
    Ok( failures == 0 )
}
