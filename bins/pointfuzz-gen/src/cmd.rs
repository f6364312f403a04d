use clap::Parser;
use pointfuzz::{
    filler::Filler, primitives::hex, program::Program, GenerateError, Generator, GeneratorConfig,
    TestCase,
};
use std::{fs, io::Error as IoError, path::PathBuf};
use tracing::{info, warn};

#[derive(Debug, thiserror::Error)]
pub(crate) enum Errors {
    #[error("the specified path does not exist: {0}")]
    PathNotExists(PathBuf),
    #[error("invalid hex seed")]
    InvalidSeed,
    #[error("invalid generator config: {0}")]
    InvalidConfig(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] IoError),
    #[error(transparent)]
    Generate(#[from] GenerateError),
}

/// Turns one seed into the program pointfuzz generates for it.
///
/// The seed can be given as hex on the command line or as a raw file with `--path`.
#[derive(Parser, Debug)]
#[command(name = "pointfuzz-gen", version)]
pub(crate) struct Cmd {
    /// Hex-encoded seed bytes
    #[arg(required_unless_present = "path")]
    seed: Option<String>,
    /// Path to a raw seed file, as stored in a fuzzer corpus
    ///
    /// Overrides the positional `seed` argument.
    #[arg(long)]
    path: Option<PathBuf>,
    /// Path to a JSON generator config
    #[arg(long)]
    config: Option<PathBuf>,
    /// Enable the sampled and single-violation strategies
    #[arg(long)]
    extended: bool,
    /// Print the payload fields and which preconditions they meet
    #[arg(long)]
    describe: bool,
}

impl Cmd {
    /// Runs the command.
    pub(crate) fn run(&self) -> Result<(), Errors> {
        let seed = self.seed()?;
        let mut config = self.config()?;
        if self.extended {
            config.extended_strategies = true;
        }
        let generator = Generator::new(config);

        let mut source = Filler::new(seed);
        let case = generator.test_case(&mut source)?;
        if !source.is_exhausted() {
            warn!(unused = source.remaining(), "seed not fully consumed");
        }
        info!(strategy = ?case.strategy, consumed = source.position(), "generated test case");

        if self.describe {
            describe(&case);
        }

        let mut program = Program::new();
        pointfuzz::CallRequestAssembler::submit(&case.input, &case.request, &mut program);
        println!("0x{}", hex::encode(program.code()));
        Ok(())
    }

    fn seed(&self) -> Result<Vec<u8>, Errors> {
        if let Some(path) = &self.path {
            if !path.exists() {
                return Err(Errors::PathNotExists(path.clone()));
            }
            return Ok(fs::read(path)?);
        }
        let seed = self.seed.as_deref().unwrap_or_default();
        hex::decode(seed.trim().trim_start_matches("0x")).map_err(|_| Errors::InvalidSeed)
    }

    fn config(&self) -> Result<GeneratorConfig, Errors> {
        let Some(path) = &self.config else {
            return Ok(GeneratorConfig::default());
        };
        if !path.exists() {
            return Err(Errors::PathNotExists(path.clone()));
        }
        Ok(serde_json::from_str(&fs::read_to_string(path)?)?)
    }
}

fn describe(case: &TestCase) {
    let input = &case.input;
    let request = &case.request;
    println!("strategy:         {:?}", case.strategy);
    println!("versioned hash:   0x{}", hex::encode(input.versioned_hash));
    println!("evaluation point: 0x{}", hex::encode(input.evaluation_point));
    println!("expected output:  0x{}", hex::encode(input.expected_output));
    println!("commitment:       0x{}", hex::encode(input.commitment));
    println!("proof:            0x{}", hex::encode(input.proof));
    println!("violations:       {:?}", input.violations());
    println!(
        "call:             {:?} {} gas={} value={}",
        request.kind, request.address, request.gas, request.value
    );
}
