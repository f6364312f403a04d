use crate::{
    BlobPayloadBuilder, CallRequestAssembler, GenerateError, GeneratorConfig, PayloadStrategy,
    PointEvaluationInput,
};
use filler::RandomSource;
use program::{CallInjector, CallRequest, ExecutionMemory};
use tracing::debug;

/// Everything decided for one call, before it is written to the program.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestCase {
    /// Strategy the payload was built with.
    pub strategy: PayloadStrategy,
    /// The payload.
    pub input: PointEvaluationInput,
    /// The call carrying it.
    pub request: CallRequest,
}

/// Point evaluation call generator.
///
/// Stateless between calls: the outcome depends only on the configuration and
/// the bytes read from the source.
#[derive(Clone, Debug, Default)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    /// Creates a generator with the given configuration.
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Draws a strategy, a payload and a call without touching any program.
    pub fn test_case<R: RandomSource + ?Sized>(
        &self,
        source: &mut R,
    ) -> Result<TestCase, GenerateError> {
        let mut builder = BlobPayloadBuilder::new(source);
        let strategy = builder.select_strategy(self.config.extended_strategies)?;
        debug!(?strategy, "selected payload strategy");
        let input = builder.build(strategy)?;
        let request = CallRequestAssembler::new(&self.config).assemble(&input, source)?;
        Ok(TestCase {
            strategy,
            input,
            request,
        })
    }

    /// Generates one call and appends it to `program`.
    ///
    /// Nothing is written to `program` if the source runs out.
    pub fn generate<R, P>(&self, source: &mut R, program: &mut P) -> Result<(), GenerateError>
    where
        R: RandomSource + ?Sized,
        P: ExecutionMemory + CallInjector + ?Sized,
    {
        let case = self.test_case(source)?;
        CallRequestAssembler::submit(&case.input, &case.request, program);
        Ok(())
    }
}

/// Generates one call with the default configuration.
pub fn generate<R, P>(source: &mut R, program: &mut P) -> Result<(), GenerateError>
where
    R: RandomSource + ?Sized,
    P: ExecutionMemory + CallInjector + ?Sized,
{
    Generator::default().generate(source, program)
}
