use crate::error::HarnessResult;

/// One trial of the operation under test. Errors abort the run.
pub type Operation<'a> = Box<dyn FnMut() -> HarnessResult<()> + 'a>;

/// A named operation and how many times to repeat it.
///
/// The closure borrows its inputs, so every repetition sees exactly the same
/// operand objects.
pub struct Benchmark<'a> {
    name: String,
    iterations: u32,
    op: Operation<'a>,
}

impl<'a> Benchmark<'a> {
    pub fn new<F>(name: impl Into<String>, iterations: u32, op: F) -> Self
    where
        F: FnMut() -> HarnessResult<()> + 'a,
    {
        Self {
            name: name.into(),
            iterations,
            op: Box::new(op),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    pub(crate) fn invoke(&mut self) -> HarnessResult<()> {
        (self.op)()
    }
}

impl std::fmt::Debug for Benchmark<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Benchmark")
            .field("name", &self.name)
            .field("iterations", &self.iterations)
            .finish_non_exhaustive()
    }
}
