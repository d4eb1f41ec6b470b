use std::fmt::{self, Debug};

use rand::{
    distributions::{Distribution, Standard},
    Rng, SeedableRng,
};

mod traits;
pub use traits::*;

/// Applies `ops` generated operations to a fresh target, checking each result
/// against the reference model.
pub fn run_ops<O, R>(seed: R::Seed, ops: usize) -> Result<(), OperationFailure<O, R>>
where
    O: OperationGen<R>,
    O::Result: PartialEq,
    O::Target: Default,
    R: Rng + SeedableRng,
    R::Seed: Clone,
{
    let mut target = O::Target::default();
    let gen = O::gen_from_seed(seed.clone());
    for (op_num, (operation, expected)) in gen.take(ops).enumerate() {
        let actual = operation.apply(&mut target);
        if actual != expected {
            return Err(OperationFailure {
                seed,
                op_num,
                operation,
                expected,
                actual,
                target,
            });
        }
    }
    Ok(())
}

/// Same as [`run_ops`] with a seed drawn from the thread rng.
pub fn run_random_ops<O, R>(ops: usize) -> Result<(), OperationFailure<O, R>>
where
    O: OperationGen<R>,
    O::Result: PartialEq,
    O::Target: Default,
    R: Rng + SeedableRng,
    R::Seed: Clone,
    Standard: Distribution<R::Seed>,
{
    let seed: R::Seed = rand::thread_rng().gen();
    run_ops(seed, ops)
}

/// The first operation whose result diverged from the reference model.
pub struct OperationFailure<O, R>
where
    O: Operation,
    R: SeedableRng,
{
    pub seed: R::Seed,
    pub op_num: usize,
    pub operation: O,
    pub expected: O::Result,
    pub actual: O::Result,
    pub target: O::Target,
}

impl<O, R> OperationFailure<O, R>
where
    O: OperationGen<R> + Debug,
    O::Result: Debug,
    O::Target: Default + Debug,
    R: Rng + SeedableRng,
    R::Seed: Clone,
{
    /// Replays the last few operations before the failure, printing the target after each.
    pub fn playback(&self) {
        println!("running playback");
        let mut target = O::Target::default();
        let lower = self.op_num.saturating_sub(5);
        let gen = O::gen_from_seed(self.seed.clone());
        for (ind, (op, expected)) in gen.take(self.op_num + 1).enumerate() {
            let actual = op.apply(&mut target);
            if ind < lower {
                continue;
            }
            println!("--------- operation {} ----------", ind);
            println!("operation: {:?}", op);
            println!("target_state: {:?}", target);
            println!("expected / actual : {:?}, {:?}", expected, actual);
        }
    }
}

impl<O, R> Debug for OperationFailure<O, R>
where
    O: Operation + Debug,
    O::Result: Debug,
    O::Target: Debug,
    R: SeedableRng,
    R::Seed: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OperationFailure")
            .field("seed", &self.seed)
            .field("op_num", &self.op_num)
            .field("operation", &self.operation)
            .field("expected", &self.expected)
            .field("actual", &self.actual)
            .field("target", &self.target)
            .finish()
    }
}
