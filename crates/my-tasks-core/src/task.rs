use serde::de::DeserializeOwned;
use std::fmt::Debug;

use crate::error::TaskResult;
use crate::metadata::Metadata;

/// A unit of work invoked by the runner: typed parameters in, metadata out.
pub trait Task {
    /// Name the task is registered and invoked under.
    const NAME: &'static str;
    const DESCRIPTION: &'static str;
    /// Declared parameter names, in declaration order.
    const PARAMETERS: &'static [&'static str];

    type Params: DeserializeOwned + Debug;

    fn run(params: &Self::Params) -> TaskResult<Metadata>;
}
