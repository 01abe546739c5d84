pub use anyhow::{anyhow, Context};
pub use log::{debug, error, info, warn};
pub use serde::{Deserialize, Serialize};

pub type Result<T = ()> = anyhow::Result<T>;
