mod query;
mod record;
mod song;

pub use query::*;
pub use record::*;
pub use song::*;
