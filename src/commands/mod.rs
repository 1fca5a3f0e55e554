/// CLI command implementations
///
/// One module per user-facing operation. Commands take a params struct and
/// a storage handle, call into domain validation, storage and analytics,
/// and return a serializable response struct. Text rendering for the
/// terminal lives here too; analytics itself never formats anything.

pub mod analyze;
pub mod create;
pub mod delete;
pub mod list;
pub mod log;
pub mod update;

pub use analyze::*;
pub use create::*;
pub use delete::*;
pub use list::*;
pub use log::*;
pub use update::*;
