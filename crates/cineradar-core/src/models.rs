mod entry;
mod metadata;
mod session;

pub use entry::{MediaDraft, MediaEntry, MediaId, MediaType, WatchStatus};
pub use metadata::{CastMember, ExternalKey, ExternalMetadata, Suggestion};
pub use session::{Session, User};
