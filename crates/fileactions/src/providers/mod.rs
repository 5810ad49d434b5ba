//! Action providers.
//!
//! Each tier of the resolver is an `ActionProvider`:
//! - `EditorActions` - registered editors matching the selection
//! - `ExternalAppActions` - app-provider apps for the selection's MIME type
//! - `SystemActions` - built-in actions in a fixed group order

pub mod editor;
pub mod external;
pub mod system;

use crate::action::FileAction;
use crate::context::ActionContext;

pub use editor::{EditorActions, EditorMatcher};
pub use external::ExternalAppActions;
pub use system::{StaticActions, SystemActionGroup, SystemActions};

/// Produces the actions of one source for a context.
///
/// Providers do not filter by applicability; the resolver does.
pub trait ActionProvider: Send + Sync {
    fn list_actions(&self, ctx: &ActionContext<'_>) -> Vec<FileAction>;
}

impl<F> ActionProvider for F
where
    F: Fn(&ActionContext<'_>) -> Vec<FileAction> + Send + Sync,
{
    fn list_actions(&self, ctx: &ActionContext<'_>) -> Vec<FileAction> {
        self(ctx)
    }
}
