pub mod result;
pub mod typebot;
pub mod workspace;

pub use result::{ChatResult, ResultFilter};
pub use typebot::{
    Avatar, Block, ChatTheme, CollaborationType, Collaborator, GeneralSettings, Group, Settings,
    Theme, Typebot, Variable, Webhook,
};
pub use workspace::{Plan, Session, User, Workspace, WorkspaceMember, WorkspaceRole};
