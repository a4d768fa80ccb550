use clap::Subcommand;

/// Notification commands.
#[derive(Clone, Debug, Subcommand)]
pub enum NotificationCommands {
    /// List notifications. Without a session, shows the guest notices.
    List {
        /// Use built-in notices for the session's audience.
        #[arg(long)]
        offline: bool,
        /// Only unread notifications.
        #[arg(long)]
        unread: bool,
    },
    /// Send a notification to another user.
    Send {
        /// Recipient email.
        #[arg(long)]
        to: String,
        #[arg(long)]
        title: String,
        #[arg(long)]
        message: String,
        #[arg(long)]
        tag: Option<String>,
        /// Page the notification links to, e.g. /requests/2.
        #[arg(long)]
        action_route: Option<String>,
    },
    /// Mark a notification read (or unread with --unread).
    Mark {
        id: String,
        #[arg(long)]
        unread: bool,
    },
}
