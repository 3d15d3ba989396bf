pub mod channel_notifier;
pub mod notifier;
