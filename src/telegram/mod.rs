mod notifier;

pub use notifier::StatusNotifier;
